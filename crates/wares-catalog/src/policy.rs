//! Asset failure policy

/// How the catalog service treats asset write failures
///
/// `Lenient` logs the failure and lets the record mutation proceed - the
/// record may then reference a blob that was never written. `Strict`
/// aborts the operation before any record is touched.
///
/// Asset deletions are best-effort under both policies: they run only
/// after the record mutation has committed, so a failure there leaves an
/// orphaned blob, never a dangling record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Propagate asset write failures and abort the catalog mutation
    Strict,
    /// Log asset write failures and continue
    #[default]
    Lenient,
}
