//! Asset key generation
//!
//! A key combines a random token with a sanitized form of the uploader's
//! original filename, so on-disk names are unique but still readable.

use std::fmt;

use uuid::Uuid;

/// Key of one blob in the asset store
///
/// Keys contain no path separators; `<root>/<key>` always stays inside the
/// content root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(String);

impl AssetKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for AssetKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for AssetKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate a unique key for a blob with the given original filename
///
/// The unique part is a UUID v4, so uniqueness never depends on clock
/// resolution; the original name survives only as a sanitized suffix.
pub fn generate_key(original_name: &str) -> AssetKey {
    AssetKey(format!(
        "{}_{}",
        Uuid::new_v4().simple(),
        sanitize(original_name)
    ))
}

/// Reduce a caller-supplied filename to a safe key suffix
///
/// Keeps ASCII alphanumerics, '.', '-' and '_'; everything else (path
/// separators included) becomes '_'. Leading dots are stripped, and an
/// empty result falls back to "upload".
pub fn sanitize(original_name: &str) -> String {
    let cleaned: String = original_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
