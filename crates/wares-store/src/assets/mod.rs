//! Filesystem asset store
//!
//! Provides:
//! - Collision-resistant key generation with filename sanitization
//! - Atomic blob writes under a lazily created content root
//! - Idempotent deletion

mod atomic;
mod key;
mod store;

pub use key::AssetKey;
pub use store::AssetStore;
