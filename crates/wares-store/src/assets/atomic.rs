//! Atomic write primitive
//!
//! Temp→rename in the target directory, so readers never observe a
//! partially written blob.

use std::fs;
use std::io;
use std::path::Path;

/// Atomically write bytes to a file, creating parent directories as needed
pub fn atomic_write(target: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    // Dotted temp name next to the target; rename is atomic within a
    // directory
    let temp_path = match target.file_name().and_then(|n| n.to_str()) {
        Some(name) => target.with_file_name(format!(".{name}.tmp")),
        None => target.with_extension("tmp"),
    };

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, target)
}
