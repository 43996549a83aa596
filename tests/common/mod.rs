//! Common test utilities and helpers.

use std::path::{Path, PathBuf};

/// Get the full path to a sample file
pub fn sample_file_path<P: AsRef<Path>>(relative_path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(relative_path)
}

/// Read a sample text file, or `None` when it is not present.
pub fn read_sample<P: AsRef<Path>>(relative_path: P) -> Option<String> {
    let path = sample_file_path(relative_path);
    match std::fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(_) => {
            eprintln!("Sample not present; skipping ({})", path.display());
            None
        }
    }
}

/// Common test data and constants
pub mod test_data {
    /// Threat advisory with URLs, emails, domains and IPs
    pub const ADVISORY: &str = "text/advisory.txt";

    /// Expected defang output for `ADVISORY`
    pub const ADVISORY_DEFANGED: &str = "text/advisory.defanged.txt";
}
