//! Shared fixtures for harness integration tests.
//!
//! Tests drive the harness against small shell scripts standing in for the
//! Netuno compiler, written into throwaway directories.

use std::fs;
use std::path::{Path, PathBuf};

/// Writes a fixture file and returns its path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture file");
    path
}

/// Writes an executable shell script standing in for the compiler binary.
/// The script receives the test file path as `$1`.
#[cfg(unix)]
pub fn write_compiler(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write compiler script");
    let mut perms = fs::metadata(&path)
        .expect("stat compiler script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod compiler script");
    path
}
