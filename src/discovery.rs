//! Test file discovery.
//!
//! A test case is a `.nt` program sitting directly inside the test
//! directory, paired with a `<name>.nt.expected` fixture holding the exact
//! stdout the compiler must produce for it.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::HarnessError;

/// File extension of Netuno test programs.
pub const TEST_EXTENSION: &str = "nt";

/// Suffix appended to a test file's full name to locate its fixture.
pub const EXPECTED_SUFFIX: &str = ".expected";

/// Scans the test directory for `.nt` files.
///
/// Only direct children are considered; subdirectories are not descended
/// into. The returned list is sorted to ensure deterministic execution
/// order regardless of filesystem enumeration order. An empty directory
/// yields an empty list, not an error.
pub fn discover_test_files(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| HarnessError::Walk {
            dir: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_test_file(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Returns the fixture path for a test file: the full file name plus
/// [`EXPECTED_SUFFIX`] (`a.nt` -> `a.nt.expected`).
pub fn expected_path(test_file: &Path) -> PathBuf {
    let mut name = test_file.as_os_str().to_os_string();
    name.push(EXPECTED_SUFFIX);
    PathBuf::from(name)
}

/// Returns true if the given path has a .nt extension.
fn is_test_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TEST_EXTENSION)
}
