//! Error handling for the harness.
//!
//! Only run-aborting conditions are errors. A test case that times out,
//! exits nonzero, or prints the wrong output is an ordinary failed case and
//! is recorded in its outcome, never raised through this type. The one
//! deliberate asymmetry: a missing or unreadable `.expected` fixture aborts
//! the whole run instead of failing the single case.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A fatal harness error. Rendered at the CLI boundary via miette.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("failed to scan test directory '{}'", dir.display())]
    #[diagnostic(
        code(netuno_harness::discovery::walk),
        help("check that the test directory exists and is readable")
    )]
    Walk {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to launch compiler '{}'", compiler.display())]
    #[diagnostic(
        code(netuno_harness::compiler::spawn),
        help("pass --compiler if ntc is not at ./bin/ntc")
    )]
    Spawn {
        compiler: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed while capturing compiler output for '{}'", test.display())]
    #[diagnostic(code(netuno_harness::compiler::capture))]
    Capture {
        test: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read expected output '{}'", path.display())]
    #[diagnostic(
        code(netuno_harness::fixture::read),
        help("every test program needs a sibling '<name>.expected' fixture holding its exact stdout")
    )]
    Fixture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
