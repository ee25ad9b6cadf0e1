//! Defines the command-line arguments for the harness binary.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. The defaults
//! reproduce the conventional Netuno checkout layout, so a bare invocation
//! from the repository root just works.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "netuno-harness",
    version,
    about = "Runs the Netuno compiler's golden-file test suite."
)]
pub struct HarnessArgs {
    /// Directory containing `.nt` test programs.
    #[arg(default_value = "tests")]
    pub tests: PathBuf,

    /// Path to the compiler binary under test.
    #[arg(long, default_value = "./bin/ntc")]
    pub compiler: PathBuf,

    /// Wall-clock timeout for a single test, in seconds.
    #[arg(long, default_value_t = 2)]
    pub timeout: u64,

    /// Disable colored failure details on stderr.
    #[arg(long)]
    pub no_color: bool,
}
