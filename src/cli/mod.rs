//! The netuno-harness command-line interface.
//!
//! Parses arguments, runs the suite, and maps the result onto the process
//! exit code: zero when every case passed, one when any case failed or the
//! run aborted on a fatal error.

use std::process;
use std::time::Duration;

use clap::Parser;
use miette::Report;

use crate::cli::args::HarnessArgs;
use crate::harness::{self, HarnessConfig};
use crate::report::Reporter;

pub mod args;

/// The main entry point for the CLI.
pub fn run() {
    let args = HarnessArgs::parse();

    let config = HarnessConfig {
        test_root: args.tests,
        compiler: args.compiler,
        timeout: Duration::from_secs(args.timeout),
        use_colors: !args.no_color && atty::is(atty::Stream::Stderr),
    };

    let mut reporter = Reporter::new(config.use_colors);
    match harness::run_suite(&config, &mut reporter) {
        Ok(summary) => {
            if summary.failed > 0 {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{:?}", Report::new(e));
            process::exit(1);
        }
    }
}
