//! Suite orchestration: discover, execute, compare, tally.
//!
//! Each discovered case goes through a three-outcome branch: a timeout or a
//! nonzero exit fails it immediately (comparison is skipped and the fixture
//! is never read in those paths), a clean exit reads the `.expected` fixture
//! and passes iff captured stdout matches it byte for byte. Counters live in
//! a [`RunSummary`] threaded explicitly through the loop; there is no global
//! state and no retry.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::compiler::{Compiler, Execution};
use crate::discovery::{self, expected_path};
use crate::errors::HarnessError;
use crate::report::Reporter;

/// Configuration for a harness run.
pub struct HarnessConfig {
    /// Directory containing `.nt` test programs.
    pub test_root: PathBuf,
    /// Compiler binary under test.
    pub compiler: PathBuf,
    /// Wall-clock limit for a single compiler invocation.
    pub timeout: Duration,
    /// Colorize failure details on stderr.
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_root: PathBuf::from("tests"),
            compiler: PathBuf::from("./bin/ntc"),
            timeout: Duration::from_secs(2),
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

/// A single golden test: a source program plus its stdout fixture.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub source: PathBuf,
}

impl TestCase {
    /// Base file name, as shown in the per-case report lines.
    pub fn name(&self) -> String {
        match self.source.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.source.display().to_string(),
        }
    }

    pub fn expected_file(&self) -> PathBuf {
        expected_path(&self.source)
    }
}

/// Why a case failed. Feeds the stderr diagnostics; the stdout report
/// collapses every variant to a `fail` line.
#[derive(Debug)]
pub enum FailureReason {
    NonZeroExit {
        code: Option<i32>,
        stderr: String,
    },
    /// The compiler was killed at the timeout. Partial output never takes
    /// part in the comparison; it is kept for diagnostics only.
    Timeout {
        partial_stdout: String,
        partial_stderr: String,
    },
    OutputMismatch {
        expected: String,
        actual: String,
    },
}

/// Outcome of a single case.
#[derive(Debug)]
pub enum CaseOutcome {
    Pass,
    Fail(FailureReason),
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CaseOutcome::Pass)
    }
}

/// Aggregate counters for one run. Invariant: `passed + failed == total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &CaseOutcome) {
        self.total += 1;
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Runs one case through the compiler and scores it.
///
/// Check order matches the driver contract: timeout first, then the exit
/// code, and only a clean exit touches the fixture. A fixture read failure
/// is fatal and propagates.
pub fn run_case(case: &TestCase, compiler: &Compiler) -> Result<CaseOutcome, HarnessError> {
    match compiler.run(&case.source)? {
        Execution::TimedOut { stdout, stderr } => {
            Ok(CaseOutcome::Fail(FailureReason::Timeout {
                partial_stdout: stdout,
                partial_stderr: stderr,
            }))
        }
        Execution::Completed {
            status,
            stdout,
            stderr,
        } => {
            if !status.success() {
                return Ok(CaseOutcome::Fail(FailureReason::NonZeroExit {
                    code: status.code(),
                    stderr,
                }));
            }

            let fixture = case.expected_file();
            let expected = fs::read_to_string(&fixture).map_err(|source| {
                HarnessError::Fixture {
                    path: fixture,
                    source,
                }
            })?;

            if stdout == expected {
                Ok(CaseOutcome::Pass)
            } else {
                Ok(CaseOutcome::Fail(FailureReason::OutputMismatch {
                    expected,
                    actual: stdout,
                }))
            }
        }
    }
}

/// Discovers and runs every test under the configured directory.
///
/// Cases run strictly one after another in sorted order, and each one is
/// reported as soon as it finishes. Returns the final tally; the caller
/// decides what the exit code should be.
pub fn run_suite(
    config: &HarnessConfig,
    reporter: &mut Reporter,
) -> Result<RunSummary, HarnessError> {
    let files = discovery::discover_test_files(&config.test_root)?;
    let compiler = Compiler::new(&config.compiler, config.timeout);

    let mut summary = RunSummary::default();
    let mut failures = Vec::new();

    for source in files {
        let case = TestCase { source };
        let outcome = run_case(&case, &compiler)?;
        reporter.case_line(&case, &outcome);
        summary.record(&outcome);
        if let CaseOutcome::Fail(reason) = outcome {
            failures.push((case, reason));
        }
    }

    reporter.summary(&summary);
    reporter.failure_details(&failures);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_add_up() {
        let mut summary = RunSummary::default();
        summary.record(&CaseOutcome::Pass);
        summary.record(&CaseOutcome::Fail(FailureReason::NonZeroExit {
            code: Some(2),
            stderr: String::new(),
        }));
        summary.record(&CaseOutcome::Pass);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.passed + summary.failed, summary.total);
    }

    #[test]
    fn empty_run_reports_zero_everywhere() {
        let summary = RunSummary::default();
        assert_eq!((summary.total, summary.passed, summary.failed), (0, 0, 0));
    }

    #[test]
    fn case_name_is_the_base_file_name() {
        let case = TestCase {
            source: PathBuf::from("tests/arith.nt"),
        };
        assert_eq!(case.name(), "arith.nt");
    }
}
