//! Run reporting.
//!
//! Per-case lines and the summary go to stdout in a fixed, tab-separated
//! format that scripts can depend on. Everything human-facing — failure
//! reasons, compiler stderr, output diffs, partial output from timed-out
//! cases — goes to stderr, colorized when requested.

use std::io::{self, Write};

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::harness::{CaseOutcome, FailureReason, RunSummary, TestCase};

pub struct Reporter {
    stderr: StandardStream,
}

impl Reporter {
    pub fn new(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stderr: StandardStream::stderr(choice),
        }
    }

    /// One `ok`/`fail` line per case, in discovery order.
    pub fn case_line(&mut self, case: &TestCase, outcome: &CaseOutcome) {
        let tag = if outcome.passed() { "ok" } else { "fail" };
        println!("{}\t{}", tag, case.name());
    }

    /// Final tally, printed after the last case line.
    pub fn summary(&mut self, summary: &RunSummary) {
        println!(
            "{}/{} (pass: {}, fail: {})",
            summary.passed, summary.total, summary.passed, summary.failed
        );
    }

    /// Failure detail block on stderr. Silent when everything passed.
    pub fn failure_details(&mut self, failures: &[(TestCase, FailureReason)]) {
        if failures.is_empty() {
            return;
        }
        // Reporting must never abort a finished run; a broken stderr pipe
        // is ignored.
        let _ = self.write_details(failures);
    }

    fn write_details(&mut self, failures: &[(TestCase, FailureReason)]) -> io::Result<()> {
        writeln!(self.stderr, "\nFailed tests:")?;
        for (case, reason) in failures {
            self.stderr
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(self.stderr, "  {}", case.name())?;
            self.stderr.reset()?;

            match reason {
                FailureReason::NonZeroExit { code, stderr } => {
                    match code {
                        Some(code) => writeln!(self.stderr, ": compiler exited with code {}", code)?,
                        None => writeln!(self.stderr, ": compiler was killed by a signal")?,
                    }
                    self.write_indented(stderr)?;
                }
                FailureReason::Timeout {
                    partial_stdout,
                    partial_stderr,
                } => {
                    writeln!(self.stderr, ": timed out")?;
                    if !partial_stdout.is_empty() {
                        writeln!(self.stderr, "    stdout before the timeout:")?;
                        self.write_indented(partial_stdout)?;
                    }
                    if !partial_stderr.is_empty() {
                        writeln!(self.stderr, "    stderr before the timeout:")?;
                        self.write_indented(partial_stderr)?;
                    }
                }
                FailureReason::OutputMismatch { expected, actual } => {
                    writeln!(self.stderr, ": output did not match expected")?;
                    self.write_diff(expected, actual)?;
                }
            }
        }
        Ok(())
    }

    /// Line diff, fixture on the minus side, captured output on the plus side.
    fn write_diff(&mut self, expected: &str, actual: &str) -> io::Result<()> {
        let changeset = Changeset::new(expected, actual, "\n");
        for diff in &changeset.diffs {
            match diff {
                Difference::Same(text) => {
                    self.stderr.reset()?;
                    self.write_tagged(' ', text)?;
                }
                Difference::Rem(text) => {
                    self.stderr
                        .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                    self.write_tagged('-', text)?;
                }
                Difference::Add(text) => {
                    self.stderr
                        .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                    self.write_tagged('+', text)?;
                }
            }
        }
        self.stderr.reset()
    }

    fn write_tagged(&mut self, tag: char, text: &str) -> io::Result<()> {
        for line in text.lines() {
            writeln!(self.stderr, "    {}{}", tag, line)?;
        }
        Ok(())
    }

    fn write_indented(&mut self, text: &str) -> io::Result<()> {
        for line in text.lines() {
            writeln!(self.stderr, "      {}", line)?;
        }
        Ok(())
    }
}
