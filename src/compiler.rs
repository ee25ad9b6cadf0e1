//! Invocation of the external compiler binary.
//!
//! The compiler is an opaque collaborator: it is handed one test file as
//! its sole argument and is expected to terminate, write UTF-8 text to
//! stdout/stderr, and exit 0 on success. The harness enforces a wall-clock
//! timeout on every invocation; a child still running when it elapses is
//! killed and reported as timed out.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::errors::HarnessError;

/// Handle to the compiler binary under test.
#[derive(Debug, Clone)]
pub struct Compiler {
    binary: PathBuf,
    timeout: Duration,
}

/// What happened when a test program was handed to the compiler.
#[derive(Debug)]
pub enum Execution {
    /// The compiler exited on its own within the timeout.
    Completed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
    /// The compiler was still running when the timeout elapsed and was
    /// killed. The captured text is whatever had reached the pipes by then.
    TimedOut { stdout: String, stderr: String },
}

impl Compiler {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    /// Runs the compiler on one test file, capturing stdout and stderr.
    ///
    /// Both pipes are drained on dedicated threads; a child that fills a
    /// pipe buffer would otherwise deadlock against a blocking wait.
    pub fn run(&self, test_file: &Path) -> Result<Execution, HarnessError> {
        let mut child = Command::new(&self.binary)
            .arg(test_file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HarnessError::Spawn {
                compiler: self.binary.clone(),
                source,
            })?;

        let stdout_pipe = child.stdout.take().expect("child stdout is piped");
        let stderr_pipe = child.stderr.take().expect("child stderr is piped");
        let stdout_reader = spawn_reader(stdout_pipe);
        let stderr_reader = spawn_reader(stderr_pipe);

        let status = child
            .wait_timeout(self.timeout)
            .map_err(|source| capture_error(test_file, source))?;

        if status.is_none() {
            // Kill before joining the readers so they see EOF, then reap.
            let _ = child.kill();
            let _ = child.wait();
        }

        let stdout = join_reader(stdout_reader, test_file)?;
        let stderr = join_reader(stderr_reader, test_file)?;

        match status {
            Some(status) => Ok(Execution::Completed {
                status,
                stdout,
                stderr,
            }),
            None => Ok(Execution::TimedOut { stdout, stderr }),
        }
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_reader(
    reader: JoinHandle<io::Result<Vec<u8>>>,
    test_file: &Path,
) -> Result<String, HarnessError> {
    let bytes = reader
        .join()
        .map_err(|_| {
            capture_error(
                test_file,
                io::Error::new(io::ErrorKind::Other, "capture thread panicked"),
            )
        })?
        .map_err(|source| capture_error(test_file, source))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn capture_error(test_file: &Path, source: io::Error) -> HarnessError {
    HarnessError::Capture {
        test: test_file.to_path_buf(),
        source,
    }
}
