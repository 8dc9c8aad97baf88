//! Synchronous external-command execution.
//!
//! Every external step (package install, type-check, lint, git) goes
//! through this module. A spawn failure is reported separately from a
//! non-zero exit so callers can treat a missing tool as a skip rather
//! than a failure.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// Stdout and stderr concatenated, stdout first.
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' timed out after {}s", timeout.as_secs())]
    Timeout { program: String, timeout: Duration },
}

/// Runs a command to completion in `dir`, capturing output.
pub fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<ExecOutput, ExecError> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(ExecOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Runs a command with a hard wall-clock limit. On timeout the child is
/// killed and `ExecError::Timeout` is returned.
pub fn run_with_timeout(
    dir: &Path,
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<ExecOutput, ExecError> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Drain both pipes on background threads so a chatty child cannot
    // block on a full pipe buffer while we poll for exit.
    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if started.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ExecError::Timeout {
                        program: program.to_string(),
                        timeout,
                    });
                }
                thread::sleep(Duration::from_millis(50));
            }
            Err(source) => {
                return Err(ExecError::Spawn {
                    program: program.to_string(),
                    source,
                });
            }
        }
    };

    let stdout = stdout_handle.map(join_reader).unwrap_or_default();
    let stderr = stderr_handle.map(join_reader).unwrap_or_default();

    Ok(ExecOutput {
        success: status.success(),
        stdout,
        stderr,
    })
}

fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: thread::JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}

/// Keeps at most `max` non-empty trimmed lines of diagnostic text.
pub fn truncate_lines(text: &str, max: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(max)
        .map(str::to_string)
        .collect()
}
