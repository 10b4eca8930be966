//! Command runner collaborator.
//!
//! [`CommandRunner`] is the seam between the dispatcher and the host OS.
//! [`SystemRunner`] spawns real processes; tests substitute fakes.

use std::io::{self, Read};
use std::process::Stdio;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Why an external command failed.
///
/// The `Display` text is what ends up in the transcript.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("exec: \"{program}\": executable file not found in $PATH")]
    NotFound { program: String },
    #[error("exec: \"{program}\": {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("exit status {code}")]
    Exit { code: i32 },
    #[error("signal: terminated")]
    Signal,
    #[error("command timed out after {secs}s")]
    TimedOut { secs: u64 },
    #[error("failed to collect output: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    fn spawn(program: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            RunError::NotFound {
                program: program.to_string(),
            }
        } else {
            RunError::Spawn {
                program: program.to_string(),
                source,
            }
        }
    }
}

/// Combined output of a command plus an optional error.
///
/// Both may be present: a program can print something and still exit
/// non-zero.
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub output: String,
    pub error: Option<RunError>,
}

impl CommandOutput {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: None,
        }
    }

    pub fn failed(error: RunError) -> Self {
        Self {
            output: String::new(),
            error: Some(error),
        }
    }
}

/// Executes a program synchronously and captures its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput;
}

impl<T: CommandRunner + ?Sized> CommandRunner for Box<T> {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        (**self).run(program, args)
    }
}

/// Runs programs on the host with an optional timeout.
///
/// Blocks the caller until the program exits. A timed-out child is killed.
pub struct SystemRunner {
    runtime: Runtime,
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Creates a runner. `timeout` of `None` waits indefinitely.
    ///
    /// # Errors
    /// Returns an error if the process runtime cannot be started.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start process runtime")?;
        Ok(Self { runtime, timeout })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        info!(program, ?args, "running command");
        let result = self
            .runtime
            .block_on(run_process(program, args, self.timeout));
        if let Some(error) = &result.error {
            warn!(program, %error, "command failed");
        }
        result
    }
}

async fn run_process(program: &str, args: &[String], timeout: Option<Duration>) -> CommandOutput {
    // stdout and stderr share one pipe so their output stays interleaved.
    let (reader, writer) = match open_output_pipe() {
        Ok(pipe) => pipe,
        Err(e) => return CommandOutput::failed(RunError::Io(e)),
    };

    let mut command = tokio::process::Command::new(program);
    command
        .args(args)
        // Output lands in a transcript, not a terminal.
        .env("TERM", "dumb")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .stdout(writer.stdout)
        .stderr(writer.stderr)
        .kill_on_drop(true);
    let spawned = command.spawn();
    // The command holds the parent's write ends; EOF needs them closed.
    drop(command);
    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => return CommandOutput::failed(RunError::spawn(program, e)),
    };

    let output = read_to_end(reader);
    let collect = async {
        let status = child.wait().await?;
        let output = output.await?;
        Ok::<_, io::Error>((status, output))
    };
    let collected = match timeout {
        Some(limit) => match tokio::time::timeout(limit, collect).await {
            Ok(collected) => collected,
            Err(_elapsed) => {
                return CommandOutput::failed(RunError::TimedOut {
                    secs: limit.as_secs(),
                });
            }
        },
        None => collect.await,
    };
    let (status, output) = match collected {
        Ok(collected) => collected,
        Err(e) => return CommandOutput::failed(RunError::Io(e)),
    };

    let error = if status.success() {
        None
    } else {
        Some(match status.code() {
            Some(code) => RunError::Exit { code },
            None => RunError::Signal,
        })
    };

    CommandOutput {
        output: String::from_utf8_lossy(&output).into_owned(),
        error,
    }
}

/// Write ends of the shared output pipe, one per child stream.
struct OutputWriter {
    stdout: Stdio,
    stderr: Stdio,
}

fn open_output_pipe() -> io::Result<(io::PipeReader, OutputWriter)> {
    let (reader, writer) = io::pipe()?;
    let stderr = writer.try_clone()?;
    Ok((
        reader,
        OutputWriter {
            stdout: writer.into(),
            stderr: stderr.into(),
        },
    ))
}

/// Drains the pipe on its own thread; resolves once every writer has closed.
fn read_to_end(mut reader: io::PipeReader) -> impl Future<Output = io::Result<Vec<u8>>> {
    let (tx, rx) = oneshot::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = reader.read_to_end(&mut buf).map(|_| buf);
        let _ = tx.send(result);
    });
    async move {
        rx.await
            .map_err(|_closed| io::Error::other("output reader exited early"))?
    }
}
