//! Runs external programs with a deadline using `std::process`.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use backforge_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::ForgeResult,
};
use tracing::{debug, instrument};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Production command runner.
///
/// The child inherits nothing from the terminal: stdin, stdout and stderr
/// are all null, so a prompt from the child can never block the run.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    poll_interval: Duration,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Override the poll interval. Mostly useful in tests.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    fn wait_with_deadline(
        &self,
        child: &mut std::process::Child,
        timeout: Duration,
    ) -> io::Result<Option<ExitStatus>> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            thread::sleep(self.poll_interval);
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self, args), fields(args = ?args))]
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        timeout: Duration,
    ) -> ForgeResult<()> {
        let mut child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| command_failed(program, spawn_reason(&e)))?;

        let status = self
            .wait_with_deadline(&mut child, timeout)
            .map_err(|e| command_failed(program, e.to_string()))?;

        match status {
            Some(status) if status.success() => {
                debug!("command succeeded");
                Ok(())
            }
            Some(status) => Err(command_failed(program, format!("exited with {status}"))),
            None => Err(ApplicationError::CommandTimedOut {
                program: program.to_string(),
                timeout,
            }
            .into()),
        }
    }
}

fn spawn_reason(e: &io::Error) -> String {
    if e.kind() == io::ErrorKind::NotFound {
        "not found on PATH".to_string()
    } else {
        e.to_string()
    }
}

fn command_failed(program: &str, reason: String) -> backforge_core::error::ForgeError {
    ApplicationError::CommandFailed {
        program: program.to_string(),
        reason,
    }
    .into()
}
