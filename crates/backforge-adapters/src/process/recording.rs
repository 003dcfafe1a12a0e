//! Command runner that records calls instead of spawning anything.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use backforge_core::{
    application::{ApplicationError, ports::CommandRunner},
    error::ForgeResult,
};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub timeout: Duration,
}

impl RecordedCommand {
    /// `program arg1 arg2`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Test double for [`CommandRunner`].
///
/// Every call succeeds unless its program was registered with
/// [`fail_program`](Self::fail_program). Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<RecordedCommand>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call to `program` fail as if it were not installed.
    pub fn fail_program(self, program: &str) -> Self {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(program.to_string());
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Recorded calls as plain command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(RecordedCommand::command_line).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
        timeout: Duration,
    ) -> ForgeResult<()> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .push(RecordedCommand {
                program: program.to_string(),
                args: args.to_vec(),
                cwd: cwd.to_path_buf(),
                timeout,
            });

        let fails = self
            .failing
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .contains(program);
        if fails {
            return Err(ApplicationError::CommandFailed {
                program: program.to_string(),
                reason: "not found on PATH".into(),
            }
            .into());
        }
        Ok(())
    }
}
