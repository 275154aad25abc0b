//! Operator console abstraction for issuing a command and capturing its output.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::process::Command;

use crate::error::{ActionError, ActionResult};

/// Return code reported when the console program ended without an exit status.
pub const RC_NO_STATUS: i32 = -1;

/// Captured result of one console command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleResponse {
    pub rc: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ConsoleResponse {
    /// A successful response carrying `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            rc: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed response with the given return code.
    pub fn failed(rc: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            rc,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.rc == 0
    }
}

/// Something that can run operator console commands.
///
/// Lets the query pipeline run against a real console program in
/// production and a `MockConsole` in tests.
#[async_trait]
pub trait OperatorConsole: Send + Sync {
    /// Issue `command` (e.g. `d r,a,s`) and capture its output.
    ///
    /// A non-zero `rc` is returned as data, not as an error; the caller
    /// decides whether it is fatal.
    async fn execute(&self, command: &str) -> ActionResult<ConsoleResponse>;
}

/// Runs console commands through an external program such as `opercmd`.
///
/// The console command is passed as the program's last argument.
pub struct ProcessConsole {
    argv: Vec<String>,
    timeout: Duration,
}

impl ProcessConsole {
    /// Build from a program command line, split with shell quoting rules
    /// (no shell is involved when running it).
    pub fn new(command_line: &str, timeout: Duration) -> ActionResult<Self> {
        let argv = shell_words::split(command_line).map_err(|e| {
            ActionError::Unexpected(format!("invalid console program '{command_line}': {e}"))
        })?;
        if argv.is_empty() {
            return Err(ActionError::Unexpected("empty console program".into()));
        }
        Ok(Self { argv, timeout })
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }
}

#[async_trait]
impl OperatorConsole for ProcessConsole {
    async fn execute(&self, command: &str) -> ActionResult<ConsoleResponse> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or_else(|| ActionError::Unexpected("empty console program".into()))?;

        tracing::debug!(program = %program, command = %command, "issuing console command");

        let result = tokio::time::timeout(
            self.timeout,
            Command::new(program)
                .args(args)
                .arg(command)
                .kill_on_drop(true)
                .output(),
        )
        .await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ActionError::Unexpected(format!("{program}: {e}"))),
            Err(_) => {
                return Err(ActionError::Timeout {
                    command: command.to_string(),
                    secs: self.timeout.as_secs(),
                });
            }
        };

        Ok(ConsoleResponse {
            rc: output.status.code().unwrap_or(RC_NO_STATUS),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
