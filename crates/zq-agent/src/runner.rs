//! Action runner — executes the operator action query and shapes the response.
//!
//! Bridges the `operator_action_query` tool and the agent's JSON output:
//! - success: matching actions plus their count
//! - console failure: the failing command's raw output is forwarded
//! - anything else: a single error string

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use anyhow::Context;
use zq_action_tools::tools::{self, operator_action_query::TOOL_NAME};
use zq_action_tools::{
    ActionError, ActionResult, ActionTool, OperatorAction, OperatorConsole, ToolResult,
};

/// Outcome of a query run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Completed,
    Failed,
}

/// Raw output of a console command that ended with a non-zero return code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandFailure {
    pub cmd: String,
    pub rc: i32,
    pub stdout: String,
    pub stderr: String,
    pub stdout_lines: Vec<String>,
    pub stderr_lines: Vec<String>,
}

impl CommandFailure {
    fn new(cmd: String, rc: i32, stdout: String, stderr: String) -> Self {
        Self {
            cmd,
            rc,
            stdout_lines: stdout.lines().map(String::from).collect(),
            stderr_lines: stderr.lines().map(String::from).collect(),
            stdout,
            stderr,
        }
    }
}

/// What the agent prints for one run.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub status: QueryStatus,
    /// Always false: querying never changes the system.
    pub changed: bool,
    pub count: usize,
    pub actions: Vec<OperatorAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set only when a console command failed.
    #[serde(flatten)]
    pub failure: Option<CommandFailure>,
    /// Processing latency in milliseconds.
    pub latency_ms: u64,
    pub responded_at: DateTime<Utc>,
}

impl QueryResponse {
    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Completed
    }
}

/// Runs the operator action query against a console.
pub struct ActionRunner<'a> {
    tool: Box<dyn ActionTool>,
    console: &'a dyn OperatorConsole,
}

impl<'a> ActionRunner<'a> {
    /// Runner for the `operator_action_query` tool from the tool registry.
    pub fn new(console: &'a dyn OperatorConsole) -> anyhow::Result<Self> {
        let tool = tools::all_tools()
            .into_iter()
            .find(|t| t.name() == TOOL_NAME)
            .with_context(|| format!("tool '{TOOL_NAME}' is not registered"))?;
        Ok(Self::with_tool(tool, console))
    }

    pub fn with_tool(tool: Box<dyn ActionTool>, console: &'a dyn OperatorConsole) -> Self {
        Self { tool, console }
    }

    /// Run one query with the given tool arguments. Never fails: errors are
    /// reported inside the response.
    pub async fn run(&self, args: Value) -> QueryResponse {
        let start = Instant::now();

        let outcome = self
            .tool
            .execute(args, self.console)
            .await
            .and_then(decode_actions);
        let response = match outcome {
            Ok((actions, summary)) => completed_response(actions, summary, start),
            Err(e) => {
                let error = e.to_string();
                let failure = match e {
                    ActionError::CommandFailed {
                        command,
                        rc,
                        stdout,
                        stderr,
                    } => Some(CommandFailure::new(command, rc, stdout, stderr)),
                    _ => None,
                };
                error_response(start, error, failure)
            }
        };

        if response.is_success() {
            tracing::info!(
                tool = %self.tool.name(),
                count = response.count,
                latency_ms = response.latency_ms,
                "operator action query completed"
            );
        } else {
            tracing::warn!(
                tool = %self.tool.name(),
                error = response.error.as_deref().unwrap_or_default(),
                latency_ms = response.latency_ms,
                "operator action query failed"
            );
        }
        response
    }
}

/// Pull the action list out of a tool result.
fn decode_actions(result: ToolResult) -> ActionResult<(Vec<OperatorAction>, Option<String>)> {
    let actions = result
        .data
        .as_ref()
        .and_then(|data| data.get("actions"))
        .ok_or_else(|| {
            ActionError::Unexpected(format!("{} returned no actions", result.tool_name))
        })?;
    let actions = serde_json::from_value(actions.clone()).map_err(|e| {
        ActionError::Unexpected(format!("{} returned malformed actions: {e}", result.tool_name))
    })?;
    Ok((actions, result.summary))
}

fn completed_response(
    actions: Vec<OperatorAction>,
    summary: Option<String>,
    start: Instant,
) -> QueryResponse {
    QueryResponse {
        status: QueryStatus::Completed,
        changed: false,
        count: actions.len(),
        actions,
        summary,
        error: None,
        failure: None,
        latency_ms: start.elapsed().as_millis() as u64,
        responded_at: Utc::now(),
    }
}

fn error_response(start: Instant, error: String, failure: Option<CommandFailure>) -> QueryResponse {
    QueryResponse {
        status: QueryStatus::Failed,
        changed: false,
        count: 0,
        actions: Vec::new(),
        summary: None,
        error: Some(error),
        failure,
        latency_ms: start.elapsed().as_millis() as u64,
        responded_at: Utc::now(),
    }
}
