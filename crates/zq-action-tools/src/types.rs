//! Core operator action types and the ActionTool trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ActionResult;
use crate::pattern::FilterField;

// ── Parsed Replies ────────────────────────────────────────────

/// One outstanding reply as reported by `D R,A,S`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemReply {
    /// Reply sequence number, leading zeros preserved.
    pub number: String,
    /// Action type code (`R` for a WTOR).
    #[serde(rename = "type")]
    pub action_type: String,
    /// System the message was issued on.
    pub system: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Message text from the reply line, trimmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
}

/// One outstanding reply as reported by `D R,A,JN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobNameReply {
    pub number: String,
    /// Owning job. Absent for replies with no job, such as dump prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    pub message_id: String,
}

// ── Operator Action ───────────────────────────────────────────

/// An outstanding reply with the fields from both console views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorAction {
    pub number: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub system: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl OperatorAction {
    /// Combine both views of the same reply. `D R,A,JN` values win where
    /// the two overlap.
    pub fn from_pair(system: &SystemReply, jobname: &JobNameReply) -> Self {
        Self {
            number: jobname.number.clone(),
            action_type: system.action_type.clone(),
            system: system.system.clone(),
            job_id: system.job_id.clone(),
            message_text: system.message_text.clone(),
            job_name: jobname.job_name.clone(),
            message_id: Some(jobname.message_id.clone()),
        }
    }

    /// The value a filter on `field` compares against.
    pub fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::System => Some(self.system.as_str()),
            FilterField::JobName => self.job_name.as_deref(),
            FilterField::MessageId => self.message_id.as_deref(),
        }
    }
}

// ── Tool Result ───────────────────────────────────────────────

/// Result of executing an operator action tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that produced this result.
    pub tool_name: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Structured result data (JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ToolResult {
    pub fn success(
        tool_name: impl Into<String>,
        data: serde_json::Value,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            data: Some(data),
            summary: Some(summary.into()),
        }
    }
}

// ── ActionTool Trait ──────────────────────────────────────────

/// Trait for tools that run against the operator console.
#[async_trait]
pub trait ActionTool: Send + Sync {
    /// Tool name (e.g., "operator_action_query").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema describing accepted arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with JSON arguments against a console.
    async fn execute(
        &self,
        args: serde_json::Value,
        console: &dyn crate::console::OperatorConsole,
    ) -> ActionResult<ToolResult>;
}
