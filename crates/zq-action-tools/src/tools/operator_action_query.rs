//! operator_action_query — list outstanding messages awaiting an operator reply.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::console::OperatorConsole;
use crate::error::{ActionError, ActionResult};
use crate::filter::FilterCriteria;
use crate::pattern::FilterField;
use crate::query::query_actions;
use crate::types::{ActionTool, ToolResult};

pub const TOOL_NAME: &str = "operator_action_query";

pub struct OperatorActionQuery;

#[async_trait]
impl ActionTool for OperatorActionQuery {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "List outstanding messages requiring operator action, filtered by system, job name or message id"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "system": {
                    "type": "string",
                    "description": "System name, 1-8 alphanumerics; trailing '*' matches a prefix"
                },
                "job_name": {
                    "type": "string",
                    "description": "Job name, 1-8 alphanumerics; trailing '*' matches a prefix"
                },
                "message_id": {
                    "type": "string",
                    "description": "Message identifier; trailing '*' matches a prefix"
                }
            }
        })
    }

    async fn execute(&self, args: Value, console: &dyn OperatorConsole) -> ActionResult<ToolResult> {
        // Validate before touching the console
        let criteria = FilterCriteria::from_raw(
            filter_arg(&args, FilterField::System)?,
            filter_arg(&args, FilterField::JobName)?,
            filter_arg(&args, FilterField::MessageId)?,
        )?;

        let actions = query_actions(console, &criteria).await?;
        let count = actions.len();

        let data = json!({
            "actions": actions,
            "count": count,
            "changed": false,
        });

        Ok(ToolResult::success(
            TOOL_NAME,
            data,
            format!("Found {count} outstanding operator actions"),
        ))
    }
}

fn filter_arg(args: &Value, field: FilterField) -> ActionResult<Option<&str>> {
    match args.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(ActionError::Validation {
            field,
            value: other.to_string(),
        }),
    }
}
