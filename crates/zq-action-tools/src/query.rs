//! The outstanding operator action pipeline: query, parse, merge, filter.

use crate::console::OperatorConsole;
use crate::error::{ActionError, ActionResult};
use crate::filter::FilterCriteria;
use crate::merge::merge;
use crate::parsers::{self, JOBNAME_VIEW_COMMAND, SYSTEM_VIEW_COMMAND};
use crate::types::OperatorAction;

/// Parse both views, join them and apply `criteria`.
///
/// Pure function of its inputs: the same texts always give the same actions.
pub fn find_actions(
    system_text: &str,
    jobname_text: &str,
    criteria: &FilterCriteria,
) -> Vec<OperatorAction> {
    let (system, jobname) = parsers::parse_views(system_text, jobname_text);
    let merged = merge(&system, &jobname);
    let merged_count = merged.len();
    let actions = criteria.apply(merged);
    tracing::debug!(
        filtered = !criteria.is_empty(),
        merged = merged_count,
        selected = actions.len(),
        "filtered outstanding operator actions"
    );
    actions
}

/// Run both console queries and return the matching actions.
///
/// Either query ending with a non-zero return code aborts the whole
/// operation with `ActionError::CommandFailed`; nothing is parsed.
pub async fn query_actions(
    console: &dyn OperatorConsole,
    criteria: &FilterCriteria,
) -> ActionResult<Vec<OperatorAction>> {
    let system_text = run_view(console, SYSTEM_VIEW_COMMAND).await?;
    let jobname_text = run_view(console, JOBNAME_VIEW_COMMAND).await?;
    Ok(find_actions(&system_text, &jobname_text, criteria))
}

async fn run_view(console: &dyn OperatorConsole, command: &str) -> ActionResult<String> {
    let response = console.execute(command).await?;
    if !response.is_success() {
        tracing::warn!(command = %command, rc = response.rc, "console query failed");
        return Err(ActionError::CommandFailed {
            command: command.to_string(),
            rc: response.rc,
            stdout: response.stdout,
            stderr: response.stderr,
        });
    }
    Ok(response.stdout)
}
