//! Operator console tool implementations.

pub mod operator_action_query;

use crate::types::ActionTool;

pub use operator_action_query::OperatorActionQuery;

/// Every tool this crate provides.
pub fn all_tools() -> Vec<Box<dyn ActionTool>> {
    vec![Box::new(OperatorActionQuery)]
}
