//! Select operator actions by system, job name and message id.

use crate::error::ActionResult;
use crate::pattern::{FieldPattern, FilterField};
use crate::types::OperatorAction;

/// Validated filters. Every supplied filter must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub system: Option<FieldPattern>,
    pub job_name: Option<FieldPattern>,
    pub message_id: Option<FieldPattern>,
}

impl FilterCriteria {
    /// Validate raw filter values. The first invalid value is reported.
    pub fn from_raw(
        system: Option<&str>,
        job_name: Option<&str>,
        message_id: Option<&str>,
    ) -> ActionResult<Self> {
        Ok(Self {
            system: system
                .map(|s| FieldPattern::parse(FilterField::System, s))
                .transpose()?,
            job_name: job_name
                .map(|s| FieldPattern::parse(FilterField::JobName, s))
                .transpose()?,
            message_id: message_id
                .map(|s| FieldPattern::parse(FilterField::MessageId, s))
                .transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.system.is_none() && self.job_name.is_none() && self.message_id.is_none()
    }

    /// Supplied predicates in application order: system, job name, message id.
    fn predicates(&self) -> impl Iterator<Item = (FilterField, &FieldPattern)> {
        [
            (FilterField::System, self.system.as_ref()),
            (FilterField::JobName, self.job_name.as_ref()),
            (FilterField::MessageId, self.message_id.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, pattern)| pattern.map(|p| (field, p)))
    }

    /// Keep the actions that satisfy every supplied predicate, in order.
    pub fn apply(&self, actions: Vec<OperatorAction>) -> Vec<OperatorAction> {
        let mut remaining = actions;
        for (field, pattern) in self.predicates() {
            remaining.retain(|action| pattern.matches(action.field(field)));
            tracing::trace!(
                field = %field,
                pattern = %pattern,
                remaining = remaining.len(),
                "applied filter"
            );
        }
        remaining
    }
}
