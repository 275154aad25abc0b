//! Filter value validation and normalization.
//!
//! Each filter accepts letters and digits with an optional trailing `*`
//! wildcard. Valid values are upper-cased so they compare directly against
//! console output, which is always upper case.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{ActionError, ActionResult};

/// Trailing marker that turns a filter into a prefix match.
pub const WILDCARD: char = '*';

// 1-8 alphanumerics, or 0-7 alphanumerics plus a trailing wildcard
static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z0-9]{1,8}|[a-zA-Z0-9]{0,7}\*)$").unwrap());

// Message ids have no length cap
static RE_MESSAGE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z0-9]+|[a-zA-Z0-9]*\*)$").unwrap());

/// The record field a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    System,
    JobName,
    MessageId,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::JobName => "job_name",
            Self::MessageId => "message_id",
        }
    }

    fn shape(&self) -> &'static Regex {
        match self {
            Self::System | Self::JobName => &*RE_NAME,
            Self::MessageId => &*RE_MESSAGE_ID,
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, upper-cased filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPattern {
    /// Field must equal the value.
    Exact(String),
    /// Field must start with the value (wildcard already stripped).
    Prefix(String),
}

impl FieldPattern {
    /// Validate `raw` against the shape rule for `field`.
    pub fn parse(field: FilterField, raw: &str) -> ActionResult<Self> {
        if !field.shape().is_match(raw) {
            return Err(ActionError::Validation {
                field,
                value: raw.to_string(),
            });
        }
        let upper = raw.to_uppercase();
        Ok(match upper.strip_suffix(WILDCARD) {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(upper),
        })
    }

    /// Whether a record field satisfies this pattern. Absent fields never match.
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Self::Exact(expected) => value == expected.as_str(),
            Self::Prefix(prefix) => value.starts_with(prefix.as_str()),
        }
    }
}

impl std::fmt::Display for FieldPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(s) => f.write_str(s),
            Self::Prefix(s) => write!(f, "{s}{WILDCARD}"),
        }
    }
}
