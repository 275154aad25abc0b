//! Parser for `D R,A,S` output (replies listed with their system name).
//!
//! Two line shapes occur in practice:
//! - with a job id: `810 R MV2D     JOB58389 &810 ARC0055A REPLY 'GO' OR 'CANCEL'`
//! - without one:   `574 R MV28              *574 IXG312E OFFLOAD DELAYED FOR..`
//!
//! Continuation lines of a multi-line message do not start with a sequence
//! number and are skipped.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::SystemReply;

// NUMBER TYPE SYSNAME [JOBID] &|*NUMBER TEXT
static RE_SYSTEM_VIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*([0-9]{2,})\s([A-Z])\s([A-Z0-9]{1,8})\s+([A-Z0-9]{1,8})?\s*[&*]?[0-9]+(.*)",
    )
    .unwrap()
});

/// Extract every reply line from a `D R,A,S` response, in order.
pub fn parse(text: &str) -> Vec<SystemReply> {
    RE_SYSTEM_VIEW
        .captures_iter(text)
        .map(|caps| SystemReply {
            number: caps[1].to_string(),
            action_type: caps[2].to_string(),
            system: caps[3].to_string(),
            job_id: caps
                .get(4)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(String::from),
            message_text: caps
                .get(5)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty())
                .map(String::from),
        })
        .collect()
}
