//! Parser for `D R,A,JN` output (replies listed with their job name).
//!
//! This view is only used for the job name and message id, which `D R,A,S`
//! does not report.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::JobNameReply;

// NUMBER TYPE [JOBNAME] &|*NUMBER MSGID ...
static RE_JOBNAME_VIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([0-9]{2,})\s[A-Z]\s+([A-Z0-9]{1,8})?\s*[&*]?[0-9]+\s([A-Z0-9]+)")
        .unwrap()
});

/// Extract every reply line from a `D R,A,JN` response, in order.
///
/// The job name is left as `None` when the reply has no owning job
/// (e.g. a WTOR raised by a DUMP command).
pub fn parse(text: &str) -> Vec<JobNameReply> {
    RE_JOBNAME_VIEW
        .captures_iter(text)
        .map(|caps| JobNameReply {
            number: caps[1].to_string(),
            job_name: caps.get(2).map(|m| m.as_str().to_string()),
            message_id: caps[3].to_string(),
        })
        .collect()
}
