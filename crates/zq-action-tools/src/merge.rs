//! Join the two reply views on sequence number.

use std::collections::HashMap;

use crate::types::{JobNameReply, OperatorAction, SystemReply};

/// Inner join of `D R,A,S` and `D R,A,JN` replies on `number`.
///
/// Output follows `system` order; several `jobname` matches for one number
/// are emitted in `jobname` order. A reply missing from either view is
/// dropped. A number reused within one snapshot yields one action per
/// matching pair.
pub fn merge(system: &[SystemReply], jobname: &[JobNameReply]) -> Vec<OperatorAction> {
    let mut index: HashMap<&str, Vec<&JobNameReply>> = HashMap::new();
    for reply in jobname {
        index.entry(reply.number.as_str()).or_default().push(reply);
    }

    let mut merged = Vec::with_capacity(system.len());
    for reply in system {
        let Some(matches) = index.get(reply.number.as_str()) else {
            tracing::trace!(number = %reply.number, "no D R,A,JN counterpart, dropped");
            continue;
        };
        if matches.len() > 1 {
            tracing::debug!(
                number = %reply.number,
                count = matches.len(),
                "sequence number reported more than once"
            );
        }
        merged.extend(
            matches
                .iter()
                .map(|jobname| OperatorAction::from_pair(reply, jobname)),
        );
    }
    merged
}
