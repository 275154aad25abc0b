//! Parsers for the two console views of outstanding replies.
//!
//! `D R,A,S` reports the system, job id and message text of each reply;
//! `D R,A,JN` reports the job name and message id. Both list the reply
//! sequence number, which is what the merge step joins on.

pub mod jobname_view;
pub mod system_view;

use crate::types::{JobNameReply, SystemReply};

/// The console command whose output `system_view` parses.
pub const SYSTEM_VIEW_COMMAND: &str = "d r,a,s";

/// The console command whose output `jobname_view` parses.
pub const JOBNAME_VIEW_COMMAND: &str = "d r,a,jn";

/// Parse both views. The two parses are independent of each other.
pub fn parse_views(system_text: &str, jobname_text: &str) -> (Vec<SystemReply>, Vec<JobNameReply>) {
    let system = system_view::parse(system_text);
    let jobname = jobname_view::parse(jobname_text);
    tracing::debug!(
        system_view = system.len(),
        jobname_view = jobname.len(),
        "parsed outstanding reply views"
    );
    (system, jobname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{JOBNAME_VIEW_SAMPLE, SYSTEM_VIEW_SAMPLE};

    #[test]
    fn parse_system_view_sample() {
        let replies = system_view::parse(SYSTEM_VIEW_SAMPLE);
        let numbers: Vec<_> = replies.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, ["001", "002", "05", "574", "742", "810", "399"]);
        assert!(replies.iter().all(|r| r.action_type == "R"));
    }

    #[test]
    fn parse_jobname_view_sample() {
        let replies = jobname_view::parse(JOBNAME_VIEW_SAMPLE);
        let numbers: Vec<_> = replies.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, ["001", "002", "05", "574", "742", "399", "901"]);
        let without_job: Vec<_> = replies
            .iter()
            .filter(|r| r.job_name.is_none())
            .map(|r| r.number.as_str())
            .collect();
        assert_eq!(without_job, ["05"]);
    }

    #[test]
    fn jobname_line_read_with_system_grammar() {
        // A D R,A,JN line has no system token before the job name, so the
        // D R,A,S grammar reads the job name as the system instead.
        let replies = system_view::parse("742 R FVFNT29H &742 ARC0055A REPLY");
        assert_eq!(replies[0].system, "FVFNT29H");
        assert!(replies[0].job_id.is_none());
    }

    #[test]
    fn parse_views_is_repeatable() {
        let first = parse_views(SYSTEM_VIEW_SAMPLE, JOBNAME_VIEW_SAMPLE);
        let second = parse_views(SYSTEM_VIEW_SAMPLE, JOBNAME_VIEW_SAMPLE);
        assert_eq!(first, second);
    }
}
