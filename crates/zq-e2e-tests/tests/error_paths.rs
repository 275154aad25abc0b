//! E2E tests for error paths: validation, console failures, collaborator errors.

mod helpers;

use serde_json::json;
use std::time::Duration;

use helpers::{TestHarness, run_with};
use zq_action_tools::parsers::{JOBNAME_VIEW_COMMAND, SYSTEM_VIEW_COMMAND};
use zq_action_tools::{ConsoleResponse, MockConsole, ProcessConsole};
use zq_agent::runner::QueryStatus;

/// An invalid filter fails before any console command is issued.
#[tokio::test]
async fn e2e_invalid_filter_issues_no_commands() {
    let h = TestHarness::with_sample_data();
    let response = h.run(json!({"message_id": "DSI 802A"})).await;

    assert_eq!(response.status, QueryStatus::Failed);
    assert_eq!(
        response.error.as_deref(),
        Some("invalid message_id filter: \"DSI 802A\"")
    );
    assert!(response.actions.is_empty());
    assert!(h.console.issued().is_empty());
}

/// A failing D R,A,S stops the run; D R,A,JN is never issued.
#[tokio::test]
async fn e2e_system_view_failure() {
    let mut console = MockConsole::with_sample();
    console.add_response(
        SYSTEM_VIEW_COMMAND,
        ConsoleResponse::failed(8, "IEE345I DISPLAY   AUTHORITY INVALID", ""),
    );
    let response = run_with(&console, json!({})).await;

    assert_eq!(response.status, QueryStatus::Failed);
    let failure = response.failure.as_ref().unwrap();
    assert_eq!(failure.cmd, SYSTEM_VIEW_COMMAND);
    assert_eq!(failure.stdout_lines, ["IEE345I DISPLAY   AUTHORITY INVALID"]);
    assert!(failure.stderr_lines.is_empty());
    assert_eq!(console.issued(), [SYSTEM_VIEW_COMMAND]);
}

/// A failing D R,A,JN discards the already captured D R,A,S output.
#[tokio::test]
async fn e2e_jobname_view_failure_returns_nothing() {
    let mut console = MockConsole::with_sample();
    console.add_response(JOBNAME_VIEW_COMMAND, ConsoleResponse::failed(4, "", "busy"));
    let response = run_with(&console, json!({})).await;

    assert_eq!(response.status, QueryStatus::Failed);
    assert_eq!(response.count, 0);
    assert!(response.actions.is_empty());
    assert_eq!(response.failure.as_ref().unwrap().rc, 4);
}

/// A console program that cannot be started is an unexpected error.
#[tokio::test]
async fn e2e_missing_console_program() {
    let console = ProcessConsole::new("/nonexistent/opercmd", Duration::from_secs(5)).unwrap();
    let response = run_with(&console, json!({})).await;

    assert_eq!(response.status, QueryStatus::Failed);
    assert!(response.failure.is_none());
    assert!(
        response
            .error
            .as_deref()
            .unwrap()
            .starts_with("unexpected error:")
    );
}

/// A console program that hangs is cut off by the timeout.
#[tokio::test]
async fn e2e_console_timeout() {
    let console = ProcessConsole::new("sh -c 'sleep 5'", Duration::from_millis(100)).unwrap();
    let response = run_with(&console, json!({})).await;

    assert_eq!(response.status, QueryStatus::Failed);
    assert!(response.error.as_deref().unwrap().contains("timed out"));
}

/// A console program exiting non-zero has its output forwarded.
#[tokio::test]
async fn e2e_process_non_zero_exit() {
    let console = ProcessConsole::new(
        "sh -c 'echo \"IEE305I $0 COMMAND INVALID\"; exit 12'",
        Duration::from_secs(5),
    )
    .unwrap();
    let response = run_with(&console, json!({})).await;

    let failure = response.failure.as_ref().unwrap();
    assert_eq!(failure.rc, 12);
    assert_eq!(failure.stdout_lines, ["IEE305I d r,a,s COMMAND INVALID"]);
}
