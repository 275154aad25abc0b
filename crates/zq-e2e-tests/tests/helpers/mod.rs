//! Shared test harness for E2E integration tests.
//!
//! Drives the agent's `ActionRunner` against either a `MockConsole` or a
//! `ProcessConsole` whose "console program" is a shell snippet serving the
//! fixture files under `tests/fixtures/`.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::Value;

use zq_action_tools::{MockConsole, OperatorConsole, ProcessConsole};
use zq_agent::runner::{ActionRunner, QueryResponse};

/// End-to-end harness around a mock console.
pub struct TestHarness {
    pub console: MockConsole,
}

impl TestHarness {
    /// Mock console serving the built-in sample views.
    pub fn with_sample_data() -> Self {
        Self {
            console: MockConsole::with_sample(),
        }
    }

    /// Mock console serving the given view texts.
    pub fn with_views(system_view: &str, jobname_view: &str) -> Self {
        Self {
            console: MockConsole::with_views(system_view, jobname_view),
        }
    }

    /// Run one query through the agent runner.
    pub async fn run(&self, args: Value) -> QueryResponse {
        run_with(&self.console, args).await
    }
}

pub async fn run_with(console: &dyn OperatorConsole, args: Value) -> QueryResponse {
    ActionRunner::new(console).unwrap().run(args).await
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

/// Console program line that prints the fixture for each known command and
/// fails with rc 8 for anything else. The command arrives as `$0`.
pub fn fixture_program() -> String {
    format!(
        r#"sh -c 'case "$0" in "d r,a,s") cat "{}" ;; "d r,a,jn") cat "{}" ;; *) echo "IEE305I $0 COMMAND INVALID"; exit 8 ;; esac'"#,
        fixture_path("d_r_a_s.txt"),
        fixture_path("d_r_a_jn.txt"),
    )
}

/// A process-backed console serving the fixture files.
pub fn fixture_console() -> ProcessConsole {
    ProcessConsole::new(&fixture_program(), Duration::from_secs(5)).unwrap()
}

/// Sequence numbers of the returned actions, in order.
pub fn numbers(response: &QueryResponse) -> Vec<&str> {
    response.actions.iter().map(|a| a.number.as_str()).collect()
}
