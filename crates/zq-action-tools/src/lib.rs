//! Outstanding operator action query tools.
//!
//! Parses the two console views of pending replies (`D R,A,S` and
//! `D R,A,JN`), joins them on the reply sequence number, and filters the
//! joined records by system, job name and message id. An `OperatorConsole`
//! abstraction supplies the raw text so the pipeline can run against a
//! real console program or a mock.

pub mod console;
pub mod error;
pub mod filter;
pub mod merge;
pub mod mock;
pub mod parsers;
pub mod pattern;
pub mod query;
pub mod tools;
pub mod types;

// Re-export key types for convenience
pub use console::{ConsoleResponse, OperatorConsole, ProcessConsole};
pub use error::{ActionError, ActionResult};
pub use filter::FilterCriteria;
pub use mock::MockConsole;
pub use pattern::{FieldPattern, FilterField};
pub use query::{find_actions, query_actions};
pub use types::{ActionTool, JobNameReply, OperatorAction, SystemReply, ToolResult};
