//! zosq agent library used by the operator action query binary.
//!
//! Re-exports all modules so external crates (e.g. `zq-e2e-tests`) can
//! drive `ActionRunner` and `AgentConfig` directly.

pub mod cli;
pub mod config;
pub mod runner;
