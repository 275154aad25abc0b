//! Agent configuration, loadable from TOML.

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Config file read when no `--config` is given. Missing is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/zosq/agent.toml";

/// Top-level configuration for the agent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    /// How console commands are issued.
    #[serde(default)]
    pub console: ConsoleConfig,
    /// Default filters, overridable from the command line.
    #[serde(default)]
    pub query: QueryConfig,
}

/// Console program settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Program command line; the console command is appended as the last argument.
    #[serde(default = "default_program")]
    pub program: String,
    /// Per-command timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_program() -> String {
    "opercmd".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Raw (unvalidated) filter values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
}

impl QueryConfig {
    /// Fields set in `overrides` replace the configured ones.
    pub fn overridden_by(self, overrides: QueryConfig) -> Self {
        Self {
            system: overrides.system.or(self.system),
            job_name: overrides.job_name.or(self.job_name),
            message_id: overrides.message_id.or(self.message_id),
        }
    }

    /// Tool arguments for `operator_action_query`. Unset filters are left out.
    pub fn to_args(&self) -> Value {
        let mut args = Map::new();
        for (key, value) in [
            ("system", &self.system),
            ("job_name", &self.job_name),
            ("message_id", &self.message_id),
        ] {
            if let Some(value) = value {
                args.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(args)
    }
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config {path}"))?;
        Ok(config)
    }

    /// Load an explicitly given config, or the default path if it exists,
    /// or fall back to built-in defaults.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }
}
