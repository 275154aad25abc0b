//! Command-line arguments for the agent binary.

use clap::Parser;

use crate::config::QueryConfig;

/// List outstanding messages awaiting an operator reply.
#[derive(Debug, Parser)]
#[command(name = "zq-agent", version, about)]
pub struct Cli {
    /// TOML config file (defaults to /etc/zosq/agent.toml when present).
    #[arg(long)]
    pub config: Option<String>,

    /// System name filter; trailing '*' matches a prefix.
    #[arg(long)]
    pub system: Option<String>,

    /// Job name filter; trailing '*' matches a prefix.
    #[arg(long)]
    pub job_name: Option<String>,

    /// Message id filter; trailing '*' matches a prefix.
    #[arg(long)]
    pub message_id: Option<String>,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Filters given on the command line.
    pub fn query_overrides(&self) -> QueryConfig {
        QueryConfig {
            system: self.system.clone(),
            job_name: self.job_name.clone(),
            message_id: self.message_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filters() {
        let cli = Cli::try_parse_from([
            "zq-agent",
            "--system",
            "mv29",
            "--job-name",
            "mq*",
            "--message-id",
            "dsi*",
        ])
        .unwrap();
        let query = cli.query_overrides();
        assert_eq!(query.system.as_deref(), Some("mv29"));
        assert_eq!(query.job_name.as_deref(), Some("mq*"));
        assert_eq!(query.message_id.as_deref(), Some("dsi*"));
        assert!(cli.config.is_none());
        assert!(!cli.pretty);
    }

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["zq-agent"]).unwrap();
        assert_eq!(cli.query_overrides(), QueryConfig::default());
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["zq-agent", "--jobname", "X"]).is_err());
    }
}
