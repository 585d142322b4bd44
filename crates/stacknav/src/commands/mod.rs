//! CLI command implementations.

mod check;
mod chips;
mod resolve;
mod sections;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use stacknav_config::{CliSettings, Config};
use stacknav_sections::ResolutionPolicy;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use chips::ChipsArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use sections::SectionsArgs;

/// Configuration options shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover stacknav.toml).
    #[arg(short, long, env = "STACKNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Path the site is served under (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Path prefix of the documentation tree (overrides config).
    #[arg(long)]
    docs_base: Option<String>,
}

impl ConfigArgs {
    /// Load and validate configuration with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            docs_base: self.docs_base.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config = ?config.config_path,
            base_url = %config.site.base_url,
            docs_base = %config.site.docs_base,
            "Configuration ready"
        );
        Ok(config)
    }
}

/// Resolution policy selectable on the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum PolicyArg {
    /// Include and exclude rules, then specificity.
    #[default]
    Exclusions,
    /// Longest include match only.
    LongestPrefix,
}

impl From<PolicyArg> for ResolutionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Exclusions => Self::Exclusions,
            PolicyArg::LongestPrefix => Self::LongestPrefix,
        }
    }
}
