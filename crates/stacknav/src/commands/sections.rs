//! `stacknav sections` command implementation.

use clap::Args;
use stacknav_navigation::SiteNavigation;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    /// Print landing-page cards as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl SectionsArgs {
    /// Execute the sections command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let site = SiteNavigation::from_config(&config)?;

        if self.json {
            return output.json(&site.landing_cards());
        }

        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: built-in"),
        }

        for def in site.registry().all() {
            output.highlight(&format!("{} ({})", def.id, def.label));
            output.result(&format!("  href:    {}", def.canonical_path));
            if let Some(include) = &def.include {
                output.result(&format!("  include: {include}"));
            }
            for exclude in &def.exclude {
                output.result(&format!("  exclude: {exclude}"));
            }
            if !def.sidebar.is_empty() {
                output.muted(&format!("  sidebar: {} docs", def.sidebar.len()));
            }
        }

        Ok(())
    }
}
