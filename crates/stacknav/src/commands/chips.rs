//! `stacknav chips` command implementation.

use clap::Args;
use stacknav_navigation::SiteNavigation;

use super::{ConfigArgs, PolicyArg};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the chips command.
#[derive(Args)]
pub(crate) struct ChipsArgs {
    /// Location to render navigation for.
    path: String,

    /// Resolution policy.
    #[arg(long, value_enum, default_value_t)]
    policy: PolicyArg,

    /// Print the navigation state as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ChipsArgs {
    /// Execute the chips command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let site = SiteNavigation::from_config(&config)?.with_policy(self.policy.into());
        let state = site.state(&self.path);

        if self.json {
            return output.json(&state);
        }

        output.highlight(&state.path);

        let navbar: Vec<String> = state
            .navbar
            .iter()
            .map(|link| marked(&link.label, link.active))
            .collect();
        output.result(&format!("navbar: {}", navbar.join("  ")));

        match &state.subheader {
            Some(subheader) => {
                let chips: Vec<String> = subheader
                    .chips
                    .iter()
                    .map(|chip| marked(&chip.label, chip.active))
                    .collect();
                output.result(&format!("chips:  {}", chips.join("  ")));
            }
            None => output.muted("chips:  (not under the docs tree)"),
        }

        if let Some(sidebar) = &state.sidebar {
            output.result(&format!("sidebar ({}):", sidebar.section));
            for doc in &sidebar.docs {
                output.result(&format!("  {}", marked(&doc.id, doc.current)));
            }
        }

        Ok(())
    }
}

/// Wrap an active label in brackets.
fn marked(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_owned()
    }
}
