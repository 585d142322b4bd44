//! `stacknav resolve` command implementation.

use clap::Args;
use serde::Serialize;
use stacknav_navigation::SiteNavigation;
use stacknav_sections::Resolution;

use super::{ConfigArgs, PolicyArg};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Paths to resolve (query strings, fragments and escapes are normalized).
    #[arg(required = true)]
    paths: Vec<String>,

    /// Resolution policy.
    #[arg(long, value_enum, default_value_t)]
    policy: PolicyArg,

    /// Print JSON including every candidate.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// One resolved path for JSON output.
#[derive(Serialize)]
struct ResolvedPath {
    input: String,
    path: String,
    #[serde(flatten)]
    resolution: Resolution,
}

impl ResolveArgs {
    /// Execute the resolve command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let site = SiteNavigation::from_config(&config)?.with_policy(self.policy.into());
        let resolver = site.resolver();

        let resolved: Vec<ResolvedPath> = self
            .paths
            .into_iter()
            .map(|input| {
                let path = site.normalize(&input);
                let resolution = resolver.resolve_detailed(&path);
                ResolvedPath {
                    input,
                    path,
                    resolution,
                }
            })
            .collect();

        if self.json {
            return output.json(&resolved);
        }

        for item in &resolved {
            let active = item
                .resolution
                .active
                .as_ref()
                .map_or("-", |id| id.as_str());
            output.result(&format!("{}\t{active}", item.path));
            if item.resolution.is_ambiguous() {
                let ids: Vec<_> = item
                    .resolution
                    .candidates
                    .iter()
                    .map(|c| format!("{} ({})", c.id, c.specificity))
                    .collect();
                output.warning(&format!(
                    "  ambiguous: {} claimed by {}",
                    item.path,
                    ids.join(", ")
                ));
            }
        }

        Ok(())
    }
}
