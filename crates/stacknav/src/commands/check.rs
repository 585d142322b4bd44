//! `stacknav check` command implementation.

use clap::Args;
use stacknav_navigation::SiteNavigation;
use stacknav_sections::{AuditReport, SectionId, audit, default_corpus};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Extra paths to probe besides the generated corpus.
    #[arg(short = 'p', long = "path")]
    paths: Vec<String>,

    /// Print the audit report as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the audit has findings.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let site = SiteNavigation::from_config(&config)?;

        let mut corpus = default_corpus(site.registry(), site.docs_base());
        corpus.extend(self.paths.iter().map(|p| site.normalize(p)));
        corpus.sort();
        corpus.dedup();

        let report = audit(site.registry(), &corpus, site.docs_base());

        if self.json {
            output.json(&report)?;
        } else {
            print_report(&output, &report);
        }

        if report.is_clean() {
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "section audit failed: {} issue(s)",
                issue_count(&report)
            )))
        }
    }
}

fn print_report(output: &Output, report: &AuditReport) {
    output.info(&format!("Checked {} paths", report.paths_checked));

    if report.is_clean() {
        output.success("No ambiguous, orphaned or misplaced paths; both policies agree.");
        return;
    }

    output.separator();
    for found in &report.ambiguities {
        output.warning(&format!(
            "ambiguous  {}: claimed by {} -> {}",
            found.path,
            join_ids(&found.candidates),
            display_id(found.chosen.as_ref())
        ));
    }
    for diff in &report.policy_diffs {
        output.warning(&format!(
            "policy     {}: exclusions -> {}, longest-prefix -> {}",
            diff.path,
            display_id(diff.exclusions.as_ref()),
            display_id(diff.longest_prefix.as_ref())
        ));
    }
    for path in &report.orphans {
        output.warning(&format!("orphan     {path}: no section claims it"));
    }
    for doc in &report.misplaced {
        output.warning(&format!(
            "misplaced  {}: listed in {} sidebar, highlights {}",
            doc.path,
            doc.owner,
            display_id(doc.resolved.as_ref())
        ));
    }
    output.separator();
}

fn issue_count(report: &AuditReport) -> usize {
    report.ambiguities.len() + report.policy_diffs.len() + report.orphans.len() + report.misplaced.len()
}

fn join_ids(ids: &[SectionId]) -> String {
    ids.iter().map(SectionId::as_str).collect::<Vec<_>>().join(", ")
}

fn display_id(id: Option<&SectionId>) -> &str {
    id.map_or("-", SectionId::as_str)
}
