use std::path::Path;

use anyhow::Result;
use log::info;

use preflight::audit::{audit_project, AuditReport, BANNER_TITLE, FOOTER_TITLE};

use crate::cli::ui;

/// Readiness audit command
pub fn execute() -> Result<AuditReport> {
    ui::print_banner(BANNER_TITLE);

    let report = audit_project(Path::new("."));
    for outcome in &report.outcomes {
        ui::print_check_outcome(outcome);
    }

    ui::print_banner(FOOTER_TITLE);

    info!(
        "Audit finished: {} checks, failures present: {}",
        report.outcomes.len(),
        report.has_failures()
    );

    Ok(report)
}
