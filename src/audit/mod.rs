use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{info, warn};

use crate::errors::PreflightResult;
use crate::models::artifact::{Artifact, ArtifactKind};
use crate::models::check::CheckOutcome;
use crate::models::verdict::Verdict;

pub mod checklist;

pub use checklist::CHECKLIST;

pub const BANNER_TITLE: &str = "Pre-Flight Deployment Audit";
pub const FOOTER_TITLE: &str = "Audit Complete";

/// The flat list of evaluated checks from one audit run
#[derive(Debug)]
pub struct AuditReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl AuditReport {
    /// True when any check reported FAIL. Warnings do not count.
    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| outcome.verdict == Verdict::Fail)
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", BANNER_TITLE)?;
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        writeln!(f, "--- {} ---", FOOTER_TITLE)
    }
}

/// Run the readiness checklist against the project under `root`.
///
/// Each artifact is read at most once, even when two checks consume it. An
/// unreadable artifact does not abort the run: every check depending on it
/// reports FAIL and the rest of the checklist still executes.
pub fn audit_project(root: &Path) -> AuditReport {
    info!(
        "Auditing {} against {} checks",
        root.display(),
        CHECKLIST.len()
    );

    let mut artifacts: HashMap<ArtifactKind, PreflightResult<Artifact>> = HashMap::new();
    for kind in ArtifactKind::ALL {
        let loaded = Artifact::load(root, kind);
        if let Err(err) = &loaded {
            warn!("{}", err);
        }
        artifacts.insert(kind, loaded);
    }

    let outcomes = CHECKLIST
        .iter()
        .map(|check| match &artifacts[&check.artifact] {
            Ok(artifact) => check.evaluate(&artifact.content),
            Err(_) => check.unreadable(),
        })
        .collect();

    AuditReport { outcomes }
}

/// Audit the current working directory and print the report to stdout.
pub fn run_audit() {
    let report = audit_project(Path::new("."));
    print!("{}", report);
}
