pub mod audit;
pub mod errors;
pub mod models;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use audit::{audit_project, run_audit, AuditReport, CHECKLIST};
pub use errors::{PreflightError, PreflightResult};
pub use models::{
    artifact::{Artifact, ArtifactKind},
    check::{Check, CheckOutcome, FailureMode},
    verdict::Verdict,
};
