//! The fixed readiness checklist.
//!
//! Every rule is a literal substring test over one artifact's text. This is
//! deliberately not a parser: a directive hidden in a comment passes, and an
//! equivalent directive written with different whitespace fails.

use crate::models::artifact::ArtifactKind;
use crate::models::check::{Check, FailureMode};

fn exposes_port(content: &str) -> bool {
    content.contains("EXPOSE 8080")
}

fn runs_as_non_root(content: &str) -> bool {
    content.contains("USER nginx")
}

fn listens_on_port(content: &str) -> bool {
    content.contains("listen 8080;")
}

// Evidence that secrets come from the environment, not a real secret scan.
fn reads_env_secrets(content: &str) -> bool {
    content.contains("import.meta.env")
}

fn has_plays_inline(content: &str) -> bool {
    content.contains("playsInline")
}

fn uses_dynamic_grids(content: &str) -> bool {
    content.contains("repeat(auto-fill") || content.contains("repeat(auto-fit")
}

/// Checks in report order
pub const CHECKLIST: [Check; 6] = [
    Check {
        label: "Port Configuration",
        artifact: ArtifactKind::BuildDescriptor,
        predicate: exposes_port,
        pass_detail: Some("8080 exposed"),
        negative_detail: "Missing EXPOSE 8080",
        failure_mode: FailureMode::Fail,
    },
    Check {
        label: "Container Security",
        artifact: ArtifactKind::BuildDescriptor,
        predicate: runs_as_non_root,
        pass_detail: Some("Non-root user 'nginx' enforced"),
        negative_detail: "Running as root",
        failure_mode: FailureMode::Fail,
    },
    Check {
        label: "Nginx Configuration",
        artifact: ArtifactKind::ServerConfig,
        predicate: listens_on_port,
        pass_detail: Some("Listening on 8080"),
        negative_detail: "Nginx not configured for 8080",
        failure_mode: FailureMode::Fail,
    },
    Check {
        label: "Secrets Management",
        artifact: ArtifactKind::ClientConfig,
        predicate: reads_env_secrets,
        pass_detail: Some("Env variables detected"),
        negative_detail: "Potential leakage",
        failure_mode: FailureMode::Fail,
    },
    Check {
        label: "Mobile Camera (playsInline)",
        artifact: ArtifactKind::EntryUi,
        predicate: has_plays_inline,
        pass_detail: None,
        negative_detail: "iOS Safari might block video autostart",
        failure_mode: FailureMode::Warn,
    },
    Check {
        label: "Mobile Responsiveness",
        artifact: ArtifactKind::EntryUi,
        predicate: uses_dynamic_grids,
        pass_detail: Some("Dynamic grids detected"),
        negative_detail: "Hardcoded grids detected",
        failure_mode: FailureMode::Fail,
    },
];
