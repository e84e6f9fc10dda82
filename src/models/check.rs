use std::fmt;

use crate::models::artifact::ArtifactKind;
use crate::models::verdict::Verdict;

/// How a check reports its negative condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Deployment blocker
    Fail,
    /// Compatibility nicety, reported but not blocking
    Warn,
}

/// A single readiness rule: a predicate over one artifact's text
pub struct Check {
    pub label: &'static str,
    pub artifact: ArtifactKind,
    pub predicate: fn(&str) -> bool,
    pub pass_detail: Option<&'static str>,
    pub negative_detail: &'static str,
    pub failure_mode: FailureMode,
}

impl Check {
    /// Evaluate the predicate against loaded artifact text
    pub fn evaluate(&self, content: &str) -> CheckOutcome {
        if (self.predicate)(content) {
            CheckOutcome {
                label: self.label,
                verdict: Verdict::Pass,
                detail: self.pass_detail.map(str::to_string),
            }
        } else {
            let verdict = match self.failure_mode {
                FailureMode::Fail => Verdict::Fail,
                FailureMode::Warn => Verdict::Warn,
            };
            CheckOutcome {
                label: self.label,
                verdict,
                detail: Some(self.negative_detail.to_string()),
            }
        }
    }

    /// Outcome for a check whose artifact could not be read
    pub fn unreadable(&self) -> CheckOutcome {
        CheckOutcome {
            label: self.label,
            verdict: Verdict::Fail,
            detail: Some(format!("cannot read {}", self.artifact.relative_path())),
        }
    }
}

/// One evaluated check: exactly one report line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub label: &'static str,
    pub verdict: Verdict,
    pub detail: Option<String>,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.verdict.glyph(), self.label, self.verdict)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}
