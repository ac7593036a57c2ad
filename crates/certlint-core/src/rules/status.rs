use serde::{Deserialize, Serialize};

/// Evaluation status of a single rule against a single certificate.
///
/// Variant order is semantic: severity increases from `Pass` through
/// `Fatal`. `NotApplicable` and `NotEffective` are produced by the
/// engine's gates, never by a rule body, and carry no severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The certificate is outside the rule's applicability scope.
    #[serde(rename = "NA")]
    NotApplicable,
    /// The certificate predates the rule's effective date.
    #[serde(rename = "NE")]
    NotEffective,
    /// The certificate satisfies the requirement.
    #[serde(rename = "pass")]
    Pass,
    /// Advisory deviation from the requirement.
    #[serde(rename = "warn")]
    Warn,
    /// Violation of the requirement.
    #[serde(rename = "error")]
    Error,
    /// The rule could not complete its check at all.
    #[serde(rename = "fatal")]
    Fatal,
}

impl Status {
    /// True for the gate statuses that never contribute severity.
    pub fn is_neutral(self) -> bool {
        matches!(self, Status::NotApplicable | Status::NotEffective)
    }

    /// Combine two statuses into the more severe one.
    ///
    /// Neutral statuses never outrank a concrete result: if exactly one
    /// side is neutral the other side wins, and if both are neutral the
    /// first operand is kept.
    pub fn max_severity(a: Status, b: Status) -> Status {
        match (a.is_neutral(), b.is_neutral()) {
            (false, false) => a.max(b),
            (true, false) => b,
            _ => a,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::NotApplicable => "NA",
            Status::NotEffective => "NE",
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Error => "error",
            Status::Fatal => "fatal",
        };
        f.write_str(label)
    }
}

/// Result produced by one rule execution.
///
/// `details` is optional context for humans reading the report. It is
/// mandatory only for `Fatal`, where the rule must say what it could
/// not read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Outcome {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            details: None,
        }
    }

    pub fn with_details(status: Status, details: impl Into<String>) -> Self {
        Self {
            status,
            details: Some(details.into()),
        }
    }

    pub fn pass() -> Self {
        Self::new(Status::Pass)
    }

    pub fn warn() -> Self {
        Self::new(Status::Warn)
    }

    pub fn error() -> Self {
        Self::new(Status::Error)
    }

    pub fn fatal(details: impl Into<String>) -> Self {
        Self::with_details(Status::Fatal, details)
    }

    pub fn not_applicable() -> Self {
        Self::new(Status::NotApplicable)
    }

    pub fn not_effective() -> Self {
        Self::new(Status::NotEffective)
    }
}
