use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cert::model::Certificate;
use crate::rules::status::Outcome;

/// Requirement document a rule is drawn from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    #[serde(rename = "RFC5280")]
    Rfc5280,
    #[serde(rename = "CABF_BR")]
    CabfBaselineRequirements,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Source::Rfc5280 => "RFC5280",
            Source::CabfBaselineRequirements => "CABF_BR",
        };
        f.write_str(label)
    }
}

/// Capability contract every catalog entry implements.
///
/// Both methods are pure functions of the certificate. They may be
/// called concurrently from evaluations running on different threads,
/// so implementations carry no mutable state. Any configuration a
/// check needs is built by its constructor and closed over in the
/// returned value.
pub trait RuleCheck: Send + Sync {
    /// Whether the rule is relevant to this certificate at all.
    ///
    /// Pure predicate. The engine calls it only after the
    /// effective-date gate passed.
    fn check_applies(&self, cert: &Certificate) -> bool;

    /// Evaluate the requirement against the certificate.
    ///
    /// Called only when `check_applies` returned true.
    fn execute(&self, cert: &Certificate) -> Outcome;
}

/// One-time constructor for a rule's check, invoked at registration.
pub type RuleInit = fn() -> Result<Box<dyn RuleCheck>, InitError>;

/// Catalog entry as authored by a rule module.
///
/// `name` carries a conventional severity prefix (`e_`, `w_`) that is
/// documentation only. The authoritative severity of a finding is the
/// `Status` the check returns.
pub struct RuleDef {
    pub name: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub source: Source,
    /// Certificates issued before this date predate the requirement
    /// and report `NotEffective`. `None` disables the date gate.
    pub effective_date: Option<DateTime<Utc>>,
    pub init: RuleInit,
}

/// A registered rule: immutable metadata plus the initialized check.
pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    pub citation: &'static str,
    pub source: Source,
    pub effective_date: Option<DateTime<Utc>>,
    pub(crate) check: Box<dyn RuleCheck>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("citation", &self.citation)
            .field("source", &self.source)
            .field("effective_date", &self.effective_date)
            .finish_non_exhaustive()
    }
}

/// A rule constructor could not produce a working check.
///
/// The registry drops such a rule from the active catalog and keeps
/// registering the rest.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("invalid rule configuration: {0}")]
    InvalidConfiguration(String),
}
