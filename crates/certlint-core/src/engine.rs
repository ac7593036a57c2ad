//! Rule execution engine.
//!
//! This module drives a frozen catalog against one certificate and
//! turns per-rule outcomes into a report.
//!
//! Responsibilities:
//! - Apply the effective-date gate before anything else
//! - Apply the applicability gate before the rule body runs
//! - Contain rule-body failures inside a per-invocation boundary
//! - Hand every outcome to the report aggregator
//!
//! Non-responsibilities:
//! - Building or freezing the registry (handled in `catalog`)
//! - Deciding rule severity (rules report it via their outcome)
//! - Serializing reports
//!
//! The gate policy is fixed and order is semantic:
//!
//!   1. effective date after the certificate's `not_before` → NE
//!   2. `check_applies` false                               → NA
//!   3. `execute`, with any panic contained as `fatal`
//!
//! Rules never observe each other's outcomes, so evaluation order
//! cannot affect per-rule results. Report ordering is name-sorted by
//! the aggregator either way.

use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use crate::cert::model::Certificate;
use crate::report::model::{Report, ReportBuilder};
use crate::rules::registry::{Registry, RuleFilter};
use crate::rules::rule::Rule;
use crate::rules::status::Outcome;

/// Evaluate one rule against one certificate.
pub fn run_rule(rule: &Rule, cert: &Certificate) -> Outcome {
    if let Some(effective) = rule.effective_date {
        if effective > cert.not_before {
            return Outcome::not_effective();
        }
    }

    if !rule.check.check_applies(cert) {
        return Outcome::not_applicable();
    }

    match panic::catch_unwind(AssertUnwindSafe(|| rule.check.execute(cert))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(rule = rule.name, %message, "rule execution panicked");
            Outcome::fatal(message)
        }
    }
}

/// Evaluate the entire frozen catalog against a certificate.
pub fn evaluate(registry: &Registry, cert: &Certificate) -> Report {
    evaluate_rules(registry.rules(), cert)
}

/// Evaluate only the rules selected by `filter`.
pub fn evaluate_filtered(registry: &Registry, filter: &RuleFilter, cert: &Certificate) -> Report {
    evaluate_rules(registry.filter(filter).into_iter(), cert)
}

fn evaluate_rules<'a>(rules: impl Iterator<Item = &'a Rule>, cert: &Certificate) -> Report {
    let mut builder = ReportBuilder::new();
    for rule in rules {
        builder.record(rule, run_rule(rule, cert));
    }
    builder.finish()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "rule execution panicked".to_string()
    }
}
