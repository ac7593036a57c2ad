use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

use crate::rules::rule::{InitError, Rule, RuleDef, Source};

/// Registration-phase failures.
///
/// Both variants indicate a catalog-authoring bug and are fatal to
/// startup, unlike a failed rule constructor which only drops the one
/// rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("rule `{0}` is already registered")]
    DuplicateName(String),
    #[error("registry is frozen, cannot register `{0}`")]
    Frozen(String),
}

/// A rule excluded from the active catalog by a failed constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRule {
    pub name: &'static str,
    pub reason: InitError,
}

/// Catalog selection criteria. All set criteria must match; the
/// default filter selects every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFilter {
    pub source: Option<Source>,
    pub name_prefix: Option<String>,
    /// Keep only rules already effective for certificates issued at
    /// this instant. Rules without a date gate always match.
    pub effective_on: Option<DateTime<Utc>>,
}

impl RuleFilter {
    pub fn matches(&self, rule: &Rule) -> bool {
        if self.source.is_some_and(|source| rule.source != source) {
            return false;
        }
        if let Some(prefix) = &self.name_prefix {
            if !rule.name.starts_with(prefix.as_str()) {
                return false;
            }
        }
        if let (Some(at), Some(effective)) = (self.effective_on, rule.effective_date) {
            if effective > at {
                return false;
            }
        }
        true
    }
}

/// Name-keyed rule catalog with a single build-then-freeze lifecycle.
///
/// Populated explicitly during startup by passing the instance to each
/// catalog module's registration function, then frozen. After freeze
/// the set of names and metadata never changes, so the registry can be
/// shared by reference across concurrent evaluations without locking.
#[derive(Debug, Default)]
pub struct Registry {
    rules: BTreeMap<&'static str, Rule>,
    dropped: Vec<DroppedRule>,
    frozen: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one rule, running its constructor.
    ///
    /// A failing constructor is not a registration error: the rule is
    /// recorded as dropped, the failure is logged, and registration of
    /// the remaining catalog continues.
    pub fn register(&mut self, def: RuleDef) -> Result<(), RegistryError> {
        if self.frozen {
            return Err(RegistryError::Frozen(def.name.to_string()));
        }
        if self.rules.contains_key(def.name) {
            return Err(RegistryError::DuplicateName(def.name.to_string()));
        }

        match (def.init)() {
            Ok(check) => {
                self.rules.insert(
                    def.name,
                    Rule {
                        name: def.name,
                        description: def.description,
                        citation: def.citation,
                        source: def.source,
                        effective_date: def.effective_date,
                        check,
                    },
                );
                Ok(())
            }
            Err(reason) => {
                warn!(rule = def.name, %reason, "rule constructor failed, dropping from catalog");
                self.dropped.push(DroppedRule {
                    name: def.name,
                    reason,
                });
                Ok(())
            }
        }
    }

    /// Transition the catalog to read-only. Idempotent.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn lookup(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All active rules in name order, regardless of registration
    /// order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Rules matching the filter, in name order.
    pub fn filter(&self, filter: &RuleFilter) -> Vec<&Rule> {
        self.rules.values().filter(|r| filter.matches(r)).collect()
    }

    /// Rules excluded from the active catalog by failed constructors.
    pub fn dropped(&self) -> &[DroppedRule] {
        &self.dropped
    }
}
