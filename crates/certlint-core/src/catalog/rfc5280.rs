//! Checks drawn from RFC 5280 section 4.2 and its predecessors.

use crate::cert::model::Certificate;
use crate::cert::oid;
use crate::rules::dates;
use crate::rules::registry::{Registry, RegistryError};
use crate::rules::rule::{RuleCheck, RuleDef, Source};
use crate::rules::status::Outcome;

/// Register every RFC 5280 rule.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(distribution_point_missing_ldap_or_uri())?;
    registry.register(ext_ian_dns_not_ia5_string())?;
    registry.register(inhibit_any_policy_not_critical())?;
    Ok(())
}

struct DistributionPointMissingLdapOrUri;

impl RuleCheck for DistributionPointMissingLdapOrUri {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.has_extension(oid::CRL_DISTRIBUTION_POINTS)
    }

    fn execute(&self, cert: &Certificate) -> Outcome {
        let has_reachable_point = cert
            .crl_distribution_points
            .iter()
            .map(|point| point.to_lowercase())
            .any(|point| point.starts_with("http://") || point.starts_with("ldap://"));

        if has_reachable_point {
            Outcome::pass()
        } else {
            Outcome::warn()
        }
    }
}

fn distribution_point_missing_ldap_or_uri() -> RuleDef {
    RuleDef {
        name: "w_distribution_point_missing_ldap_or_uri",
        description: "When present in the CRLDistributionPoints extension, DistributionPointName SHOULD include at least one LDAP or HTTP URI",
        citation: "RFC 5280: 4.2.1.13",
        source: Source::Rfc5280,
        effective_date: Some(dates::rfc5280()),
        init: || Ok(Box::new(DistributionPointMissingLdapOrUri)),
    }
}

struct ExtIanDnsNotIa5String;

impl RuleCheck for ExtIanDnsNotIa5String {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.has_extension(oid::ISSUER_ALT_NAME)
    }

    fn execute(&self, cert: &Certificate) -> Outcome {
        if cert.extension(oid::ISSUER_ALT_NAME).is_none() {
            return Outcome::fatal("IssuerAltName extension unavailable");
        }

        // IA5String is the 128-character ASCII repertoire.
        let all_ia5 = cert
            .issuer_alternative_dns_names
            .iter()
            .all(|name| name.chars().all(|c| c.is_ascii()));

        if all_ia5 {
            Outcome::pass()
        } else {
            Outcome::error()
        }
    }
}

fn ext_ian_dns_not_ia5_string() -> RuleDef {
    RuleDef {
        name: "e_ext_ian_dns_not_ia5_string",
        description: "DNSNames MUST be IA5 strings",
        citation: "RFC 5280: 4.2.1.7",
        source: Source::Rfc5280,
        effective_date: Some(dates::rfc2459()),
        init: || Ok(Box::new(ExtIanDnsNotIa5String)),
    }
}

struct InhibitAnyPolicyNotCritical;

impl RuleCheck for InhibitAnyPolicyNotCritical {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.has_extension(oid::INHIBIT_ANY_POLICY)
    }

    fn execute(&self, cert: &Certificate) -> Outcome {
        if cert.extension_is_critical(oid::INHIBIT_ANY_POLICY) {
            Outcome::pass()
        } else {
            Outcome::error()
        }
    }
}

fn inhibit_any_policy_not_critical() -> RuleDef {
    RuleDef {
        name: "e_inhibit_any_policy_not_critical",
        description: "CAs MUST mark the inhibitAnyPolicy extension as critical",
        citation: "RFC 5280: 4.2.1.14",
        source: Source::Rfc5280,
        effective_date: Some(dates::rfc3280()),
        init: || Ok(Box::new(InhibitAnyPolicyNotCritical)),
    }
}
