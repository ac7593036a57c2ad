//! Checks drawn from the CA/Browser Forum Baseline Requirements.

use crate::cert::model::Certificate;
use crate::cert::oid;
use crate::rules::dates;
use crate::rules::registry::{Registry, RegistryError};
use crate::rules::rule::{RuleCheck, RuleDef, Source};
use crate::rules::status::Outcome;

/// Register every Baseline Requirements rule.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(ca_organization_name_missing())?;
    registry.register(root_ca_key_usage_present())?;
    registry.register(sub_ca_certificate_policies_missing())?;
    Ok(())
}

struct CaOrganizationNameMissing;

impl RuleCheck for CaOrganizationNameMissing {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_ca
    }

    fn execute(&self, cert: &Certificate) -> Outcome {
        match cert.subject.organization.first() {
            Some(name) if !name.is_empty() => Outcome::pass(),
            _ => Outcome::error(),
        }
    }
}

fn ca_organization_name_missing() -> RuleDef {
    RuleDef {
        name: "e_ca_organization_name_missing",
        description: "Root and subordinate CA certificates MUST have an organizationName present in subject information",
        citation: "BRs: 7.1.4.3.1",
        source: Source::CabfBaselineRequirements,
        effective_date: Some(dates::cabf_baseline_requirements()),
        init: || Ok(Box::new(CaOrganizationNameMissing)),
    }
}

struct RootCaKeyUsagePresent;

impl RuleCheck for RootCaKeyUsagePresent {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_root_ca()
    }

    fn execute(&self, cert: &Certificate) -> Outcome {
        if cert.has_extension(oid::KEY_USAGE) {
            Outcome::pass()
        } else {
            Outcome::error()
        }
    }
}

fn root_ca_key_usage_present() -> RuleDef {
    RuleDef {
        name: "e_root_ca_key_usage_present",
        description: "Root CA certificates MUST have Key Usage Extension Present",
        citation: "BRs: 7.1.2.1",
        source: Source::CabfBaselineRequirements,
        effective_date: Some(dates::rfc2459()),
        init: || Ok(Box::new(RootCaKeyUsagePresent)),
    }
}

struct SubCaCertificatePoliciesMissing;

impl RuleCheck for SubCaCertificatePoliciesMissing {
    fn check_applies(&self, cert: &Certificate) -> bool {
        cert.is_subordinate_ca()
    }

    fn execute(&self, cert: &Certificate) -> Outcome {
        if cert.has_extension(oid::CERTIFICATE_POLICIES) {
            Outcome::pass()
        } else {
            Outcome::error()
        }
    }
}

fn sub_ca_certificate_policies_missing() -> RuleDef {
    RuleDef {
        name: "e_sub_ca_certificate_policies_missing",
        description: "Subordinate CA certificates must have a certificatePolicies extension",
        citation: "BRs: 7.1.2.2",
        source: Source::CabfBaselineRequirements,
        effective_date: Some(dates::cabf_baseline_requirements()),
        init: || Ok(Box::new(SubCaCertificatePoliciesMissing)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cert::model::{DistinguishedName, Extension};
    use crate::rules::status::Status;

    fn ca_cert(self_signed: bool) -> Certificate {
        Certificate {
            is_ca: true,
            self_signed,
            ..Default::default()
        }
    }

    fn with_extension(mut cert: Certificate, oid: &str) -> Certificate {
        cert.extensions.push(Extension {
            oid: oid.into(),
            critical: false,
            value: vec![],
        });
        cert
    }

    #[test]
    fn organization_name_applies_to_any_ca() {
        let check = CaOrganizationNameMissing;
        assert!(check.check_applies(&ca_cert(true)));
        assert!(check.check_applies(&ca_cert(false)));
        assert!(!check.check_applies(&Certificate::default()));
    }

    #[test]
    fn missing_organization_name_is_an_error() {
        let check = CaOrganizationNameMissing;
        assert_eq!(check.execute(&ca_cert(true)).status, Status::Error);
    }

    #[test]
    fn empty_organization_name_is_an_error() {
        let check = CaOrganizationNameMissing;
        let mut cert = ca_cert(true);
        cert.subject = DistinguishedName {
            organization: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(check.execute(&cert).status, Status::Error);
    }

    #[test]
    fn populated_organization_name_passes() {
        let check = CaOrganizationNameMissing;
        let mut cert = ca_cert(false);
        cert.subject = DistinguishedName {
            organization: vec!["Example Trust Services".into()],
            ..Default::default()
        };
        assert_eq!(check.execute(&cert).status, Status::Pass);
    }

    #[test]
    fn root_key_usage_applies_to_self_signed_cas_only() {
        let check = RootCaKeyUsagePresent;
        assert!(check.check_applies(&ca_cert(true)));
        assert!(!check.check_applies(&ca_cert(false)));
        assert!(!check.check_applies(&Certificate::default()));
    }

    #[test]
    fn root_without_key_usage_is_an_error() {
        let check = RootCaKeyUsagePresent;
        assert_eq!(check.execute(&ca_cert(true)).status, Status::Error);

        let with_ku = with_extension(ca_cert(true), oid::KEY_USAGE);
        assert_eq!(check.execute(&with_ku).status, Status::Pass);
    }

    #[test]
    fn policies_rule_applies_to_subordinate_cas_only() {
        let check = SubCaCertificatePoliciesMissing;
        assert!(check.check_applies(&ca_cert(false)));
        assert!(!check.check_applies(&ca_cert(true)));
        assert!(!check.check_applies(&Certificate::default()));
    }

    #[test]
    fn subordinate_without_policies_is_an_error() {
        let check = SubCaCertificatePoliciesMissing;
        assert_eq!(check.execute(&ca_cert(false)).status, Status::Error);

        let with_policies = with_extension(ca_cert(false), oid::CERTIFICATE_POLICIES);
        assert_eq!(check.execute(&with_policies).status, Status::Pass);
    }
}
