//! The built-in rule catalog.
//!
//! Each submodule covers one requirement document and exposes a
//! `register` function that adds its rules to an explicit registry
//! instance. Nothing here registers itself; callers decide which
//! catalog modules a registry carries.

pub mod cabf_br;
pub mod rfc5280;

use crate::rules::registry::{Registry, RegistryError};

/// Build and freeze a registry holding the full built-in catalog.
pub fn default_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    rfc5280::register(&mut registry)?;
    cabf_br::register(&mut registry)?;
    registry.freeze();
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_frozen_and_complete() {
        let registry = default_registry().unwrap();

        assert!(registry.is_frozen());
        assert!(registry.dropped().is_empty());

        let names: Vec<&str> = registry.rules().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "e_ca_organization_name_missing",
                "e_ext_ian_dns_not_ia5_string",
                "e_inhibit_any_policy_not_critical",
                "e_root_ca_key_usage_present",
                "e_sub_ca_certificate_policies_missing",
                "w_distribution_point_missing_ldap_or_uri",
            ]
        );
    }

    #[test]
    fn catalog_names_resolve_through_lookup() {
        let registry = default_registry().unwrap();

        let rule = registry.lookup("e_inhibit_any_policy_not_critical").unwrap();
        assert_eq!(rule.citation, "RFC 5280: 4.2.1.14");
    }
}
