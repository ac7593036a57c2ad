use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distinguished-name attributes the rule catalog reads.
///
/// Multi-valued attributes keep the order in which they appeared in
/// the certificate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistinguishedName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organization: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organizational_unit: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country: Vec<String>,
}

impl std::fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(cn) = &self.common_name {
            parts.push(format!("CN={cn}"));
        }
        for org in &self.organization {
            parts.push(format!("O={org}"));
        }
        for unit in &self.organizational_unit {
            parts.push(format!("OU={unit}"));
        }
        for country in &self.country {
            parts.push(format!("C={country}"));
        }
        f.write_str(&parts.join(", "))
    }
}

/// One X.509 extension, keyed by dotted-decimal OID.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Extension {
    pub oid: String,
    #[serde(default)]
    pub critical: bool,
    /// Raw DER-encoded extension value as handed over by the parser.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<u8>,
}

/// Parsed certificate view handed over by the parsing collaborator.
///
/// The engine and all rule bodies treat this structure as read-only.
/// Decoded views (distinguished names, distribution point URIs,
/// alternative names) are precomputed by the parser so that rule
/// bodies never touch DER themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Certificate {
    pub subject: DistinguishedName,
    pub issuer: DistinguishedName,
    #[serde(default)]
    pub serial_number: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    #[serde(default)]
    pub is_ca: bool,
    #[serde(default)]
    pub self_signed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Extension>,
    /// Full distribution point names from the CRLDistributionPoints
    /// extension, in certificate order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crl_distribution_points: Vec<String>,
    /// DNS names carried in the IssuerAltName extension.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issuer_alternative_dns_names: Vec<String>,
}

impl Certificate {
    /// Look up an extension by dotted-decimal OID.
    pub fn extension(&self, oid: &str) -> Option<&Extension> {
        self.extensions.iter().find(|ext| ext.oid == oid)
    }

    pub fn has_extension(&self, oid: &str) -> bool {
        self.extension(oid).is_some()
    }

    /// True when the extension is present and flagged critical.
    pub fn extension_is_critical(&self, oid: &str) -> bool {
        self.extension(oid).is_some_and(|ext| ext.critical)
    }

    /// Self-issued certificate authority.
    pub fn is_root_ca(&self) -> bool {
        self.is_ca && self.self_signed
    }

    /// Certificate authority issued by a different authority.
    pub fn is_subordinate_ca(&self) -> bool {
        self.is_ca && !self.self_signed
    }

    /// End-entity certificate.
    pub fn is_subscriber(&self) -> bool {
        !self.is_ca
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ca_cert(self_signed: bool) -> Certificate {
        Certificate {
            subject: DistinguishedName {
                common_name: Some("Example Issuing CA".into()),
                organization: vec!["Example Trust Services".into()],
                country: vec!["US".into()],
                ..Default::default()
            },
            not_before: Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap(),
            not_after: Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap(),
            is_ca: true,
            self_signed,
            extensions: vec![Extension {
                oid: "2.5.29.15".into(),
                critical: true,
                value: vec![0x03, 0x02, 0x01, 0x06],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn extension_lookup_by_oid() {
        let cert = ca_cert(true);

        assert!(cert.has_extension("2.5.29.15"));
        assert!(cert.extension_is_critical("2.5.29.15"));
        assert!(!cert.has_extension("2.5.29.32"));
        assert!(!cert.extension_is_critical("2.5.29.32"));
    }

    #[test]
    fn certificate_class_predicates() {
        let root = ca_cert(true);
        assert!(root.is_root_ca());
        assert!(!root.is_subordinate_ca());
        assert!(!root.is_subscriber());

        let sub = ca_cert(false);
        assert!(!sub.is_root_ca());
        assert!(sub.is_subordinate_ca());

        let leaf = Certificate {
            is_ca: false,
            ..Default::default()
        };
        assert!(leaf.is_subscriber());
        assert!(!leaf.is_root_ca());
    }

    #[test]
    fn distinguished_name_renders_in_attribute_order() {
        let dn = DistinguishedName {
            common_name: Some("Example Root".into()),
            organization: vec!["Example Trust Services".into()],
            country: vec!["US".into()],
            ..Default::default()
        };

        assert_eq!(
            dn.to_string(),
            "CN=Example Root, O=Example Trust Services, C=US"
        );
    }

    #[test]
    fn deserializes_parser_documents() {
        let doc = serde_json::json!({
            "subject": {
                "common_name": "example.com",
                "organization": ["Example Org"]
            },
            "issuer": {
                "common_name": "Example Issuing CA"
            },
            "serial_number": "04:2f:91",
            "not_before": "2021-03-15T00:00:00Z",
            "not_after": "2022-03-15T00:00:00Z",
            "is_ca": false,
            "extensions": [
                { "oid": "2.5.29.31", "critical": false }
            ],
            "crl_distribution_points": ["http://crl.example.com/ca.crl"]
        });

        let cert: Certificate = serde_json::from_value(doc).unwrap();

        assert_eq!(cert.subject.common_name.as_deref(), Some("example.com"));
        assert_eq!(
            cert.not_before,
            Utc.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap()
        );
        assert!(cert.has_extension("2.5.29.31"));
        assert!(cert.is_subscriber());
        assert!(cert.issuer_alternative_dns_names.is_empty());
    }
}
