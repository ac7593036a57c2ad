//! Dotted-decimal identifiers for the X.509 extensions the rule
//! catalog inspects.

/// id-ce-keyUsage (RFC 5280 4.2.1.3).
pub const KEY_USAGE: &str = "2.5.29.15";

/// id-ce-issuerAltName (RFC 5280 4.2.1.7).
pub const ISSUER_ALT_NAME: &str = "2.5.29.18";

/// id-ce-basicConstraints (RFC 5280 4.2.1.9).
pub const BASIC_CONSTRAINTS: &str = "2.5.29.19";

/// id-ce-cRLDistributionPoints (RFC 5280 4.2.1.13).
pub const CRL_DISTRIBUTION_POINTS: &str = "2.5.29.31";

/// id-ce-certificatePolicies (RFC 5280 4.2.1.4).
pub const CERTIFICATE_POLICIES: &str = "2.5.29.32";

/// id-ce-inhibitAnyPolicy (RFC 5280 4.2.1.14).
pub const INHIBIT_ANY_POLICY: &str = "2.5.29.54";
