use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::cert::model::Certificate;
use crate::rules::rule::{Rule, Source};
use crate::rules::status::{Outcome, Status};

/// One rule's outcome within a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleResult {
    pub name: String,
    pub citation: String,
    pub source: Source,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Per-certificate evaluation report.
///
/// Entries are sorted by rule name regardless of evaluation order.
/// `overall_severity` is the fold of `Status::max_severity` over all
/// entries; a report whose entries are all neutral or `Pass` reports
/// `Pass`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub results: Vec<RuleResult>,
    pub overall_severity: Status,
}

impl Report {
    /// Keyed access by rule name. Names are unique by the registry
    /// invariant.
    pub fn get(&self, name: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// CI exit code derived from the overall severity. Neutral
    /// severities map to success.
    pub fn exit_code(&self) -> i32 {
        match self.overall_severity {
            Status::Warn => 1,
            Status::Error => 2,
            Status::Fatal => 3,
            _ => 0,
        }
    }
}

/// Accumulates per-rule outcomes during one evaluation.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    results: Vec<RuleResult>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, rule: &Rule, outcome: Outcome) {
        self.results.push(RuleResult {
            name: rule.name.to_string(),
            citation: rule.citation.to_string(),
            source: rule.source,
            status: outcome.status,
            details: outcome.details,
        });
    }

    /// Sort entries by rule name and derive the overall severity.
    pub fn finish(mut self) -> Report {
        self.results.sort_by(|a, b| a.name.cmp(&b.name));

        let overall_severity = self
            .results
            .iter()
            .fold(Status::Pass, |acc, r| Status::max_severity(acc, r.status));

        Report {
            results: self.results,
            overall_severity,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// Certificate-document metadata bound to a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub path: Option<String>,
    pub size_bytes: u64,
    pub hash: DocumentHash,
}

/// Cryptographic document fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentHash {
    pub algorithm: String,
    pub value: String,
}

/// Rule catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogInfo {
    pub catalog_version: String,
    pub ruleset: String,
}

/// Identifying fields of the evaluated certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateSummary {
    pub subject: String,
    pub issuer: String,
    pub serial_number: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

impl CertificateSummary {
    pub fn of(cert: &Certificate) -> Self {
        Self {
            subject: cert.subject.to_string(),
            issuer: cert.issuer.to_string(),
            serial_number: cert.serial_number.clone(),
            not_before: cert.not_before,
            not_after: cert.not_after,
        }
    }
}

/// Top-level report document handed to the presentation layer.
///
/// This is the stable JSON contract. It must remain deterministic for
/// identical input documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub document: DocumentInfo,
    pub catalog: CatalogInfo,
    pub certificate: CertificateSummary,
    pub report: Report,
}

impl ReportDocument {
    pub fn new(
        tool: ToolInfo,
        document: DocumentInfo,
        catalog: CatalogInfo,
        cert: &Certificate,
        report: Report,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            document,
            catalog,
            certificate: CertificateSummary::of(cert),
            report,
        }
    }
}
