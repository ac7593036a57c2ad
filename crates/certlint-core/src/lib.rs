pub mod catalog;
pub mod cert;
pub mod engine;
pub mod report;
pub mod rules;

use std::path::Path;

use anyhow::{Context, Result};

use crate::report::model::{CatalogInfo, ReportDocument, ToolInfo};
use crate::rules::registry::RuleFilter;

pub const TOOL_NAME: &str = "certlint";

/// JSON schema version of certlint report documents.
/// This must be bumped only when the document shape changes
/// semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

pub const RULE_CATALOG_VERSION: &str = "0.1.0";

/// Evaluate one certificate document against the built-in catalog.
///
/// Reads and fingerprints the document, deserializes the certificate
/// it carries, builds the default registry, and evaluates the rules
/// selected by `filter`. An unreadable or undecodable document fails
/// the call outright; per-rule failures are contained in the returned
/// report.
pub fn evaluate_document(
    path: &Path,
    tool: ToolInfo,
    filter: &RuleFilter,
) -> Result<ReportDocument> {
    let ctx = cert::read::read_document(path)?;
    let certificate = ctx.parse_certificate()?;

    let registry = catalog::default_registry().context("failed to build rule catalog")?;
    let report = engine::evaluate_filtered(&registry, filter, &certificate);

    let ruleset = if *filter == RuleFilter::default() {
        "default"
    } else {
        "filtered"
    };

    Ok(ReportDocument::new(
        tool,
        ctx.into_document(),
        CatalogInfo {
            catalog_version: RULE_CATALOG_VERSION.to_string(),
            ruleset: ruleset.to_string(),
        },
        &certificate,
        report,
    ))
}
