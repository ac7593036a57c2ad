use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use certlint_core::rules::registry::RuleFilter;
use certlint_core::rules::rule::Source;

#[derive(Debug, Parser)]
#[command(
    name = "certlint",
    version,
    about = "Compliance linting for X.509 certificates against RFC 5280 and the CA/Browser Forum Baseline Requirements"
)]
pub struct Args {
    /// Path to the certificate document (JSON)
    pub cert_path: PathBuf,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,

    /// Only run rules drawn from this requirement source
    #[arg(long)]
    pub source: Option<SourceArg>,

    /// Only run rules whose name starts with this prefix
    #[arg(long)]
    pub name_prefix: Option<String>,
}

impl Args {
    /// Catalog selection derived from the command line.
    pub fn rule_filter(&self) -> RuleFilter {
        RuleFilter {
            source: self.source.map(Source::from),
            name_prefix: self.name_prefix.clone(),
            effective_on: None,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceArg {
    #[value(name = "RFC5280")]
    Rfc5280,
    #[value(name = "CABF-BR")]
    CabfBr,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Rfc5280 => Source::Rfc5280,
            SourceArg::CabfBr => Source::CabfBaselineRequirements,
        }
    }
}
