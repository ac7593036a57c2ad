use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use certlint_core::evaluate_document;
use certlint_core::report::{model::ToolInfo, render};

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();

    // Diagnostics go to stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let doc = evaluate_document(&args.cert_path, tool, &args.rule_filter())?;

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&doc)?,
        args::OutputFormat::Text => render::render_text(&doc),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    std::process::exit(doc.report.exit_code());
}
