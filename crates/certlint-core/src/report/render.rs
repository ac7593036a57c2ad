use crate::report::model::ReportDocument;

pub fn render_text(doc: &ReportDocument) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", doc.tool.name, doc.tool.version));
    out.push_str(&format!("Subject: {}\n", doc.certificate.subject));
    out.push_str(&format!(
        "Validity: {} to {}\n",
        doc.certificate.not_before.format("%Y-%m-%d"),
        doc.certificate.not_after.format("%Y-%m-%d"),
    ));
    out.push_str(&format!(
        "Overall severity: {}\n",
        doc.report.overall_severity
    ));
    out.push_str("Results:\n");
    for r in &doc.report.results {
        match &r.details {
            Some(details) => out.push_str(&format!(
                "  - {} [{}] {} ({})\n",
                r.name, r.status, r.citation, details
            )),
            None => out.push_str(&format!("  - {} [{}] {}\n", r.name, r.status, r.citation)),
        }
    }
    out
}
