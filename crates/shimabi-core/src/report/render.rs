use crate::report::model::{AuditReport, Report};

/// Contract output of a verification: nothing on success, the failing
/// fact's name on a single line otherwise.
pub fn render_text(report: &Report) -> String {
    match &report.outcome.failure {
        Some(failure) => format!("{}\n", failure.fact_name),
        None => String::new(),
    }
}

/// One line per evaluated fact, for `--verbose` diagnostics on stderr.
pub fn render_trace(report: &Report) -> String {
    let mut out = format!(
        "{} {}: {} profile on {}-{} ({} facts)\n",
        report.tool.name,
        report.tool.version,
        report.profile,
        report.target.arch,
        report.target.os,
        report.facts_total
    );
    for fact in &report.evaluated {
        if fact.passed {
            out.push_str(&format!("  ok    {} = {}\n", fact.name, fact.actual));
        } else {
            out.push_str(&format!(
                "  FAIL  {}: expected {}, found {}\n",
                fact.name, fact.expected, fact.actual
            ));
        }
    }
    out.push_str(&format!(
        "{} ({}/{} checked)\n",
        report.outcome.status,
        report.evaluated.len(),
        report.facts_total
    ));
    out
}

/// One line per audit finding. A module that links only to implemented
/// functions renders as nothing.
pub fn render_audit_text(report: &AuditReport) -> String {
    let mut out = String::new();
    if !report.analysis.is_ok() {
        for warning in &report.analysis.warnings {
            out.push_str(&format!("{}: {}\n", report.analysis.status, warning));
        }
    }
    for import in &report.findings.unsupported_imports {
        out.push_str(&format!(
            "unsupported import: {}.{} ({})\n",
            import.module, import.name, import.kind
        ));
    }
    for import in &report.findings.stubbed_imports {
        out.push_str(&format!(
            "stubbed import: {}.{} ({})\n",
            import.module, import.name, import.kind
        ));
    }
    for export in &report.findings.missing_exports {
        out.push_str(&format!("missing export: {export}\n"));
    }
    out
}
