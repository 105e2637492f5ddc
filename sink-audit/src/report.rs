use std::io::Write;

use crate::audit::AuditFinding;
use crate::auditor::AuditReport;
use crate::provider::SinkInfo;

/// Writes the human readable report.
pub fn write_text<W: Write>(out: &mut W, report: &AuditReport) -> std::io::Result<()> {
    writeln!(out, "Writer Identity: {}", report.writer_identity)?;
    writeln!(out, "Destination: {}", report.destination)?;
    write_findings(out, &report.findings)
}

/// Writes the resolved sink, ahead of fetching its destination policy.
pub fn write_sink<W: Write>(out: &mut W, sink: &SinkInfo) -> std::io::Result<()> {
    writeln!(out, "Writer Identity: {}", sink.writer_identity)?;
    writeln!(out, "Destination: {}", sink.destination)
}

pub fn write_findings<W: Write>(out: &mut W, findings: &[AuditFinding]) -> std::io::Result<()> {
    if findings.is_empty() {
        writeln!(out, "\nNo excessive permissions found for the writer identity")?;
    } else {
        writeln!(out, "\nIAM Policy Audit Findings:")?;
        for finding in findings {
            writeln!(out, "- {finding}")?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &AuditReport) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
