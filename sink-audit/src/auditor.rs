use crate::audit::{audit, AuditFinding};
use crate::destination::parse_destination;
use crate::dispatch::fetch_policy;
use crate::error::Error;
use crate::provider::{PolicyProviders, SinkInfo, SinkLookup};
use crate::resolver::resolve;

/// Outcome of auditing one sink.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub writer_identity: String,
    pub destination: String,
    pub findings: Vec<AuditFinding>,
}

/// Runs resolve, parse, fetch and audit for a single sink.
pub struct SinkAuditor<L, P> {
    lookup: L,
    providers: P,
}

impl<L, P> SinkAuditor<L, P>
where
    L: SinkLookup,
    P: PolicyProviders,
{
    pub fn new(lookup: L, providers: P) -> Self {
        Self { lookup, providers }
    }

    /// Looks up the sink's writer identity and destination.
    pub async fn resolve_sink(&self, sink_name: &str, project_id: &str) -> Result<SinkInfo, Error> {
        let sink = resolve(&self.lookup, sink_name, project_id).await?;
        tracing::info!(
            writer_identity = sink.writer_identity.as_str(),
            destination = sink.destination.as_str(),
            "resolved sink {sink_name}"
        );
        if sink.writer_identity.is_empty() {
            tracing::warn!("sink {sink_name} has no writer identity");
        }
        Ok(sink)
    }

    /// Parses the destination of a resolved sink, fetches its policy and audits it.
    /// `project_id` is the fallback when the destination names no project.
    pub async fn audit_resolved(&self, sink: &SinkInfo, project_id: &str) -> Result<Vec<AuditFinding>, Error> {
        let destination = parse_destination(&sink.destination)?;
        let policy = fetch_policy(&self.providers, &destination, project_id).await?;
        tracing::debug!("fetched {} role bindings", policy.len());

        let findings = audit(&policy, &sink.writer_identity, &destination.kind);
        tracing::info!("{} bindings include the writer identity", findings.len());
        Ok(findings)
    }

    pub async fn audit_sink(&self, sink_name: &str, project_id: &str) -> Result<AuditReport, Error> {
        let sink = self.resolve_sink(sink_name, project_id).await?;
        let findings = self.audit_resolved(&sink, project_id).await?;
        Ok(AuditReport {
            writer_identity: sink.writer_identity,
            destination: sink.destination,
            findings,
        })
    }
}
