use std::future::Future;
use std::io::Write;

use clap::{Parser, ValueEnum};

use crate::auditor::SinkAuditor;
use crate::client::{Client, ClientConfig};
use crate::credentials::check_credentials;
use crate::error::Error;
use crate::provider::{PolicyProviders, SinkLookup};
use crate::report;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Audit IAM policies of a logging sink's writer identity.
#[derive(Parser, Debug)]
#[command(name = "gcloud-sink-audit", version)]
pub struct Cli {
    /// Name of the logging sink
    #[arg(long = "sink_name", alias = "sink-name")]
    pub sink_name: String,

    /// GCP project ID
    #[arg(long = "project_id", alias = "project-id")]
    pub project_id: String,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

impl Cli {
    /// Audits the sink against the Google Cloud APIs and writes the report to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        self.run_with(connect, out).await
    }

    /// Checks the credentials, builds the auditor with `connect` and writes the report to `out`.
    ///
    /// In text format the resolved sink is written before its destination policy is fetched,
    /// so a later failure still leaves the writer identity and destination in the output.
    pub async fn run_with<L, P, W, F, Fut>(&self, connect: F, out: &mut W) -> Result<(), Error>
    where
        L: SinkLookup,
        P: PolicyProviders,
        W: Write,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SinkAuditor<L, P>, Error>>,
    {
        check_credentials()?;
        let auditor = connect().await?;
        match self.format {
            Format::Text => {
                let sink = auditor.resolve_sink(&self.sink_name, &self.project_id).await?;
                report::write_sink(out, &sink)?;
                let findings = auditor.audit_resolved(&sink, &self.project_id).await?;
                report::write_findings(out, &findings)?;
            }
            Format::Json => {
                let report = auditor.audit_sink(&self.sink_name, &self.project_id).await?;
                report::write_json(out, &report)?;
            }
        }
        Ok(())
    }
}

async fn connect() -> Result<SinkAuditor<Client, Client>, Error> {
    #[cfg(feature = "auth")]
    let config = ClientConfig::default().with_auth().await?;
    #[cfg(not(feature = "auth"))]
    let config = ClientConfig::default();

    let client = Client::new(config);
    Ok(SinkAuditor::new(client.clone(), client))
}

/// Line printed to stderr when the run fails.
pub fn error_message(error: &Error) -> String {
    format!("Error ({}): {error}", error.stage())
}
