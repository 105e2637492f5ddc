//! # gcloud-sink-audit
//!
//! Audits the IAM grants held by a Cloud Logging sink's writer identity on the sink's
//! destination: a Cloud Storage bucket, a BigQuery dataset or a Pub/Sub topic.
//!
//! The audit runs as a single pipeline:
//!
//! 1. [`resolver::resolve`] looks up the sink's writer identity and destination.
//! 2. [`destination::parse_destination`] splits the destination into type, resource and project.
//! 3. [`dispatch::fetch_policy`] fetches the resource's IAM policy from the matching provider.
//! 4. [`audit::audit`] reports every role binding that includes the writer identity,
//!    annotated with the minimal role for the destination type.
//!
//! [`auditor::SinkAuditor`] composes the steps. Lookups and policy retrieval go through the
//! traits in [`provider`]; [`client::Client`] implements them against the Google Cloud JSON APIs.
//!
//! ## Quick Start
//!
//! ```
//! use gcloud_sink_audit::auditor::SinkAuditor;
//! use gcloud_sink_audit::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//!     let auditor = SinkAuditor::new(client.clone(), client);
//!     let report = auditor.audit_sink("my-sink", "my-project").await.unwrap();
//!     for finding in &report.findings {
//!         println!("{finding}");
//!     }
//! }
//! ```
//!
//! ### Authentication
//!
//! `with_auth()` reads the credentials from the file named by `GOOGLE_APPLICATION_CREDENTIALS`,
//! from `GOOGLE_APPLICATION_CREDENTIALS_JSON`, or from the metadata server.
pub mod audit;
pub mod auditor;
pub mod cli;
pub mod client;
pub mod credentials;
pub mod destination;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod policy;
pub mod provider;
pub mod report;
pub mod resolver;
