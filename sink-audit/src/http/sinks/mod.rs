pub mod get;

/// Describes a sink used to export log entries to one of the supported destinations.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogSink {
    /// The client-assigned sink identifier, unique within the project.
    pub name: String,
    /// The export destination, for example
    /// `storage.googleapis.com/[GCS_BUCKET]`,
    /// `bigquery.googleapis.com/projects/[PROJECT_ID]/datasets/[DATASET]` or
    /// `pubsub.googleapis.com/projects/[PROJECT_ID]/topics/[TOPIC_ID]`.
    pub destination: String,
    /// An advanced logs filter. Empty exports every log entry.
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub disabled: bool,
    /// Output only. The service account Cloud Logging uses to write to the destination.
    /// Absent until the sink has been granted a unique identity.
    #[serde(default)]
    pub writer_identity: String,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}
