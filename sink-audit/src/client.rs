use std::sync::Arc;

use async_trait::async_trait;
use token_source::TokenSourceProvider;

use crate::http::api_client::ApiClient;
use crate::http::bigquery_client::BigqueryDatasetClient;
use crate::http::buckets::get_iam_policy::GetIamPolicyRequest as GetBucketIamPolicyRequest;
use crate::http::logging_client::LoggingClient;
use crate::http::pubsub_client::PubsubTopicClient;
use crate::http::storage_client::StorageClient;
use crate::http::topics::get_iam_policy::GetIamPolicyRequest as GetTopicIamPolicyRequest;
use crate::policy::{RoleBindings, RoleMembers};
use crate::provider::{
    DatasetPolicyProvider, ProviderError, SinkInfo, SinkLookup, StoragePolicyProvider, TopicPolicyProvider,
};

/// Highest policy version; required to see conditional bindings.
const REQUESTED_POLICY_VERSION: i32 = 3;

#[derive(Debug)]
pub struct ClientConfig {
    pub http: Option<reqwest_middleware::ClientWithMiddleware>,
    pub logging_endpoint: String,
    pub storage_endpoint: String,
    pub bigquery_endpoint: String,
    pub pubsub_endpoint: String,
    /// `None` sends requests without an `Authorization` header.
    pub token_source_provider: Option<Box<dyn TokenSourceProvider>>,
    pub project_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http: None,
            logging_endpoint: "https://logging.googleapis.com".to_string(),
            storage_endpoint: "https://storage.googleapis.com".to_string(),
            bigquery_endpoint: "https://bigquery.googleapis.com".to_string(),
            pubsub_endpoint: "https://pubsub.googleapis.com".to_string(),
            token_source_provider: None,
            project_id: None,
        }
    }
}

impl ClientConfig {
    pub fn anonymous(mut self) -> Self {
        self.token_source_provider = None;
        self
    }
}

#[cfg(feature = "auth")]
pub use google_cloud_auth;

#[cfg(feature = "auth")]
impl ClientConfig {
    pub async fn with_auth(self) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new(Self::auth_config()).await?;
        Ok(self.with_token_source(ts))
    }

    pub async fn with_credentials(
        self,
        credentials: google_cloud_auth::credentials::CredentialsFile,
    ) -> Result<Self, google_cloud_auth::error::Error> {
        let ts = google_cloud_auth::token::DefaultTokenSourceProvider::new_with_credentials(
            Self::auth_config(),
            Box::new(credentials),
        )
        .await?;
        Ok(self.with_token_source(ts))
    }

    fn with_token_source(mut self, ts: google_cloud_auth::token::DefaultTokenSourceProvider) -> Self {
        self.project_id = ts.project_id.clone();
        self.token_source_provider = Some(Box::new(ts));
        self
    }

    fn auth_config() -> google_cloud_auth::project::Config<'static> {
        google_cloud_auth::project::Config::default().with_scopes(&crate::http::api_client::SCOPES)
    }
}

/// Talks to Cloud Logging, Cloud Storage, BigQuery and Pub/Sub on behalf of the auditor.
#[derive(Clone)]
pub struct Client {
    logging_client: LoggingClient,
    storage_client: StorageClient,
    dataset_client: BigqueryDatasetClient,
    topic_client: PubsubTopicClient,
    project_id: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl Client {
    /// New client
    pub fn new(config: ClientConfig) -> Self {
        let ts = match config.token_source_provider {
            Some(tsp) => Some(tsp.token_source()),
            None => {
                tracing::trace!("Use anonymous access due to lack of token");
                None
            }
        };
        let http = config
            .http
            .unwrap_or_else(|| reqwest_middleware::ClientBuilder::new(reqwest::Client::default()).build());
        let api = |endpoint: String, user_agent: &'static str| {
            Arc::new(ApiClient::new(ts.clone(), endpoint, http.clone(), user_agent))
        };
        Self {
            logging_client: LoggingClient::new(api(
                format!("{}/v2", config.logging_endpoint),
                "google-cloud-logging",
            )),
            storage_client: StorageClient::new(api(
                format!("{}/storage/v1", config.storage_endpoint),
                "google-cloud-storage",
            )),
            dataset_client: BigqueryDatasetClient::new(api(
                format!("{}/bigquery/v2", config.bigquery_endpoint),
                "google-cloud-bigquery",
            )),
            topic_client: PubsubTopicClient::new(api(format!("{}/v1", config.pubsub_endpoint), "google-cloud-pubsub")),
            project_id: config.project_id,
        }
    }

    /// The project of the credentials the client authenticated with, if known.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn logging(&self) -> &LoggingClient {
        &self.logging_client
    }

    pub fn storage(&self) -> &StorageClient {
        &self.storage_client
    }

    pub fn dataset(&self) -> &BigqueryDatasetClient {
        &self.dataset_client
    }

    pub fn topic(&self) -> &PubsubTopicClient {
        &self.topic_client
    }
}

#[async_trait]
impl SinkLookup for Client {
    async fn lookup(&self, sink_name: &str, project_id: &str) -> Result<SinkInfo, ProviderError> {
        let sink = self.logging_client.get_sink(project_id, sink_name).await?;
        Ok(SinkInfo {
            writer_identity: sink.writer_identity,
            destination: sink.destination,
        })
    }
}

#[async_trait]
impl StoragePolicyProvider for Client {
    async fn bucket_policy(&self, bucket: &str) -> Result<RoleMembers, ProviderError> {
        let req = GetBucketIamPolicyRequest {
            resource: bucket.to_string(),
            options_requested_policy_version: Some(REQUESTED_POLICY_VERSION),
        };
        Ok(self.storage_client.get_iam_policy(&req).await?.role_members())
    }
}

#[async_trait]
impl DatasetPolicyProvider for Client {
    async fn dataset_policy(&self, project_id: &str, dataset_id: &str) -> Result<RoleMembers, ProviderError> {
        Ok(self.dataset_client.get(project_id, dataset_id).await?.role_members())
    }
}

#[async_trait]
impl TopicPolicyProvider for Client {
    async fn topic_policy(&self, topic: &str, project_id: &str) -> Result<RoleMembers, ProviderError> {
        let req = GetTopicIamPolicyRequest {
            project_id: project_id.to_string(),
            topic: topic.to_string(),
            requested_policy_version: Some(REQUESTED_POLICY_VERSION),
        };
        Ok(self.topic_client.get_iam_policy(&req).await?.role_members())
    }
}
