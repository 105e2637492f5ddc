//! Collaborators the auditor depends on.
//!
//! [`crate::client::Client`] implements every trait against the Google Cloud JSON APIs.
//! Policy providers return grants already normalised through [`RoleBindings`].
//!
//! [`RoleBindings`]: crate::policy::RoleBindings

use async_trait::async_trait;

use crate::policy::RoleMembers;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The requested sink or resource does not exist.
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Failure(String),
}

impl From<crate::http::error::Error> for ProviderError {
    fn from(error: crate::http::error::Error) -> Self {
        if error.is_not_found() {
            ProviderError::NotFound
        } else {
            ProviderError::Failure(error.to_string())
        }
    }
}

/// The parts of a sink the audit needs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SinkInfo {
    pub writer_identity: String,
    pub destination: String,
}

#[async_trait]
pub trait SinkLookup: Send + Sync {
    async fn lookup(&self, sink_name: &str, project_id: &str) -> Result<SinkInfo, ProviderError>;
}

#[async_trait]
pub trait StoragePolicyProvider: Send + Sync {
    async fn bucket_policy(&self, bucket: &str) -> Result<RoleMembers, ProviderError>;
}

#[async_trait]
pub trait DatasetPolicyProvider: Send + Sync {
    async fn dataset_policy(&self, project_id: &str, dataset_id: &str) -> Result<RoleMembers, ProviderError>;
}

#[async_trait]
pub trait TopicPolicyProvider: Send + Sync {
    async fn topic_policy(&self, topic: &str, project_id: &str) -> Result<RoleMembers, ProviderError>;
}

/// The three policy providers, one per destination type.
pub trait PolicyProviders: StoragePolicyProvider + DatasetPolicyProvider + TopicPolicyProvider {}

impl<T> PolicyProviders for T where T: StoragePolicyProvider + DatasetPolicyProvider + TopicPolicyProvider {}

#[cfg(test)]
mod test {
    use crate::http::error::{Error, ErrorResponse};
    use crate::provider::ProviderError;

    #[test]
    fn test_from_http_error() {
        let not_found = Error::Response(ErrorResponse {
            code: 404,
            message: "The specified bucket does not exist.".to_string(),
            status: None,
        });
        assert_eq!(ProviderError::from(not_found), ProviderError::NotFound);

        let denied = Error::Response(ErrorResponse {
            code: 403,
            message: "Permission denied".to_string(),
            status: Some("PERMISSION_DENIED".to_string()),
        });
        assert_eq!(
            ProviderError::from(denied),
            ProviderError::Failure("Permission denied".to_string())
        );
    }
}
