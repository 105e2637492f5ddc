use std::sync::Arc;

use crate::http::api_client::ApiClient;
use crate::http::error::Error;
use crate::http::iam::Policy;
use crate::http::topics;
use crate::http::topics::get_iam_policy::GetIamPolicyRequest;

/// Pub/Sub v1 topic IAM operations over the REST surface.
#[derive(Clone)]
pub struct PubsubTopicClient {
    inner: Arc<ApiClient>,
}

impl PubsubTopicClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    /// Gets the iam policy.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_iam_policy(&self, req: &GetIamPolicyRequest) -> Result<Policy, Error> {
        let builder = topics::get_iam_policy::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
