use std::sync::Arc;

use crate::http::api_client::ApiClient;
use crate::http::buckets;
use crate::http::buckets::get_iam_policy::GetIamPolicyRequest;
use crate::http::error::Error;
use crate::http::iam::Policy;

/// Cloud Storage JSON API bucket IAM operations.
#[derive(Clone)]
pub struct StorageClient {
    inner: Arc<ApiClient>,
}

impl StorageClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    /// Gets the iam policy.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_iam_policy(&self, req: &GetIamPolicyRequest) -> Result<Policy, Error> {
        let builder = buckets::get_iam_policy::build(self.inner.endpoint(), self.inner.http(), req);
        self.inner.send(builder).await
    }
}
