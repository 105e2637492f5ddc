use std::sync::Arc;

use crate::http::api_client::ApiClient;
use crate::http::dataset;
use crate::http::dataset::Dataset;
use crate::http::error::Error;

/// BigQuery v2 dataset operations.
#[derive(Clone)]
pub struct BigqueryDatasetClient {
    inner: Arc<ApiClient>,
}

impl BigqueryDatasetClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get(&self, project_id: &str, dataset_id: &str) -> Result<Dataset, Error> {
        let builder = dataset::get::build(self.inner.endpoint(), self.inner.http(), project_id, dataset_id);
        self.inner.send(builder).await
    }
}
