use std::sync::Arc;

use crate::http::api_client::ApiClient;
use crate::http::error::Error;
use crate::http::sinks;
use crate::http::sinks::LogSink;

/// Cloud Logging v2 sink operations.
#[derive(Clone)]
pub struct LoggingClient {
    inner: Arc<ApiClient>,
}

impl LoggingClient {
    pub fn new(inner: Arc<ApiClient>) -> Self {
        Self { inner }
    }

    /// Gets a sink. Its `writer_identity` is empty unless the sink has a unique identity.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_sink(&self, project_id: &str, sink_name: &str) -> Result<LogSink, Error> {
        let builder = sinks::get::build(self.inner.endpoint(), self.inner.http(), project_id, sink_name);
        self.inner.send(builder).await
    }
}
