use crate::error::{Error, Stage};
use crate::provider::{ProviderError, SinkLookup, SinkInfo};

/// Looks up a sink's writer identity and destination.
pub async fn resolve<L>(lookup: &L, sink_name: &str, project_id: &str) -> Result<SinkInfo, Error>
where
    L: SinkLookup + ?Sized,
{
    lookup.lookup(sink_name, project_id).await.map_err(|e| match e {
        ProviderError::NotFound => Error::SinkNotFound {
            sink: sink_name.to_string(),
            project: project_id.to_string(),
        },
        ProviderError::Failure(message) => Error::CollaboratorFailure {
            stage: Stage::Resolve,
            message,
        },
    })
}
