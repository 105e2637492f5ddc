use crate::destination::{Destination, DestinationType};
use crate::error::{Error, Stage};
use crate::policy::RoleMembers;
use crate::provider::{PolicyProviders, ProviderError};

/// Fetches the policy of the destination resource from the provider matching its type.
///
/// Exactly one provider is called; an unrecognised type calls none.
pub async fn fetch_policy<P>(providers: &P, destination: &Destination, fallback_project: &str) -> Result<RoleMembers, Error>
where
    P: PolicyProviders + ?Sized,
{
    let destination_type = destination
        .destination_type()
        .ok_or_else(|| Error::UnsupportedDestinationType(destination.kind.clone()))?;
    let name = destination.resource_name.as_str();
    let project = destination.project_or(fallback_project);
    tracing::debug!(?destination_type, name, project, "fetching destination policy");

    let (kind, result) = match destination_type {
        DestinationType::BigQuery => ("BigQuery dataset", providers.dataset_policy(project, name).await),
        DestinationType::Storage => ("Storage bucket", providers.bucket_policy(name).await),
        DestinationType::PubSub => ("Pub/Sub topic", providers.topic_policy(name, project).await),
    };
    result.map_err(|e| match e {
        ProviderError::NotFound => Error::ResourceNotFound {
            kind,
            name: name.to_string(),
        },
        ProviderError::Failure(message) => Error::CollaboratorFailure {
            stage: Stage::Fetch,
            message,
        },
    })
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::destination::parse_destination;
    use crate::dispatch::fetch_policy;
    use crate::error::{Error, Stage};
    use crate::policy::RoleMembers;
    use crate::provider::{DatasetPolicyProvider, ProviderError, StoragePolicyProvider, TopicPolicyProvider};

    /// Records every provider call and answers with a fixed result.
    pub struct RecordingProviders {
        pub result: Result<RoleMembers, ProviderError>,
        pub calls: Mutex<Vec<String>>,
    }

    impl RecordingProviders {
        pub fn new(result: Result<RoleMembers, ProviderError>) -> Self {
            Self {
                result,
                calls: Mutex::new(vec![]),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<RoleMembers, ProviderError> {
            self.calls.lock().unwrap().push(call);
            self.result.clone()
        }
    }

    #[async_trait]
    impl StoragePolicyProvider for RecordingProviders {
        async fn bucket_policy(&self, bucket: &str) -> Result<RoleMembers, ProviderError> {
            self.record(format!("bucket:{bucket}"))
        }
    }

    #[async_trait]
    impl DatasetPolicyProvider for RecordingProviders {
        async fn dataset_policy(&self, project_id: &str, dataset_id: &str) -> Result<RoleMembers, ProviderError> {
            self.record(format!("dataset:{project_id}:{dataset_id}"))
        }
    }

    #[async_trait]
    impl TopicPolicyProvider for RecordingProviders {
        async fn topic_policy(&self, topic: &str, project_id: &str) -> Result<RoleMembers, ProviderError> {
            self.record(format!("topic:{project_id}:{topic}"))
        }
    }

    #[tokio::test]
    async fn test_dispatch_by_type() {
        let cases = [
            ("storage.googleapis.com/b1", "bucket:b1"),
            ("bigquery.googleapis.com/projects/p2/datasets/d1", "dataset:p2:d1"),
            ("bigquery.googleapis.com/d1", "dataset:caller:d1"),
            ("pubsub.googleapis.com/projects/p3/topics/t1", "topic:p3:t1"),
            ("pubsub.googleapis.com/t1", "topic:caller:t1"),
        ];
        for (url, expected) in cases {
            let providers = RecordingProviders::new(Ok(RoleMembers::new()));
            let destination = parse_destination(url).unwrap();
            fetch_policy(&providers, &destination, "caller").await.unwrap();
            assert_eq!(providers.calls(), vec![expected.to_string()], "{url}");
        }
    }

    #[tokio::test]
    async fn test_unsupported_type() {
        let providers = RecordingProviders::new(Ok(RoleMembers::new()));
        let destination = parse_destination("unknown.googleapis.com/x").unwrap();
        match fetch_policy(&providers, &destination, "caller").await {
            Err(Error::UnsupportedDestinationType(kind)) => assert_eq!(kind, "unknown.googleapis.com"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(providers.calls().is_empty());
    }

    #[tokio::test]
    async fn test_resource_not_found() {
        let providers = RecordingProviders::new(Err(ProviderError::NotFound));
        let destination = parse_destination("storage.googleapis.com/b1").unwrap();
        let err = fetch_policy(&providers, &destination, "caller").await.unwrap_err();
        assert_eq!(err.to_string(), "Storage bucket 'b1' not found");
        assert_eq!(err.stage(), Stage::Fetch);
        assert_eq!(providers.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failure() {
        let providers = RecordingProviders::new(Err(ProviderError::Failure("quota".to_string())));
        let destination = parse_destination("pubsub.googleapis.com/t1").unwrap();
        match fetch_policy(&providers, &destination, "caller").await {
            Err(Error::CollaboratorFailure { stage, message }) => {
                assert_eq!(stage, Stage::Fetch);
                assert_eq!(message, "quota");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
