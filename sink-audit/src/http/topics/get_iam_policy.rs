use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::Escape;

/// Request message for `GetIamPolicy` on a topic.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetIamPolicyRequest {
    #[serde(skip_serializing)]
    pub project_id: String,
    #[serde(skip_serializing)]
    pub topic: String,
    #[serde(
        rename = "options.requestedPolicyVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_policy_version: Option<i32>,
}

impl GetIamPolicyRequest {
    /// The fully qualified topic name, `projects/{project}/topics/{topic}`.
    pub fn resource(&self) -> String {
        format!("projects/{}/topics/{}", self.project_id, self.topic)
    }
}

pub(crate) fn build(base_url: &str, client: &Client, req: &GetIamPolicyRequest) -> RequestBuilder {
    let url = format!(
        "{}/projects/{}/topics/{}:getIamPolicy",
        base_url,
        req.project_id.escape(),
        req.topic.escape()
    );
    client.get(url).query(&req)
}
