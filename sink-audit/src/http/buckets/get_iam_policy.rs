use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use crate::http::Escape;

/// Request message for `GetIamPolicy` method.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetIamPolicyRequest {
    /// REQUIRED: The bucket for which the policy is being requested.
    #[serde(skip_serializing)]
    pub resource: String,
    /// Optional. The maximum policy version that will be used to format the policy.
    /// Version `3` is required to see conditional role bindings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_requested_policy_version: Option<i32>,
}

pub(crate) fn build(base_url: &str, client: &Client, req: &GetIamPolicyRequest) -> RequestBuilder {
    let url = format!("{}/b/{}/iam", base_url, req.resource.escape());
    client.get(url).query(&req)
}
