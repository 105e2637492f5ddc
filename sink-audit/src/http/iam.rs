/// An Identity and Access Management (IAM) policy, as returned by the `getIamPolicy`
/// methods of Cloud Storage and Pub/Sub.
///
/// A `Policy` is a collection of `bindings`. A `binding` binds one or more
/// `members`, or principals, to a single `role`.
///
/// **JSON example:**
///
///     {
///       "bindings": [
///         {
///           "role": "roles/storage.objectCreator",
///           "members": [
///             "serviceAccount:service-123@gcp-sa-logging.iam.gserviceaccount.com"
///           ]
///         }
///       ],
///       "etag": "BwWWja0YfJA=",
///       "version": 1
///     }
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Specifies the format of the policy. Valid values are `0`, `1`, and `3`.
    #[serde(default)]
    pub version: i32,
    /// Associates a list of `members`, or principals, with a `role`.
    /// An empty policy omits the field entirely.
    #[serde(default)]
    pub bindings: Vec<Binding>,
    #[serde(default)]
    pub etag: String,
}

/// Associates `members`, or principals, with a `role`.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    /// Role that is assigned to the list of `members`, or principals.
    /// For example, `roles/viewer`, `roles/editor`, or `roles/owner`.
    pub role: String,
    /// Principals such as `user:{emailid}`, `serviceAccount:{emailid}`,
    /// `group:{emailid}`, `domain:{domain}`, `allUsers` or `allAuthenticatedUsers`.
    #[serde(default)]
    pub members: Vec<String>,
    /// The condition that is associated with this binding.
    pub condition: Option<Condition>,
}

#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Textual representation of an expression in Common Expression Language syntax.
    pub expression: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
