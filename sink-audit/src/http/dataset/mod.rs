pub mod get;

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    /// Required. A unique ID for this dataset, without the project name.
    pub dataset_id: String,
    /// Optional. The ID of the project containing this dataset.
    pub project_id: Option<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum SpecialGroup {
    #[default]
    ProjectOwners,
    ProjectReaders,
    ProjectWriters,
    AllAuthenticatedUsers,
}

impl SpecialGroup {
    fn as_str(&self) -> &'static str {
        match self {
            SpecialGroup::ProjectOwners => "projectOwners",
            SpecialGroup::ProjectReaders => "projectReaders",
            SpecialGroup::ProjectWriters => "projectWriters",
            SpecialGroup::AllAuthenticatedUsers => "allAuthenticatedUsers",
        }
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    /// An IAM role ID that should be granted to the user, group, or domain specified in this access entry.
    /// The following legacy mappings will be applied:
    ///     OWNER <=> roles/bigquery.dataOwner
    ///     WRITER <=> roles/bigquery.dataEditor
    ///     READER <=> roles/bigquery.dataViewer
    /// The API returns the legacy format. View, routine and dataset grants carry no role.
    pub role: Option<String>,
    /// [Pick one] An email address of a user to grant access to.
    /// Maps to IAM policy member "user:EMAIL" or "serviceAccount:EMAIL".
    pub user_by_email: Option<String>,
    /// [Pick one] An email address of a Google Group to grant access to.
    pub group_by_email: Option<String>,
    /// [Pick one] A domain to grant access to.
    pub domain: Option<String>,
    /// [Pick one] A special group to grant access to.
    pub special_group: Option<SpecialGroup>,
    /// [Pick one] Some other type of member that appears in the IAM Policy but isn't a user,
    /// group, domain, or special group.
    pub iam_member: Option<String>,
    /// [Pick one] A view from a different dataset to grant access to.
    pub view: Option<serde_json::Value>,
    /// [Pick one] A routine from a different dataset to grant access to.
    pub routine: Option<serde_json::Value>,
    /// [Pick one] A grant authorizing all resources of a particular type in a particular dataset.
    pub dataset: Option<serde_json::Value>,
}

impl Access {
    /// The role in IAM form, translating the legacy basic roles.
    pub fn iam_role(&self) -> Option<String> {
        let role = self.role.as_deref()?;
        let role = match role {
            "OWNER" => "roles/bigquery.dataOwner",
            "WRITER" => "roles/bigquery.dataEditor",
            "READER" => "roles/bigquery.dataViewer",
            other => other,
        };
        Some(role.to_string())
    }

    /// The principal in IAM member form, or `None` for view, routine and dataset grants.
    pub fn iam_member(&self) -> Option<String> {
        if let Some(email) = &self.user_by_email {
            // Service accounts are granted through userByEmail.
            if email.ends_with(".gserviceaccount.com") {
                return Some(format!("serviceAccount:{email}"));
            }
            return Some(format!("user:{email}"));
        }
        if let Some(group) = &self.group_by_email {
            return Some(format!("group:{group}"));
        }
        if let Some(domain) = &self.domain {
            return Some(format!("domain:{domain}"));
        }
        if let Some(special) = &self.special_group {
            return Some(format!("specialGroup:{}", special.as_str()));
        }
        self.iam_member.clone()
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Output only. The resource type.
    #[serde(default)]
    pub kind: String,
    /// Output only. A hash of the resource.
    #[serde(default)]
    pub etag: String,
    /// Output only. The fully-qualified unique name of the dataset in the format projectId:datasetId.
    #[serde(default)]
    pub id: String,
    /// Required. A reference that identifies the dataset.
    pub dataset_reference: DatasetReference,
    /// An array of objects that define dataset access for one or more entities.
    #[serde(default)]
    pub access: Vec<Access>,
    #[serde(default)]
    pub location: String,
}
