//! Role to members views over the different IAM policy shapes.
//!
//! Cloud Storage and Pub/Sub return a policy wrapped in `bindings`, BigQuery returns a
//! dataset access list, and callers may also hold a plain mapping. Each shape implements
//! [`RoleBindings`] so the auditor only ever sees an ordered role to members mapping.

use crate::http::dataset::Dataset;
use crate::http::iam::Policy;

/// An ordered mapping from role name to the principals granted that role.
///
/// Roles keep the position they were first inserted at.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RoleMembers {
    entries: Vec<(String, Vec<String>)>,
}

impl RoleMembers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `members` to `role`, appending the role if it is not present yet.
    /// Members already granted the role are not repeated.
    pub fn grant<I, S>(&mut self, role: &str, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = match self.entries.iter().position(|(r, _)| r == role) {
            Some(index) => index,
            None => {
                self.entries.push((role.to_string(), vec![]));
                self.entries.len() - 1
            }
        };
        let granted = &mut self.entries[index].1;
        for member in members {
            let member = member.into();
            if !granted.contains(&member) {
                granted.push(member);
            }
        }
    }

    pub fn get(&self, role: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(r, _)| r == role)
            .map(|(_, members)| members.as_slice())
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.get(role).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(r, m)| (r.as_str(), m.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R, M, S> FromIterator<(R, M)> for RoleMembers
where
    R: AsRef<str>,
    M: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (R, M)>>(iter: T) -> Self {
        let mut role_members = RoleMembers::new();
        for (role, members) in iter {
            role_members.grant(role.as_ref(), members);
        }
        role_members
    }
}

/// Anything that can expose its grants as an ordered role to members mapping.
pub trait RoleBindings {
    fn role_members(&self) -> RoleMembers;
}

impl RoleBindings for RoleMembers {
    fn role_members(&self) -> RoleMembers {
        self.clone()
    }
}

impl RoleBindings for Vec<(String, Vec<String>)> {
    fn role_members(&self) -> RoleMembers {
        self.iter().map(|(r, m)| (r, m.iter().cloned())).collect()
    }
}

/// Conditional bindings may repeat a role; they are merged at the role's first position.
impl RoleBindings for Policy {
    fn role_members(&self) -> RoleMembers {
        self.bindings
            .iter()
            .map(|b| (b.role.as_str(), b.members.iter().cloned()))
            .collect()
    }
}

/// Access entries become one binding per role; entries without a role or principal
/// (authorized views, routines and datasets) grant nothing to an identity.
impl RoleBindings for Dataset {
    fn role_members(&self) -> RoleMembers {
        let mut role_members = RoleMembers::new();
        for access in &self.access {
            if let (Some(role), Some(member)) = (access.iam_role(), access.iam_member()) {
                role_members.grant(&role, [member]);
            }
        }
        role_members
    }
}

#[cfg(test)]
mod test {
    use crate::http::dataset::{Access, Dataset};
    use crate::http::iam::{Binding, Condition, Policy};
    use crate::policy::{RoleBindings, RoleMembers};

    fn binding(role: &str, members: &[&str]) -> Binding {
        Binding {
            role: role.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            condition: None,
        }
    }

    #[test]
    fn test_policy_bindings() {
        let policy = Policy {
            version: 1,
            bindings: vec![
                binding("roles/storage.admin", &["user:a", "user:b"]),
                binding("roles/storage.objectCreator", &["user:c"]),
            ],
            etag: "CAE=".to_string(),
        };
        let role_members = policy.role_members();
        let roles: Vec<&str> = role_members.iter().map(|(r, _)| r).collect();
        assert_eq!(roles, vec!["roles/storage.admin", "roles/storage.objectCreator"]);
        assert_eq!(role_members.get("roles/storage.admin").unwrap(), ["user:a", "user:b"]);
    }

    #[test]
    fn test_policy_merges_conditional_bindings() {
        let mut conditional = binding("roles/storage.admin", &["user:b", "user:c"]);
        conditional.condition = Some(Condition {
            expression: "request.time < timestamp('2030-01-01T00:00:00Z')".to_string(),
            ..Default::default()
        });
        let policy = Policy {
            version: 3,
            bindings: vec![
                binding("roles/storage.admin", &["user:a", "user:b"]),
                binding("roles/storage.objectViewer", &["user:d"]),
                conditional,
            ],
            etag: String::new(),
        };
        let role_members = policy.role_members();
        assert_eq!(role_members.len(), 2);
        assert_eq!(
            role_members.get("roles/storage.admin").unwrap(),
            ["user:a", "user:b", "user:c"]
        );
        assert_eq!(role_members.iter().next().unwrap().0, "roles/storage.admin");
    }

    #[test]
    fn test_raw_mapping() {
        let raw = vec![
            ("roles/pubsub.publisher".to_string(), vec!["serviceAccount:w".to_string()]),
            ("roles/pubsub.editor".to_string(), vec![]),
        ];
        let role_members = raw.role_members();
        assert!(role_members.contains_role("roles/pubsub.editor"));
        assert_eq!(role_members.get("roles/pubsub.editor").unwrap().len(), 0);
        assert_eq!(role_members, role_members.role_members());
    }

    #[test]
    fn test_dataset_access() {
        let dataset = Dataset {
            access: vec![
                Access {
                    role: Some("WRITER".to_string()),
                    user_by_email: Some("w@gcp-sa-logging.iam.gserviceaccount.com".to_string()),
                    ..Default::default()
                },
                Access {
                    role: Some("OWNER".to_string()),
                    user_by_email: Some("owner@example.com".to_string()),
                    ..Default::default()
                },
                Access {
                    role: Some("WRITER".to_string()),
                    group_by_email: Some("writers@example.com".to_string()),
                    ..Default::default()
                },
                Access {
                    view: Some(serde_json::json!({"tableId": "v"})),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let role_members = dataset.role_members();
        assert_eq!(role_members.len(), 2);
        assert_eq!(
            role_members.get("roles/bigquery.dataEditor").unwrap(),
            [
                "serviceAccount:w@gcp-sa-logging.iam.gserviceaccount.com",
                "group:writers@example.com"
            ]
        );
        assert_eq!(
            role_members.get("roles/bigquery.dataOwner").unwrap(),
            ["user:owner@example.com"]
        );
    }

    #[test]
    fn test_from_iter_deduplicates() {
        let role_members: RoleMembers = [("r1", vec!["a", "a", "b"]), ("r2", vec!["c"]), ("r1", vec!["b", "d"])]
            .into_iter()
            .collect();
        assert_eq!(role_members.get("r1").unwrap(), ["a", "b", "d"]);
        assert_eq!(role_members.len(), 2);
    }
}
