use std::fmt;

use crate::destination::expected_role;
use crate::policy::RoleBindings;

/// A role binding on the destination that includes the sink's writer identity.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    role: String,
    members: Vec<String>,
    expected_role: Option<String>,
}

impl AuditFinding {
    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn expected_role(&self) -> Option<&str> {
        self.expected_role.as_deref()
    }

    /// `true` when the granted role is something other than the minimal role.
    pub fn exceeds_expected(&self) -> bool {
        matches!(&self.expected_role, Some(expected) if *expected != self.role)
    }
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Role: {}, Members: [{}]", self.role, self.members.join(", "))?;
        if let Some(expected) = &self.expected_role {
            write!(f, "\nExpected Role: {expected}")?;
        }
        Ok(())
    }
}

/// Returns one finding per role whose members include `writer_identity`, in the
/// policy's binding order. `destination_type` selects the expected role annotation.
pub fn audit<P>(policy: &P, writer_identity: &str, destination_type: &str) -> Vec<AuditFinding>
where
    P: RoleBindings + ?Sized,
{
    let expected = expected_role(destination_type).map(str::to_string);
    if expected.is_none() {
        tracing::debug!("no expected role for destination type {destination_type}");
    }
    let role_members = policy.role_members();
    role_members
        .iter()
        .filter(|(_, members)| members.iter().any(|m| m == writer_identity))
        .map(|(role, members)| AuditFinding {
            role: role.to_string(),
            members: members.to_vec(),
            expected_role: expected.clone(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::audit::audit;
    use crate::policy::RoleMembers;

    fn policy() -> RoleMembers {
        [
            ("roles/storage.objectCreator", vec!["writerIdentity"]),
            ("roles/storage.admin", vec!["writerIdentity", "other"]),
            ("roles/storage.objectViewer", vec!["other"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_findings_per_role() {
        let policy = policy();
        let findings = audit(&policy, "writerIdentity", "storage.googleapis.com");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].role(), "roles/storage.objectCreator");
        assert_eq!(findings[0].members(), ["writerIdentity"]);
        assert_eq!(findings[1].role(), "roles/storage.admin");
        assert_eq!(findings[1].members(), ["writerIdentity", "other"]);
        for finding in &findings {
            assert_eq!(finding.expected_role(), Some("roles/storage.objectCreator"));
            assert!(policy.contains_role(finding.role()));
            assert!(finding.members().iter().any(|m| m == "writerIdentity"));
        }
        assert!(!findings[0].exceeds_expected());
        assert!(findings[1].exceeds_expected());
    }

    #[test]
    fn test_no_findings() {
        let findings = audit(&policy(), "serviceAccount:nobody", "storage.googleapis.com");
        assert!(findings.is_empty());
        assert!(audit(&RoleMembers::new(), "writerIdentity", "storage.googleapis.com").is_empty());
    }

    #[test]
    fn test_unknown_type_has_no_expectation() {
        let findings = audit(&policy(), "writerIdentity", "unknown.googleapis.com");
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.expected_role().is_none()));
        assert!(!findings[1].exceeds_expected());
    }

    #[test]
    fn test_idempotent() {
        let policy = policy();
        let first = audit(&policy, "writerIdentity", "pubsub.googleapis.com");
        let second = audit(&policy, "writerIdentity", "pubsub.googleapis.com");
        assert_eq!(first, second);
    }

    #[test]
    fn test_member_match_is_exact() {
        let policy: RoleMembers = [("roles/owner", vec!["serviceAccount:writer@x.com"])].into_iter().collect();
        assert!(audit(&policy, "writer@x.com", "storage.googleapis.com").is_empty());
    }

    #[test]
    fn test_display() {
        let findings = audit(&policy(), "writerIdentity", "storage.googleapis.com");
        assert_eq!(
            findings[1].to_string(),
            "Role: roles/storage.admin, Members: [writerIdentity, other]\nExpected Role: roles/storage.objectCreator"
        );
        let findings = audit(&policy(), "writerIdentity", "unknown");
        assert_eq!(
            findings[0].to_string(),
            "Role: roles/storage.objectCreator, Members: [writerIdentity]"
        );
    }

    #[test]
    fn test_serialize() {
        let findings = audit(&policy(), "writerIdentity", "storage.googleapis.com");
        let json = serde_json::to_value(&findings[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "role": "roles/storage.objectCreator",
                "members": ["writerIdentity"],
                "expectedRole": "roles/storage.objectCreator"
            })
        );
    }
}
