use crate::error::Error;

/// The destination services a sink can write to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum DestinationType {
    BigQuery,
    Storage,
    PubSub,
}

/// Destination type identifier and the least-privileged role its writer identity needs.
pub static EXPECTED_ROLES: [(DestinationType, &str, &str); 3] = [
    (
        DestinationType::BigQuery,
        "bigquery.googleapis.com",
        "roles/bigquery.dataEditor",
    ),
    (
        DestinationType::Storage,
        "storage.googleapis.com",
        "roles/storage.objectCreator",
    ),
    (DestinationType::PubSub, "pubsub.googleapis.com", "roles/pubsub.publisher"),
];

impl DestinationType {
    pub const ALL: [DestinationType; 3] = [DestinationType::BigQuery, DestinationType::Storage, DestinationType::PubSub];

    /// The service host used as the first segment of a sink destination.
    pub fn identifier(&self) -> &'static str {
        self.entry().1
    }

    pub fn expected_role(&self) -> &'static str {
        self.entry().2
    }

    fn entry(&self) -> &'static (DestinationType, &'static str, &'static str) {
        // every variant has exactly one row
        match self {
            DestinationType::BigQuery => &EXPECTED_ROLES[0],
            DestinationType::Storage => &EXPECTED_ROLES[1],
            DestinationType::PubSub => &EXPECTED_ROLES[2],
        }
    }

    /// Matches a destination type by prefix, so that suffixed identifiers still resolve.
    pub fn from_prefix(kind: &str) -> Option<DestinationType> {
        EXPECTED_ROLES
            .iter()
            .find(|(_, identifier, _)| kind.starts_with(identifier))
            .map(|(t, _, _)| *t)
    }
}

/// Looks up the minimal role for an exact destination type identifier.
pub fn expected_role(kind: &str) -> Option<&'static str> {
    EXPECTED_ROLES
        .iter()
        .find(|(_, identifier, _)| *identifier == kind)
        .map(|(_, _, role)| *role)
}

/// A parsed sink destination.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Destination {
    pub kind: String,
    pub resource_name: String,
    pub project: Option<String>,
}

impl Destination {
    /// The owning project, or `fallback` when the destination does not name one.
    pub fn project_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.project.as_deref().unwrap_or(fallback)
    }

    pub fn destination_type(&self) -> Option<DestinationType> {
        DestinationType::from_prefix(&self.kind)
    }
}

/// Splits a sink destination such as `storage.googleapis.com/projects/p1/buckets/b1`
/// into its type (first segment), resource name (last segment) and project (third segment).
pub fn parse_destination(url: &str) -> Result<Destination, Error> {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 2 {
        return Err(Error::InvalidDestinationFormat(url.to_string()));
    }
    let project = if parts.len() > 2 {
        Some(parts[2].to_string())
    } else {
        None
    };
    Ok(Destination {
        kind: parts[0].to_string(),
        resource_name: parts[parts.len() - 1].to_string(),
        project,
    })
}
