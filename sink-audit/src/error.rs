use std::fmt;

/// The pipeline stage a failure surfaced in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    Config,
    Resolve,
    Parse,
    Fetch,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Resolve => "resolve",
            Stage::Parse => "parse",
            Stage::Fetch => "fetch",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "auth")]
pub type AuthError = google_cloud_auth::error::Error;

/// Without the `auth` feature no authentication is attempted.
#[cfg(not(feature = "auth"))]
pub type AuthError = std::convert::Infallible;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please set the GOOGLE_APPLICATION_CREDENTIALS environment variable to your service account key.")]
    MissingCredentials,

    #[error("Sink '{sink}' not found in project '{project}'")]
    SinkNotFound { sink: String, project: String },

    #[error("Invalid destination format: {0}")]
    InvalidDestinationFormat(String),

    #[error("Unsupported destination type: {0}")]
    UnsupportedDestinationType(String),

    #[error("{kind} '{name}' not found")]
    ResourceNotFound { kind: &'static str, name: String },

    #[error("{stage} failed: {message}")]
    CollaboratorFailure { stage: Stage, message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::MissingCredentials | Error::Auth(_) => Stage::Config,
            Error::SinkNotFound { .. } => Stage::Resolve,
            Error::InvalidDestinationFormat(_) => Stage::Parse,
            Error::UnsupportedDestinationType(_) | Error::ResourceNotFound { .. } => Stage::Fetch,
            Error::CollaboratorFailure { stage, .. } => *stage,
            Error::Report(_) => Stage::Report,
        }
    }
}
