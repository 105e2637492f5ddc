use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error returned from one of the Google Cloud JSON APIs.
    #[error(transparent)]
    Response(#[from] ErrorResponse),

    /// An error from the HTTP client.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),

    /// An error from one of the middleware used.
    #[error(transparent)]
    HttpMiddleware(anyhow::Error),

    /// An error from a token source.
    #[error("token source failed: {0}")]
    TokenSource(Box<dyn std::error::Error + Send + Sync>),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(err) => Error::HttpMiddleware(err),
            reqwest_middleware::Error::Reqwest(err) => Error::HttpClient(err),
        }
    }
}

impl Error {
    /// Returns `true` when the API reported that the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Response(response) => response.code == 404,
            Error::HttpClient(err) => err.status().map(|s| s.as_u16() == 404).unwrap_or(false),
            _ => false,
        }
    }
}

/// An error response returned from a Google Cloud JSON API.
///
/// Every API used here wraps it as `{ "error": { "code": 404, "message": "..." } }`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// An HTTP status value, without the textual description.
    ///
    /// Example values include: `400` (Bad Request), `401` (Unauthorized), and `404` (Not Found).
    pub code: u16,

    /// Description of the error.
    pub message: String,

    /// Canonical status name such as `NOT_FOUND` or `PERMISSION_DENIED`.
    #[serde(default)]
    pub status: Option<String>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl std::error::Error for ErrorResponse {}

#[derive(serde::Deserialize)]
pub(crate) struct ErrorWrapper {
    pub(crate) error: ErrorResponse,
}
