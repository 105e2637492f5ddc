use crate::error::Error;

pub const CREDENTIALS_FILE_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const CREDENTIALS_JSON_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS_JSON";

/// Fails with [`Error::MissingCredentials`] unless a credentials file path or inline
/// credentials JSON is configured in the environment.
pub fn check_credentials() -> Result<(), Error> {
    let configured = [CREDENTIALS_FILE_ENV, CREDENTIALS_JSON_ENV]
        .iter()
        .any(|key| std::env::var(key).map(|v| !v.trim().is_empty()).unwrap_or(false));
    if configured {
        Ok(())
    } else {
        Err(Error::MissingCredentials)
    }
}
