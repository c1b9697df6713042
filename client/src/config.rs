//! Account service settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{Credentials, CredentialsValidationError};

/// Base URL used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api1.origin.com";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the account service client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNT_API")]
pub struct AccountApiSettings {
    /// Base URL of the account service; trailing slashes are ignored.
    pub endpoint: Option<String>,
    /// Whole-request timeout in seconds.
    #[ortho_config(file_key = "timeout_secs")]
    pub request_timeout_secs: Option<u64>,
    /// Account username or email used by the login collaborator.
    pub username: Option<String>,
    /// Account password used by the login collaborator.
    pub password: Option<String>,
}

impl AccountApiSettings {
    /// Return the configured endpoint, falling back to [`DEFAULT_ENDPOINT`]
    /// when unset or blank.
    pub fn endpoint(&self) -> &str {
        match self.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint,
            _ => DEFAULT_ENDPOINT,
        }
    }

    /// Return the request timeout, falling back to 30 seconds.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Return validated credentials when either part is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsValidationError`] when only one of username and
    /// password is set, or either is blank.
    pub fn credentials(&self) -> Result<Option<Credentials>, CredentialsValidationError> {
        if self.username.is_none() && self.password.is_none() {
            return Ok(None);
        }
        Credentials::try_from_parts(
            self.username.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
        )
        .map(Some)
    }
}
