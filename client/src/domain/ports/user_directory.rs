//! Driven port for resolving account identifiers into user records.
//!
//! The domain owns the error taxonomy so callers can react to
//! `AuthRequired` (re-authenticate) without knowing which adapter produced
//! it.

use async_trait::async_trait;

use super::{SessionStoreError, define_port_error};
use crate::domain::UserInfo;

define_port_error! {
    /// Errors surfaced by a user directory lookup.
    pub enum AccountApiError {
        /// The response was malformed or structurally unexpected XML.
        InvalidResponse { message: String } =>
            "invalid account api response: {message}",
        /// The service reported a failure, or answered with something other
        /// than XML.
        Api { message: String } =>
            "account api error: {message}",
        /// The session token was rejected; the caller must log in again.
        AuthRequired { message: String } =>
            "account api authentication required: {message}",
        /// A `userId` element did not hold an integer.
        InvalidUserId { value: String, message: String } =>
            "parse userId {value:?}: {message}",
        /// The session store failed before the request was sent.
        Session { source: SessionStoreError } =>
            "{source}",
        /// Network transport failed before a full response arrived.
        Transport { message: String } =>
            "account api transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "account api timeout: {message}",
        /// The request could not be built from the configured endpoint.
        InvalidRequest { message: String } =>
            "account api request invalid: {message}",
        /// The caller abandoned the lookup before it completed.
        Cancelled =>
            "account api request cancelled",
    }
}

impl From<SessionStoreError> for AccountApiError {
    fn from(source: SessionStoreError) -> Self {
        Self::Session { source }
    }
}

impl AccountApiError {
    /// Return whether the session token must be refreshed before retrying.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired { .. })
    }

    /// Return whether retrying the same request unchanged may help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for looking up users by numeric account identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve `user_ids` into user records in response order.
    ///
    /// Duplicates and an empty slice are passed through to the service
    /// unchanged. No partial results are returned: any failure discards the
    /// whole response.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use account_client::domain::ports::{FixtureUserDirectory, UserDirectory};
    ///
    /// let users = FixtureUserDirectory.user_info(&[1, 2]).await?;
    /// assert!(users.is_empty());
    /// # Ok::<(), account_client::domain::ports::AccountApiError>(())
    /// ```
    async fn user_info(&self, user_ids: &[i64]) -> Result<Vec<UserInfo>, AccountApiError>;
}

/// Fixture directory that knows no users.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn user_info(&self, _user_ids: &[i64]) -> Result<Vec<UserInfo>, AccountApiError> {
        Ok(Vec::new())
    }
}
