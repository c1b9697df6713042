//! Reqwest-backed account service adapter.
//!
//! This adapter owns transport details only: request construction, session
//! header injection, transport error mapping, and handing the raw response to
//! the classifier and decoder.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use super::response::{classify_response, decode_user_list};
use crate::config::{AccountApiSettings, DEFAULT_ENDPOINT};
use crate::domain::ports::{AccountApiError, SessionStore, UserDirectory};
use crate::domain::{Credentials, CredentialsValidationError, UserInfo};

const USERS_PATH: &str = "/atom/users";
const AUTH_TOKEN_HEADER: &str = "AuthToken";
const PLATFORM_HEADER: &str = "X-Origin-Platform";
const REFERRER_HEADER: &str = "Referrer";
const DEFAULT_PLATFORM: &str = "UnknownOS";
const DEFAULT_REFERRER: &str = "https://www.origin.com/";

/// Outbound identity headers sent with every request.
pub struct AccountApiIdentity {
    /// Value of the `X-Origin-Platform` header.
    pub platform: String,
    /// Value of the `Referrer` header.
    pub referrer: String,
}

impl Default for AccountApiIdentity {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.to_owned(),
            referrer: DEFAULT_REFERRER.to_owned(),
        }
    }
}

/// Errors raised while building a client from settings.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The reqwest client could not be constructed.
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
    /// Configured credentials were incomplete or blank.
    #[error("invalid account api credentials: {0}")]
    Credentials(#[from] CredentialsValidationError),
}

/// Account service client performing authenticated user lookups against one
/// endpoint.
pub struct AccountApiHttpClient {
    client: Client,
    endpoint: String,
    platform: String,
    referrer: String,
    credentials: Option<Credentials>,
    session_store: Arc<dyn SessionStore>,
}

impl AccountApiHttpClient {
    /// Build a client using a reqwest client with an explicit request timeout.
    ///
    /// An empty `endpoint` selects the default service URL; trailing slashes
    /// are stripped.
    /// ```rust,ignore
    /// let client = AccountApiHttpClient::new("", timeout, Arc::new(MemorySessionStore::default()));
    /// assert!(client.is_ok() || client.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: &str,
        timeout: Duration,
        session_store: Arc<dyn SessionStore>,
    ) -> Result<Self, reqwest::Error> {
        Self::with_identity(
            endpoint,
            timeout,
            session_store,
            AccountApiIdentity::default(),
        )
    }

    /// Build a client with explicit outbound identity headers.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: &str,
        timeout: Duration,
        session_store: Arc<dyn SessionStore>,
        identity: AccountApiIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: normalize_endpoint(endpoint),
            platform: identity.platform,
            referrer: identity.referrer,
            credentials: None,
            session_store,
        })
    }

    /// Build a client from loaded settings, carrying any configured
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] when the reqwest client cannot be built or
    /// the configured credentials are invalid.
    pub fn from_settings(
        settings: &AccountApiSettings,
        session_store: Arc<dyn SessionStore>,
    ) -> Result<Self, ClientBuildError> {
        let credentials = settings.credentials()?;
        let mut client = Self::new(
            settings.endpoint(),
            settings.request_timeout(),
            session_store,
        )?;
        client.credentials = credentials;
        Ok(client)
    }

    /// Attach credentials for the login collaborator.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Credentials configured for session acquisition, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Normalised base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Session store consulted before each request.
    ///
    /// Login collaborators write a fresh SID here after re-authenticating.
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session_store
    }

    /// Look up users, giving up as soon as `cancel` completes.
    ///
    /// The in-flight request is dropped on cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`AccountApiError::Cancelled`] when `cancel` wins the race, and
    /// otherwise the same errors as [`UserDirectory::user_info`].
    pub async fn user_info_until<F>(
        &self,
        user_ids: &[i64],
        cancel: F,
    ) -> Result<Vec<UserInfo>, AccountApiError>
    where
        F: Future<Output = ()> + Send,
    {
        tokio::select! {
            result = self.user_info(user_ids) => result,
            () = cancel => {
                debug!(count = user_ids.len(), "account service lookup cancelled");
                Err(AccountApiError::cancelled())
            }
        }
    }

    async fn fetch_user_info(&self, user_ids: &[i64]) -> Result<Vec<UserInfo>, AccountApiError> {
        let url = users_url(&self.endpoint, user_ids)?;
        let sid = self.session_store.sid().await?;

        debug!(%url, count = user_ids.len(), "requesting account service user info");
        let response = self
            .client
            .get(url)
            .header(AUTH_TOKEN_HEADER, sid)
            .header(PLATFORM_HEADER, self.platform.as_str())
            .header(REFERRER_HEADER, self.referrer.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(map_transport_error)?;

        let validated = classify_response(status, content_type.as_deref(), body.as_ref())?;
        decode_user_list(&validated)
    }
}

#[async_trait]
impl UserDirectory for AccountApiHttpClient {
    async fn user_info(&self, user_ids: &[i64]) -> Result<Vec<UserInfo>, AccountApiError> {
        self.fetch_user_info(user_ids)
            .await
            .inspect_err(|error| debug!(%error, "account service lookup failed"))
    }
}

fn normalize_endpoint(raw: &str) -> String {
    if raw.is_empty() {
        DEFAULT_ENDPOINT.to_owned()
    } else {
        raw.trim_end_matches('/').to_owned()
    }
}

fn users_url(endpoint: &str, user_ids: &[i64]) -> Result<Url, AccountApiError> {
    let ids = user_ids
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Url::parse(&format!("{endpoint}{USERS_PATH}?userIds={ids}")).map_err(|error| {
        AccountApiError::invalid_request(format!("invalid endpoint {endpoint:?}: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> AccountApiError {
    if error.is_timeout() {
        AccountApiError::timeout(error.to_string())
    } else if error.is_builder() {
        AccountApiError::invalid_request(error.to_string())
    } else {
        AccountApiError::transport(error.to_string())
    }
}
