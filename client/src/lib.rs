//! Client for the account service user directory.
//!
//! The crate follows the same hexagonal split as the rest of the workspace:
//!
//! - **domain**: user records and the ports (`SessionStore`, `UserDirectory`)
//!   the rest of the system talks to
//! - **outbound**: the reqwest-backed adapter that speaks the account
//!   service's XML protocol
//! - **config**: settings loaded via `OrthoConfig`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use account_client::domain::ports::{MemorySessionStore, UserDirectory};
//! use account_client::outbound::account_api::AccountApiHttpClient;
//! use account_client::AccountApiSettings;
//!
//! let settings = AccountApiSettings::load()?;
//! let sessions = Arc::new(MemorySessionStore::default());
//! let client = AccountApiHttpClient::from_settings(&settings, sessions)?;
//! let users = client.user_info(&[1000123, 1000456]).await?;
//! ```

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::AccountApiSettings;
