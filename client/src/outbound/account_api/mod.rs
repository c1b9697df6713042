//! Account service outbound adapter.
//!
//! Provides a reqwest implementation of the `UserDirectory` port plus the
//! pure response classifier and decoder it relies on.

mod dto;
mod http_client;
mod response;

pub use http_client::{AccountApiHttpClient, AccountApiIdentity, ClientBuildError};
pub use response::{ValidatedResponse, classify_response, decode_user_list};
