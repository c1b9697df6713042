//! Domain records and ports for account service lookups.
//!
//! Public surface:
//! - `UserInfo` — one user record resolved by the account service.
//! - `Credentials` — username/password pair reserved for session acquisition.
//! - `ports` — driven ports (`SessionStore`, `UserDirectory`) and their errors.

pub mod credentials;
pub mod ports;
pub mod user_info;

pub use self::credentials::{Credentials, CredentialsValidationError};
pub use self::user_info::UserInfo;
