//! Driven ports for the account service boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod session_store;
mod user_directory;

#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{MemorySessionStore, SessionStore, SessionStoreError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{AccountApiError, FixtureUserDirectory, UserDirectory};
