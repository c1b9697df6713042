//! Driven port for the session identifier (SID) used to authenticate
//! account service requests.
//!
//! The client reads the SID immediately before every request. Writing it is
//! the job of whichever collaborator performs login; persistent or shared
//! stores live outside this crate and only need to honour the two-method
//! contract below.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session store adapters.
    pub enum SessionStoreError {
        /// The backing store could not be reached.
        Unavailable { message: String } =>
            "session store unavailable: {message}",
        /// The backing store rejected the read or write.
        Backend { message: String } =>
            "session store failed: {message}",
    }
}

/// Port for reading and replacing the current session identifier.
///
/// Implementations must make each call individually atomic: a reader sees
/// either the previous value or the new one, never a torn write. Concurrent
/// writers are resolved last-writer-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Return the current session identifier, or an empty string when none
    /// has been stored yet.
    async fn sid(&self) -> Result<String, SessionStoreError>;

    /// Replace the current session identifier.
    async fn set_sid(&self, sid: &str) -> Result<(), SessionStoreError>;
}

/// Process-local session store.
///
/// # Examples
///
/// ```rust,ignore
/// use account_client::domain::ports::{MemorySessionStore, SessionStore};
///
/// let store = MemorySessionStore::default();
/// assert_eq!(store.sid().await?, "");
/// store.set_sid("abc").await?;
/// assert_eq!(store.sid().await?, "abc");
/// ```
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sid: RwLock<String>,
}

impl MemorySessionStore {
    /// Create a store pre-populated with `sid`.
    pub fn with_sid(sid: impl Into<String>) -> Self {
        Self {
            sid: RwLock::new(sid.into()),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn sid(&self) -> Result<String, SessionStoreError> {
        // A poisoned lock still holds a complete string; writers never leave
        // it half-updated.
        let guard = self.sid.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    async fn set_sid(&self, sid: &str) -> Result<(), SessionStoreError> {
        let mut guard = self.sid.write().unwrap_or_else(PoisonError::into_inner);
        sid.clone_into(&mut *guard);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn unset_store_returns_empty_sid() {
        let store = MemorySessionStore::default();
        assert_eq!(store.sid().await.expect("read sid"), "");
    }

    #[tokio::test]
    async fn latest_write_is_visible_to_readers() {
        let store = MemorySessionStore::with_sid("first");
        store.set_sid("second").await.expect("write sid");
        assert_eq!(store.sid().await.expect("read sid"), "second");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writers_never_tear_the_value() {
        let store = Arc::new(MemorySessionStore::default());
        let candidates: Vec<String> = (0..16).map(|n| format!("sid-{n:02}")).collect();

        let mut handles = Vec::new();
        for sid in candidates.clone() {
            let writer = Arc::clone(&store);
            handles.push(tokio::spawn(async move { writer.set_sid(&sid).await }));
            let reader = Arc::clone(&store);
            handles.push(tokio::spawn(async move { reader.sid().await.map(drop) }));
        }
        for handle in handles {
            handle.await.expect("task join").expect("store call");
        }

        let last = store.sid().await.expect("read sid");
        assert!(candidates.contains(&last), "unexpected sid {last:?}");
    }
}
