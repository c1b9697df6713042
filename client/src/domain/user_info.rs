//! User records returned by the account service directory.

/// One user resolved by identifier.
///
/// Produced only by decoding a successful `users` response; the fields are
/// fixed at construction.
///
/// # Examples
/// ```
/// use account_client::domain::UserInfo;
///
/// let user = UserInfo::new(42, "abc", "xyz");
/// assert_eq!(user.user_id(), 42);
/// assert_eq!(user.persona_id(), "abc");
/// assert_eq!(user.eaid(), "xyz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserInfo {
    user_id: i64,
    persona_id: String,
    eaid: String,
}

impl UserInfo {
    /// Build a user record from its decoded parts.
    pub fn new(user_id: i64, persona_id: impl Into<String>, eaid: impl Into<String>) -> Self {
        Self {
            user_id,
            persona_id: persona_id.into(),
            eaid: eaid.into(),
        }
    }

    /// Numeric account identifier.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Persona identifier attached to the account.
    pub fn persona_id(&self) -> &str {
        self.persona_id.as_str()
    }

    /// Public account name (the service's `EAID` field).
    pub fn eaid(&self) -> &str {
        self.eaid.as_str()
    }
}
