//! DTOs for decoding account service XML documents.
//!
//! Attributes use quick-xml's `@name` renames; child elements use their
//! element names. Missing attributes and elements decode to defaults, which
//! matches how the service omits empty values.

use serde::Deserialize;

use crate::domain::UserInfo;
use crate::domain::ports::AccountApiError;

/// `<error code="N"><failure field="" cause="" value=""/>*</error>`
#[derive(Debug, Deserialize)]
pub(super) struct ErrorDocumentDto {
    #[serde(rename = "@code", default)]
    pub(super) code: i64,
    #[serde(rename = "failure", default)]
    pub(super) failures: Vec<FailureDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FailureDto {
    #[serde(rename = "@field", default)]
    pub(super) field: String,
    #[serde(rename = "@cause", default)]
    pub(super) cause: String,
    #[serde(rename = "@value", default)]
    pub(super) value: String,
}

/// `<users><user>...</user>*</users>`
#[derive(Debug, Deserialize)]
pub(super) struct UsersDocumentDto {
    #[serde(rename = "user", default)]
    pub(super) users: Vec<UserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    #[serde(rename = "userId", default)]
    pub(super) user_id: String,
    #[serde(rename = "personaId", default)]
    pub(super) persona_id: String,
    #[serde(rename = "EAID", default)]
    pub(super) eaid: String,
}

impl UsersDocumentDto {
    pub(super) fn into_domain_users(self) -> Result<Vec<UserInfo>, AccountApiError> {
        self.users
            .into_iter()
            .map(UserDto::into_domain_user)
            .collect()
    }
}

impl UserDto {
    fn into_domain_user(self) -> Result<UserInfo, AccountApiError> {
        let user_id = self.user_id.parse::<i64>().map_err(|error| {
            AccountApiError::invalid_user_id(self.user_id.as_str(), error.to_string())
        })?;
        Ok(UserInfo::new(user_id, self.persona_id, self.eaid))
    }
}

impl FailureDto {
    pub(super) fn is_invalid_token(&self) -> bool {
        self.cause == "invalid_token"
    }
}
