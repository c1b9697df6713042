//! Validation and classification of raw account service responses.
//!
//! The service answers with XML on success and failure alike, but proxies
//! and outages produce HTML or JSON. Classification works on the status,
//! declared media type and body only, so it can be exercised without a
//! network.

use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::dto::{ErrorDocumentDto, UsersDocumentDto};
use crate::domain::UserInfo;
use crate::domain::ports::AccountApiError;

const ERROR_ROOT: &str = "error";
const USERS_ROOT: &str = "users";

/// A response body confirmed to be well-formed XML, with its root element's
/// local name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResponse<'a> {
    body: &'a str,
    root: String,
}

impl<'a> ValidatedResponse<'a> {
    /// The validated body.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Local name of the document's root element.
    pub fn root(&self) -> &str {
        self.root.as_str()
    }
}

/// Classify a raw response as usable XML or as an [`AccountApiError`].
///
/// `content_type` is the raw `Content-Type` header; parameters such as
/// `charset` are ignored. Any root other than `error` is passed through,
/// including unexpected ones: [`decode_user_list`] checks the root it needs.
///
/// # Errors
///
/// - [`AccountApiError::Api`] for non-XML responses and service error
///   documents.
/// - [`AccountApiError::AuthRequired`] when any failure entry has cause
///   `invalid_token`.
/// - [`AccountApiError::InvalidResponse`] when the body is not well-formed
///   XML.
///
/// # Examples
///
/// ```
/// use account_client::outbound::account_api::classify_response;
/// use reqwest::StatusCode;
///
/// let body = br#"<error code="5"><failure field="f" cause="invalid_token" value="v"/></error>"#;
/// let error = classify_response(StatusCode::OK, Some("text/xml"), body).unwrap_err();
/// assert!(error.is_auth_required());
/// ```
pub fn classify_response<'a>(
    status: StatusCode,
    content_type: Option<&str>,
    body: &'a [u8],
) -> Result<ValidatedResponse<'a>, AccountApiError> {
    let media_type = media_type(content_type);
    if media_type != "application/xml" && media_type != "text/xml" {
        if status != StatusCode::OK {
            return Err(AccountApiError::api(format!(
                "response status {} ({})",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            )));
        }
        return Err(AccountApiError::api(format!(
            "expected xml, got {media_type:?}"
        )));
    }

    let body = std::str::from_utf8(body)
        .map_err(|error| AccountApiError::invalid_response(format!("invalid xml: {error}")))?;
    let root = root_element_name(body)
        .map_err(|message| AccountApiError::invalid_response(format!("invalid xml: {message}")))?;

    if root == ERROR_ROOT {
        return Err(classify_error_document(body));
    }

    debug!(%root, status = status.as_u16(), "account service returned xml document");
    Ok(ValidatedResponse { body, root })
}

/// Decode a validated `users` document into user records.
///
/// # Errors
///
/// - [`AccountApiError::InvalidResponse`] when the root is not `users` or the
///   document does not match the expected shape.
/// - [`AccountApiError::InvalidUserId`] when any `userId` is not an integer;
///   no records are returned in that case.
pub fn decode_user_list(response: &ValidatedResponse<'_>) -> Result<Vec<UserInfo>, AccountApiError> {
    if response.root != USERS_ROOT {
        return Err(AccountApiError::invalid_response(format!(
            "unexpected {} response",
            response.root
        )));
    }
    let document: UsersDocumentDto = quick_xml::de::from_str(response.body)
        .map_err(|error| AccountApiError::invalid_response(format!("invalid xml: {error}")))?;
    document.into_domain_users()
}

fn classify_error_document(body: &str) -> AccountApiError {
    let document: ErrorDocumentDto = match quick_xml::de::from_str(body) {
        Ok(document) => document,
        Err(error) => {
            return AccountApiError::api(format!(
                "response `{}` (unmarshal: {error})",
                body_preview(body)
            ));
        }
    };

    if document.failures.iter().any(|failure| failure.is_invalid_token()) {
        warn!(code = document.code, "account service rejected the session token");
        return AccountApiError::auth_required("invalid token");
    }

    match document.failures.as_slice() {
        [failure] => AccountApiError::api(format!(
            "error {}: {} ({}) {:?}",
            document.code, failure.cause, failure.field, failure.value
        )),
        _ => AccountApiError::api(format!("error {}: response `{body}`", document.code)),
    }
}

/// Extract the root element's local name, reading until the root closes.
fn root_element_name(body: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(body);
    let mut root: Option<String> = None;
    let mut depth = 0_usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_none() {
                    root = Some(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
                }
                depth += 1;
            }
            Ok(Event::Empty(start)) => {
                if depth == 0 {
                    return Ok(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return root.ok_or_else(|| "unexpected closing tag".to_owned());
                }
            }
            Ok(Event::Eof) => {
                return Err(match root {
                    Some(name) => format!("unexpected end of document inside <{name}>"),
                    None => "document has no root element".to_owned(),
                });
            }
            Ok(_) => {}
            Err(error) => return Err(error.to_string()),
        }
    }
}

fn media_type(content_type: Option<&str>) -> String {
    content_type
        .and_then(|value| value.split(';').next())
        .map(|media| media.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

fn body_preview(body: &str) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
