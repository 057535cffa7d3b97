//! Evaluator invitation links.
//!
//! Links have the form `{origin}/360-evaluator/{token}` with the token
//! percent-encoded. The token itself is opaque to this crate.

use crate::Locale;
use crate::error::CoreError;

pub const EVALUATOR_SEGMENT: &str = "360-evaluator";

pub fn invitation_link(origin: &str, token: &str) -> String {
    format!(
        "{}/{EVALUATOR_SEGMENT}/{}",
        origin.trim_end_matches('/'),
        urlencoding::encode(token)
    )
}

/// Same as [`invitation_link`] with the locale path prefix the frontend
/// routes on.
pub fn localized_invitation_link(origin: &str, locale: Locale, token: &str) -> String {
    format!(
        "{}/{locale}/{EVALUATOR_SEGMENT}/{}",
        origin.trim_end_matches('/'),
        urlencoding::encode(token)
    )
}

/// Decode the token path segment received by the evaluator page.
pub fn decode_token(segment: &str) -> Result<String, CoreError> {
    let decoded = urlencoding::decode(segment)
        .map_err(|e| CoreError::InvalidToken(e.to_string()))?
        .into_owned();
    if decoded.trim().is_empty() {
        return Err(CoreError::InvalidToken("empty token".to_string()));
    }
    Ok(decoded)
}

/// Pull the decoded token out of a full invitation link, ignoring any
/// query string or fragment.
pub fn token_from_link(link: &str) -> Result<String, CoreError> {
    let path = link.split(['?', '#']).next().unwrap_or(link);
    let marker = format!("/{EVALUATOR_SEGMENT}/");
    let start = path
        .rfind(&marker)
        .ok_or_else(|| CoreError::InvalidToken(format!("not an invitation link: {link}")))?;
    let segment = path[start + marker.len()..].trim_end_matches('/');
    decode_token(segment)
}
