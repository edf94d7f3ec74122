//! Palette sharing as compact URL-embeddable tokens.
//!
//! A token is the palette's canonical JSON wire form, UTF-8 encoded,
//! then base64 encoded with the standard alphabet. Decoding validates
//! the payload shape before any state is touched, so a malformed token
//! can never disturb the current document. Node ids are not part of the
//! wire form; fresh ids are minted on decode.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::Url;

use crate::error::PaletteError;
use crate::models::Palette;

/// Query parameter carrying a share token on a page URL.
pub const SHARE_QUERY_PARAM: &str = "palette";

/// Encodes a palette as a share token.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPaletteShare`] for a palette with no
/// groups; there is nothing worth sharing and no external call should be
/// made.
pub fn encode(palette: &Palette) -> Result<String, PaletteError> {
    if palette.is_empty() {
        return Err(PaletteError::EmptyPaletteShare);
    }

    // The wire form is plain strings and sequences; serialization cannot fail
    let json = serde_json::to_vec(palette).expect("palette wire form serializes");
    Ok(STANDARD.encode(json))
}

/// Decodes a share token back into a palette.
///
/// The payload must be a JSON object with a string `name` and an array
/// `groups`; anything else is rejected without side effects.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidShareToken`] describing the first
/// decoding or validation failure.
pub fn decode(token: &str) -> Result<Palette, PaletteError> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|e| PaletteError::InvalidShareToken(format!("not base64: {e}")))?;

    let text = String::from_utf8(bytes)
        .map_err(|_| PaletteError::InvalidShareToken("payload is not UTF-8".to_string()))?;

    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| PaletteError::InvalidShareToken(format!("payload is not JSON: {e}")))?;

    let name_ok = value.get("name").is_some_and(serde_json::Value::is_string);
    let groups_ok = value.get("groups").is_some_and(serde_json::Value::is_array);
    if !name_ok || !groups_ok {
        return Err(PaletteError::InvalidShareToken(
            "payload does not look like a palette (needs 'name' and 'groups')".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| PaletteError::InvalidShareToken(format!("malformed palette: {e}")))
}

/// Builds a shareable link by attaching the token to a base URL.
///
/// The token goes into the [`SHARE_QUERY_PARAM`] query parameter;
/// characters outside the query-safe set are percent-encoded, and
/// [`token_from_url`] undoes that on the way back in.
pub fn share_url(base: &str, token: &str) -> Result<String, PaletteError> {
    let mut url = Url::parse(base)
        .map_err(|e| PaletteError::InvalidShareToken(format!("bad base URL: {e}")))?;
    url.query_pairs_mut().append_pair(SHARE_QUERY_PARAM, token);
    Ok(url.to_string())
}

/// Extracts a share token from a page URL, if one is present.
#[must_use]
pub fn token_from_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == SHARE_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}
