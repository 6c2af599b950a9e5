//! mermaid.ink request URL construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::options::Theme;
use crate::request::ConversionRequest;

/// Characters left unescaped in query values (RFC 3986 unreserved set).
///
/// Space is encoded separately as `+`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Build the request URL for a validated conversion request.
///
/// The cleaned source is encoded here, so the URL is a pure function of the
/// request and base URL.
#[must_use]
pub fn build_request_url(base_url: &str, request: &ConversionRequest) -> String {
    build_api_url(base_url, &request.encoded_diagram(), request)
}

/// Build the request URL from an already-encoded diagram.
///
/// Query parameters appear in a fixed order: `type`, `theme`, `bgColor`,
/// `width`, `height`. Each is added only when it applies; with none, the URL
/// has no query string.
#[must_use]
pub fn build_api_url(base_url: &str, encoded: &str, request: &ConversionRequest) -> String {
    let format = request.format;
    let base_url = base_url.trim_end_matches('/');
    let mut url = format!("{base_url}/{}/{encoded}", format.endpoint());

    let mut params: Vec<(&str, String)> = Vec::new();

    if format.is_raster() {
        params.push(("type", format.as_str().to_owned()));
        if request.theme != Theme::Default {
            params.push(("theme", request.theme.as_str().to_owned()));
        }
    }
    if let Some(color) = &request.background {
        params.push(("bgColor", color.as_str().to_owned()));
    }
    if let Some(width) = request.width {
        params.push(("width", width.to_string()));
    }
    if let Some(height) = request.height {
        params.push(("height", height.to_string()));
    }

    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        for chunk in utf8_percent_encode(value, QUERY_ENCODE_SET) {
            // Form encoding: space becomes `+`.
            url.push_str(if chunk == "%20" { "+" } else { chunk });
        }
    }

    url
}

/// Build the svg endpoint URL used for syntax checks.
#[must_use]
pub fn build_check_url(base_url: &str, encoded: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!("{base_url}/svg/{encoded}")
}
