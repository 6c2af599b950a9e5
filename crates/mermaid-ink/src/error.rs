//! Error types for diagram conversion.

use crate::options::{ACCEPTED_FORMATS, SUPPORTED_THEMES};

/// Error from validating, encoding or rendering a diagram.
///
/// Every variant renders a message suitable for returning to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Diagram text was missing or whitespace only.
    #[error("Mermaid code is required and cannot be empty")]
    EmptyInput,

    /// Output format outside the supported set.
    #[error(
        "Invalid output format '{0}'. Supported formats: {formats}",
        formats = ACCEPTED_FORMATS.join(", ")
    )]
    UnsupportedFormat(String),

    /// Theme outside the supported set.
    #[error(
        "Invalid theme '{0}'. Supported themes: {themes}",
        themes = SUPPORTED_THEMES.join(", ")
    )]
    UnsupportedTheme(String),

    /// Diagram could not be encoded or decoded.
    #[error("Failed to encode diagram: {0}")]
    Encoding(String),

    /// Renderer rejected the diagram source (HTTP 400).
    #[error("Invalid Mermaid syntax: {0}")]
    InvalidSyntax(String),

    /// Renderer rejected the request size (HTTP 413).
    #[error("Diagram is too large for the API")]
    PayloadTooLarge,

    /// Request did not complete within the timeout.
    #[error("Conversion timed out - mermaid.ink took too long to respond")]
    Timeout,

    /// Renderer host could not be reached.
    #[error("Connection error: unable to reach the mermaid.ink service")]
    Connection,

    /// Renderer answered with an unexpected status.
    #[error("Conversion failed: HTTP {0}")]
    Upstream(u16),

    /// Any other transport failure.
    #[error("Request error: {0}")]
    Transport(String),
}

impl ConvertError {
    /// Whether the error was raised before any network call.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::UnsupportedFormat(_)
                | Self::UnsupportedTheme(_)
                | Self::Encoding(_)
        )
    }
}
