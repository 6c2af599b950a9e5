//! Structured results returned to tool callers.
//!
//! Success and failure are always flagged explicitly (`success` / `valid`),
//! never inferred from missing fields.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use serde::Serialize;

use crate::consts::FILENAME_STEM;
use crate::error::ConvertError;
use crate::request::ConversionRequest;

/// Rendered diagram payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedImage {
    /// Raw response bytes as standard base64.
    pub image_base64: String,
    pub mime_type: &'static str,
    pub filename: String,
    pub size_bytes: usize,
    pub format: &'static str,
    pub theme: &'static str,
}

impl RenderedImage {
    /// Package raw renderer output for the given request.
    #[must_use]
    pub fn new(request: &ConversionRequest, bytes: &[u8]) -> Self {
        let format = request.format;
        Self {
            image_base64: BASE64_STANDARD.encode(bytes),
            mime_type: format.mime_type(),
            filename: format!("{FILENAME_STEM}.{}", format.as_str()),
            size_bytes: bytes.len(),
            format: format.as_str(),
            theme: request.theme.as_str(),
        }
    }

    /// Decode the payload back to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Encoding`] if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, ConvertError> {
        BASE64_STANDARD
            .decode(&self.image_base64)
            .map_err(|e| ConvertError::Encoding(e.to_string()))
    }
}

/// Outcome of a conversion.
///
/// Serializes as `{"success": true, "data": {...}}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Success(RenderedImage),
    Failure(ConvertError),
}

impl ConversionResult {
    /// Whether the conversion succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Convert into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure cause.
    pub fn into_result(self) -> Result<RenderedImage, ConvertError> {
        match self {
            Self::Success(image) => Ok(image),
            Self::Failure(err) => Err(err),
        }
    }
}

impl From<Result<RenderedImage, ConvertError>> for ConversionResult {
    fn from(result: Result<RenderedImage, ConvertError>) -> Self {
        match result {
            Ok(image) => Self::Success(image),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Wire shape of [`ConversionResult`].
#[derive(Serialize)]
struct ConversionWire<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a RenderedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for ConversionResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Success(image) => ConversionWire {
                success: true,
                data: Some(image),
                error: None,
            },
            Self::Failure(err) => ConversionWire {
                success: false,
                data: None,
                error: Some(err.to_string()),
            },
        };
        wire.serialize(serializer)
    }
}

/// Outcome of a syntax check.
///
/// Serializes as `{"valid": true, "message": "..."}` or
/// `{"valid": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid { message: String },
    Invalid { error: String },
}

impl ValidationResult {
    /// Successful check.
    #[must_use]
    pub fn valid() -> Self {
        Self::Valid {
            message: "Mermaid syntax is valid".to_owned(),
        }
    }

    /// Failed check with the given reason.
    #[must_use]
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::Invalid {
            error: error.into(),
        }
    }

    /// Build from the outcome of a syntax check.
    ///
    /// Messages are phrased for validation rather than conversion.
    #[must_use]
    pub fn from_check(outcome: Result<(), ConvertError>) -> Self {
        let Err(err) = outcome else {
            return Self::valid();
        };

        match err {
            ConvertError::InvalidSyntax(_) => Self::invalid("Invalid Mermaid syntax"),
            ConvertError::Upstream(status) => {
                Self::invalid(format!("Validation failed: HTTP {status}"))
            }
            ConvertError::PayloadTooLarge => Self::invalid("Validation failed: HTTP 413"),
            ConvertError::Timeout => Self::invalid("Validation timed out"),
            ConvertError::Connection => {
                Self::invalid("Connection error: unable to reach the validation service")
            }
            ConvertError::Transport(msg) => Self::invalid(format!("Validation error: {msg}")),
            input @ (ConvertError::EmptyInput
            | ConvertError::UnsupportedFormat(_)
            | ConvertError::UnsupportedTheme(_)
            | ConvertError::Encoding(_)) => Self::invalid(input.to_string()),
        }
    }

    /// Whether the diagram was accepted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Wire shape of [`ValidationResult`].
#[derive(Serialize)]
struct ValidationWire<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Valid { message } => ValidationWire {
                valid: true,
                message: Some(message),
                error: None,
            },
            Self::Invalid { error } => ValidationWire {
                valid: false,
                message: None,
                error: Some(error),
            },
        };
        wire.serialize(serializer)
    }
}
