//! Conversion and validation pipelines.
//!
//! This module provides [`MermaidConverter`], which runs the straight-line
//! pipeline behind each tool: validate, encode, build URL, call mermaid.ink,
//! package the result.

use std::time::Duration;

use ureq::Agent;

use crate::consts::{DEFAULT_BASE_URL, DEFAULT_CONVERT_TIMEOUT, DEFAULT_VALIDATE_TIMEOUT};
use crate::encode::encode_diagram;
use crate::error::ConvertError;
use crate::request::{ConversionArgs, require_source};
use crate::result::{ConversionResult, RenderedImage, ValidationResult};
use crate::transport::{check_syntax, create_agent, fetch_image};
use crate::url::{build_check_url, build_request_url};

/// Converts Mermaid sources to images via mermaid.ink.
///
/// Holds no per-call state; one converter serves any number of calls.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use mermaid_ink::{ConversionArgs, MermaidConverter};
///
/// let converter = MermaidConverter::new("https://mermaid.ink")
///     .convert_timeout(Duration::from_secs(60));
///
/// let result = converter.convert(&ConversionArgs::new("graph TD\nA-->B").with_format("svg"));
/// assert!(result.is_success());
/// ```
pub struct MermaidConverter {
    /// mermaid.ink base URL, without trailing slash.
    base_url: String,
    /// Agent for conversion GETs.
    convert_agent: Agent,
    /// Agent for syntax-check HEADs.
    validate_agent: Agent,
}

impl MermaidConverter {
    /// Create a converter against the given mermaid.ink base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            convert_agent: create_agent(DEFAULT_CONVERT_TIMEOUT),
            validate_agent: create_agent(DEFAULT_VALIDATE_TIMEOUT),
        }
    }

    /// Set HTTP timeout for conversion requests.
    ///
    /// Default is 30 seconds.
    #[must_use]
    pub fn convert_timeout(mut self, timeout: Duration) -> Self {
        self.convert_agent = create_agent(timeout);
        self
    }

    /// Set HTTP timeout for syntax checks.
    ///
    /// Default is 10 seconds.
    #[must_use]
    pub fn validate_timeout(mut self, timeout: Duration) -> Self {
        self.validate_agent = create_agent(timeout);
        self
    }

    /// mermaid.ink base URL in use.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convert a diagram to an image.
    ///
    /// Invalid arguments are rejected before any network call. Every failure
    /// is reported in the returned result.
    pub fn convert(&self, args: &ConversionArgs) -> ConversionResult {
        let result = self.try_convert(args);
        if let Err(err) = &result {
            if err.is_input_error() {
                tracing::warn!(error = %err, "Rejected conversion request");
            } else {
                tracing::error!(error = %err, "Conversion failed");
            }
        }
        result.into()
    }

    fn try_convert(&self, args: &ConversionArgs) -> Result<RenderedImage, ConvertError> {
        let request = args.validate()?;

        tracing::info!(
            format = request.format.as_str(),
            theme = request.theme.as_str(),
            "Converting Mermaid diagram"
        );

        let url = build_request_url(&self.base_url, &request);
        tracing::info!(url = %url, "Requesting mermaid.ink");

        let bytes = fetch_image(&self.convert_agent, &url)?;
        tracing::info!(
            format = request.format.as_str(),
            size_bytes = bytes.len(),
            "Converted diagram"
        );

        Ok(RenderedImage::new(&request, &bytes))
    }

    /// Check diagram syntax by asking mermaid.ink to render it as SVG.
    pub fn validate(&self, mermaid_code: Option<&str>) -> ValidationResult {
        let outcome = require_source(mermaid_code).and_then(|source| {
            let encoded = encode_diagram(&source);
            let url = build_check_url(&self.base_url, &encoded);
            tracing::debug!(url = %url, "Checking Mermaid syntax");
            check_syntax(&self.validate_agent, &url)
        });

        if let Err(err) = &outcome {
            tracing::info!(error = %err, "Syntax check failed");
        }
        ValidationResult::from_check(outcome)
    }
}

impl Default for MermaidConverter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
