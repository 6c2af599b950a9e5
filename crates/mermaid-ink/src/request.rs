//! Conversion arguments and their validation.

use schemars::JsonSchema;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};

use crate::encode::{clean_source, encode_diagram};
use crate::error::ConvertError;
use crate::options::{BackgroundColor, OutputFormat, Theme};

/// Raw arguments of a conversion, as supplied by the caller.
///
/// Missing fields fall back to the documented defaults during
/// [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConversionArgs {
    /// Mermaid diagram source to convert.
    pub mermaid_code: Option<String>,
    /// Output format: png, jpg, jpeg, svg or pdf. Defaults to png.
    pub output_format: Option<String>,
    /// Visual theme: default, dark, neutral or forest. Defaults to default.
    pub theme: Option<String>,
    /// Background color as hex (FF0000) or a named color with a ! prefix (!white).
    pub background_color: Option<String>,
    /// Image width in pixels.
    #[serde(deserialize_with = "pixel_dimension")]
    #[schemars(with = "Option<u32>")]
    pub width: Option<u32>,
    /// Image height in pixels.
    #[serde(deserialize_with = "pixel_dimension")]
    #[schemars(with = "Option<u32>")]
    pub height: Option<u32>,
}

/// Accept a pixel size written as an integer or a whole float (`800.0`).
fn pixel_dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if !(0.0..=f64::from(u32::MAX)).contains(&value) || value.fract() > 0.0 {
        return Err(D::Error::invalid_value(
            Unexpected::Float(value),
            &"a non-negative whole number of pixels",
        ));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pixels = value as u32;
    Ok(Some(pixels))
}

impl ConversionArgs {
    /// Create arguments for the given diagram with default options.
    pub fn new(mermaid_code: impl Into<String>) -> Self {
        Self {
            mermaid_code: Some(mermaid_code.into()),
            ..Self::default()
        }
    }

    /// Set the output format.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the image dimensions.
    #[must_use]
    pub fn with_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validate and normalize the arguments.
    ///
    /// Checks run in order: diagram text, output format, theme. An
    /// unrecognized background color is dropped rather than rejected, and
    /// a zero width or height counts as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::EmptyInput`], [`ConvertError::UnsupportedFormat`]
    /// or [`ConvertError::UnsupportedTheme`].
    pub fn validate(&self) -> Result<ConversionRequest, ConvertError> {
        let source = require_source(self.mermaid_code.as_deref())?;

        let format = match self.output_format.as_deref() {
            None => OutputFormat::default(),
            Some(name) => OutputFormat::parse(name)
                .ok_or_else(|| ConvertError::UnsupportedFormat(name.to_ascii_lowercase()))?,
        };

        let theme = match self.theme.as_deref() {
            None => Theme::default(),
            Some(name) => {
                Theme::parse(name).ok_or_else(|| ConvertError::UnsupportedTheme(name.to_owned()))?
            }
        };

        let background = self
            .background_color
            .as_deref()
            .filter(|c| !c.is_empty())
            .and_then(BackgroundColor::parse);

        Ok(ConversionRequest {
            source,
            format,
            theme,
            background,
            width: self.width.filter(|&w| w > 0),
            height: self.height.filter(|&h| h > 0),
        })
    }
}

/// Validated conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Diagram source with fence markers stripped and whitespace trimmed.
    pub source: String,
    pub format: OutputFormat,
    pub theme: Theme,
    pub background: Option<BackgroundColor>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ConversionRequest {
    /// URL-safe base64 of the cleaned source.
    #[must_use]
    pub fn encoded_diagram(&self) -> String {
        encode_diagram(&self.source)
    }
}

/// Require non-blank diagram text and return it cleaned.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyInput`] if the text is absent or whitespace only.
pub fn require_source(mermaid_code: Option<&str>) -> Result<String, ConvertError> {
    match mermaid_code {
        Some(code) if !code.trim().is_empty() => Ok(clean_source(code)),
        _ => Err(ConvertError::EmptyInput),
    }
}
