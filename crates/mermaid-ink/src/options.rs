//! Output formats, themes and background colors accepted by mermaid.ink.

use serde::Serialize;

/// Output format of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
    Jpeg,
    Svg,
    Pdf,
}

/// Every format name accepted by [`OutputFormat::parse`].
pub const ACCEPTED_FORMATS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "pdf"];

/// Format names advertised to callers (`jpeg` is accepted as an alias of `jpg`).
pub const SUPPORTED_FORMATS: [&str; 4] = ["png", "jpg", "svg", "pdf"];

impl OutputFormat {
    /// Parse format name, ignoring ASCII case.
    ///
    /// Returns None if the format is not supported.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "svg" => Some(Self::Svg),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Return format as its lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    /// mermaid.ink endpoint serving this format.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Png | Self::Jpg | Self::Jpeg => "img",
        }
    }

    /// Whether the format is served by the raster `img` endpoint.
    ///
    /// Only raster requests carry `type` and `theme` query parameters.
    #[must_use]
    pub fn is_raster(self) -> bool {
        matches!(self, Self::Png | Self::Jpg | Self::Jpeg)
    }

    /// MIME type of the rendered payload.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Svg => "image/svg+xml",
            Self::Pdf => "application/pdf",
        }
    }
}

/// Visual theme applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Neutral,
    Forest,
}

/// Every theme name accepted by [`Theme::parse`].
pub const SUPPORTED_THEMES: [&str; 4] = ["default", "dark", "neutral", "forest"];

impl Theme {
    /// Parse theme name. Matching is case-sensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "dark" => Some(Self::Dark),
            "neutral" => Some(Self::Neutral),
            "forest" => Some(Self::Forest),
            _ => None,
        }
    }

    /// Return theme as its name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Neutral => "neutral",
            Self::Forest => "forest",
        }
    }
}

/// Background color accepted by mermaid.ink's `bgColor` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundColor {
    /// Named color, stored with its leading `!` (e.g. `!white`).
    Named(String),
    /// Six hex digits without `#`, case preserved.
    Hex(String),
}

impl BackgroundColor {
    /// Parse a background color.
    ///
    /// `!name` is passed through verbatim. Anything else must be six hex
    /// digits after stripping leading `#`. Other shapes yield None.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with('!') {
            return Some(Self::Named(s.to_owned()));
        }

        let hex = s.trim_start_matches('#');
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self::Hex(hex.to_owned()))
        } else {
            None
        }
    }

    /// Value sent in the `bgColor` query parameter (before percent-encoding).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Hex(hex) => hex,
        }
    }
}

/// Formats and themes exposed by `get_supported_options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedOptions {
    pub themes: Vec<&'static str>,
    pub formats: Vec<&'static str>,
}

/// Return the fixed lists of supported themes and formats.
#[must_use]
pub fn supported_options() -> SupportedOptions {
    SupportedOptions {
        themes: SUPPORTED_THEMES.to_vec(),
        formats: SUPPORTED_FORMATS.to_vec(),
    }
}
