//! Mermaid diagram rendering via the mermaid.ink API.
//!
//! This crate turns Mermaid source into rendered images by delegating to
//! mermaid.ink. No diagram is parsed or drawn locally:
//! - Validation of format, theme and background color arguments
//! - URL-safe base64 embedding of the diagram in the request path
//! - URL construction for the `img`, `svg` and `pdf` endpoints
//! - Single-attempt blocking HTTP calls with status classification
//! - Structured success/failure results for tool callers
//!
//! # Architecture
//!
//! - [`options`]: Output formats, themes, background colors, supported options
//! - [`request`]: Raw arguments and their validation
//! - [`encode`]: Fence stripping and base64 encoding
//! - [`url`]: Request URL construction
//! - [`transport`]: HTTP calls via `ureq`
//! - [`result`]: Result payloads returned to callers
//! - [`catalog`]: Example diagrams per diagram type
//! - [`converter`]: `MermaidConverter` running the full pipeline
//!
//! # Example
//!
//! ```
//! use mermaid_ink::{ConversionArgs, DEFAULT_BASE_URL, build_request_url};
//!
//! let request = ConversionArgs::new("graph TD\nA-->B")
//!     .with_format("png")
//!     .with_theme("dark")
//!     .validate()
//!     .unwrap();
//!
//! let url = build_request_url(DEFAULT_BASE_URL, &request);
//! assert!(url.ends_with("?type=png&theme=dark"));
//! ```

pub mod catalog;
mod consts;
mod converter;
pub mod encode;
mod error;
pub mod options;
pub mod request;
pub mod result;
pub mod transport;
pub mod url;

pub use catalog::{example, example_types, lookup_example};
pub use consts::{DEFAULT_BASE_URL, DEFAULT_CONVERT_TIMEOUT, DEFAULT_VALIDATE_TIMEOUT};
pub use converter::MermaidConverter;
pub use encode::{clean_source, decode_diagram, encode_diagram};
pub use error::ConvertError;
pub use options::{BackgroundColor, OutputFormat, SupportedOptions, Theme, supported_options};
pub use request::{ConversionArgs, ConversionRequest};
pub use result::{ConversionResult, RenderedImage, ValidationResult};
pub use url::{build_api_url, build_request_url};
