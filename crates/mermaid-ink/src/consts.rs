//! Internal constants for mermaid.ink rendering.

use std::time::Duration;

/// Public mermaid.ink endpoint.
pub const DEFAULT_BASE_URL: &str = "https://mermaid.ink";

/// Default HTTP timeout for conversion requests (30 seconds).
pub const DEFAULT_CONVERT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default HTTP timeout for syntax checks (10 seconds).
pub const DEFAULT_VALIDATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Stem of the synthetic filename reported for converted diagrams.
pub(crate) const FILENAME_STEM: &str = "mermaid_diagram";
