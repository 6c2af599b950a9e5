//! Colored stderr reporting for CLI commands.
//!
//! Stdout is left for protocol messages, image bytes and example sources.

use std::path::Path;

use console::{Style, Term};
use mermaid_config::Config;
use mermaid_ink::RenderedImage;

/// Terminal reporter.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    failure: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            failure: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.failure.apply_to(msg).to_string());
    }

    pub(crate) fn heading(&self, msg: &str) {
        let _ = self.term.write_line(&self.heading.apply_to(msg).to_string());
    }

    /// Report a converted image written to `path`.
    pub(crate) fn written(&self, path: &Path, image: &RenderedImage) {
        let line = written_line(path, image);
        let _ = self.term.write_line(&self.ok.apply_to(line).to_string());
    }

    /// Report a diagram accepted by mermaid.ink.
    pub(crate) fn valid(&self, input: &Path, message: &str) {
        let line = format!("{}: {message}", input.display());
        let _ = self.term.write_line(&self.ok.apply_to(line).to_string());
    }

    /// Print the renderer settings a command runs with.
    pub(crate) fn renderer(&self, config: &Config) {
        if let Some(path) = &config.config_path {
            self.info(&format!("Config: {}", path.display()));
        }
        for line in renderer_lines(config) {
            self.info(&line);
        }
    }
}

fn written_line(path: &Path, image: &RenderedImage) -> String {
    format!(
        "Wrote {} ({}, {})",
        path.display(),
        image.mime_type,
        human_size(image.size_bytes)
    )
}

fn renderer_lines(config: &Config) -> [String; 2] {
    let renderer = &config.renderer;
    [
        format!("mermaid.ink URL: {}", renderer.base_url),
        format!(
            "Timeouts: convert {}s, validate {}s",
            renderer.convert_timeout_secs, renderer.validate_timeout_secs
        ),
    ]
}

/// Byte count with a binary unit, e.g. `1.5 KiB`.
#[allow(clippy::cast_precision_loss)]
fn human_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for &next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}
