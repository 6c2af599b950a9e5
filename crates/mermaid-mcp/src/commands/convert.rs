//! `mermaid-mcp convert` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use mermaid_ink::{ConversionArgs, RenderedImage};

use super::{RendererArgs, read_input};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Diagram source file, or `-` to read stdin.
    input: PathBuf,

    /// Output file, or `-` for stdout (default: `mermaid_diagram.<format>`).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: png, jpg, jpeg, svg or pdf.
    #[arg(short, long, default_value = "png")]
    format: String,

    /// Theme: default, dark, neutral or forest.
    #[arg(short, long, default_value = "default")]
    theme: String,

    /// Background color as hex (FF0000) or !name (!white).
    #[arg(long)]
    background: Option<String>,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    #[command(flatten)]
    renderer: RendererArgs,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the conversion fails, or
    /// the image cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let converter = self.renderer.converter()?;
        let source = read_input(&self.input)?;

        let mut args = ConversionArgs::new(source)
            .with_format(self.format.as_str())
            .with_theme(self.theme.as_str())
            .with_size(self.width, self.height);
        if let Some(color) = &self.background {
            args = args.with_background(color.as_str());
        }

        output.info(&format!("Converting {}...", self.input.display()));
        let image = converter.convert(&args).into_result()?;
        let bytes = image.decode()?;

        let target = self.output_path(&image);
        if target.as_os_str() == "-" {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        } else {
            std::fs::write(&target, &bytes)?;
            output.written(&target, &image);
        }

        Ok(())
    }

    /// Output path, defaulting to the filename suggested by the renderer.
    fn output_path(&self, image: &RenderedImage) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&image.filename))
    }
}
