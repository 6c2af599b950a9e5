//! `mermaid-mcp serve` command implementation.

use clap::Args;
use mermaid_server::{MermaidServer, serve_stdio};

use super::{RendererArgs, converter_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    renderer: RendererArgs,

    /// Enable verbose output (log every conversion request).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the MCP session breaks.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.renderer.load_config()?;

        output.heading("Mermaid MCP server on stdio");
        output.renderer(&config);

        let server = MermaidServer::new(converter_from_config(&config), version);
        serve_stdio(server).await?;

        Ok(())
    }
}
