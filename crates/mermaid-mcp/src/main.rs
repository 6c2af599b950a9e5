//! Mermaid MCP - Mermaid diagram to image converter.
//!
//! Provides commands for:
//! - `serve`: Run the MCP server over stdin/stdout
//! - `convert`: Render a diagram file to an image
//! - `check`: Validate diagram syntax
//! - `example`: Print an example diagram

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ConvertArgs, ExampleArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mermaid MCP - render Mermaid diagrams through mermaid.ink.
#[derive(Parser)]
#[command(name = "mermaid-mcp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdin/stdout.
    Serve(ServeArgs),
    /// Convert a diagram to an image file.
    Convert(ConvertArgs),
    /// Check diagram syntax against mermaid.ink.
    Check(CheckArgs),
    /// Print an example diagram, or list the available types.
    Example(ExampleArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
    // Stdout is reserved for protocol messages and image data.
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Convert(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Example(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_arguments() {
        let cli = Cli::try_parse_from([
            "mermaid-mcp",
            "convert",
            "diagram.mmd",
            "-f",
            "svg",
            "-t",
            "dark",
            "--width",
            "800",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Convert(_)));
    }

    #[test]
    fn test_parse_timeout_flags() {
        let cli = Cli::try_parse_from([
            "mermaid-mcp",
            "serve",
            "--convert-timeout",
            "60",
            "--validate-timeout",
            "5",
        ]);
        assert!(matches!(cli.map(|c| c.command), Ok(Commands::Serve(_))));
        let bad = Cli::try_parse_from(["mermaid-mcp", "check", "-", "--convert-timeout", "soon"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_verbose_only_on_serve() {
        assert!(Cli::try_parse_from(["mermaid-mcp", "serve", "-v"]).is_ok());
        assert!(Cli::try_parse_from(["mermaid-mcp", "check", "-", "-v"]).is_err());
    }
}
