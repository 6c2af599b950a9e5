//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod convert;
pub(crate) mod example;
pub(crate) mod serve;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use mermaid_config::{CliSettings, Config};
use mermaid_ink::MermaidConverter;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use convert::ConvertArgs;
pub(crate) use example::ExampleArgs;
pub(crate) use serve::ServeArgs;

/// Renderer options shared by every command that talks to mermaid.ink.
#[derive(Args)]
pub(crate) struct RendererArgs {
    /// Path to configuration file (default: auto-discover mermaid-mcp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// mermaid.ink base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Conversion timeout in seconds (overrides config).
    #[arg(long, value_name = "SECS")]
    convert_timeout: Option<u64>,

    /// Syntax-check timeout in seconds (overrides config).
    #[arg(long, value_name = "SECS")]
    validate_timeout: Option<u64>,
}

impl RendererArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            convert_timeout_secs: self.convert_timeout,
            validate_timeout_secs: self.validate_timeout,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Build a converter from the loaded configuration.
    pub(crate) fn converter(&self) -> Result<MermaidConverter, CliError> {
        let config = self.load_config()?;
        Ok(converter_from_config(&config))
    }
}

/// Build a converter with the configured endpoint and timeouts.
pub(crate) fn converter_from_config(config: &Config) -> MermaidConverter {
    let renderer = &config.renderer;
    MermaidConverter::new(renderer.base_url.as_str())
        .convert_timeout(renderer.convert_timeout())
        .validate_timeout(renderer.validate_timeout())
}

/// Read diagram source from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Parser)]
    struct RendererCli {
        #[command(flatten)]
        renderer: RendererArgs,
    }

    #[test]
    fn test_timeout_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mermaid-mcp.toml");
        std::fs::write(&path, "[renderer]\nconvert_timeout_secs = 20\n").unwrap();

        let cli = RendererCli::try_parse_from([
            "mermaid-mcp",
            "--config",
            path.to_str().unwrap(),
            "--convert-timeout",
            "60",
            "--validate-timeout",
            "5",
        ])
        .unwrap();
        let config = cli.renderer.load_config().unwrap();
        assert_eq!(config.renderer.convert_timeout(), Duration::from_secs(60));
        assert_eq!(config.renderer.validate_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_timeout_flag_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mermaid-mcp.toml");
        std::fs::write(&path, "").unwrap();

        let cli = RendererCli::try_parse_from([
            "mermaid-mcp",
            "--config",
            path.to_str().unwrap(),
            "--validate-timeout",
            "0",
        ])
        .unwrap();
        let err = cli.renderer.load_config().unwrap_err();
        assert!(err.to_string().contains("renderer.validate_timeout_secs"));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.mmd");
        std::fs::write(&path, "pie\n  \"A\" : 1\n").unwrap();

        assert_eq!(read_input(&path).unwrap(), "pie\n  \"A\" : 1\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.mmd")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_converter_from_config() {
        let mut config = Config::default();
        config.renderer.base_url = "http://localhost:3000/".to_owned();
        config.renderer.convert_timeout_secs = 5;

        let converter = converter_from_config(&config);
        assert_eq!(converter.base_url(), "http://localhost:3000");
        assert_eq!(config.renderer.convert_timeout(), Duration::from_secs(5));
    }
}
