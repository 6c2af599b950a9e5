//! `mermaid-mcp check` command implementation.

use std::path::PathBuf;

use clap::Args;
use mermaid_ink::ValidationResult;

use super::{RendererArgs, read_input};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Diagram source file, or `-` to read stdin.
    input: PathBuf,

    #[command(flatten)]
    renderer: RendererArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Validation`] if mermaid.ink rejects the diagram.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let converter = self.renderer.converter()?;
        let source = read_input(&self.input)?;

        match converter.validate(Some(&source)) {
            ValidationResult::Valid { message } => {
                output.valid(&self.input, &message);
                Ok(())
            }
            ValidationResult::Invalid { error } => Err(CliError::Validation(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_fails_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.mmd");
        std::fs::write(&input, "\n\n").unwrap();

        let args = CheckArgs {
            input,
            renderer: RendererArgs {
                config: None,
                base_url: Some("http://127.0.0.1:9".to_owned()),
                convert_timeout: None,
                validate_timeout: None,
            },
        };
        let err = args.execute().unwrap_err();

        assert!(matches!(&err, CliError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Mermaid code is required and cannot be empty"
        );
    }
}
