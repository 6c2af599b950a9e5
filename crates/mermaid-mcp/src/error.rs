//! CLI error types.

use mermaid_config::ConfigError;
use mermaid_ink::ConvertError;
use mermaid_server::ServerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Validation(String),
}
