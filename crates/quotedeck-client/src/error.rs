use thiserror::Error;

use quotedeck_core::{ConfigError, ValidationError};

/// Top-level CLI error. Anything that reaches `main` is printed and mapped
/// to a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
