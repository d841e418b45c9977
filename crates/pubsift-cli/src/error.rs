//! Error types for the `get-papers-list` binary.

use thiserror::Error;

use super::*;

/// Error type alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, PubsiftCliError>;

/// Errors that end a `get-papers-list` run.
#[derive(Error, Debug)]
pub enum PubsiftCliError {
  /// Retrieval, parsing, configuration, or output failed in the library.
  #[error(transparent)]
  Pubsift(#[from] PubsiftError),

  /// Writing to the terminal failed.
  #[error(transparent)]
  Io(#[from] io::Error),
}

impl PubsiftCliError {
  /// Short hint shown under the error message, if one applies.
  pub fn hint(&self) -> Option<&'static str> {
    match self {
      Self::Pubsift(PubsiftError::Retrieval(_)) =>
        Some("Check your network connection and the configured base_url."),
      Self::Pubsift(PubsiftError::Search(_)) =>
        Some("Check the query syntax, e.g. balanced parentheses and valid field tags."),
      Self::Pubsift(PubsiftError::Config(_) | PubsiftError::TomlDe(_)) =>
        Some("Check the configuration file passed with --config."),
      _ => None,
    }
  }
}
