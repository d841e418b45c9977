//! User-facing status messages for the `get-papers-list` binary.

use std::io::Write;

use super::*;

/// Prefix for informational lines.
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for completed actions.
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for errors.
pub static ERROR_PREFIX: &str = "✗ ";
/// Indent for lines continuing a previous message.
pub static CONTINUE_PREFIX: &str = "│  ";

/// Messages shown to the user outside of the CSV output.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// An action finished, e.g. the CSV file was written.
  Success(&'a str),
  /// Something worth knowing that is not a failure.
  Info(&'a str),
  /// The run failed.
  Error(&'a PubsiftCliError),
}

/// Destination for user-facing messages.
pub trait UserInteraction {
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent<'_>) -> Result<()>;
}

/// Terminal output: status lines on stdout, errors on stderr.
pub struct Console;

impl UserInteraction for Console {
  fn reply(&self, content: ResponseContent<'_>) -> Result<()> {
    match content {
      ResponseContent::Success(message) =>
        writeln!(io::stdout(), "{} {}", style(SUCCESS_PREFIX).green(), message)?,
      ResponseContent::Info(message) =>
        writeln!(io::stdout(), "{} {}", style(INFO_PREFIX).blue(), message)?,
      ResponseContent::Error(error) => {
        let mut stderr = io::stderr();
        writeln!(stderr, "{} {}", style(ERROR_PREFIX).red(), style(error).red())?;
        if let Some(hint) = error.hint() {
          writeln!(stderr, "{}{}", style(CONTINUE_PREFIX).dim(), style(hint).dim())?;
        }
      },
    }
    Ok(())
  }
}
