//! Error types for the pubsift library.
//!
//! A run either succeeds completely or fails with one of the variants below. Nothing is retried
//! and there is no partial result.
//!
//! # Examples
//!
//! ```no_run
//! use pubsift::{config::Config, error::PubsiftError, Fetcher};
//!
//! # async fn example() -> Result<(), PubsiftError> {
//! let fetcher = Fetcher::new(Config::default())?;
//! match fetcher.get_papers("cancer").await {
//!   Err(PubsiftError::Retrieval(e)) => println!("PubMed request failed: {}", e),
//!   Err(PubsiftError::Parse(e)) => println!("Response was not well-formed: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(articles) => println!("Got {} articles", articles.len()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`pubsift`](crate) crate.
pub type Result<T> = core::result::Result<T, PubsiftError>;

/// Errors that can occur while retrieving, classifying, or writing PubMed records.
#[derive(Error, Debug)]
pub enum PubsiftError {
  /// A search or fetch request failed.
  ///
  /// This covers:
  /// - Network and TLS failures
  /// - Non-success HTTP status codes
  /// - A search response body that could not be decoded
  #[error(transparent)]
  Retrieval(#[from] reqwest::Error),

  /// Entrez answered the search but rejected the query, e.g. for malformed query syntax.
  #[error("PubMed rejected the search: {0}")]
  Search(String),

  /// The fetched document could not be parsed as XML.
  ///
  /// Raised for mismatched or unclosed tags, invalid escapes, malformed attributes, stray text
  /// outside the root, or a document without a single root element. Missing optional elements
  /// never produce this error.
  #[error("Failed to parse document: {0}")]
  Parse(String),

  /// A file system operation failed, typically while writing output.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Writing or reading the CSV table failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A configuration file was not valid TOML for [`Config`](crate::config::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration value was rejected.
  #[error("{0}")]
  Config(String),
}

impl From<quick_xml::Error> for PubsiftError {
  fn from(error: quick_xml::Error) -> Self { Self::Parse(error.to_string()) }
}
