//! Record retrieval from the remote literature database.
//!
//! Retrieval is a plain request/response pair:
//!
//! 1. [`Retrieve::search`] turns a search term into a bounded list of record identifiers
//! 2. [`Retrieve::fetch_details`] turns those identifiers into one XML document holding the full
//!    records
//!
//! [`EntrezClient`] implements both against the NCBI E-utilities (`esearch.fcgi` and
//! `efetch.fcgi`). Other implementations, such as in-memory fixtures, can be plugged into
//! [`Fetcher`](crate::Fetcher) through the same trait.
//!
//! # Examples
//!
//! ```no_run
//! use pubsift::{config::Config, prelude::*, retriever::EntrezClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EntrezClient::new(&Config::default())?;
//! let ids = client.search("malaria vaccine", 10).await?;
//! let xml = client.fetch_details(&ids).await?;
//! println!("{} bytes of XML for {} records", xml.len(), ids.len());
//! # Ok(())
//! # }
//! ```

use super::*;

mod entrez;
mod response;

pub use entrez::EntrezClient;
pub use response::{ESearchResponse, ESearchResult};

/// Document returned for a fetch without identifiers.
pub const EMPTY_ARTICLE_SET: &str = "<PubmedArticleSet></PubmedArticleSet>";

/// Trait for backends that can search for and fetch bibliographic records.
#[async_trait]
pub trait Retrieve: Send + Sync {
  /// Searches for `term` and returns at most `max_results` record identifiers in ranked order.
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::Retrieval`] on transport failures and non-success responses.
  async fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>>;

  /// Fetches the full records for `ids` as a single XML document.
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::Retrieval`] on transport failures and non-success responses.
  async fn fetch_details(&self, ids: &[String]) -> Result<String>;
}
