//! PubMed retrieval and non-academic author extraction.
//!
//! `pubsift` searches PubMed through the NCBI Entrez E-utilities, fetches the full records for
//! the matching articles, and reduces each article to a flat row listing the authors whose
//! affiliation is not a university, college, or school.
//!
//! # Features
//!
//! - **Retrieval**: search and fetch through the [`retriever::Retrieve`] trait, with
//!   [`retriever::EntrezClient`] as the HTTP implementation
//! - **Parsing**: streaming extraction of article and author nodes from `efetch` XML
//! - **Classification**: keyword based academic / non-academic split with email discovery in
//!   affiliation text
//! - **Tabular output**: CSV serialization of the classified articles
//!
//! # Getting Started
//!
//! ```no_run
//! use pubsift::{config::Config, prelude::*, table, Fetcher};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let fetcher = Fetcher::new(Config::default())?;
//!   let articles = fetcher.get_papers("cancer immunotherapy").await?;
//!
//!   table::write_csv(&articles, std::io::stdout())?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`article`]: Output data model
//! - [`classify`]: Affiliation classification and email extraction
//! - [`config`]: Entrez endpoint configuration
//! - [`parser`]: PubMed XML to raw article nodes
//! - [`retriever`]: Search and fetch against the remote database
//! - [`table`]: CSV output and read-back
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
#[cfg(test)] use tracing_test::traced_test;

pub mod article;
pub mod classify;
pub mod config;
pub mod error;
pub mod parser;
pub mod retriever;
pub mod table;

use crate::{article::*, config::*, error::*, retriever::*};

/// Runs a search through to classified articles.
///
/// A [`Fetcher`] owns a [`Config`] and a [`Retrieve`] implementation. Each call to
/// [`Fetcher::get_papers`] performs the search, fetches the matching records, and classifies
/// them, strictly in that order.
///
/// # Examples
///
/// ```no_run
/// # use pubsift::{config::Config, Fetcher};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Fetcher::new(Config::default().with_max_results(5))?;
/// for article in fetcher.get_papers("crispr").await? {
///   println!("{}: {:?}", article.record.pmid, article.non_academic_authors());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Fetcher<R = EntrezClient> {
  /// Settings used for searches.
  config:    Config,
  /// Backend performing the search and fetch requests.
  retriever: R,
}

impl Fetcher<EntrezClient> {
  /// Creates a fetcher backed by the Entrez E-utilities described by `config`.
  pub fn new(config: Config) -> Result<Self> {
    let retriever = EntrezClient::new(&config)?;
    Ok(Self { config, retriever })
  }
}

impl<R: Retrieve> Fetcher<R> {
  /// Creates a fetcher backed by an arbitrary [`Retrieve`] implementation.
  pub fn with_retriever(config: Config, retriever: R) -> Self { Self { config, retriever } }

  /// The configuration this fetcher was built with.
  pub fn config(&self) -> &Config { &self.config }

  /// Searches for `term` and returns one [`ClassifiedArticle`] per retrieved article.
  ///
  /// # Errors
  ///
  /// - [`PubsiftError::Retrieval`] if either remote request fails
  /// - [`PubsiftError::Parse`] if the fetched document is not well-formed
  pub async fn get_papers(&self, term: &str) -> Result<Vec<ClassifiedArticle>> {
    let ids = self.retriever.search(term, self.config.max_results).await?;
    debug!("Fetched IDs: {ids:?}");

    let document = self.retriever.fetch_details(&ids).await?;
    let articles = classify::classify_document(&document)?;
    debug!("Classified {} articles for {term:?}", articles.len());
    Ok(articles)
  }
}

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use pubsift::prelude::*;
///
/// fn describe(article: &ClassifiedArticle) -> Result<(), PubsiftError> {
///   println!("{}", article.record.title);
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{article::ClassifiedArticle, error::PubsiftError, retriever::Retrieve};
}
