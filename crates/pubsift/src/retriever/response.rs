//! JSON response bodies of the Entrez ESearch utility.
//!
//! Only the parts needed for retrieval are modelled; everything else in the body is ignored.
//!
//! ```json
//! {
//!   "header": { "type": "esearch", "version": "0.3" },
//!   "esearchresult": {
//!     "count": "1742",
//!     "retmax": "2",
//!     "idlist": ["39012345", "39012346"]
//!   }
//! }
//! ```

use super::*;

/// Top level ESearch body.
#[derive(Debug, Clone, Deserialize)]
pub struct ESearchResponse {
  /// The search result section
  pub esearchresult: ESearchResult,
}

/// The `esearchresult` section of an ESearch body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ESearchResult {
  /// Total number of matches, reported by Entrez as a string
  #[serde(default)]
  pub count:  Option<String>,
  /// Matching identifiers in ranked order
  #[serde(default)]
  pub idlist: Vec<String>,
  /// Error message Entrez reports for unusable queries, in place of results
  #[serde(default, rename = "ERROR")]
  pub error:  Option<String>,
}
