//! Academic / non-academic classification of article authors.
//!
//! An author counts as non-academic when their affiliation text, compared case-insensitively,
//! contains none of [`ACADEMIC_KEYWORDS`]. Authors without any affiliation are skipped
//! entirely. For each non-academic author the affiliation is also scanned for an email address;
//! a match overwrites the article's corresponding email, so the address from the last matching
//! author in document order is the one kept.
//!
//! # Examples
//!
//! ```
//! use pubsift::classify::classify_document;
//!
//! let xml = r#"<PubmedArticleSet><PubmedArticle>
//!   <PMID>42</PMID>
//!   <Author>
//!     <LastName>Roe</LastName>
//!     <AffiliationInfo><Affiliation>Acme Corp, contact: a.b@acme.com</Affiliation></AffiliationInfo>
//!   </Author>
//!   <Author>
//!     <LastName>Poe</LastName>
//!     <AffiliationInfo><Affiliation>Harvard University</Affiliation></AffiliationInfo>
//!   </Author>
//! </PubmedArticle></PubmedArticleSet>"#;
//!
//! let articles = classify_document(xml).unwrap();
//! assert_eq!(articles[0].non_academic_authors(), vec!["Roe"]);
//! assert_eq!(articles[0].corresponding_email(), Some("a.b@acme.com"));
//! ```

use crate::parser::{ArticleNode, AuthorNode};

use super::*;

/// Lower-case substrings marking an affiliation as academic.
pub const ACADEMIC_KEYWORDS: [&str; 3] = ["university", "college", "school"];

/// Last name used for authors whose record has no `LastName`.
pub const UNKNOWN_LAST_NAME: &str = "Unknown";

lazy_static! {
    // local-part@domain.tld with no word-boundary anchoring
    static ref EMAIL: Regex = Regex::new(r"[\p{L}\p{N}_.-]+@[\p{L}\p{N}_.-]+\.\p{L}+").unwrap();
}

impl AffiliationKind {
  /// Classifies affiliation text by keyword.
  ///
  /// ```
  /// use pubsift::article::AffiliationKind;
  ///
  /// assert_eq!(AffiliationKind::of("Dept. of Medicine, YALE UNIVERSITY"), AffiliationKind::Academic);
  /// assert_eq!(AffiliationKind::of("Genentech, South San Francisco"), AffiliationKind::NonAcademic);
  /// ```
  pub fn of(affiliation: &str) -> Self {
    let lowered = affiliation.to_lowercase();
    if ACADEMIC_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
      Self::Academic
    } else {
      Self::NonAcademic
    }
  }
}

impl AuthorEntry {
  /// Builds an entry from an author node, or `None` if the author has no affiliation.
  pub fn from_node(node: AuthorNode) -> Option<Self> {
    let affiliation = node.affiliation?;
    Some(Self {
      last_name: node.last_name.unwrap_or_else(|| UNKNOWN_LAST_NAME.to_string()),
      kind: AffiliationKind::of(&affiliation),
      affiliation,
    })
  }
}

/// First email-shaped substring of `text`.
///
/// ```
/// use pubsift::classify::find_email;
///
/// assert_eq!(find_email("Contact: jane_doe@lab-x.co.uk."), Some("jane_doe@lab-x.co.uk"));
/// assert_eq!(find_email("no address here"), None);
/// ```
pub fn find_email(text: &str) -> Option<&str> { EMAIL.find(text).map(|m| m.as_str()) }

/// Classifies the authors of a single parsed article.
pub fn classify_article(node: ArticleNode) -> ClassifiedArticle {
  let record = ArticleRecord {
    pmid:             node.pmid.unwrap_or_default(),
    title:            node.title.unwrap_or_default(),
    publication_year: node.publication_year.unwrap_or_default(),
  };

  let mut authors = Vec::new();
  let mut corresponding_email = None;

  for entry in node.authors.into_iter().filter_map(AuthorEntry::from_node) {
    if entry.kind == AffiliationKind::Academic {
      continue;
    }
    if let Some(email) = find_email(&entry.affiliation) {
      corresponding_email = Some(email.to_string());
    }
    authors.push(NonAcademicAuthor::from(entry));
  }

  ClassifiedArticle::new(record, authors, corresponding_email)
}

/// Parses an `efetch` document and classifies every article in it, in document order.
///
/// # Errors
///
/// Returns [`PubsiftError::Parse`] if the document is not well-formed XML.
pub fn classify_document(xml: &str) -> Result<Vec<ClassifiedArticle>> {
  Ok(parser::parse_articles(xml)?.into_iter().map(classify_article).collect())
}
