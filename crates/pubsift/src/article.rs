//! Output data model for classified articles.
//!
//! A [`ClassifiedArticle`] is produced once per article in the fetched document and is not
//! modified afterwards. Its non-academic authors are stored as [`NonAcademicAuthor`] pairs, so
//! the author and affiliation sequences exposed by the accessors always line up index for index.

use super::*;

/// Bibliographic fields of a single article.
///
/// Each field is the empty string when the corresponding element was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
  /// PubMed identifier, not validated as numeric
  pub pmid:             String,
  /// Article title
  pub title:            String,
  /// Publication year as written in the record
  pub publication_year: String,
}

/// Classification of an author's affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffiliationKind {
  /// Mentions a university, college, or school
  Academic,
  /// Mentions none of the academic keywords
  NonAcademic,
}

/// An author with an affiliation, as seen during classification.
///
/// Entries only live for the duration of a single article's classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
  /// Last name, `"Unknown"` when the record has none
  pub last_name:   String,
  /// Affiliation text in its original case
  pub affiliation: String,
  /// Academic or not
  pub kind:        AffiliationKind,
}

/// A non-academic author and the affiliation that made them one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonAcademicAuthor {
  /// Last name, `"Unknown"` when the record has none
  pub last_name:   String,
  /// Affiliation text in its original case
  pub affiliation: String,
}

impl From<AuthorEntry> for NonAcademicAuthor {
  fn from(entry: AuthorEntry) -> Self {
    Self { last_name: entry.last_name, affiliation: entry.affiliation }
  }
}

/// An article annotated with its non-academic authors.
///
/// # Examples
///
/// ```
/// use pubsift::article::{ArticleRecord, ClassifiedArticle, NonAcademicAuthor};
///
/// let article = ClassifiedArticle::new(
///   ArticleRecord { pmid: "1".into(), ..Default::default() },
///   vec![NonAcademicAuthor { last_name: "Doe".into(), affiliation: "Acme Corp".into() }],
///   None,
/// );
/// assert_eq!(article.non_academic_authors(), vec!["Doe"]);
/// assert_eq!(article.company_affiliations(), vec!["Acme Corp"]);
/// assert_eq!(article.corresponding_email(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedArticle {
  /// Identifier, title, and year
  pub record:          ArticleRecord,
  /// Non-academic authors in document order
  authors:             Vec<NonAcademicAuthor>,
  /// Email taken from the last non-academic affiliation containing one
  corresponding_email: Option<String>,
}

impl ClassifiedArticle {
  /// Assembles a classified article.
  pub fn new(
    record: ArticleRecord,
    authors: Vec<NonAcademicAuthor>,
    corresponding_email: Option<String>,
  ) -> Self {
    Self { record, authors, corresponding_email }
  }

  /// Non-academic authors in document order.
  pub fn authors(&self) -> &[NonAcademicAuthor] { &self.authors }

  /// Last names of the non-academic authors in document order.
  pub fn non_academic_authors(&self) -> Vec<&str> {
    self.authors.iter().map(|a| a.last_name.as_str()).collect()
  }

  /// Affiliations of the non-academic authors, index-aligned with
  /// [`ClassifiedArticle::non_academic_authors`].
  pub fn company_affiliations(&self) -> Vec<&str> {
    self.authors.iter().map(|a| a.affiliation.as_str()).collect()
  }

  /// Corresponding email, if any non-academic affiliation contained one.
  pub fn corresponding_email(&self) -> Option<&str> { self.corresponding_email.as_deref() }
}
