//! Tabular output of classified articles.
//!
//! Each [`ClassifiedArticle`] becomes one [`TableRow`] with the columns listed in [`COLUMNS`].
//! The author and affiliation lists are joined with [`LIST_SEPARATOR`], so they can be split
//! back apart as long as no individual entry contains a semicolon.

use std::{fs::File, io};

use super::*;

/// Column headers, in output order.
pub const COLUMNS: [&str; 6] = [
  "PubmedID",
  "Title",
  "Publication Date",
  "Non-academic Author(s)",
  "Company Affiliation(s)",
  "Corresponding Author Email",
];

/// Separator between entries of a list-valued cell.
pub const LIST_SEPARATOR: &str = "; ";

/// A flattened [`ClassifiedArticle`] as written to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
  /// PubMed identifier
  #[serde(rename = "PubmedID")]
  pub pubmed_id:            String,
  /// Article title
  #[serde(rename = "Title")]
  pub title:                String,
  /// Publication year
  #[serde(rename = "Publication Date")]
  pub publication_date:     String,
  /// Joined last names of non-academic authors
  #[serde(rename = "Non-academic Author(s)")]
  pub non_academic_authors: String,
  /// Joined affiliations of non-academic authors
  #[serde(rename = "Company Affiliation(s)")]
  pub company_affiliations: String,
  /// Corresponding email, empty when none was found
  #[serde(rename = "Corresponding Author Email")]
  pub corresponding_email:  String,
}

impl From<&ClassifiedArticle> for TableRow {
  fn from(article: &ClassifiedArticle) -> Self {
    Self {
      pubmed_id:            article.record.pmid.clone(),
      title:                article.record.title.clone(),
      publication_date:     article.record.publication_year.clone(),
      non_academic_authors: article.non_academic_authors().join(LIST_SEPARATOR),
      company_affiliations: article.company_affiliations().join(LIST_SEPARATOR),
      corresponding_email:  article.corresponding_email().unwrap_or_default().to_string(),
    }
  }
}

impl TableRow {
  /// Author last names split back out of their cell.
  pub fn authors(&self) -> Vec<&str> { split_list(&self.non_academic_authors) }

  /// Affiliations split back out of their cell.
  pub fn affiliations(&self) -> Vec<&str> { split_list(&self.company_affiliations) }
}

/// Splits a joined cell, treating an empty cell as an empty list.
fn split_list(cell: &str) -> Vec<&str> {
  if cell.is_empty() {
    Vec::new()
  } else {
    cell.split(LIST_SEPARATOR).collect()
  }
}

/// Writes `articles` as CSV, header row first.
///
/// The header is written even when there are no articles.
///
/// # Examples
///
/// ```
/// use pubsift::{article::ClassifiedArticle, table};
///
/// let mut out: Vec<u8> = Vec::new();
/// table::write_csv(&[ClassifiedArticle::default()], &mut out).unwrap();
/// assert_eq!(
///   String::from_utf8(out).unwrap(),
///   "PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email\n,,,,,\n"
/// );
/// ```
pub fn write_csv<W: io::Write>(articles: &[ClassifiedArticle], writer: W) -> Result<()> {
  let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
  writer.write_record(COLUMNS)?;
  for article in articles {
    writer.serialize(TableRow::from(article))?;
  }
  writer.flush()?;
  Ok(())
}

/// Writes `articles` as CSV to the file at `path`, replacing any existing file.
pub fn write_csv_file(articles: &[ClassifiedArticle], path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  debug!("Writing {} rows to {}", articles.len(), path.display());
  write_csv(articles, io::BufWriter::new(File::create(path)?))
}

/// Reads rows back from CSV produced by [`write_csv`].
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<TableRow>> {
  let rows: Vec<TableRow> =
    csv::Reader::from_reader(reader).into_deserialize().collect::<csv::Result<_>>()?;
  Ok(rows)
}
