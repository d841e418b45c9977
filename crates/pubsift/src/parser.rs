//! Streaming extraction of article and author nodes from PubMed `efetch` XML.
//!
//! The parser walks the document once with a [`quick_xml`] event reader and collects the
//! handful of elements the classifier needs. Lookups follow descendant semantics relative to the
//! enclosing article or author:
//!
//! | Node                 | Located at                                              |
//! |----------------------|---------------------------------------------------------|
//! | article              | every `PubmedArticle`, at any depth                     |
//! | identifier           | first `PMID` inside the article                         |
//! | title                | first `ArticleTitle` inside the article                 |
//! | publication year     | first `Year` whose parent is `PubDate`                  |
//! | author               | every `Author` inside the article                       |
//! | last name            | `LastName` directly under the author                    |
//! | affiliation          | first `Affiliation` whose parent is `AffiliationInfo`   |
//!
//! Absent elements come back as `None`; present but empty elements come back as `Some("")`.
//! Text of nested inline markup (e.g. `<i>` inside a title) is concatenated in document order.

use quick_xml::{events::Event, Reader};

use super::*;

/// An article element with its optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleNode {
  /// Text of the first `PMID`
  pub pmid:             Option<String>,
  /// Text of the first `ArticleTitle`
  pub title:            Option<String>,
  /// Text of the first `PubDate/Year`
  pub publication_year: Option<String>,
  /// Authors in document order
  pub authors:          Vec<AuthorNode>,
}

/// An author element with its optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorNode {
  /// Text of the direct `LastName` child
  pub last_name:   Option<String>,
  /// Text of the first `AffiliationInfo/Affiliation`
  pub affiliation: Option<String>,
}

/// Parses every article in `xml`.
///
/// # Errors
///
/// Returns [`PubsiftError::Parse`] if the document is not well-formed. That includes mismatched
/// or unclosed tags, bad escapes, unquoted or duplicate attributes, text outside the root
/// element, and a document with no root or more than one.
///
/// # Examples
///
/// ```
/// use pubsift::parser::parse_articles;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation><PMID Version="1">101</PMID></MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let articles = parse_articles(xml).unwrap();
/// assert_eq!(articles[0].pmid.as_deref(), Some("101"));
/// assert_eq!(articles[0].title, None);
/// ```
pub fn parse_articles(xml: &str) -> Result<Vec<ArticleNode>> {
  let mut reader = Reader::from_str(xml);
  reader.config_mut().expand_empty_elements = true;

  let mut walker = Walker::default();
  loop {
    match reader.read_event()? {
      Event::Start(e) => {
        // Rejects unquoted values and duplicate names
        for attribute in e.attributes() {
          attribute.map_err(|err| PubsiftError::Parse(err.to_string()))?;
        }
        walker.open(String::from_utf8_lossy(e.name().as_ref()).into_owned())?
      },
      Event::End(_) => walker.close(),
      Event::Text(e) => walker.text(&e.unescape()?)?,
      Event::CData(e) => walker.text(&String::from_utf8_lossy(&e))?,
      Event::Eof => break,
      _ => (),
    }
  }

  walker.finish()
}

/// Field currently collecting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
  /// `PMID`
  Pmid,
  /// `ArticleTitle`
  Title,
  /// `PubDate/Year`
  Year,
  /// `Author/LastName`
  LastName,
  /// `AffiliationInfo/Affiliation`
  Affiliation,
}

/// Text being accumulated for a [`Field`] until its element closes.
#[derive(Debug)]
struct Capture {
  /// Target field
  field: Field,
  /// Depth of the element being captured
  depth: usize,
  /// Text seen so far
  text:  String,
}

/// Parser state carried across reader events.
#[derive(Debug, Default)]
struct Walker {
  /// Names of the currently open elements
  stack:     Vec<String>,
  /// Whether a root element has been opened
  seen_root: bool,
  /// Completed articles
  articles:  Vec<ArticleNode>,
  /// Open article and its depth
  article:   Option<(usize, ArticleNode)>,
  /// Open author and its depth
  author:    Option<(usize, AuthorNode)>,
  /// Field collecting text, if any
  capture:   Option<Capture>,
}

impl Walker {
  /// Enters an element, starting an article, author, or field capture where one applies.
  fn open(&mut self, name: String) -> Result<()> {
    if self.stack.is_empty() {
      if self.seen_root {
        return Err(PubsiftError::Parse(format!("unexpected second root element <{name}>")));
      }
      self.seen_root = true;
    }

    let parent = self.stack.last().map(String::as_str);
    let depth = self.stack.len() + 1;

    // Inline markup inside a captured field only contributes text
    if self.capture.is_none() {
      let field = match (name.as_str(), parent) {
        ("PubmedArticle", _) if self.article.is_none() => {
          self.article = Some((depth, ArticleNode::default()));
          None
        },
        ("Author", _) if self.article.is_some() && self.author.is_none() => {
          self.author = Some((depth, AuthorNode::default()));
          None
        },
        _ => self.field_for(&name, parent, depth),
      };
      if let Some(field) = field {
        self.capture = Some(Capture { field, depth, text: String::new() });
      }
    }

    self.stack.push(name);
    Ok(())
  }

  /// Picks the field an element at `depth` fills, if it is still unset.
  fn field_for(&self, name: &str, parent: Option<&str>, depth: usize) -> Option<Field> {
    let (_, article) = self.article.as_ref()?;

    if let Some((author_depth, author)) = &self.author {
      match name {
        "LastName" if depth == author_depth + 1 && author.last_name.is_none() =>
          return Some(Field::LastName),
        "Affiliation" if parent == Some("AffiliationInfo") && author.affiliation.is_none() =>
          return Some(Field::Affiliation),
        _ => (),
      }
    }

    match name {
      "PMID" if article.pmid.is_none() => Some(Field::Pmid),
      "ArticleTitle" if article.title.is_none() => Some(Field::Title),
      "Year" if parent == Some("PubDate") && article.publication_year.is_none() =>
        Some(Field::Year),
      _ => None,
    }
  }

  /// Appends character data to the active capture. Only whitespace may appear outside the root.
  fn text(&mut self, text: &str) -> Result<()> {
    if self.stack.is_empty() && !text.trim().is_empty() {
      return Err(PubsiftError::Parse(format!("text outside the root element: {:?}", text.trim())));
    }
    if let Some(capture) = &mut self.capture {
      capture.text.push_str(text);
    }
    Ok(())
  }

  /// Leaves the innermost element, completing whatever it opened.
  fn close(&mut self) {
    let depth = self.stack.len();
    self.stack.pop();

    if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
      if let Some(Capture { field, text, .. }) = self.capture.take() {
        self.commit(field, text);
      }
    }

    if self.author.as_ref().is_some_and(|(d, _)| *d == depth) {
      if let (Some((_, author)), Some((_, article))) = (self.author.take(), &mut self.article) {
        article.authors.push(author);
      }
    }

    if self.article.as_ref().is_some_and(|(d, _)| *d == depth) {
      if let Some((_, article)) = self.article.take() {
        trace!("Parsed article {:?} with {} authors", article.pmid, article.authors.len());
        self.articles.push(article);
      }
    }
  }

  /// Stores captured text on the open article or author.
  fn commit(&mut self, field: Field, text: String) {
    match field {
      Field::LastName | Field::Affiliation => {
        let Some((_, author)) = &mut self.author else { return };
        match field {
          Field::LastName => author.last_name = Some(text),
          _ => author.affiliation = Some(text),
        }
      },
      Field::Pmid | Field::Title | Field::Year => {
        let Some((_, article)) = &mut self.article else { return };
        match field {
          Field::Pmid => article.pmid = Some(text),
          Field::Title => article.title = Some(text),
          _ => article.publication_year = Some(text),
        }
      },
    }
  }

  /// Checks the document closed cleanly and returns the collected articles.
  fn finish(self) -> Result<Vec<ArticleNode>> {
    if let Some(open) = self.stack.last() {
      return Err(PubsiftError::Parse(format!("document ended inside <{open}>")));
    }
    if !self.seen_root {
      return Err(PubsiftError::Parse("document has no root element".into()));
    }
    Ok(self.articles)
  }
}
