use super::*;

fn sample() -> Vec<ClassifiedArticle> { classify_document(SAMPLE_EFETCH).unwrap() }

#[test]
fn test_one_record_per_article() {
  let articles = sample();
  let pmids: Vec<_> = articles.iter().map(|a| a.record.pmid.as_str()).collect();
  assert_eq!(pmids, vec!["38000001", "38000002", "38000003"]);
}

#[test]
fn test_company_authors_and_email() {
  let article = &sample()[0];
  assert_eq!(article.record.title, "Checkpoint inhibitor response in solid tumours.");
  assert_eq!(article.record.publication_year, "2023");

  // Smith is at a medical school and Chen has no affiliation
  assert_eq!(article.non_academic_authors(), vec!["Garcia", "Unknown"]);
  assert_eq!(article.company_affiliations(), vec![
    "Oncology R&D, AstraZeneca, Gaithersburg, MD, USA. maria.garcia@astrazeneca.com.",
    "Genentech Inc., South San Francisco, CA, USA.",
  ]);
  assert_eq!(article.corresponding_email(), Some("maria.garcia@astrazeneca.com"));
}

#[test]
fn test_last_company_email_wins() {
  let article = &sample()[1];
  assert_eq!(article.record.publication_year, "");
  assert_eq!(article.record.title, "mRNA platforms against Plasmodium falciparum.");
  assert_eq!(article.non_academic_authors(), vec!["Brown", "Patel"]);
  assert_eq!(article.corresponding_email(), Some("second@modernatx.com"));
}

#[test]
fn test_article_without_authors_is_kept() {
  let article = &sample()[2];
  assert_eq!(article.record.pmid, "38000003");
  assert_eq!(article.record.publication_year, "2021");
  assert!(article.non_academic_authors().is_empty());
  assert!(article.company_affiliations().is_empty());
  assert_eq!(article.corresponding_email(), None);
}

#[test]
fn test_truncated_document_fails() {
  let truncated = &SAMPLE_EFETCH[..SAMPLE_EFETCH.len() / 2];
  assert!(matches!(classify_document(truncated), Err(PubsiftError::Parse(_))));
}

#[test]
fn test_table_round_trip() -> TestResult<()> {
  let articles = sample();
  let mut out: Vec<u8> = Vec::new();
  table::write_csv(&articles, &mut out)?;

  let rows = table::read_csv(out.as_slice())?;
  assert_eq!(rows.len(), 3);
  for (row, article) in rows.iter().zip(&articles) {
    assert_eq!(row.authors(), article.non_academic_authors());
    assert_eq!(row.affiliations(), article.company_affiliations());
  }
  assert_eq!(rows[0].corresponding_email, "maria.garcia@astrazeneca.com");
  assert_eq!(rows[2].non_academic_authors, "");
  Ok(())
}
