use super::*;

#[traced_test]
#[tokio::test]
async fn test_search_sends_query_and_caps_results() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("esearch.fcgi")
    .and(query_param("db", "pubmed"))
    .and(query_param("term", "cancer therapy"))
    .and(query_param("retmode", "json"))
    .and(query_param("retmax", "3"))
    .respond_with(
      ResponseTemplate::new(200).set_body_string(esearch_body(&["101", "102", "103", "104"])),
    )
    .expect(1)
    .mount(&server)
    .await;
  let client = EntrezClient::new(&config)?;

  let ids = client.search("cancer therapy", 3).await?;
  assert_eq!(ids, vec!["101", "102", "103"]);

  let requests = received(&server).await;
  assert_eq!(requests.len(), 1);
  assert_eq!(query(&requests[0], "api_key"), None);
  Ok(())
}

#[tokio::test]
async fn test_api_key_is_sent() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("esearch.fcgi")
    .and(query_param("api_key", "k3y"))
    .respond_with(ResponseTemplate::new(200).set_body_string(esearch_body(&[])))
    .expect(1)
    .mount(&server)
    .await;
  let client = EntrezClient::new(&config.with_api_key("k3y"))?;

  assert!(client.search("x", 20).await?.is_empty());
  Ok(())
}

#[tokio::test]
async fn test_fetch_joins_ids() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("efetch.fcgi")
    .and(query_param("db", "pubmed"))
    .and(query_param("id", "38000001,38000002"))
    .and(query_param("retmode", "xml"))
    .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_EFETCH))
    .expect(1)
    .mount(&server)
    .await;
  let client = EntrezClient::new(&config)?;

  let document = client.fetch_details(&["38000001".into(), "38000002".into()]).await?;
  assert_eq!(document, SAMPLE_EFETCH);
  Ok(())
}

#[tokio::test]
async fn test_error_status_is_retrieval_error() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("esearch.fcgi")
    .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
    .mount(&server)
    .await;
  utility("efetch.fcgi")
    .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
    .mount(&server)
    .await;
  let client = EntrezClient::new(&config)?;

  assert!(matches!(client.search("x", 5).await, Err(PubsiftError::Retrieval(_))));
  assert!(matches!(client.fetch_details(&["1".into()]).await, Err(PubsiftError::Retrieval(_))));
  Ok(())
}

#[tokio::test]
async fn test_undecodable_search_body_is_retrieval_error() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("esearch.fcgi")
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;
  let client = EntrezClient::new(&config)?;

  assert!(matches!(client.search("x", 5).await, Err(PubsiftError::Retrieval(_))));
  Ok(())
}

#[tokio::test]
async fn test_rejected_search_is_search_error() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("esearch.fcgi")
    .respond_with(ResponseTemplate::new(200).set_body_string(
      r#"{"esearchresult": {"ERROR": "Invalid query syntax", "idlist": []}}"#,
    ))
    .expect(1)
    .mount(&server)
    .await;
  let client = EntrezClient::new(&config)?;

  match client.search("((", 5).await {
    Err(PubsiftError::Search(message)) => assert_eq!(message, "Invalid query syntax"),
    other => panic!("expected a search error, got {other:?}"),
  }
  Ok(())
}

#[tokio::test]
async fn test_unreachable_host_is_retrieval_error() -> TestResult<()> {
  // Bind then drop to get a port nobody is listening on
  let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
  let config = Config::default().with_base_url(format!("http://127.0.0.1:{port}/"));
  let client = EntrezClient::new(&config)?;

  assert!(matches!(client.search("x", 5).await, Err(PubsiftError::Retrieval(_))));
  Ok(())
}

#[tokio::test]
async fn test_fetcher_end_to_end() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("esearch.fcgi")
    .and(query_param("term", "oncology"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string(esearch_body(&["38000001", "38000002", "38000003"])),
    )
    .expect(1)
    .mount(&server)
    .await;
  utility("efetch.fcgi")
    .and(query_param("id", "38000001,38000002,38000003"))
    .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_EFETCH))
    .expect(1)
    .mount(&server)
    .await;
  let fetcher = Fetcher::new(config)?;

  let articles = fetcher.get_papers("oncology").await?;
  assert_eq!(articles.len(), 3);
  assert_eq!(articles[0].non_academic_authors(), vec!["Garcia", "Unknown"]);
  assert_eq!(articles[1].corresponding_email(), Some("second@modernatx.com"));

  let paths: Vec<_> = received(&server).await.iter().map(|r| r.url.path().to_string()).collect();
  assert_eq!(paths, vec!["/entrez/eutils/esearch.fcgi", "/entrez/eutils/efetch.fcgi"]);
  Ok(())
}

#[tokio::test]
async fn test_fetcher_with_no_hits_skips_fetch() -> TestResult<()> {
  let (server, config) = mock_entrez().await;
  utility("esearch.fcgi")
    .respond_with(ResponseTemplate::new(200).set_body_string(esearch_body(&[])))
    .expect(1)
    .mount(&server)
    .await;
  utility("efetch.fcgi").respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;
  let fetcher = Fetcher::new(config)?;

  assert!(fetcher.get_papers("nothing matches this").await?.is_empty());
  assert_eq!(received(&server).await.len(), 1);
  Ok(())
}
