use super::*;

/// [`Retrieve`] implementation backed by the NCBI Entrez E-utilities.
#[derive(Debug, Clone)]
pub struct EntrezClient {
  /// Shared HTTP client
  client:   reqwest::Client,
  /// Resolved `esearch.fcgi` endpoint
  esearch:  Url,
  /// Resolved `efetch.fcgi` endpoint
  efetch:   Url,
  /// Entrez database name sent as `db`
  database: String,
  /// Optional API key sent as `api_key`
  api_key:  Option<String>,
}

impl EntrezClient {
  /// Builds a client for the endpoints described by `config`.
  ///
  /// # Errors
  ///
  /// Returns [`PubsiftError::Config`] if the configuration does not validate.
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;
    Ok(Self {
      client:   reqwest::Client::new(),
      esearch:  config.endpoint("esearch.fcgi")?,
      efetch:   config.endpoint("efetch.fcgi")?,
      database: config.database.clone(),
      api_key:  config.api_key.clone(),
    })
  }

  /// Sends a GET to `url` with `params` and fails on non-success statuses.
  async fn get(&self, url: &Url, params: &[(&str, &str)]) -> Result<reqwest::Response> {
    let mut request = self.client.get(url.clone()).query(&[("db", self.database.as_str())]);
    request = request.query(params);
    if let Some(api_key) = &self.api_key {
      request = request.query(&[("api_key", api_key.as_str())]);
    }

    let response = request.send().await?;
    trace!("{} responded with {}", url, response.status());
    Ok(response.error_for_status()?)
  }
}

#[async_trait]
impl Retrieve for EntrezClient {
  async fn search(&self, term: &str, max_results: usize) -> Result<Vec<String>> {
    debug!("Searching {} for {term:?} via: {}", self.database, self.esearch);

    let retmax = max_results.to_string();
    let response = self
      .get(&self.esearch, &[("term", term), ("retmode", "json"), ("retmax", retmax.as_str())])
      .await?;
    let ESearchResponse { esearchresult } = response.json().await?;

    if let Some(error) = esearchresult.error {
      return Err(PubsiftError::Search(error));
    }
    if let Some(count) = &esearchresult.count {
      debug!("{count} matches for {term:?}");
    }

    let mut ids = esearchresult.idlist;
    ids.truncate(max_results);
    Ok(ids)
  }

  async fn fetch_details(&self, ids: &[String]) -> Result<String> {
    if ids.is_empty() {
      debug!("No identifiers to fetch, skipping request to {}", self.efetch);
      return Ok(EMPTY_ARTICLE_SET.to_string());
    }

    let id = ids.join(",");
    debug!("Fetching {} records via: {}", ids.len(), self.efetch);

    let response = self.get(&self.efetch, &[("id", id.as_str()), ("retmode", "xml")]).await?;
    let document = response.text().await?;

    trace!("efetch response: {document}");
    Ok(document)
  }
}

#[cfg(test)]
mod tests {
  use wiremock::{matchers::path, Mock, MockServer, ResponseTemplate};

  use super::*;

  async fn esearch_server(body: &str) -> (MockServer, EntrezClient) {
    let server = MockServer::start().await;
    Mock::given(path("/esearch.fcgi"))
      .respond_with(ResponseTemplate::new(200).set_body_string(body))
      .mount(&server)
      .await;
    let client = EntrezClient::new(&Config::default().with_base_url(server.uri())).unwrap();
    (server, client)
  }

  #[test]
  fn test_new_resolves_endpoints() {
    let client = EntrezClient::new(&Config::default().with_api_key("secret")).unwrap();
    assert_eq!(client.esearch.path(), "/entrez/eutils/esearch.fcgi");
    assert_eq!(client.efetch.path(), "/entrez/eutils/efetch.fcgi");
    assert_eq!(client.database, "pubmed");
    assert_eq!(client.api_key.as_deref(), Some("secret"));
  }

  #[test]
  fn test_new_rejects_invalid_config() {
    assert!(EntrezClient::new(&Config::default().with_max_results(0)).is_err());
  }

  #[traced_test]
  #[tokio::test]
  async fn test_fetch_without_ids_skips_request() {
    // Unroutable base; any network attempt would fail
    let config = Config::default().with_base_url("http://127.0.0.1:9/");
    let client = EntrezClient::new(&config).unwrap();

    let document = client.fetch_details(&[]).await.unwrap();
    assert_eq!(document, EMPTY_ARTICLE_SET);
    assert!(logs_contain("No identifiers to fetch"));
  }

  #[traced_test]
  #[tokio::test]
  async fn test_search_logs_match_count() {
    let (_server, client) =
      esearch_server(r#"{"esearchresult": {"count": "1742", "idlist": ["1", "2"]}}"#).await;

    assert_eq!(client.search("crispr", 20).await.unwrap(), vec!["1", "2"]);
    assert!(logs_contain("1742 matches"));
  }

  #[tokio::test]
  async fn test_search_error_field_fails() {
    let (_server, client) =
      esearch_server(r#"{"esearchresult": {"ERROR": "Empty term and query_key - nothing todo"}}"#)
        .await;

    match client.search("", 20).await {
      Err(PubsiftError::Search(message)) => assert!(message.starts_with("Empty term")),
      other => panic!("expected a search error, got {other:?}"),
    }
  }
}
