//! Entrez endpoint configuration.
//!
//! Every field has a default, so an empty file (or no file at all) is a valid configuration.
//!
//! ```toml
//! base_url    = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/"
//! database    = "pubmed"
//! max_results = 20
//! # api_key   = "..."
//! ```

use super::*;

/// Base URL of the NCBI Entrez E-utilities.
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Entrez database searched by default.
pub const DEFAULT_DATABASE: &str = "pubmed";

/// Upper bound on the identifiers returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Settings for talking to the Entrez E-utilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Base URL that `esearch.fcgi` and `efetch.fcgi` are resolved against
  pub base_url:    String,
  /// Entrez database name
  pub database:    String,
  /// Maximum number of identifiers requested from a search
  pub max_results: usize,
  /// Optional NCBI API key sent with every request
  pub api_key:     Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url:    DEFAULT_BASE_URL.to_string(),
      database:    DEFAULT_DATABASE.to_string(),
      max_results: DEFAULT_MAX_RESULTS,
      api_key:     None,
    }
  }
}

impl Config {
  /// Platform specific location of the user's configuration file.
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("pubsift").join("config.toml")
  }

  /// Reads and validates a configuration file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading config from {}", path.display());
    std::fs::read_to_string(path)?.parse()
  }

  /// Loads configuration, preferring an explicitly supplied path.
  ///
  /// With `Some(path)` the file must exist. With `None` the file at [`Config::default_path`] is
  /// used when present and the defaults otherwise.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_path(path),
      None => {
        let path = Self::default_path();
        if path.is_file() {
          Self::from_path(path)
        } else {
          trace!("No config at {}, using defaults", path.display());
          Ok(Self::default())
        }
      },
    }
  }

  /// Sets the base URL of the E-utilities.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Sets the Entrez database.
  pub fn with_database(mut self, database: impl Into<String>) -> Self {
    self.database = database.into();
    self
  }

  /// Sets the maximum number of search results.
  pub fn with_max_results(mut self, max_results: usize) -> Self {
    self.max_results = max_results;
    self
  }

  /// Sets the NCBI API key.
  pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
    self.api_key = Some(api_key.into());
    self
  }

  /// Checks that the configuration can be used for requests.
  pub fn validate(&self) -> Result<()> {
    self.base()?;
    if self.database.trim().is_empty() {
      return Err(PubsiftError::Config("database must not be empty".into()));
    }
    if self.max_results == 0 {
      return Err(PubsiftError::Config("max_results must be at least 1".into()));
    }
    Ok(())
  }

  /// Resolves a named E-utility (e.g. `esearch.fcgi`) against the base URL.
  pub fn endpoint(&self, utility: &str) -> Result<Url> {
    self
      .base()?
      .join(utility)
      .map_err(|e| PubsiftError::Config(format!("Invalid endpoint {utility}: {e}")))
  }

  /// Parses the base URL, treating it as a directory even without a trailing slash.
  fn base(&self) -> Result<Url> {
    let mut base = self.base_url.clone();
    if !base.ends_with('/') {
      base.push('/');
    }
    Url::parse(&base)
      .map_err(|e| PubsiftError::Config(format!("Invalid base_url {:?}: {e}", self.base_url)))
  }
}

impl FromStr for Config {
  type Err = PubsiftError;

  fn from_str(s: &str) -> Result<Self> {
    let config: Config = toml::from_str(s)?;
    config.validate()?;
    Ok(config)
  }
}
