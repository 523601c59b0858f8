#[cfg(feature = "cli")]
pub mod cli;

/// Environment variable consulted by [`ClientConfig::from_env`] for the
/// MapTiler Coordinates API key.
pub const API_KEY_VAR: &str = "MAPTILER_API_KEY";

/// Connection settings for the remote reprojection services.
///
/// All state the backends need is carried here explicitly, so tests can point
/// a client at a mock server instead of the live endpoints.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// MapTiler Coordinates API key; without one, search falls back to the
    /// keyless legacy endpoint.
    pub api_key: Option<String>,
    /// Base URL of the epsg.io service (trans, search, WKT lookup).
    pub epsg_io_url: String,
    /// Base URL of the MapTiler Coordinates API (keyed search).
    pub maptiler_url: String,
    /// Base URL of the TWCC converter.
    pub twcc_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("webproj/", env!("CARGO_PKG_VERSION")).to_string(),
            api_key: None,
            epsg_io_url: "https://epsg.io".to_string(),
            maptiler_url: "https://api.maptiler.com".to_string(),
            twcc_url: "https://twcc.fr".to_string(),
        }
    }
}

impl ClientConfig {
    /// Default endpoints, with the API key read once from `MAPTILER_API_KEY`
    /// if the variable is set and non-empty.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
