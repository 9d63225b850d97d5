use std::env;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TEQUILA_BASE_URL: &str = "https://tequila-api.kiwi.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub tequila_base_url: String,
    pub tequila_api_key: String,
    pub timeout_ms: u64,
    pub currency: String,
    /// Where the form page sends its `POST /api/best`.
    pub api_base_url: String,
}

impl AppConfig {
    /// Reads settings from the process environment, after loading `.env` if
    /// one exists in the working directory.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let tequila_base_url = lookup("TEQUILA_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TEQUILA_BASE_URL.to_string());

        let tequila_api_key = lookup("TEQUILA_API_KEY").unwrap_or_default();

        let timeout_ms = lookup("TEQUILA_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let currency = lookup("CURRENCY")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let api_base_url = lookup("API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}"));

        Self {
            port,
            tequila_base_url,
            tequila_api_key,
            timeout_ms,
            currency,
            api_base_url,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        let default_base = format!("http://127.0.0.1:{}", self.port);
        if self.api_base_url == default_base {
            self.api_base_url = format!("http://127.0.0.1:{port}");
        }
        self.port = port;
        self
    }
}
