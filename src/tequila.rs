//! Client for the Kiwi Tequila locations and search API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{OptimizerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    City,
    Airport,
    Country,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Airport => "airport",
            Self::Country => "country",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityRef {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_rank")]
    pub rank: Option<i64>,
    #[serde(default)]
    pub city: Option<CityRef>,
    pub location: Coordinates,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RankRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Tequila sends `rank` as a number or a numeric string.
fn lenient_rank<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<RankRepr>::deserialize(deserializer)? {
            None => None,
            Some(RankRepr::Int(n)) => Some(n),
            Some(RankRepr::Float(f)) => Some(f as i64),
            Some(RankRepr::Text(s)) => s.trim().parse().ok(),
        },
    )
}

#[derive(Debug, Deserialize)]
struct LocationsResponse {
    #[serde(default)]
    locations: Vec<Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Flight {
    pub price: f64,
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Flight>,
}

/// Departure dates in the `dd/mm/YYYY` form the search endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchWindow {
    pub date_from: String,
    pub date_to: String,
}

#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// First active location matching `term` of the given kind.
    async fn find_location(&self, term: &str, kind: LocationKind) -> Result<Option<Location>>;

    /// Active airports within `radius_km` of a coordinate.
    async fn airports_near(
        &self,
        lat: f64,
        lon: f64,
        radius_km: u32,
        limit: u32,
    ) -> Result<Vec<Location>>;

    /// Cheapest one-way flight between two airport codes inside the window.
    async fn cheapest_oneway(
        &self,
        from_code: &str,
        to_code: &str,
        window: &SearchWindow,
        currency: &str,
    ) -> Result<Option<Flight>>;
}

#[derive(Clone)]
pub struct TequilaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl TequilaClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_ms,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(&cfg.tequila_base_url, &cfg.tequila_api_key, cfg.timeout_ms)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| OptimizerError::InvalidConfig(format!("TEQUILA_API_KEY: {e}")))?;
        headers.insert("apikey", api_key);

        let url = self.url(path);
        debug!(%url, "tequila request");

        let request = self.http.get(&url).headers(headers).query(params);
        // Bounds the body read as well as the headers.
        timeout(Duration::from_millis(self.timeout_ms), exchange(request))
            .await
            .map_err(|_| OptimizerError::Timeout)?
    }
}

async fn exchange<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unable to read response body>".to_string());
        return Err(OptimizerError::Upstream { status, body });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl FlightProvider for TequilaClient {
    async fn find_location(&self, term: &str, kind: LocationKind) -> Result<Option<Location>> {
        let res: LocationsResponse = self
            .get(
                "locations/query",
                &[
                    ("term", term.to_string()),
                    ("location_types", kind.as_str().to_string()),
                    ("limit", "1".to_string()),
                    ("active_only", "true".to_string()),
                ],
            )
            .await?;
        Ok(res.locations.into_iter().next())
    }

    async fn airports_near(
        &self,
        lat: f64,
        lon: f64,
        radius_km: u32,
        limit: u32,
    ) -> Result<Vec<Location>> {
        let res: LocationsResponse = self
            .get(
                "locations/radius",
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("radius", radius_km.to_string()),
                    ("location_types", "airport".to_string()),
                    ("limit", limit.to_string()),
                    ("active_only", "true".to_string()),
                ],
            )
            .await?;
        Ok(res.locations)
    }

    async fn cheapest_oneway(
        &self,
        from_code: &str,
        to_code: &str,
        window: &SearchWindow,
        currency: &str,
    ) -> Result<Option<Flight>> {
        let res: SearchResponse = self
            .get(
                "v2/search",
                &[
                    ("fly_from", from_code.to_string()),
                    ("fly_to", to_code.to_string()),
                    ("date_from", window.date_from.clone()),
                    ("date_to", window.date_to.clone()),
                    ("flight_type", "oneway".to_string()),
                    ("one_for_city", "0".to_string()),
                    ("one_per_date", "0".to_string()),
                    ("adults", "1".to_string()),
                    ("curr", currency.to_string()),
                    ("sort", "price".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(res.data.into_iter().next())
    }
}
