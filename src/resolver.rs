//! Turns a free-text place name into the main airport serving it.
//!
//! Lookups go city first, then airport, then country. Cities and countries
//! are mapped to the most prominent airport (lowest Tequila rank) around their
//! centre.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{OptimizerError, Result};
use crate::tequila::{FlightProvider, Location, LocationKind};

const CITY_RADIUS_KM: u32 = 80;
const COUNTRY_RADIUS_KM: u32 = 300;
const NEARBY_LIMIT: u32 = 20;

const SYNONYMS: &[(&str, &str)] = &[
    ("puerto rico", "San Juan"),
    ("republica dominicana", "Santo Domingo"),
    ("república dominicana", "Santo Domingo"),
    ("rd", "Santo Domingo"),
    ("usa", "New York"),
    ("estados unidos", "New York"),
    ("uk", "London"),
    ("inglaterra", "London"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAirport {
    pub city_code: Option<String>,
    pub city_name: String,
    pub airport_code: String,
    pub airport_name: String,
    pub lat: f64,
    pub lon: f64,
}

impl ResolvedAirport {
    fn from_airport(airport: &Location) -> Option<Self> {
        let code = airport.code.clone()?;
        let city = airport.city.as_ref();
        Some(Self {
            city_code: city
                .and_then(|c| c.code.clone())
                .or_else(|| Some(code.clone())),
            city_name: city
                .and_then(|c| c.name.clone())
                .unwrap_or_else(|| airport.name.clone()),
            airport_code: code,
            airport_name: airport.name.clone(),
            lat: airport.location.lat,
            lon: airport.location.lon,
        })
    }
}

fn apply_synonym(term: &str) -> &str {
    let lowered = term.to_lowercase();
    SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, city)| *city)
        .unwrap_or(term)
}

/// The lowest-ranked airport within `radius_km`; a missing rank counts as 0.
async fn main_airport_near<P: FlightProvider + ?Sized>(
    provider: &P,
    lat: f64,
    lon: f64,
    radius_km: u32,
) -> Result<Option<ResolvedAirport>> {
    let airports = provider
        .airports_near(lat, lon, radius_km, NEARBY_LIMIT)
        .await?;
    Ok(airports
        .iter()
        .filter(|a| a.code.is_some())
        .min_by_key(|a| a.rank.unwrap_or(0))
        .and_then(ResolvedAirport::from_airport))
}

pub async fn resolve_main_airport<P: FlightProvider + ?Sized>(
    provider: &P,
    term: &str,
) -> Result<ResolvedAirport> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(OptimizerError::EmptyLocation);
    }
    let query = apply_synonym(trimmed);

    if let Some(city) = provider.find_location(query, LocationKind::City).await? {
        let found = main_airport_near(
            provider,
            city.location.lat,
            city.location.lon,
            CITY_RADIUS_KM,
        )
        .await?;
        if let Some(mut main) = found {
            main.city_name = city.name.clone();
            main.city_code = city.code.clone().or_else(|| city.id.clone());
            debug!(term, airport = %main.airport_code, "resolved as city");
            return Ok(main);
        }
    }

    if let Some(airport) = provider.find_location(query, LocationKind::Airport).await? {
        if let Some(resolved) = ResolvedAirport::from_airport(&airport) {
            debug!(term, airport = %resolved.airport_code, "resolved as airport");
            return Ok(resolved);
        }
    }

    if let Some(country) = provider.find_location(query, LocationKind::Country).await? {
        let found = main_airport_near(
            provider,
            country.location.lat,
            country.location.lon,
            COUNTRY_RADIUS_KM,
        )
        .await?;
        if let Some(main) = found {
            debug!(term, airport = %main.airport_code, "resolved as country");
            return Ok(main);
        }
    }

    info!(term, "location not found");
    Err(OptimizerError::LocationNotFound(term.to_string()))
}
