//! Price-per-kilometer ranking across candidate destinations.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::geo::{haversine_km, round_to};
use crate::resolver::resolve_main_airport;
use crate::tequila::{FlightProvider, SearchWindow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub destination: String,
    pub airport: String,
    pub price: f64,
    pub distance_km: f64,
    pub price_per_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestValue {
    pub best: Candidate,
    /// Every candidate that had a flight, in request order.
    pub comparisons: Vec<Candidate>,
}

/// The next 24 hours starting at `now`.
pub fn next_day_window(now: DateTime<Utc>) -> SearchWindow {
    SearchWindow {
        date_from: now.format("%d/%m/%Y").to_string(),
        date_to: (now + Duration::days(1)).format("%d/%m/%Y").to_string(),
    }
}

pub async fn find_best<P: FlightProvider + ?Sized>(
    provider: &P,
    from_city: &str,
    to_cities: &[String],
    now: DateTime<Utc>,
    currency: &str,
) -> Result<Option<BestValue>> {
    let departure = resolve_main_airport(provider, from_city).await?;
    let window = next_day_window(now);
    info!(
        from = %departure.airport_code,
        destinations = to_cities.len(),
        date_from = %window.date_from,
        "ranking destinations"
    );

    let mut comparisons: Vec<Candidate> = Vec::new();
    let mut best: Option<usize> = None;

    for city in to_cities {
        let arrival = resolve_main_airport(provider, city).await?;
        let Some(flight) = provider
            .cheapest_oneway(
                &departure.airport_code,
                &arrival.airport_code,
                &window,
                currency,
            )
            .await?
        else {
            debug!(city = %city, "no flight in window");
            continue;
        };

        let distance_km = match flight.distance {
            Some(d) if d != 0.0 => d,
            _ => haversine_km(departure.lat, departure.lon, arrival.lat, arrival.lon),
        };
        if distance_km <= 0.0 {
            debug!(city = %city, "skipping zero distance route");
            continue;
        }

        let candidate = Candidate {
            destination: arrival.city_name,
            airport: arrival.airport_code,
            price: flight.price,
            distance_km: round_to(distance_km, 2),
            price_per_km: round_to(flight.price / distance_km, 4),
        };
        let beats_best = best
            .map(|i| candidate.price_per_km < comparisons[i].price_per_km)
            .unwrap_or(true);
        if beats_best {
            best = Some(comparisons.len());
        }
        comparisons.push(candidate);
    }

    Ok(best.map(|i| BestValue {
        best: comparisons[i].clone(),
        comparisons,
    }))
}
