use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::tequila::{
    CityRef, Coordinates, Flight, FlightProvider, Location, LocationKind, SearchWindow,
};

pub fn airport(code: &str, name: &str, city: &str, rank: i64, lat: f64, lon: f64) -> Location {
    Location {
        id: None,
        code: Some(code.to_string()),
        name: name.to_string(),
        rank: Some(rank),
        city: Some(CityRef {
            code: Some(city[..3].to_uppercase()),
            name: Some(city.to_string()),
        }),
        location: Coordinates { lat, lon },
    }
}

pub fn place(id: &str, name: &str, lat: f64, lon: f64) -> Location {
    Location {
        id: Some(id.to_string()),
        code: None,
        name: name.to_string(),
        rank: None,
        city: None,
        location: Coordinates { lat, lon },
    }
}

/// In-memory provider keyed by exact term, coordinate and route.
#[derive(Default)]
pub struct FakeProvider {
    locations: HashMap<(String, &'static str), Location>,
    nearby: HashMap<String, Vec<Location>>,
    flights: HashMap<(String, String), Flight>,
    calls: Mutex<Vec<String>>,
}

fn coord_key(lat: f64, lon: f64) -> String {
    format!("{lat:.3},{lon:.3}")
}

impl FakeProvider {
    pub fn with_location(mut self, term: &str, kind: LocationKind, location: Location) -> Self {
        self.locations
            .insert((term.to_string(), kind.as_str()), location);
        self
    }

    pub fn with_airports_near(mut self, lat: f64, lon: f64, airports: Vec<Location>) -> Self {
        self.nearby.insert(coord_key(lat, lon), airports);
        self
    }

    /// Registers a city with a single main airport at the same coordinates.
    pub fn with_city(self, name: &str, code: &str, lat: f64, lon: f64) -> Self {
        self.with_location(name, LocationKind::City, place(name, name, lat, lon))
            .with_airports_near(
                lat,
                lon,
                vec![airport(code, &format!("{name} Intl"), name, 1, lat, lon)],
            )
    }

    pub fn with_flight(mut self, from: &str, to: &str, price: f64, distance: Option<f64>) -> Self {
        self.flights
            .insert((from.to_string(), to.to_string()), Flight { price, distance });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl FlightProvider for FakeProvider {
    async fn find_location(&self, term: &str, kind: LocationKind) -> Result<Option<Location>> {
        self.record(format!("query:{}:{term}", kind.as_str()));
        Ok(self
            .locations
            .get(&(term.to_string(), kind.as_str()))
            .cloned())
    }

    async fn airports_near(
        &self,
        lat: f64,
        lon: f64,
        radius_km: u32,
        _limit: u32,
    ) -> Result<Vec<Location>> {
        self.record(format!("radius:{radius_km}"));
        Ok(self
            .nearby
            .get(&coord_key(lat, lon))
            .cloned()
            .unwrap_or_default())
    }

    async fn cheapest_oneway(
        &self,
        from_code: &str,
        to_code: &str,
        _window: &SearchWindow,
        _currency: &str,
    ) -> Result<Option<Flight>> {
        self.record(format!("search:{from_code}-{to_code}"));
        Ok(self
            .flights
            .get(&(from_code.to_string(), to_code.to_string()))
            .cloned())
    }
}
