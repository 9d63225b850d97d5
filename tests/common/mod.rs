#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use flight_optimizer::{
    geo::haversine_km, tequila::TequilaClient, view::HttpBestApi, AppState,
};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";

struct City {
    name: &'static str,
    lat: f64,
    lon: f64,
}

struct Airport {
    code: &'static str,
    name: &'static str,
    city: &'static str,
    rank: i64,
    lat: f64,
    lon: f64,
}

const CITIES: &[City] = &[
    City { name: "London", lat: 51.5, lon: -0.12 },
    City { name: "Paris", lat: 48.86, lon: 2.35 },
    City { name: "Rome", lat: 41.9, lon: 12.5 },
    City { name: "Madrid", lat: 40.42, lon: -3.7 },
];

const AIRPORTS: &[Airport] = &[
    Airport { code: "LGW", name: "Gatwick", city: "London", rank: 4, lat: 51.15, lon: -0.19 },
    Airport { code: "LHR", name: "Heathrow", city: "London", rank: 1, lat: 51.47, lon: -0.45 },
    Airport { code: "CDG", name: "Charles de Gaulle", city: "Paris", rank: 1, lat: 49.0, lon: 2.55 },
    Airport { code: "FCO", name: "Fiumicino", city: "Rome", rank: 1, lat: 41.8, lon: 12.25 },
    Airport { code: "MAD", name: "Barajas", city: "Madrid", rank: 1, lat: 40.47, lon: -3.56 },
];

/// (from, to, price, distance)
const FLIGHTS: &[(&str, &str, f64, f64)] = &[
    ("LHR", "CDG", 100.0, 350.0),
    ("LHR", "FCO", 150.0, 1500.0),
];

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(API_KEY)
}

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, "invalid apikey").into_response()
}

fn airport_json(a: &Airport) -> Value {
    json!({
        "id": a.code,
        "code": a.code,
        "name": a.name,
        "rank": a.rank,
        "city": { "code": a.city[..3].to_uppercase(), "name": a.city },
        "location": { "lat": a.lat, "lon": a.lon }
    })
}

async fn locations_query(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }
    let term = q.get("term").map(String::as_str).unwrap_or_default();
    let kind = q.get("location_types").map(String::as_str).unwrap_or_default();
    let locations: Vec<Value> = match kind {
        "city" => CITIES
            .iter()
            .filter(|c| c.name.eq_ignore_ascii_case(term))
            .map(|c| {
                json!({
                    "id": c.name.to_lowercase(),
                    "code": c.name[..3].to_uppercase(),
                    "name": c.name,
                    "location": { "lat": c.lat, "lon": c.lon }
                })
            })
            .collect(),
        "airport" => AIRPORTS
            .iter()
            .filter(|a| a.code.eq_ignore_ascii_case(term))
            .map(airport_json)
            .collect(),
        _ => Vec::new(),
    };
    Json(json!({ "locations": locations })).into_response()
}

async fn locations_radius(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }
    let num = |key: &str| q.get(key).and_then(|v| v.parse::<f64>().ok()).unwrap_or_default();
    let (lat, lon, radius) = (num("lat"), num("lon"), num("radius"));
    let locations: Vec<Value> = AIRPORTS
        .iter()
        .filter(|a| haversine_km(lat, lon, a.lat, a.lon) <= radius)
        .map(airport_json)
        .collect();
    Json(json!({ "locations": locations })).into_response()
}

async fn search(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }
    let from = q.get("fly_from").map(String::as_str).unwrap_or_default();
    let to = q.get("fly_to").map(String::as_str).unwrap_or_default();
    let data: Vec<Value> = FLIGHTS
        .iter()
        .filter(|(f, t, _, _)| *f == from && *t == to)
        .map(|(_, _, price, distance)| json!({ "price": price, "distance": distance }))
        .collect();
    Json(json!({ "currency": q.get("curr"), "data": data })).into_response()
}

pub async fn spawn_mock_tequila() -> String {
    let app = Router::new()
        .route("/locations/query", get(locations_query))
        .route("/locations/radius", get(locations_radius))
        .route("/v2/search", get(search));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A provider that accepts requests and never answers within a test's patience.
pub async fn spawn_hanging_tequila() -> String {
    async fn hang() -> &'static str {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        "{}"
    }

    let app = Router::new()
        .route("/locations/query", get(hang))
        .route("/locations/radius", get(hang))
        .route("/v2/search", get(hang));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn test_state(tequila_url: &str, api_key: &str, api_base_url: &str) -> Arc<AppState> {
    test_state_with_timeout(tequila_url, api_key, api_base_url, 5_000)
}

pub fn test_state_with_timeout(
    tequila_url: &str,
    api_key: &str,
    api_base_url: &str,
    timeout_ms: u64,
) -> Arc<AppState> {
    Arc::new(AppState {
        provider: Arc::new(TequilaClient::new(tequila_url, api_key, timeout_ms)),
        best_api: Arc::new(HttpBestApi::new(api_base_url)),
        currency: "USD".to_string(),
    })
}
