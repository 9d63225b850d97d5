use serde::{Deserialize, Serialize};

pub const INVALID_BODY: &str = "Body must include 'from' and 'to' (as a list).";
pub const NO_RESULTS: &str = "No results found within the next 24 hours.";

#[derive(Debug, Deserialize)]
pub struct BestRequest {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<Vec<String>>,
}

impl BestRequest {
    /// Trimmed departure and destinations, or `None` when either is missing
    /// or blank.
    pub fn normalized(&self) -> Option<(String, Vec<String>)> {
        let from = self.from.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let to: Vec<String> = self
            .to
            .as_ref()?
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if to.is_empty() {
            return None;
        }
        Some((from.to_string(), to))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
