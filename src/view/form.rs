use serde::{Deserialize, Serialize};

pub const MISSING_FROM: &str = "Please enter a departure city.";
pub const MISSING_TO: &str = "Please enter at least one destination city.";

/// Raw text of the two form fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

/// Body sent to `POST /api/best`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequest {
    pub from: String,
    pub to: Vec<String>,
}

pub fn parse_destinations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl FormInput {
    pub fn validate(&self) -> Result<SubmitRequest, &'static str> {
        let from = self.from.trim();
        if from.is_empty() {
            return Err(MISSING_FROM);
        }
        let to = parse_destinations(&self.to);
        if to.is_empty() {
            return Err(MISSING_TO);
        }
        Ok(SubmitRequest {
            from: from.to_string(),
            to,
        })
    }
}
