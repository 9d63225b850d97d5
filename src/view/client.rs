use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::optimizer::BestValue;

use super::form::SubmitRequest;

pub const GENERIC_ERROR: &str = "Error";

/// What a single `POST /api/best` came back with.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Best(BestValue),
    Message(String),
    Failed(String),
}

#[async_trait]
pub trait BestApi: Send + Sync {
    async fn post_best(&self, request: &SubmitRequest) -> Outcome;
}

fn error_field(body: Option<&Value>) -> String {
    body.and_then(|b| b.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}

/// Discriminates a response by field presence.
pub fn classify(success: bool, body: Option<Value>) -> Outcome {
    if !success {
        return Outcome::Failed(error_field(body.as_ref()));
    }
    let Some(body) = body else {
        return Outcome::Failed(GENERIC_ERROR.to_string());
    };

    if body.get("best").is_some() && body.get("comparisons").is_some() {
        if let Ok(value) = serde_json::from_value::<BestValue>(body.clone()) {
            return Outcome::Best(value);
        }
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Outcome::Message(message.to_string());
    }
    Outcome::Failed(error_field(Some(&body)))
}

/// Posts to `<base_url>/api/best` with no client-side timeout.
#[derive(Clone)]
pub struct HttpBestApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBestApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/best", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl BestApi for HttpBestApi {
    async fn post_best(&self, request: &SubmitRequest) -> Outcome {
        let response = match self.http.post(self.endpoint()).json(request).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "best destination request failed");
                return Outcome::Failed(GENERIC_ERROR.to_string());
            }
        };
        let success = response.status().is_success();
        let body = response.json::<Value>().await.ok();
        classify(success, body)
    }
}
