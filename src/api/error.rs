use super::models::ApiMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed (HTTP {status}): {}", join_messages(.errors, .body))]
    Api {
        status: u16,
        errors: Vec<ApiMessage>,
        body: String,
    },

    #[error("failed to parse API response: {0}")]
    Decode(String),

    #[error("API token cannot be used as a bearer credential: {0}")]
    InvalidToken(String),

    #[error("zone could not be found: {0}")]
    ZoneNotFound(String),

    #[error("multiple zones found for {0}")]
    MultipleZones(String),
}

fn join_messages(errors: &[ApiMessage], body: &str) -> String {
    if errors.is_empty() {
        return body.to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
