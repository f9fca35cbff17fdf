use serde::Deserialize;
use std::fmt;
use validator::Validate;

/// Everything one run needs, resolved from flags, environment and the
/// optional config file.
#[derive(Clone, PartialEq, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    #[validate(length(min = 1, message = "Zone name cannot be empty"))]
    pub zone: String,

    #[validate(length(min = 1, message = "Record name cannot be empty"))]
    pub record: String,

    #[validate(length(min = 1, message = "Record content cannot be empty"))]
    pub content: String,

    #[validate(url(message = "API URL must be a valid URL"))]
    pub api_url: String,
}

// Keeps the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &redact(&self.api_token))
            .field("zone", &self.zone)
            .field("record", &self.record)
            .field("content", &self.content)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn redact(token: &str) -> &'static str {
    if token.is_empty() {
        ""
    } else {
        "<REDACTED>"
    }
}

/// Shape of the optional YAML file. Every key may be omitted.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_token: Option<String>,
    pub zone: Option<String>,
    pub record: Option<String>,
    pub content: Option<String>,
    pub api_url: Option<String>,
}
