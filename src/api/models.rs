use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DnsRecord {
    pub id: String,
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxiable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
}

/// Body of `PATCH /zones/:zone_id/dns_records/:id`. Fields left out here
/// (proxied, comment, tags) are kept as they are by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDnsRecordParams {
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

impl UpdateDnsRecordParams {
    /// Copies everything from `record` except the content.
    pub fn from_record(record: &DnsRecord, content: &str) -> Self {
        Self {
            r#type: record.r#type.clone(),
            name: record.name.clone(),
            content: content.to_string(),
            ttl: record.ttl,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Zone {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}
