mod cli;

use crate::api::models::DnsRecord;
use crate::config::Config;
use serde_json::{json, Value};

pub const TOKEN: &str = "test_token";
pub const ZONE_ID: &str = "zone123";

pub fn envelope(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
    })
}

pub fn record_json(id: &str, name: &str, content: &str, ttl: u32) -> Value {
    json!({
        "id": id,
        "zone_id": ZONE_ID,
        "zone_name": "example.com",
        "name": name,
        "type": "A",
        "content": content,
        "proxiable": true,
        "proxied": false,
        "ttl": ttl,
        "comment": null,
        "tags": [],
        "created_on": "2024-01-01T00:00:00Z",
        "modified_on": "2024-01-01T00:00:00Z",
    })
}

pub fn record(id: &str, content: &str) -> DnsRecord {
    serde_json::from_value(record_json(id, "home.example.com", content, 300)).unwrap()
}

pub fn test_config(api_url: &str) -> Config {
    Config {
        api_token: TOKEN.to_string(),
        zone: "example.com".to_string(),
        record: "home.example.com".to_string(),
        content: "203.0.113.5".to_string(),
        api_url: api_url.to_string(),
    }
}
