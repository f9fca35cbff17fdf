use super::{client::DnsApiClient, error::ApiError, models::*};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

const RECORDS_PER_PAGE: u32 = 100;

/// Cloudflare v4 client authenticated with an API token.
///
/// The token only lives inside the default headers of the HTTP client,
/// marked sensitive, so it never shows up in `Debug` output.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
}

impl CloudflareClient {
    /// Builds a client for `base_url` (normally [`API_BASE_URL`]).
    ///
    /// Fails when the token can't be carried in an `Authorization` header.
    /// Whether the token is actually accepted is only known after the first
    /// request.
    pub fn new(api_token: &str, base_url: &str) -> Result<Self, ApiError> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_token))
            .map_err(|e| ApiError::InvalidToken(e.to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(T, Option<ResultInfo>), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed: ApiResponse<T> = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                return Err(ApiError::Decode(format!("{}. Response: {}", e, text)));
            }
            Err(_) => {
                return Err(ApiError::Api {
                    status: status.as_u16(),
                    errors: Vec::new(),
                    body: text,
                });
            }
        };

        if !status.is_success() || !parsed.success {
            return Err(ApiError::Api {
                status: status.as_u16(),
                errors: parsed.errors,
                body: text,
            });
        }

        let result = parsed
            .result
            .ok_or_else(|| ApiError::Decode(format!("response has no result: {}", text)))?;
        Ok((result, parsed.result_info))
    }
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn zone_id_by_name(&self, zone_name: &str) -> Result<String, ApiError> {
        debug!("GET /zones?name={}", zone_name);
        let request = self
            .client
            .get(self.url("/zones"))
            .query(&[("name", zone_name)]);

        let (zones, _): (Vec<Zone>, _) = self.send(request).await?;
        let mut zones = zones.into_iter();
        match (zones.next(), zones.next()) {
            (Some(zone), None) => Ok(zone.id),
            (None, _) => Err(ApiError::ZoneNotFound(zone_name.to_string())),
            (Some(_), Some(_)) => Err(ApiError::MultipleZones(zone_name.to_string())),
        }
    }

    async fn list_dns_records(
        &self,
        zone_id: &str,
        name: &str,
    ) -> Result<Vec<DnsRecord>, ApiError> {
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            debug!(
                "GET /zones/{}/dns_records?name={}&page={}",
                zone_id, name, page
            );
            let request = self
                .client
                .get(self.url(&format!("/zones/{}/dns_records", zone_id)))
                .query(&[
                    ("name", name.to_string()),
                    ("page", page.to_string()),
                    ("per_page", RECORDS_PER_PAGE.to_string()),
                ]);

            let (batch, info): (Vec<DnsRecord>, _) = self.send(request).await?;
            let empty = batch.is_empty();
            records.extend(batch);

            match info {
                Some(info) if !empty && info.total_pages > page => page += 1,
                _ => break,
            }
        }

        Ok(records)
    }

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        params: &UpdateDnsRecordParams,
    ) -> Result<DnsRecord, ApiError> {
        debug!("PATCH /zones/{}/dns_records/{}", zone_id, record_id);
        let request = self
            .client
            .patch(self.url(&format!("/zones/{}/dns_records/{}", zone_id, record_id)))
            .json(params);

        let (record, _) = self.send(request).await?;
        Ok(record)
    }
}
