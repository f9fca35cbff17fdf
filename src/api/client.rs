use super::error::ApiError;
use super::models::*;
use async_trait::async_trait;

/// The four provider calls the updater needs. Implementations must not
/// retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    async fn zone_id_by_name(&self, zone_name: &str) -> Result<String, ApiError>;

    /// Records whose name matches `name` exactly, in provider order.
    async fn list_dns_records(&self, zone_id: &str, name: &str)
        -> Result<Vec<DnsRecord>, ApiError>;

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record_id: &str,
        params: &UpdateDnsRecordParams,
    ) -> Result<DnsRecord, ApiError>;
}
