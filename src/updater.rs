use crate::api::models::{DnsRecord, UpdateDnsRecordParams};
use crate::api::{ApiError, DnsApiClient};
use crate::cli::Args;
use crate::config::Config;
use crate::error::UpdaterError;
use log::{debug, info, warn};

/// Validates `args`, then connects and updates the record.
///
/// `connect` is only called once the configuration is complete, so an
/// invalid invocation never reaches the network.
pub async fn run<C, F>(args: &Args, connect: F) -> Result<DnsRecord, UpdaterError>
where
    C: DnsApiClient,
    F: FnOnce(&Config) -> Result<C, ApiError>,
{
    let config = Config::from_args(args)?;
    debug!("Validated configuration: {:?}", config);

    let client = connect(&config).map_err(UpdaterError::AuthConstruction)?;
    debug!("Created API client for {}", config.api_url);

    let updated = update_record(&client, &config).await?;
    report(&updated)?;
    Ok(updated)
}

/// Resolves the zone, finds the record by name and overwrites its content.
/// Returns the record as confirmed by the provider.
pub async fn update_record<C>(client: &C, config: &Config) -> Result<DnsRecord, UpdaterError>
where
    C: DnsApiClient,
{
    let zone_id = client
        .zone_id_by_name(&config.zone)
        .await
        .map_err(|source| UpdaterError::ZoneLookup {
            zone: config.zone.clone(),
            source,
        })?;
    debug!("Resolved zone {} to {}", config.zone, zone_id);

    let records = client
        .list_dns_records(&zone_id, &config.record)
        .await
        .map_err(|source| UpdaterError::RecordLookup {
            record: config.record.clone(),
            source,
        })?;

    for record in &records {
        info!("Found DNS record: {:?}", record);
    }

    let record = select_record(&records, &config.record)?;
    let params = UpdateDnsRecordParams::from_record(record, &config.content);
    info!("Updating DNS record {} with {:?}", record.id, params);

    client
        .update_dns_record(&zone_id, &record.id, &params)
        .await
        .map_err(|source| UpdaterError::Update {
            record_id: record.id.clone(),
            source,
        })
}

/// Picks the first record in provider order. The provider does not
/// guarantee that order, so ambiguity is logged rather than resolved.
fn select_record<'a>(records: &'a [DnsRecord], name: &str) -> Result<&'a DnsRecord, UpdaterError> {
    let first = records
        .first()
        .ok_or_else(|| UpdaterError::NoRecordFound(name.to_string()))?;

    if records.len() > 1 {
        warn!(
            "{} DNS records match {}; updating only the first ({} {} {})",
            records.len(),
            name,
            first.id,
            first.r#type,
            first.content
        );
    }
    Ok(first)
}

/// Logs the updated record as indented JSON and returns the text.
pub fn report(record: &DnsRecord) -> Result<String, UpdaterError> {
    let json = serde_json::to_string_pretty(record)?;
    info!("DNS record updated successfully: \n{}", json);
    Ok(json)
}
