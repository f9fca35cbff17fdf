use crate::api::ApiError;
use thiserror::Error;

/// One variant per pipeline step. None of them is recoverable.
#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("missing required parameters: {0}")]
    MissingParameters(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("error creating Cloudflare API client: {0}")]
    AuthConstruction(#[source] ApiError),

    #[error("error fetching zone ID for {zone}: {source}")]
    ZoneLookup {
        zone: String,
        #[source]
        source: ApiError,
    },

    #[error("error fetching DNS records for {record}: {source}")]
    RecordLookup {
        record: String,
        #[source]
        source: ApiError,
    },

    #[error("no DNS records found for {0}")]
    NoRecordFound(String),

    #[error("error updating DNS record {record_id}: {source}")]
    Update {
        record_id: String,
        #[source]
        source: ApiError,
    },

    #[error("error serializing DNS record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UpdaterError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Any failure before the network is touched.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingParameters(_) | Self::Configuration(_))
    }

    /// A required value was empty or absent, as opposed to unreadable or
    /// malformed input.
    pub fn is_missing_parameters(&self) -> bool {
        matches!(self, Self::MissingParameters(_))
    }
}
