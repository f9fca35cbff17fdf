pub mod models;

pub use models::{Config, FileConfig};

use crate::api::API_BASE_URL;
use crate::cli::Args;
use crate::error::UpdaterError;
use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Merges flags (or their env fallbacks) over the config file, then
    /// checks every required value is present. Empty flags count as unset.
    pub fn from_args(args: &Args) -> Result<Self, UpdaterError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)
                .map_err(|e| UpdaterError::Configuration(format!("{:#}", e)))?,
            None => FileConfig::default(),
        };

        let config = Config {
            api_token: pick(&args.token, file.api_token).unwrap_or_default(),
            zone: pick(&args.zone, file.zone).unwrap_or_default(),
            record: pick(&args.record, file.record).unwrap_or_default(),
            content: pick(&args.content, file.content).unwrap_or_default(),
            api_url: pick(&args.api_url, file.api_url)
                .unwrap_or_else(|| API_BASE_URL.to_string()),
        };

        config.validate().map_err(|e| {
            let missing = e
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .any(|error| error.code == "length");
            if missing {
                UpdaterError::MissingParameters(e.to_string())
            } else {
                UpdaterError::Configuration(e.to_string())
            }
        })?;
        Ok(config)
    }
}

fn pick(flag: &Option<String>, file: Option<String>) -> Option<String> {
    flag.as_ref()
        .filter(|v| !v.is_empty())
        .cloned()
        .or(file)
}
