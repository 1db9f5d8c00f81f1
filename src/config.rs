use std::path::PathBuf;
use std::time::Duration;

use crate::calculator::constants::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_STORE_TIMEOUT_MS, DEFAULT_STORE_URI,
};
use crate::cli::Cli;

/// Where and how records are persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Bound on server selection and connection setup.
    pub timeout: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            uri: DEFAULT_STORE_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
        }
    }
}

/// Runtime settings for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory that receives report files.
    pub output_dir: PathBuf,
    pub store: StoreSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            store: StoreSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            output_dir: cli.output_dir.clone(),
            store: StoreSettings {
                uri: cli.mongo_uri.clone(),
                database: cli.database.clone(),
                collection: cli.collection.clone(),
                timeout: Duration::from_millis(cli.store_timeout_ms),
            },
        }
    }
}
