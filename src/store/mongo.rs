use async_trait::async_trait;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::Client;
use tracing::{debug, info, warn};

use crate::config::StoreSettings;
use crate::error::{RecipeError, Result};
use crate::models::ReportRecord;
use crate::store::RecordSink;

/// MongoDB-backed sink.
///
/// Opens a fresh client for every insert and shuts it down afterwards.
#[derive(Debug, Clone)]
pub struct MongoSink {
    settings: StoreSettings,
}

impl MongoSink {
    pub fn new(settings: StoreSettings) -> Self {
        Self { settings }
    }

    async fn connect(&self) -> Result<Client> {
        let mut options = ClientOptions::parse(self.settings.uri.as_str()).await?;
        options.server_selection_timeout = Some(self.settings.timeout);
        options.connect_timeout = Some(self.settings.timeout);
        Ok(Client::with_options(options)?)
    }
}

/// Server selection failures mean nothing answered at the configured address.
fn classify(err: mongodb::error::Error) -> RecipeError {
    match *err.kind {
        ErrorKind::ServerSelection { .. } => RecipeError::StoreUnavailable(err.to_string()),
        _ => RecipeError::Store(err),
    }
}

#[async_trait]
impl RecordSink for MongoSink {
    async fn insert(&self, record: &ReportRecord) -> Result<()> {
        debug!(
            uri = %self.settings.uri,
            database = %self.settings.database,
            collection = %self.settings.collection,
            "connecting to record store"
        );
        let client = self.connect().await?;

        let outcome = {
            let collection = client
                .database(&self.settings.database)
                .collection::<ReportRecord>(&self.settings.collection);
            collection.insert_one(record).await
        };

        client.shutdown().await;

        match outcome {
            Ok(inserted) => {
                info!(id = ?inserted.inserted_id, name = %record.name, "record stored");
                Ok(())
            }
            Err(err) => {
                let err = classify(err);
                warn!(error = %err, "record not stored");
                Err(err)
            }
        }
    }
}
