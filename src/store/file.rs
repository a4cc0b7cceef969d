//! A JSON file-backed implementation of the [`RecordStore`][super::RecordStore] trait.
//!
//! Wraps a [`InMemoryRecordStore`][super::memory::InMemoryRecordStore] instance, persisting
//! changes to a JSON file on disk that can be reloaded across restarts.
use crate::error::Error;
use crate::record::RecordType;
use crate::store::memory::InMemoryRecordStore;
use crate::store::{RecordStore, StoredRecord};
use std::io::ErrorKind;
use tokio::fs::{self, File};
use tokio::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// A file-backed record store. After each insert or delete that changes the set, a JSON file
/// on disk is rewritten with the new data. This file is reloaded across restarts to avoid
/// losing state.
///
/// Wraps a [`InMemoryRecordStore`][super::memory::InMemoryRecordStore], operating the same way
/// except for maintaining state beyond in-memory.
#[derive(Default, Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct FileRecordStore {
    record_store: InMemoryRecordStore,
    path: String,
}

impl FileRecordStore {
    /// Save the state of the record store as JSON to the store's configured path, or return an
    /// Error.
    ///
    /// The state is written to a `.tmp` sibling of the path and renamed over it, so the file on
    /// disk always holds either the previous or the new complete state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if a record in the store can't be serialized to JSON.
    ///
    /// Returns [`Error::IO`] if the serialized record store state can't be written to the
    /// backing file path.
    pub async fn save(&self) -> Result<(), Error> {
        let data = serde_json::to_string_pretty(&self.record_store)?;
        let tmp_path = format!("{}.tmp", self.path);
        let mut output_file = File::create(&tmp_path).await?;
        output_file.write_all(data.as_bytes()).await?;
        output_file.sync_all().await?;
        drop(output_file);
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    /// Load a [`FileRecordStore`] from the JSON state located at the given path, or return an
    /// Error. A missing file is created holding an empty store, so opening the same path
    /// repeatedly is safe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJSON`] if the JSON state file is invalid.
    ///
    /// Returns [`Error::IO`] if the path can't be opened, created or read.
    pub async fn try_from_file(p: &str) -> Result<Self, Error> {
        let contents = match File::open(p).await {
            Ok(mut f) => {
                let mut buf = vec![];
                f.read_to_end(&mut buf).await?;
                buf
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    tracing::info!("creating empty record store at {p}");
                    Self::write_empty_state(File::create(&p).await?).await?
                }
                _ => return Err(Error::IO(err)),
            },
        };

        let record_store: InMemoryRecordStore = serde_json::from_slice(&contents)?;
        tracing::debug!("loaded {} records from {p}", record_store.len());
        Ok(Self {
            path: p.to_string(),
            record_store,
        })
    }

    async fn write_empty_state(mut f: File) -> io::Result<Vec<u8>> {
        let default_data = serde_json::to_string_pretty(&InMemoryRecordStore::default())?;
        let default_bytes = default_data.as_bytes();
        f.write_all(default_bytes).await?;
        f.flush().await?;
        Ok(default_bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl RecordStore for FileRecordStore {
    async fn insert(&mut self, record: StoredRecord) -> Result<(), Error> {
        if !self.record_store.put(record.clone()) {
            tracing::debug!("record already present, insert ignored");
            return Ok(());
        }
        // Memory must never hold a row the file doesn't.
        if let Err(err) = self.save().await {
            self.record_store.remove(&record);
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&mut self, record: &StoredRecord) -> Result<u64, Error> {
        if !self.record_store.remove(record) {
            return Ok(0);
        }
        if let Err(err) = self.save().await {
            self.record_store.put(record.clone());
            return Err(err);
        }
        Ok(1)
    }

    async fn contains(&self, record: &StoredRecord) -> bool {
        self.record_store.contains_record(record)
    }

    async fn lookup(&self, apex: &str, subdomain: &str, record_type: RecordType) -> Vec<String> {
        self.record_store.matching(apex, subdomain, record_type)
    }

    async fn count(&self) -> usize {
        self.record_store.len()
    }
}
