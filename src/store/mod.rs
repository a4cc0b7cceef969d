//! Deduplicated record storage.
//!
//! Records are stored in their flattened form, a [`StoredRecord`] tuple of apex, subdomain,
//! record type and canonical value. The tuple as a whole is the uniqueness key:
//!
//! * inserting a tuple that is already present is a silent no-op, so repeating an identical
//!   request never fails and never duplicates;
//! * deleting reports how many tuples were removed, which is `0` or `1`. Deleting something
//!   absent isn't an error.
//!
//! Changing any part of a record means deleting the old tuple and inserting a new one.
//!
//! Two implementations are provided, [`memory::InMemoryRecordStore`] and
//! [`file::FileRecordStore`]. The former is not durable across restarts. The latter writes its
//! state to disk after each change and loads it again on startup.

use crate::error::Error;
use crate::record::{canonical, Record, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod file;
pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use file::FileRecordStore;
#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryRecordStore;

/// Subdomain label matching any name under an apex in [`RecordStore::lookup`].
pub const WILDCARD_SUBDOMAIN: &str = "*";

/// The persisted form of a [`Record`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoredRecord {
    pub apex: String,
    pub subdomain: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: String,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            apex: record.apex().to_string(),
            subdomain: record.subdomain().to_string(),
            record_type: record.record_type(),
            value: canonical::render(record.value()),
        }
    }
}

impl fmt::Display for StoredRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "apex='{}' subdomain='{}' {} {}",
            self.apex, self.subdomain, self.record_type, self.value
        )
    }
}

/// `DynRecordStore` is a type alias for a [`RecordStore`] that can be used by multiple
/// read/write consumers that coordinate through an [`Arc`] and a [`RwLock`] wrapping the
/// [`RecordStore`].
#[allow(clippy::module_name_repetitions)]
pub type DynRecordStore = Arc<RwLock<dyn RecordStore + Send + Sync>>;

/// An async trait describing a set of [`StoredRecord`] tuples.
#[async_trait::async_trait]
pub trait RecordStore {
    /// Add `record` unless an identical tuple is already present.
    async fn insert(&mut self, record: StoredRecord) -> Result<(), Error>;

    /// Remove the tuple exactly matching `record`, returning the number of tuples removed.
    async fn delete(&mut self, record: &StoredRecord) -> Result<u64, Error>;

    /// Whether the exact tuple is present.
    async fn contains(&self, record: &StoredRecord) -> bool;

    /// Canonical values of `record_type` stored for `subdomain` of `apex`, including values
    /// stored for the [`WILDCARD_SUBDOMAIN`].
    async fn lookup(&self, apex: &str, subdomain: &str, record_type: RecordType) -> Vec<String>;

    /// Number of stored tuples.
    async fn count(&self) -> usize;
}
