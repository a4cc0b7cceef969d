use crate::error::Error;
use crate::record::RecordType;
use crate::store::{RecordStore, StoredRecord, WILDCARD_SUBDOMAIN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct InMemoryRecordStore {
    records: BTreeSet<StoredRecord>,
}

impl InMemoryRecordStore {
    /// Add `record`, returning whether the set changed.
    pub(super) fn put(&mut self, record: StoredRecord) -> bool {
        self.records.insert(record)
    }

    /// Remove `record`, returning whether the set changed.
    pub(super) fn remove(&mut self, record: &StoredRecord) -> bool {
        self.records.remove(record)
    }

    pub(super) fn contains_record(&self, record: &StoredRecord) -> bool {
        self.records.contains(record)
    }

    pub(super) fn matching(
        &self,
        apex: &str,
        subdomain: &str,
        record_type: RecordType,
    ) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| {
                r.apex == apex
                    && r.record_type == record_type
                    && (r.subdomain == subdomain || r.subdomain == WILDCARD_SUBDOMAIN)
            })
            .map(|r| r.value.clone())
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.records.len()
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&mut self, record: StoredRecord) -> Result<(), Error> {
        if !self.put(record) {
            tracing::debug!("record already present, insert ignored");
        }
        Ok(())
    }

    async fn delete(&mut self, record: &StoredRecord) -> Result<u64, Error> {
        Ok(u64::from(self.remove(record)))
    }

    async fn contains(&self, record: &StoredRecord) -> bool {
        self.contains_record(record)
    }

    async fn lookup(&self, apex: &str, subdomain: &str, record_type: RecordType) -> Vec<String> {
        self.matching(apex, subdomain, record_type)
    }

    async fn count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(subdomain: &str, record_type: RecordType, value: &str) -> StoredRecord {
        StoredRecord {
            apex: "example.com".into(),
            subdomain: subdomain.into(),
            record_type,
            value: value.into(),
        }
    }

    #[tokio::test]
    async fn insert_is_idempotent() {
        let mut store = InMemoryRecordStore::default();
        let a = row("@", RecordType::A, "4.3.2.1");
        store.insert(a.clone()).await.unwrap();
        store.insert(a.clone()).await.unwrap();
        assert_eq!(store.count().await, 1);
        assert!(store.contains(&a).await);
    }

    #[tokio::test]
    async fn tuples_differing_in_one_column_coexist() {
        let mut store = InMemoryRecordStore::default();
        store.insert(row("@", RecordType::A, "4.3.2.1")).await.unwrap();
        store.insert(row("@", RecordType::A, "4.3.2.2")).await.unwrap();
        store.insert(row("www", RecordType::A, "4.3.2.1")).await.unwrap();
        store.insert(row("@", RecordType::Txt, "4.3.2.1")).await.unwrap();
        let mut other_apex = row("@", RecordType::A, "4.3.2.1");
        other_apex.apex = "example.org".into();
        store.insert(other_apex).await.unwrap();
        assert_eq!(store.count().await, 5);
    }

    #[tokio::test]
    async fn delete_is_exact() {
        let mut store = InMemoryRecordStore::default();
        let keep = row("@", RecordType::A, "4.3.2.1");
        let gone = row("@", RecordType::A, "4.3.2.2");
        store.insert(keep.clone()).await.unwrap();
        store.insert(gone.clone()).await.unwrap();

        assert_eq!(store.delete(&gone).await.unwrap(), 1);
        assert!(!store.contains(&gone).await);
        assert!(store.contains(&keep).await);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn delete_absent_affects_nothing() {
        let mut store = InMemoryRecordStore::default();
        let keep = row("@", RecordType::A, "4.3.2.1");
        store.insert(keep.clone()).await.unwrap();

        assert_eq!(store.delete(&row("@", RecordType::Aaaa, "::1")).await.unwrap(), 0);
        assert_eq!(store.delete(&row("www", RecordType::A, "4.3.2.1")).await.unwrap(), 0);
        assert_eq!(store.count().await, 1);
        assert!(store.contains(&keep).await);

        assert_eq!(store.delete(&keep).await.unwrap(), 1);
        assert_eq!(store.delete(&keep).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn lookup_includes_wildcard() {
        let mut store = InMemoryRecordStore::default();
        store.insert(row("www", RecordType::A, "1.1.1.1")).await.unwrap();
        store.insert(row("*", RecordType::A, "2.2.2.2")).await.unwrap();
        store.insert(row("www", RecordType::Aaaa, "::1")).await.unwrap();
        store.insert(row("api", RecordType::A, "3.3.3.3")).await.unwrap();

        let mut www = store.lookup("example.com", "www", RecordType::A).await;
        www.sort();
        assert_eq!(www, vec!["1.1.1.1".to_string(), "2.2.2.2".to_string()]);

        assert_eq!(
            store.lookup("example.com", "mail", RecordType::A).await,
            vec!["2.2.2.2".to_string()]
        );
        assert!(store
            .lookup("example.org", "www", RecordType::A)
            .await
            .is_empty());
        assert!(store
            .lookup("example.com", "api", RecordType::Txt)
            .await
            .is_empty());
    }
}
