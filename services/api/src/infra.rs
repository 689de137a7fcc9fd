use chrono::NaiveDate;
use cro_engine::workflows::outreach::{
    BrandKey, Channel, OutreachRecord, RepositoryError, SnapshotRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot store backing the service until a durable store lands. Insertion
/// order is tracked separately so history listings stay newest-first.
#[derive(Default, Clone)]
pub(crate) struct InMemorySnapshotRepository {
    records: Arc<Mutex<HashMap<BrandKey, OutreachRecord>>>,
    order: Arc<Mutex<Vec<BrandKey>>>,
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn insert(&self, record: OutreachRecord) -> Result<OutreachRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let key = record.key();
        if guard.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(key.clone(), record.clone());
        self.order
            .lock()
            .expect("order mutex poisoned")
            .push(key);
        Ok(record)
    }

    fn update(&self, record: OutreachRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let key = record.key();
        if guard.contains_key(&key) {
            guard.insert(key, record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, key: &BrandKey) -> Result<Option<OutreachRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<OutreachRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let order = self.order.lock().expect("order mutex poisoned");
        Ok(order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|key| guard.get(key).cloned())
            .collect())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_channel(raw: &str) -> Result<Channel, String> {
    match raw.trim().to_lowercase().as_str() {
        "email" => Ok(Channel::Email),
        "whatsapp" => Ok(Channel::WhatsApp),
        other => Err(format!("unknown channel '{other}' (expected email or whatsapp)")),
    }
}
