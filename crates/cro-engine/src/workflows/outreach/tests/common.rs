use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::outreach::domain::{BrandProfile, SiteAudit};
use crate::workflows::outreach::repository::{
    BrandKey, OutreachRecord, RepositoryError, SnapshotRepository,
};
use crate::workflows::outreach::scoring::ScoringEngine;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new()
}

pub(super) fn audit(findings: &[&str], mobile: Option<u32>, desktop: Option<u32>) -> SiteAudit {
    SiteAudit::new(
        findings.iter().map(|key| key.to_string()).collect(),
        mobile,
        desktop,
    )
}

pub(super) fn brand(name: &str) -> BrandProfile {
    BrandProfile {
        name: name.to_string(),
        website_url: format!("https://{}.example", name.to_lowercase()),
        recipient: "Priya".to_string(),
        sender: "Dev".to_string(),
        notes: String::new(),
    }
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

#[derive(Default)]
pub(super) struct TestSnapshotRepository {
    records: Mutex<HashMap<BrandKey, OutreachRecord>>,
    order: Mutex<Vec<BrandKey>>,
}

impl TestSnapshotRepository {
    pub(super) fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl SnapshotRepository for TestSnapshotRepository {
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
