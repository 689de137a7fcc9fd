use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{BrandProfile, ScoreBand, SiteAudit};
use super::messages::{FollowUpMessage, OutreachMessages};
use super::scoring::CompositeScore;

/// Normalized lookup key for a brand's stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandKey(pub String);

impl BrandKey {
    /// Lowercased, trimmed, whitespace collapsed to hyphens.
    pub fn from_name(name: &str) -> Self {
        let slug = name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }
}

/// Everything generated for one brand in one pass, kept for follow-up flows.
#[derive(Debug, Clone, Serialize)]
pub struct OutreachRecord {
    pub brand: BrandProfile,
    pub audit: SiteAudit,
    pub score: CompositeScore,
    pub messages: OutreachMessages,
    pub follow_ups: Vec<FollowUpMessage>,
    pub generated_on: NaiveDate,
}

impl OutreachRecord {
    pub fn key(&self) -> BrandKey {
        BrandKey::from_name(&self.brand.name)
    }

    pub fn summary_view(&self) -> SnapshotSummaryView {
        SnapshotSummaryView {
            brand: self.brand.name.clone(),
            overall: self.score.overall,
            band: self.score.band(),
            band_label: self.score.band().label(),
            alert_count: self.score.alerts.len(),
            generated_on: self.generated_on,
        }
    }
}

/// Compact listing row for history endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSummaryView {
    pub brand: String,
    pub overall: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub alert_count: usize,
    pub generated_on: NaiveDate,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SnapshotRepository: Send + Sync {
    fn insert(&self, record: OutreachRecord) -> Result<OutreachRecord, RepositoryError>;
    fn update(&self, record: OutreachRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, key: &BrandKey) -> Result<Option<OutreachRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<OutreachRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("snapshot already exists")]
    Conflict,
    #[error("snapshot not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
