use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{BrandProfile, Channel, SiteAudit};
use super::messages::{compose_messages, follow_up_sequence};
use super::repository::{BrandKey, OutreachRecord, RepositoryError, SnapshotRepository};
use super::scoring::ScoringEngine;

/// Service composing the scoring engine with snapshot storage.
///
/// The engine itself stays pure; all persistence lives here so repeated
/// generations for the same brand overwrite the stored snapshot.
pub struct OutreachService<R> {
    engine: ScoringEngine,
    repository: Arc<R>,
}

impl<R> OutreachService<R>
where
    R: SnapshotRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            engine: ScoringEngine::new(),
            repository,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score the audit, assemble both message channels plus the follow-up
    /// cadence, and persist the snapshot under the brand's key.
    pub fn generate(
        &self,
        brand: BrandProfile,
        audit: SiteAudit,
        today: NaiveDate,
    ) -> Result<OutreachRecord, OutreachServiceError> {
        if brand.name.trim().is_empty() {
            return Err(OutreachServiceError::MissingBrandName);
        }

        let audit = audit.with_derived_speed_findings();
        let score = self.engine.score(&audit);
        let email_bullets = self.engine.bullets(&audit, Channel::Email);
        let whatsapp_bullets = self.engine.bullets(&audit, Channel::WhatsApp);
        let messages = compose_messages(&brand, &score, &email_bullets, &whatsapp_bullets);
        let follow_ups = follow_up_sequence(&brand, &score, today);

        let record = OutreachRecord {
            brand,
            audit,
            score,
            messages,
            follow_ups,
            generated_on: today,
        };

        // Re-running a brand refreshes its snapshot rather than conflicting.
        match self.repository.insert(record.clone()) {
            Ok(stored) => Ok(stored),
            Err(RepositoryError::Conflict) => {
                self.repository.update(record.clone())?;
                Ok(record)
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Fetch a brand's stored snapshot for follow-up flows.
    pub fn get(&self, key: &BrandKey) -> Result<OutreachRecord, OutreachServiceError> {
        let record = self
            .repository
            .fetch(key)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recently generated snapshots, newest first.
    pub fn history(&self, limit: usize) -> Result<Vec<OutreachRecord>, OutreachServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the outreach service.
#[derive(Debug, thiserror::Error)]
pub enum OutreachServiceError {
    #[error("brand name is required")]
    MissingBrandName,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
