//! CRO audit scoring and outreach-message generation.
//!
//! The scoring engine is a pure computation over a caller-supplied
//! deficiency set: the registry maps finding keys to static metadata, the
//! ranker orders findings by severity, the composite scorer produces the
//! 0-100 health score with risk alerts, and the bullet selector picks a
//! bounded set of justification sentences per output channel. Everything
//! around it (CSV import, message assembly, snapshot storage, HTTP routes)
//! is a thin shell over those four pieces.

mod bullets;
pub mod domain;
pub mod import;
pub mod messages;
pub mod registry;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BrandProfile, CappingRule, Channel, FindingCategory, FindingDefinition, Priority, ScoreBand,
    SiteAudit,
};
pub use import::{FindingsCsvImporter, ImportError};
pub use messages::{FollowUpMessage, OutreachMessages};
pub use registry::FindingRegistry;
pub use repository::{
    BrandKey, OutreachRecord, RepositoryError, SnapshotRepository, SnapshotSummaryView,
};
pub use router::outreach_router;
pub use scoring::{
    Alert, AlertSeverity, CategoryScoreView, CompositeScore, RankedFinding, RankedFindingView,
    ScoringEngine,
};
pub use service::{OutreachService, OutreachServiceError};
