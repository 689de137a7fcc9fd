mod categories;
mod ranker;

pub use ranker::{RankedFinding, RankedFindingView};

use super::bullets;
use super::domain::{Channel, FindingCategory, ScoreBand, SiteAudit};
use super::registry::FindingRegistry;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the registry's weights to one audit.
///
/// Every entry point is a deterministic function of its inputs; nothing is
/// cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    registry: &'static FindingRegistry,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            registry: FindingRegistry::shared(),
        }
    }

    pub fn registry(&self) -> &'static FindingRegistry {
        self.registry
    }

    /// Ranked, filtered findings in descending severity order.
    pub fn rank(&self, audit: &SiteAudit) -> Vec<RankedFinding> {
        ranker::rank_findings(audit, self.registry)
    }

    /// The 0-100 composite score with category breakdown and risk alerts.
    pub fn score(&self, audit: &SiteAudit) -> CompositeScore {
        let analytics = categories::analytics_score(audit);
        let performance = categories::performance_score(audit);
        let seo = categories::seo_score(audit);
        let ux = categories::ux_score(audit, self.registry);
        let conversion = categories::conversion_score(audit, self.registry);

        let mut total =
            analytics as i16 + performance as i16 + seo as i16 + ux as i16 + conversion as i16;
        let mut alerts = Vec::new();

        let tracking_gap = audit.contains("no_ecom_events") || audit.contains("no_ga4");
        if tracking_gap {
            total = total.min(50);
            alerts.push(Alert {
                severity: AlertSeverity::Danger,
                message: "GA4 ecommerce tracking missing — overall score capped at 50".to_string(),
            });
        }

        if audit.mobile_score.is_some_and(|mobile| mobile < 40) {
            total -= 15;
            alerts.push(Alert {
                severity: AlertSeverity::Danger,
                message: "Mobile PageSpeed below 40 — 15 point deduction applied".to_string(),
            });
        }

        if audit.contains("multiple_h1") {
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message: "Multiple H1 tags — SEO penalty applied".to_string(),
            });
        }

        CompositeScore {
            overall: total.clamp(0, 100) as u8,
            analytics,
            performance,
            seo,
            ux,
            conversion,
            alerts,
        }
    }

    /// Budgeted justification bullets for the requested channel.
    pub fn bullets(&self, audit: &SiteAudit, channel: Channel) -> Vec<String> {
        let ranked = self.rank(audit);
        bullets::select_bullets(&ranked, audit, channel)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity tag for a triggered global rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Danger,
    Warning,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }
}

/// Record of a global risk rule that fired during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

/// The five category sub-scores plus the capped overall value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub overall: u8,
    pub analytics: u8,
    pub performance: u8,
    pub seo: u8,
    pub ux: u8,
    pub conversion: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<Alert>,
}

impl CompositeScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.overall)
    }

    pub fn category_value(&self, category: FindingCategory) -> u8 {
        match category {
            FindingCategory::Analytics => self.analytics,
            FindingCategory::Performance => self.performance,
            FindingCategory::Seo => self.seo,
            FindingCategory::Ux => self.ux,
            FindingCategory::Conversion => self.conversion,
        }
    }

    /// Category rows in presentation order, each with its ceiling.
    pub fn category_rows(&self) -> Vec<CategoryScoreView> {
        FindingCategory::ordered()
            .into_iter()
            .map(|category| CategoryScoreView {
                category,
                label: category.label(),
                value: self.category_value(category),
                ceiling: category.ceiling(),
            })
            .collect()
    }
}

/// One category's score against its ceiling, for bars and API payloads.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreView {
    pub category: FindingCategory,
    pub label: &'static str,
    pub value: u8,
    pub ceiling: u8,
}
