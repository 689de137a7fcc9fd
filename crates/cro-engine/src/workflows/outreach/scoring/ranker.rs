use super::super::domain::{FindingDefinition, Priority, SiteAudit};
use super::super::registry::FindingRegistry;
use serde::Serialize;

/// A registry definition paired with its derived priority tier.
#[derive(Debug, Clone, Serialize)]
pub struct RankedFinding {
    pub definition: &'static FindingDefinition,
    pub priority: Priority,
}

impl RankedFinding {
    pub fn to_view(&self) -> RankedFindingView {
        RankedFindingView {
            key: self.definition.key,
            label: self.definition.label,
            category: self.definition.category.label(),
            impact: self.definition.impact,
            priority: self.priority,
            priority_label: self.priority.label(),
        }
    }
}

/// Flattened representation for API responses and CLI rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RankedFindingView {
    pub key: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub impact: u8,
    pub priority: Priority,
    pub priority_label: &'static str,
}

/// Filters the audit against the registry and sorts by descending severity.
///
/// Unknown keys are dropped. The measured-speed findings are suppressed when
/// the mobile metric is present and passing (>= 70), since a passing metric
/// contradicts them. Ties keep the relative order of the filtered input.
pub(crate) fn rank_findings(
    audit: &SiteAudit,
    registry: &'static FindingRegistry,
) -> Vec<RankedFinding> {
    let mut active: Vec<&'static FindingDefinition> = audit
        .findings
        .iter()
        .filter_map(|key| {
            if matches!(key.as_str(), "slow_mobile" | "very_slow_mobile") {
                if let Some(mobile) = audit.mobile_score {
                    if mobile >= 70 {
                        return None;
                    }
                }
            }
            registry.get(key)
        })
        .collect();

    active.sort_by(|a, b| b.impact.cmp(&a.impact));

    active
        .into_iter()
        .map(|definition| RankedFinding {
            priority: Priority::from_impact(definition.impact),
            definition,
        })
        .collect()
}
