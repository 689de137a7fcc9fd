use super::super::domain::{FindingCategory, SiteAudit};
use super::super::registry::FindingRegistry;

const FUNNEL_EVENT_GAPS: [&str; 5] = [
    "no_view_item_list",
    "no_view_item",
    "no_add_to_cart_event",
    "no_begin_checkout",
    "no_purchase_event",
];

const SEO_PENALTIES: [(&str, i16); 6] = [
    ("multiple_h1", 3),
    ("no_meta_desc", 2),
    ("no_canonical", 2),
    ("no_product_schema", 3),
    ("no_breadcrumb_schema", 2),
    ("no_og_tags", 1),
];

/// Analytics (ceiling 25): a missing ecommerce event layer swallows the
/// funnel-event deductions, which only apply when the layer exists at all.
pub(crate) fn analytics_score(audit: &SiteAudit) -> u8 {
    let mut score: i16 = 25;
    if audit.contains("no_ga4") {
        score -= 5;
    }
    if audit.contains("no_ecom_events") {
        score -= 20;
    } else {
        for event in FUNNEL_EVENT_GAPS {
            if audit.contains(event) {
                score -= 4;
            }
        }
    }
    score.clamp(0, 25) as u8
}

/// Performance (ceiling 20): metric-driven when a mobile score is supplied,
/// otherwise a neutral default of 15, degraded to 8 on observed problems.
pub(crate) fn performance_score(audit: &SiteAudit) -> u8 {
    let Some(mobile) = audit.mobile_score else {
        if audit.contains("poor_cwv") || audit.contains("poor_mobile") {
            return 8;
        }
        return 15;
    };

    let mut score = ((mobile as f32 / 10.0).round() as i16).min(10);
    score += match audit.desktop_score {
        Some(desktop) => ((desktop as f32 / 20.0).round() as i16).min(5),
        None => 3,
    };
    if !audit.contains("poor_cwv") {
        score += 3;
    }
    score.clamp(0, 20) as u8
}

/// SEO (ceiling 15): fixed per-finding penalties.
pub(crate) fn seo_score(audit: &SiteAudit) -> u8 {
    let mut score: i16 = 15;
    for (key, penalty) in SEO_PENALTIES {
        if audit.contains(key) {
            score -= penalty;
        }
    }
    score.clamp(0, 15) as u8
}

/// UX (ceiling 20): two points per finding, total subtraction capped at 14,
/// with a floor of 4 rather than 0.
pub(crate) fn ux_score(audit: &SiteAudit, registry: &FindingRegistry) -> u8 {
    let ux_findings = audit
        .findings
        .iter()
        .filter(|key| {
            registry
                .get(key)
                .is_some_and(|definition| definition.category == FindingCategory::Ux)
        })
        .count() as i16;

    (20 - (ux_findings * 2).min(14)).max(4) as u8
}

/// Conversion (ceiling 20): each finding subtracts its registry deduction,
/// or 1 when it carries none.
pub(crate) fn conversion_score(audit: &SiteAudit, registry: &FindingRegistry) -> u8 {
    let mut score: i16 = 20;
    for key in &audit.findings {
        let Some(definition) = registry.get(key) else {
            continue;
        };
        if definition.category != FindingCategory::Conversion {
            continue;
        }
        score -= if definition.deduction > 0 {
            definition.deduction as i16
        } else {
            1
        };
    }
    score.clamp(0, 20) as u8
}
