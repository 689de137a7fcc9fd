use super::common::*;
use crate::workflows::outreach::domain::ScoreBand;
use crate::workflows::outreach::scoring::AlertSeverity;

#[test]
fn empty_audit_scores_ninety_five() {
    let score = engine().score(&audit(&[], None, None));

    assert_eq!(score.analytics, 25);
    assert_eq!(score.performance, 15);
    assert_eq!(score.seo, 15);
    assert_eq!(score.ux, 20);
    assert_eq!(score.conversion, 20);
    assert_eq!(score.overall, 95);
    assert!(score.alerts.is_empty());
}

#[test]
fn tracking_gaps_cap_overall_at_fifty() {
    let score = engine().score(&audit(&["no_ga4", "no_ecom_events"], None, None));

    assert_eq!(score.analytics, 0);
    assert_eq!(score.performance, 15);
    assert_eq!(score.seo, 15);
    assert_eq!(score.ux, 20);
    assert_eq!(score.conversion, 20);
    assert_eq!(score.overall, 50);
    assert_eq!(score.alerts.len(), 1);
    assert_eq!(score.alerts[0].severity, AlertSeverity::Danger);
}

#[test]
fn slow_mobile_with_duplicate_heading_matches_expected_breakdown() {
    let score = engine().score(&audit(&["multiple_h1"], Some(35), None));

    assert_eq!(score.analytics, 25);
    // base min(10, round(3.5)) = 4, +3 without desktop, +3 without poor_cwv
    assert_eq!(score.performance, 10);
    assert_eq!(score.seo, 12);
    assert_eq!(score.ux, 20);
    assert_eq!(score.conversion, 20);
    // 87 total, minus the 15-point slow-mobile deduction
    assert_eq!(score.overall, 72);
    assert_eq!(score.alerts.len(), 2);
    assert_eq!(score.alerts[0].severity, AlertSeverity::Danger);
    assert_eq!(score.alerts[1].severity, AlertSeverity::Warning);
}

#[test]
fn funnel_event_gaps_only_count_when_event_layer_exists() {
    let without_layer = engine().score(&audit(
        &["no_ecom_events", "no_view_item", "no_add_to_cart_event"],
        None,
        None,
    ));
    // The 20-point layer deduction swallows the per-event ones.
    assert_eq!(without_layer.analytics, 5);

    let with_layer = engine().score(&audit(
        &["no_view_item", "no_add_to_cart_event"],
        None,
        None,
    ));
    assert_eq!(with_layer.analytics, 17);
}

#[test]
fn analytics_floors_at_zero() {
    let score = engine().score(&audit(&["no_ga4", "no_ecom_events"], None, None));
    assert_eq!(score.analytics, 0);
}

#[test]
fn performance_defaults_degrade_on_observed_problems() {
    assert_eq!(engine().score(&audit(&[], None, None)).performance, 15);
    assert_eq!(
        engine().score(&audit(&["poor_cwv"], None, None)).performance,
        8
    );
    assert_eq!(
        engine()
            .score(&audit(&["poor_mobile"], None, None))
            .performance,
        8
    );
}

#[test]
fn performance_uses_desktop_metric_when_supplied() {
    // base min(10, round(8.2)) = 8, + min(5, round(90/20)=5) = 13, +3 no poor_cwv
    let score = engine().score(&audit(&[], Some(82), Some(90)));
    assert_eq!(score.performance, 16);

    // poor_cwv withholds the +3
    let with_cwv = engine().score(&audit(&["poor_cwv"], Some(82), Some(90)));
    assert_eq!(with_cwv.performance, 13);
}

#[test]
fn performance_clamps_to_ceiling() {
    let score = engine().score(&audit(&[], Some(100), Some(100)));
    assert_eq!(score.performance, 18);

    let no_desktop = engine().score(&audit(&[], Some(100), None));
    assert_eq!(no_desktop.performance, 16);
}

#[test]
fn seo_penalties_accumulate() {
    let score = engine().score(&audit(
        &[
            "multiple_h1",
            "no_meta_desc",
            "no_canonical",
            "no_product_schema",
            "no_breadcrumb_schema",
            "no_og_tags",
        ],
        None,
        None,
    ));
    assert_eq!(score.seo, 2);
}

#[test]
fn ux_subtraction_caps_at_fourteen() {
    let score = engine().score(&audit(
        &[
            "no_category_nav",
            "no_search",
            "no_announcement_bar",
            "no_sticky_nav",
            "no_size_chart",
            "no_image_zoom",
            "no_product_video",
            "no_wishlist",
            "no_recently_viewed",
            "no_product_badges",
        ],
        None,
        None,
    ));
    // ten UX findings would subtract 20, but the cap holds it at 14
    assert_eq!(score.ux, 6);
}

#[test]
fn conversion_uses_registry_deductions_with_unit_fallback() {
    // no_social_proof deducts 3; no_buy_now has no explicit deduction, so 1.
    let score = engine().score(&audit(&["no_social_proof", "no_buy_now"], None, None));
    assert_eq!(score.conversion, 16);
}

#[test]
fn mobile_below_forty_deducts_after_cap() {
    let score = engine().score(&audit(&["no_ecom_events"], Some(30), None));

    // pre-cap sum exceeds 50, cap applies first, then the 15-point deduction
    assert_eq!(score.overall, 35);
    assert_eq!(score.alerts.len(), 2);
    assert!(score
        .alerts
        .iter()
        .all(|alert| alert.severity == AlertSeverity::Danger));
}

#[test]
fn overall_never_escapes_bounds() {
    let worst = engine().score(&audit(
        &[
            "no_ga4",
            "no_ecom_events",
            "multiple_h1",
            "no_meta_desc",
            "no_canonical",
            "no_product_schema",
            "no_breadcrumb_schema",
            "no_og_tags",
            "no_value_prop",
            "no_trust_badges",
            "no_social_proof",
            "no_urgency_hp",
            "no_cross_sell",
            "no_cross_sell_pdp",
            "checkout_friction",
            "no_cart_abandonment",
            "no_quick_add",
            "no_reviews_pdp",
            "no_sticky_atc",
            "no_buy_now",
        ],
        Some(10),
        None,
    ));
    assert!(worst.overall <= 100);
    assert_eq!(worst.conversion, 0);
}

#[test]
fn oversized_metrics_clamp_before_scoring() {
    let clamped = engine().score(&audit(&[], Some(300), Some(900)));
    let at_ceiling = engine().score(&audit(&[], Some(100), Some(100)));

    assert_eq!(clamped, at_ceiling);
    assert_eq!(clamped.performance, 18);
    assert!(clamped.alerts.is_empty());
}

#[test]
fn score_bands_follow_gauge_thresholds() {
    assert_eq!(ScoreBand::for_score(95), ScoreBand::Strong);
    assert_eq!(ScoreBand::for_score(70), ScoreBand::Strong);
    assert_eq!(ScoreBand::for_score(69), ScoreBand::Moderate);
    assert_eq!(ScoreBand::for_score(50), ScoreBand::Moderate);
    assert_eq!(ScoreBand::for_score(49), ScoreBand::Critical);
}

#[test]
fn scoring_is_deterministic() {
    let sample = audit(&["no_ga4", "multiple_h1", "no_trust_badges"], Some(55), Some(80));
    let first = engine().score(&sample);
    let second = engine().score(&sample);
    assert_eq!(first, second);
}

#[test]
fn category_rows_expose_ceilings_in_order() {
    let rows = engine().score(&audit(&[], None, None)).category_rows();
    let ceilings: Vec<u8> = rows.iter().map(|row| row.ceiling).collect();
    assert_eq!(ceilings, vec![25, 20, 15, 20, 20]);
    assert_eq!(rows[0].label, "Analytics & Tracking");
}
