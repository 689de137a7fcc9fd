use super::common::*;
use crate::workflows::outreach::domain::Channel;

#[test]
fn email_bullets_respect_the_five_bullet_budget() {
    let audit = audit(
        &[
            "no_ga4",
            "no_ecom_events",
            "no_sticky_atc",
            "checkout_friction",
            "no_trust_badges",
            "no_social_proof",
            "no_reviews_pdp",
        ],
        None,
        None,
    );

    let bullets = engine().bullets(&audit, Channel::Email);

    assert_eq!(bullets.len(), 5);
}

#[test]
fn whatsapp_bullets_respect_the_four_bullet_budget() {
    let audit = audit(
        &[
            "no_ga4",
            "no_ecom_events",
            "no_sticky_atc",
            "checkout_friction",
            "no_trust_badges",
        ],
        None,
        None,
    );

    let bullets = engine().bullets(&audit, Channel::WhatsApp);

    assert_eq!(bullets.len(), 4);
}

#[test]
fn findings_without_templates_are_skipped_without_spending_budget() {
    // no_gtm and no_fb_pixel carry no templates; the templated findings
    // behind them must still surface.
    let audit = audit(
        &["no_gtm", "no_fb_pixel", "no_trust_badges", "no_social_proof"],
        None,
        None,
    );

    let bullets = engine().bullets(&audit, Channel::Email);

    assert_eq!(bullets.len(), 2);
    assert!(bullets[0].contains("social proof") || bullets[0].contains("trust badges"));
}

#[test]
fn slow_mobile_synthesizes_sentence_with_literal_metric() {
    let audit = audit(&["slow_mobile"], Some(45), None);

    let email = engine().bullets(&audit, Channel::Email);
    assert_eq!(email.len(), 1);
    assert!(email[0].contains("45"));
    // below 50 the email bullet carries the case-study reference
    assert!(email[0].contains("Atomberg"));

    let whatsapp = engine().bullets(&audit, Channel::WhatsApp);
    assert_eq!(whatsapp.len(), 1);
    assert!(whatsapp[0].contains("45"));
    assert!(whatsapp[0].contains("5-8%"));
}

#[test]
fn critical_mobile_metric_strengthens_whatsapp_wording() {
    let audit = audit(&["very_slow_mobile"], Some(28), None);

    let whatsapp = engine().bullets(&audit, Channel::WhatsApp);

    assert_eq!(whatsapp.len(), 1);
    assert!(whatsapp[0].contains("28"));
    assert!(whatsapp[0].contains("critically low"));
}

#[test]
fn passing_metric_never_synthesizes_a_speed_bullet() {
    let audit = audit(&["slow_mobile", "no_gtm"], Some(72), None);

    let bullets = engine().bullets(&audit, Channel::Email);

    assert!(bullets.is_empty());
}

#[test]
fn missing_metric_skips_speed_findings_in_selection() {
    // The speed finding ranks, but without a metric there is nothing to
    // embed, so no bullet is synthesized for it.
    let audit = audit(&["slow_mobile", "no_trust_badges"], None, None);

    let bullets = engine().bullets(&audit, Channel::Email);

    assert_eq!(bullets.len(), 1);
    assert!(bullets[0].contains("trust badges"));
}

#[test]
fn selection_is_deterministic() {
    let sample = audit(&["no_ga4", "no_sticky_atc", "slow_mobile"], Some(38), None);
    let first = engine().bullets(&sample, Channel::WhatsApp);
    let second = engine().bullets(&sample, Channel::WhatsApp);
    assert_eq!(first, second);
}
