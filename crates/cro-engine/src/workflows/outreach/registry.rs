use super::domain::{CappingRule, FindingCategory, FindingDefinition};
use std::sync::OnceLock;

/// Immutable lookup table mapping finding keys to their static metadata.
///
/// Built once per process and read-only thereafter, so concurrent scoring
/// requests need no coordination.
#[derive(Debug)]
pub struct FindingRegistry {
    definitions: Vec<FindingDefinition>,
}

impl FindingRegistry {
    pub fn standard() -> Self {
        Self {
            definitions: standard_definitions(),
        }
    }

    /// Process-wide shared instance.
    pub fn shared() -> &'static FindingRegistry {
        static REGISTRY: OnceLock<FindingRegistry> = OnceLock::new();
        REGISTRY.get_or_init(FindingRegistry::standard)
    }

    pub fn get(&self, key: &str) -> Option<&FindingDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.key == key)
    }

    pub fn definitions(&self) -> &[FindingDefinition] {
        &self.definitions
    }

    pub fn definitions_for_category(&self, category: FindingCategory) -> Vec<&FindingDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.category == category)
            .collect()
    }
}

const fn entry(
    key: &'static str,
    category: FindingCategory,
    impact: u8,
    deduction: u8,
    capping_rule: Option<CappingRule>,
    label: &'static str,
) -> FindingDefinition {
    FindingDefinition {
        key,
        category,
        impact,
        deduction,
        capping_rule,
        label,
        email_bullet: None,
        whatsapp_bullet: None,
    }
}

const fn entry_with_bullets(
    key: &'static str,
    category: FindingCategory,
    impact: u8,
    deduction: u8,
    capping_rule: Option<CappingRule>,
    label: &'static str,
    email_bullet: &'static str,
    whatsapp_bullet: &'static str,
) -> FindingDefinition {
    FindingDefinition {
        key,
        category,
        impact,
        deduction,
        capping_rule,
        label,
        email_bullet: Some(email_bullet),
        whatsapp_bullet: Some(whatsapp_bullet),
    }
}

fn standard_definitions() -> Vec<FindingDefinition> {
    use CappingRule::{CapsAtFifty, DeductFifteen, SeoPenalty};
    use FindingCategory::{Analytics, Conversion, Performance, Seo, Ux};

    vec![
        entry_with_bullets(
            "no_ga4",
            Analytics,
            10,
            5,
            Some(CapsAtFifty),
            "GA4 not installed",
            "GA4 is not installed — you have zero visibility into user behavior or conversion funnel performance. This is the single most critical gap.",
            "📊 GA4 not installed — zero visibility into your conversion funnel",
        ),
        entry_with_bullets(
            "no_ecom_events",
            Analytics,
            10,
            20,
            Some(CapsAtFifty),
            "GA4 ecommerce events not firing",
            "GA4 ecommerce tracking is not set up — you're flying blind on where users drop off. Without this, every marketing rupee is a guess.",
            "📊 GA4 ecommerce tracking not set up — flying blind on funnel drop-offs",
        ),
        entry("no_gtm", Analytics, 7, 0, None, "GTM not found"),
        entry(
            "no_view_item_list",
            Analytics,
            5,
            4,
            None,
            "view_item_list not firing",
        ),
        entry("no_view_item", Analytics, 5, 4, None, "view_item not firing"),
        entry(
            "no_add_to_cart_event",
            Analytics,
            6,
            4,
            None,
            "add_to_cart not firing",
        ),
        entry(
            "no_begin_checkout",
            Analytics,
            6,
            4,
            None,
            "begin_checkout not firing",
        ),
        entry(
            "no_purchase_event",
            Analytics,
            6,
            4,
            None,
            "purchase event not verified",
        ),
        entry("no_fb_pixel", Analytics, 4, 0, None, "Facebook Pixel missing"),
        entry("no_fb_capi", Analytics, 3, 0, None, "Facebook CAPI missing"),
        entry(
            "no_clarity",
            Analytics,
            3,
            0,
            None,
            "Microsoft Clarity missing",
        ),
        entry("no_hotjar", Analytics, 2, 0, None, "Hotjar missing"),
        entry(
            "no_gads",
            Analytics,
            4,
            0,
            None,
            "Google Ads conversion missing",
        ),
        entry(
            "no_email_platform",
            Analytics,
            3,
            0,
            None,
            "No email platform",
        ),
        entry(
            "slow_mobile",
            Performance,
            9,
            10,
            Some(DeductFifteen),
            "Poor mobile PageSpeed",
        ),
        entry(
            "very_slow_mobile",
            Performance,
            10,
            10,
            Some(DeductFifteen),
            "Critical mobile PageSpeed",
        ),
        entry_with_bullets(
            "poor_cwv",
            Performance,
            7,
            5,
            None,
            "Poor Core Web Vitals",
            "Core Web Vitals are failing — this directly impacts Google rankings and user experience, especially on mobile.",
            "⚡ Core Web Vitals failing — hurts Google rankings and mobile UX",
        ),
        entry(
            "poor_mobile",
            Performance,
            6,
            0,
            None,
            "Poor mobile responsiveness",
        ),
        entry_with_bullets(
            "multiple_h1",
            Seo,
            8,
            3,
            Some(SeoPenalty),
            "Multiple H1 tags",
            "Multiple H1 tags detected — this confuses search engines about page hierarchy and can hurt organic rankings.",
            "🔍 Multiple H1 tags — hurting SEO rankings",
        ),
        entry(
            "no_meta_desc",
            Seo,
            5,
            2,
            None,
            "Missing meta descriptions",
        ),
        entry_with_bullets(
            "no_product_schema",
            Seo,
            7,
            3,
            None,
            "No Product schema",
            "No Product schema (JSON-LD) — you're missing rich snippets in Google results (star ratings, price), which significantly impacts click-through rates.",
            "🔍 No Product schema — missing rich snippets in Google results",
        ),
        entry(
            "no_breadcrumb_schema",
            Seo,
            4,
            2,
            None,
            "No Breadcrumb schema",
        ),
        entry("no_og_tags", Seo, 3, 1, None, "Missing OG tags"),
        entry("no_canonical", Seo, 5, 2, None, "Missing canonical URL"),
        entry("no_alt_tags", Seo, 3, 0, None, "Missing alt tags"),
        entry("no_sitemap", Seo, 4, 0, None, "Missing sitemap"),
        entry("no_structured_data", Seo, 4, 0, None, "No structured data"),
        entry_with_bullets(
            "no_value_prop",
            Conversion,
            7,
            2,
            None,
            "No value proposition",
            "No clear value proposition on the homepage — first-time visitors can't immediately understand why to buy from you vs competitors.",
            "🏠 No clear value proposition — visitors don't know why to choose you",
        ),
        entry("no_hero_cta", Conversion, 5, 0, None, "Hero missing CTA"),
        entry_with_bullets(
            "no_trust_badges",
            Conversion,
            7,
            2,
            None,
            "No trust badges",
            "No trust badges visible — this directly impacts purchase confidence, especially for first-time visitors.",
            "🛡️ No trust badges — impacts purchase confidence",
        ),
        entry_with_bullets(
            "no_social_proof",
            Conversion,
            7,
            3,
            None,
            "No social proof",
            "No social proof visible (reviews, logos, testimonials) — brands with visible social proof see 15-20% higher conversion rates.",
            "⭐ No social proof visible — 15-20% conversion impact",
        ),
        entry("no_category_nav", Ux, 4, 0, None, "Poor category nav"),
        entry("no_search", Ux, 4, 0, None, "Weak search"),
        entry(
            "no_announcement_bar",
            Ux,
            3,
            0,
            None,
            "No announcement bar",
        ),
        entry("no_email_capture", Conversion, 4, 0, None, "No email capture"),
        entry(
            "no_urgency_hp",
            Conversion,
            5,
            2,
            None,
            "No urgency elements",
        ),
        entry("no_sticky_nav", Ux, 4, 0, None, "No sticky nav"),
        entry(
            "no_press_mentions",
            Conversion,
            2,
            0,
            None,
            "No press mentions",
        ),
        entry_with_bullets(
            "no_sticky_atc",
            Conversion,
            9,
            0,
            None,
            "No sticky ATC on mobile",
            "No sticky Add to Cart on mobile PDPs — this one change alone usually improves conversions by 5-7%.",
            "🛒 No sticky Add to Cart on mobile — usually a 5-7% conversion boost",
        ),
        entry_with_bullets(
            "no_buy_now",
            Conversion,
            6,
            0,
            None,
            "No Buy Now CTA",
            "No 'Buy Now' CTA on the PDP — this forces high-intent users through extra steps, reducing impulse purchases.",
            "⚡ No Buy Now CTA — extra steps for high-intent buyers",
        ),
        entry("no_size_chart", Ux, 5, 0, None, "No size chart"),
        entry_with_bullets(
            "no_reviews_pdp",
            Conversion,
            7,
            0,
            None,
            "No reviews on PDP",
            "No customer reviews on product pages — reviews are the #1 trust signal for online purchases.",
            "⭐ No customer reviews on PDPs — #1 trust signal missing",
        ),
        entry("no_image_zoom", Ux, 4, 0, None, "No image zoom"),
        entry("no_product_video", Ux, 3, 0, None, "No product video"),
        entry("no_wishlist", Ux, 4, 0, None, "No wishlist"),
        entry("no_recently_viewed", Ux, 3, 0, None, "No Recently Viewed"),
        entry("no_product_badges", Ux, 3, 0, None, "No product badges"),
        entry("no_notify_me", Ux, 3, 0, None, "No Notify Me"),
        entry("no_emi_bnpl", Conversion, 5, 0, None, "No EMI/BNPL"),
        entry("no_shipping_info", Ux, 4, 0, None, "No shipping info"),
        entry("no_return_policy", Ux, 4, 0, None, "No returns policy"),
        entry(
            "no_stock_indicator",
            Conversion,
            4,
            0,
            None,
            "No stock indicator",
        ),
        entry("no_urgency_pdp", Conversion, 5, 0, None, "No urgency on PDP"),
        entry(
            "no_cross_sell_pdp",
            Conversion,
            6,
            2,
            None,
            "No cross-sell on PDP",
        ),
        entry_with_bullets(
            "no_quick_add",
            Conversion,
            7,
            0,
            None,
            "No quick-add",
            "No quick-add on collection pages — we've seen this boost add-to-cart rates significantly. For TyresNmore, our funnel optimizations drove a 120% increase in user-to-add-to-cart rate.",
            "🛒 No quick-add on collections — can boost add-to-cart rates significantly",
        ),
        entry_with_bullets(
            "no_cross_sell",
            Conversion,
            7,
            2,
            None,
            "No cross-sell on cart",
            "No product recommendations on the cart page — a simple cross-sell setup can lift AOV by 5-10%. We helped a premium Ayurvedic brand increase AOV by 12%.",
            "📦 No cross-sell on cart — easy AOV lift of 5-10%",
        ),
        entry_with_bullets(
            "no_shipping_bar",
            Conversion,
            6,
            0,
            None,
            "No shipping progress bar",
            "No free shipping progress bar in cart — this simple addition consistently drives higher AOV.",
            "🚚 No free shipping progress bar — easy AOV driver",
        ),
        entry("no_trust_cart", Conversion, 5, 0, None, "No trust in cart"),
        entry("no_cart_drawer", Ux, 5, 0, None, "No cart drawer"),
        entry("no_discount_field", Ux, 3, 0, None, "No discount field"),
        entry_with_bullets(
            "checkout_friction",
            Conversion,
            8,
            3,
            None,
            "Checkout friction",
            "Checkout flow has friction that's likely increasing cart abandonment. 46% peak conversion rate growth for TyresNmore came from systematic CRO including checkout optimization.",
            "🔄 Checkout friction — streamlining can reduce abandonment significantly",
        ),
        entry_with_bullets(
            "no_guest_checkout",
            Ux,
            6,
            0,
            None,
            "No guest checkout",
            "No guest checkout option — forcing account creation is one of the top reasons for cart abandonment.",
            "🚪 No guest checkout — top cart abandonment reason",
        ),
        entry("no_payment_options", Ux, 5, 0, None, "Limited payments"),
        entry("no_order_summary", Ux, 3, 0, None, "No order summary"),
        entry(
            "no_estimated_delivery",
            Ux,
            4,
            0,
            None,
            "No delivery date",
        ),
        entry(
            "no_cart_abandonment",
            Conversion,
            5,
            2,
            None,
            "No cart recovery",
        ),
        entry("no_tracking", Analytics, 8, 0, None, "No tracking"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_known_keys() {
        let registry = FindingRegistry::shared();
        let definition = registry.get("no_ecom_events").expect("key present");
        assert_eq!(definition.category, FindingCategory::Analytics);
        assert_eq!(definition.impact, 10);
        assert_eq!(definition.deduction, 20);
        assert_eq!(definition.capping_rule, Some(CappingRule::CapsAtFifty));
    }

    #[test]
    fn registry_rejects_unknown_keys() {
        assert!(FindingRegistry::shared().get("not_a_real_finding").is_none());
    }

    #[test]
    fn keys_are_unique() {
        let registry = FindingRegistry::standard();
        let mut keys: Vec<_> = registry
            .definitions()
            .iter()
            .map(|definition| definition.key)
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate finding keys in registry");
    }

    #[test]
    fn impacts_stay_in_severity_range() {
        for definition in FindingRegistry::standard().definitions() {
            assert!(
                (1..=10).contains(&definition.impact),
                "{} has impact {}",
                definition.key,
                definition.impact
            );
        }
    }

    #[test]
    fn category_slices_are_consistent() {
        let registry = FindingRegistry::standard();
        let by_category: usize = FindingCategory::ordered()
            .into_iter()
            .map(|category| registry.definitions_for_category(category).len())
            .sum();
        assert_eq!(by_category, registry.definitions().len());
    }
}
