use super::domain::{Channel, SiteAudit};
use super::scoring::RankedFinding;

/// Walks the ranked findings and emits at most the channel's budget of
/// justification sentences.
///
/// Canned channel templates win. The measured-speed findings synthesize a
/// sentence embedding the literal metric when no template exists and the
/// mobile metric is failing (< 70). Findings with neither are skipped
/// without consuming budget.
pub(crate) fn select_bullets(
    ranked: &[RankedFinding],
    audit: &SiteAudit,
    channel: Channel,
) -> Vec<String> {
    let budget = channel.bullet_budget();
    let mut bullets = Vec::new();

    for finding in ranked {
        if bullets.len() >= budget {
            break;
        }

        if let Some(text) = finding.definition.bullet_for(channel) {
            bullets.push(text.to_string());
            continue;
        }

        if matches!(finding.definition.key, "slow_mobile" | "very_slow_mobile") {
            if let Some(mobile) = audit.mobile_score {
                if mobile < 70 {
                    bullets.push(speed_bullet(mobile, channel));
                }
            }
        }
    }

    bullets
}

fn speed_bullet(mobile: u8, channel: Channel) -> String {
    match channel {
        Channel::WhatsApp => {
            let impact = if mobile < 40 {
                "critically low, fixing this can lift conversions 8-10%"
            } else {
                "room to improve, typically lifts conversions 5-8%"
            };
            format!("📱 Mobile speed score is {mobile} — {impact}")
        }
        Channel::Email => {
            let case_reference = if mobile < 50 {
                " We took Atomberg's page speed scores up by 100% and saw a 362% conversion rate jump as part of a broader CRO program."
            } else {
                ""
            };
            format!(
                "Mobile page speed is at {mobile} — getting this to 60-70 typically lifts conversions 8-10%.{case_reference}"
            )
        }
    }
}
