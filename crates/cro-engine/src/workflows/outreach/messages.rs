use super::domain::{BrandProfile, Channel};
use super::scoring::CompositeScore;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

/// Long-form and short-form outreach drafts for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachMessages {
    pub email_subject: String,
    pub email_body: String,
    pub whatsapp: String,
}

/// Splices the selected bullets into the two outbound templates.
pub fn compose_messages(
    brand: &BrandProfile,
    score: &CompositeScore,
    email_bullets: &[String],
    whatsapp_bullets: &[String],
) -> OutreachMessages {
    let brand_name = or_placeholder(&brand.name, "[Brand Name]");
    let recipient = or_placeholder(&brand.recipient, "[Name]");
    let sender = or_placeholder(&brand.sender, "[Your Name]");

    let email_subject = format!(
        "{brand_name}: conversion gaps we spotted (CRO score {}/100)",
        score.overall
    );

    let mut email_body = format!(
        "Hi {recipient},\n\n\
         I took a close look at {brand_name} through our e-commerce CRO lens, and the site \
         currently scores {}/100 on our conversion health scale. A few things stood out:\n\n",
        score.overall
    );
    for bullet in email_bullets {
        email_body.push_str("- ");
        email_body.push_str(bullet);
        email_body.push('\n');
    }
    email_body.push_str(&format!(
        "\nEach of these is fixable, and together they usually move revenue within a quarter. \
         Happy to walk you through the full breakdown on a short call this week.\n\n\
         Best,\n{sender}"
    ));

    let mut whatsapp = format!(
        "Hi {recipient}! Quick note on {brand_name} — we ran it through our CRO checklist \
         and it scores {}/100. Top gaps:\n",
        score.overall
    );
    for bullet in whatsapp_bullets {
        whatsapp.push_str(bullet);
        whatsapp.push('\n');
    }
    whatsapp.push_str(&format!(
        "All fixable. Worth a quick chat? — {sender}"
    ));

    OutreachMessages {
        email_subject,
        email_body,
        whatsapp,
    }
}

/// One step of the follow-up cadence, with a concrete send date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowUpMessage {
    pub title: &'static str,
    pub timing: &'static str,
    pub send_on: NaiveDate,
    pub email: String,
    pub whatsapp: String,
}

/// The standard three-touch follow-up sequence anchored on the day the
/// first message goes out.
pub fn follow_up_sequence(
    brand: &BrandProfile,
    score: &CompositeScore,
    first_sent_on: NaiveDate,
) -> Vec<FollowUpMessage> {
    let brand_name = or_placeholder(&brand.name, "[Brand Name]");
    let recipient = or_placeholder(&brand.recipient, "[Name]");
    let sender = or_placeholder(&brand.sender, "[Your Name]");
    let top_gap = score
        .alerts
        .first()
        .map(|alert| alert.message.clone())
        .unwrap_or_else(|| format!("a CRO score of {}/100", score.overall));

    vec![
        FollowUpMessage {
            title: "Gentle nudge",
            timing: "Day 3",
            send_on: first_sent_on + Duration::days(3),
            email: format!(
                "Hi {recipient}, floating my earlier note on {brand_name} back to the top of \
                 your inbox. The biggest flag was {top_gap}. Would a 15-minute walkthrough \
                 this week work?\n\n{sender}"
            ),
            whatsapp: format!(
                "Hi {recipient}, just bumping my note on {brand_name} — happy to share the \
                 full findings whenever suits. — {sender}"
            ),
        },
        FollowUpMessage {
            title: "Value add",
            timing: "Day 7",
            send_on: first_sent_on + Duration::days(7),
            email: format!(
                "Hi {recipient}, one more data point for {brand_name}: brands that close the \
                 kind of gaps we flagged typically see conversion lifts within 60-90 days. \
                 I can share the prioritized fix list — no strings attached.\n\n{sender}"
            ),
            whatsapp: format!(
                "{recipient}, quick add: the fixes we flagged for {brand_name} are mostly \
                 low-effort, high-impact. Want the prioritized list? — {sender}"
            ),
        },
        FollowUpMessage {
            title: "Soft close",
            timing: "Day 14",
            send_on: first_sent_on + Duration::days(14),
            email: format!(
                "Hi {recipient}, closing the loop on {brand_name}. If conversion isn't a \
                 priority this quarter I'll stop nudging — but the audit is yours either \
                 way; just say the word.\n\n{sender}"
            ),
            whatsapp: format!(
                "Last ping, promise! The {brand_name} audit is yours if you want it, \
                 {recipient}. — {sender}"
            ),
        },
    ]
}

/// Convenience pairing of a channel with its message text, used by CLI
/// rendering.
pub fn message_for_channel(messages: &OutreachMessages, channel: Channel) -> String {
    match channel {
        Channel::Email => format!(
            "Subject: {}\n\n{}",
            messages.email_subject, messages.email_body
        ),
        Channel::WhatsApp => messages.whatsapp.clone(),
    }
}
