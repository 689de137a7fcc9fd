use crate::infra::InMemorySnapshotRepository;
use chrono::{Local, NaiveDate};
use clap::Args;
use cro_engine::error::AppError;
use cro_engine::workflows::outreach::{
    BrandProfile, Channel, CompositeScore, FindingsCsvImporter, OutreachRecord, OutreachService,
    RankedFinding, ScoringEngine, SiteAudit,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Finding keys detected on the site (repeatable)
    #[arg(long = "finding")]
    pub(crate) findings: Vec<String>,
    /// Mobile PageSpeed score (0-100, clamped)
    #[arg(long)]
    pub(crate) mobile_score: Option<u32>,
    /// Desktop PageSpeed score (0-100, clamped)
    #[arg(long)]
    pub(crate) desktop_score: Option<u32>,
    /// Optional findings CSV export to hydrate the audit
    #[arg(long)]
    pub(crate) findings_csv: Option<PathBuf>,
    /// Channel for the generated bullets (email or whatsapp)
    #[arg(long, default_value = "email", value_parser = crate::infra::parse_channel)]
    pub(crate) channel: Channel,
    /// Include the full ranked finding listing in the output
    #[arg(long)]
    pub(crate) list_findings: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Brand name for the demo outreach (defaults to a sample store)
    #[arg(long)]
    pub(crate) brand: Option<String>,
    /// Recipient first name for the drafts
    #[arg(long)]
    pub(crate) recipient: Option<String>,
    /// Sender name for the drafts
    #[arg(long)]
    pub(crate) sender: Option<String>,
    /// Override the generation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional findings CSV export to hydrate the audit
    #[arg(long)]
    pub(crate) findings_csv: Option<PathBuf>,
    /// Skip the follow-up sequence portion of the demo output
    #[arg(long)]
    pub(crate) skip_follow_ups: bool,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        findings,
        mobile_score,
        desktop_score,
        findings_csv,
        channel,
        list_findings,
    } = args;

    let audit = load_audit(findings_csv, findings, mobile_score, desktop_score)?
        .with_derived_speed_findings();

    let engine = ScoringEngine::new();
    let score = engine.score(&audit);
    let ranked = engine.rank(&audit);
    let bullets = engine.bullets(&audit, channel);

    render_score_report(&audit, &score, &ranked, list_findings);

    println!("\n{} bullets", channel.label());
    if bullets.is_empty() {
        println!("- none generated for this audit");
    }
    for bullet in &bullets {
        println!("- {}", bullet);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        brand,
        recipient,
        sender,
        today,
        findings_csv,
        skip_follow_ups,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let audit = match findings_csv {
        Some(path) => FindingsCsvImporter::from_path(path)?,
        None => demo_audit(),
    };
    let brand = BrandProfile {
        name: brand.unwrap_or_else(|| "Vedic Roots".to_string()),
        website_url: "https://vedicroots.example".to_string(),
        recipient: recipient.unwrap_or_else(|| "Priya".to_string()),
        sender: sender.unwrap_or_else(|| "Dev".to_string()),
        notes: String::new(),
    };

    println!("CRO outreach demo");
    let repository = Arc::new(InMemorySnapshotRepository::default());
    let service = OutreachService::new(repository);

    let record = match service.generate(brand, audit, today) {
        Ok(record) => record,
        Err(err) => {
            println!("  Generation failed: {}", err);
            return Ok(());
        }
    };

    let ranked = service.engine().rank(&record.audit);
    render_score_report(&record.audit, &record.score, &ranked, true);
    render_outreach(&record, skip_follow_ups);

    Ok(())
}

fn load_audit(
    findings_csv: Option<PathBuf>,
    findings: Vec<String>,
    mobile_score: Option<u32>,
    desktop_score: Option<u32>,
) -> Result<SiteAudit, AppError> {
    match findings_csv {
        Some(path) => {
            let imported = FindingsCsvImporter::from_path(path)?;
            // Flags given on the command line extend and override the export.
            let mut merged = imported.findings;
            merged.extend(findings);
            Ok(SiteAudit::new(
                merged,
                mobile_score.or(imported.mobile_score.map(u32::from)),
                desktop_score.or(imported.desktop_score.map(u32::from)),
            ))
        }
        None => Ok(SiteAudit::new(findings, mobile_score, desktop_score)),
    }
}

fn render_score_report(
    audit: &SiteAudit,
    score: &CompositeScore,
    ranked: &[RankedFinding],
    list_findings: bool,
) {
    println!(
        "\nEstimated CRO score: {}/100 ({})",
        score.overall,
        score.band().label()
    );

    println!("\nCategory breakdown");
    for row in score.category_rows() {
        println!("- {}: {}/{}", row.label, row.value, row.ceiling);
    }

    match audit.mobile_score {
        Some(mobile) => println!(
            "\nPageSpeed: mobile {} | desktop {}",
            mobile,
            audit
                .desktop_score
                .map(|value| value.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        ),
        None => println!("\nPageSpeed: not measured"),
    }

    if score.alerts.is_empty() {
        println!("\nAlerts: none");
    } else {
        println!("\nAlerts");
        for alert in &score.alerts {
            println!("- [{}] {}", alert.severity.label(), alert.message);
        }
    }

    if list_findings {
        if ranked.is_empty() {
            println!("\nRanked findings: none recognized");
        } else {
            println!("\nRanked findings");
            for finding in ranked {
                println!(
                    "- [{}] {} ({}, impact {})",
                    finding.priority.label(),
                    finding.definition.label,
                    finding.definition.category.label(),
                    finding.definition.impact
                );
            }
        }
    }
}

fn render_outreach(record: &OutreachRecord, skip_follow_ups: bool) {
    println!("\nEmail draft");
    println!("Subject: {}", record.messages.email_subject);
    println!("{}", record.messages.email_body);

    println!("\nWhatsApp draft");
    println!("{}", record.messages.whatsapp);

    if skip_follow_ups {
        return;
    }

    println!("\nFollow-up sequence");
    for touch in &record.follow_ups {
        println!(
            "\n[{}] {} (send {})",
            touch.timing, touch.title, touch.send_on
        );
        println!("Email: {}", touch.email);
        println!("WhatsApp: {}", touch.whatsapp);
    }
}

fn demo_audit() -> SiteAudit {
    SiteAudit::new(
        vec![
            "no_ga4".to_string(),
            "no_add_to_cart_event".to_string(),
            "multiple_h1".to_string(),
            "no_product_schema".to_string(),
            "no_trust_badges".to_string(),
            "no_sticky_atc".to_string(),
            "no_reviews_pdp".to_string(),
            "no_size_chart".to_string(),
        ],
        Some(44),
        Some(78),
    )
}
