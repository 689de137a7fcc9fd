use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The five audit categories a finding can belong to. Category ceilings sum
/// to the 100-point composite scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Analytics,
    Performance,
    Seo,
    Ux,
    Conversion,
}

impl FindingCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Analytics,
            Self::Performance,
            Self::Seo,
            Self::Ux,
            Self::Conversion,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics & Tracking",
            Self::Performance => "Site Performance",
            Self::Seo => "SEO Fundamentals",
            Self::Ux => "UX & Usability",
            Self::Conversion => "Conversion Elements",
        }
    }

    pub const fn ceiling(self) -> u8 {
        match self {
            Self::Analytics => 25,
            Self::Performance => 20,
            Self::Seo => 15,
            Self::Ux => 20,
            Self::Conversion => 20,
        }
    }
}

/// Output medium for generated text. Each channel carries its own bullet
/// budget and phrasing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    WhatsApp,
}

impl Channel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::WhatsApp => "WhatsApp",
        }
    }

    pub const fn bullet_budget(self) -> usize {
        match self {
            Self::Email => 5,
            Self::WhatsApp => 4,
        }
    }
}

/// Priority tier derived from a finding's severity weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub const fn from_impact(impact: u8) -> Self {
        if impact >= 8 {
            Self::High
        } else if impact >= 5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Tag marking a finding's participation in a global scoring rule.
///
/// The composite scorer currently re-derives these conditions from explicit
/// key checks instead of dispatching off the tag; the tag is carried as data
/// so consumers can see which findings drive the global rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CappingRule {
    CapsAtFifty,
    DeductFifteen,
    SeoPenalty,
}

/// Static metadata describing one detectable site deficiency.
#[derive(Debug, Clone, Serialize)]
pub struct FindingDefinition {
    pub key: &'static str,
    pub category: FindingCategory,
    /// Severity weight 1-10, drives ranking and priority tiers.
    pub impact: u8,
    /// Category-specific score penalty attributed to the finding.
    pub deduction: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capping_rule: Option<CappingRule>,
    pub label: &'static str,
    #[serde(skip_serializing)]
    pub email_bullet: Option<&'static str>,
    #[serde(skip_serializing)]
    pub whatsapp_bullet: Option<&'static str>,
}

impl FindingDefinition {
    pub fn bullet_for(&self, channel: Channel) -> Option<&'static str> {
        match channel {
            Channel::Email => self.email_bullet,
            Channel::WhatsApp => self.whatsapp_bullet,
        }
    }
}

/// One subject's detected deficiencies plus optional PageSpeed metrics.
///
/// Finding keys are drawn from the registry key space; unrecognized keys are
/// tolerated and dropped downstream. Metrics outside [0,100] are clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteAudit {
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_score: Option<u8>,
}

impl SiteAudit {
    /// Metrics arrive as whatever width the wire or CLI hands over;
    /// anything above 100 clamps rather than failing.
    pub fn new(
        findings: Vec<String>,
        mobile_score: Option<u32>,
        desktop_score: Option<u32>,
    ) -> Self {
        let mut seen = HashSet::new();
        let findings = findings
            .into_iter()
            .filter(|key| seen.insert(key.clone()))
            .collect();

        Self {
            findings,
            mobile_score: mobile_score.map(|value| value.min(100) as u8),
            desktop_score: desktop_score.map(|value| value.min(100) as u8),
        }
    }

    /// Appends the measured-speed findings the worksheet flow derives from
    /// the mobile metric: `slow_mobile` below 50, `very_slow_mobile` below 30.
    pub fn with_derived_speed_findings(mut self) -> Self {
        if let Some(mobile) = self.mobile_score {
            if mobile < 50 {
                self.push_unique("slow_mobile");
            }
            if mobile < 30 {
                self.push_unique("very_slow_mobile");
            }
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.findings.iter().any(|finding| finding == key)
    }

    fn push_unique(&mut self, key: &str) {
        if !self.contains(key) {
            self.findings.push(key.to_string());
        }
    }
}

/// Free-text fields describing the brand being contacted. Passed through to
/// message assembly untouched; irrelevant to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub name: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub notes: String,
}

/// Health band backing the score gauge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Critical,
}

impl ScoreBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Critical => "Critical",
        }
    }

    pub const fn for_score(overall: u8) -> Self {
        if overall >= 70 {
            Self::Strong
        } else if overall >= 50 {
            Self::Moderate
        } else {
            Self::Critical
        }
    }
}
