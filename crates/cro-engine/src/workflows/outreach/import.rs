use super::domain::SiteAudit;
use std::io::Read;
use std::path::Path;

/// Error raised while reading a findings CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read findings export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid findings CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("findings CSV is missing a 'finding' column")]
    MissingFindingColumn,
}

/// Tolerant importer for worksheet/checklist CSV exports.
///
/// Expected headers: `finding` plus an optional `value`. Each row names one
/// finding key; the reserved rows `mobile_score` and `desktop_score` carry
/// the PageSpeed metrics in the `value` column. Unknown finding keys pass
/// through untouched (the registry drops them during scoring) and
/// unparsable metric values are ignored rather than rejected.
pub struct FindingsCsvImporter;

impl FindingsCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SiteAudit, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SiteAudit, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let finding_index = headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case("finding"))
            .ok_or(ImportError::MissingFindingColumn)?;
        let value_index = headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case("value"));

        let mut findings = Vec::new();
        let mut mobile_score = None;
        let mut desktop_score = None;

        for record in csv_reader.records() {
            let record = record?;
            let Some(key) = record.get(finding_index) else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            let value = value_index
                .and_then(|index| record.get(index))
                .and_then(parse_metric);

            match key {
                "mobile_score" => mobile_score = value.or(mobile_score),
                "desktop_score" => desktop_score = value.or(desktop_score),
                _ => findings.push(key.to_string()),
            }
        }

        Ok(SiteAudit::new(findings, mobile_score, desktop_score))
    }
}

fn parse_metric(raw: &str) -> Option<u32> {
    raw.trim().parse::<i64>().ok().map(|value| {
        // Out-of-range metrics clamp into [0,100] instead of failing.
        value.clamp(0, 100) as u32
    })
}
