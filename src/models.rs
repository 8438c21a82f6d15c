use serde::{Deserialize, Serialize};

/// Cell value used in place of a rank or version number on summary rows
pub const SENTINEL: &str = "#####";

/// Browser name used for the rollup of everything past the top-N cutoff
pub const OTHERS_LABEL: &str = "Others";

/// One `count "user agent"` pair pulled from a log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub count: u64,
    pub user_agent: String,
}

impl RawRecord {
    pub fn new(count: u64, user_agent: impl Into<String>) -> Self {
        Self {
            count,
            user_agent: user_agent.into(),
        }
    }
}

/// Family and rendered version string produced by a classifier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrowserIdentity {
    pub family: String,
    /// Dotted version string, empty when the engine resolved none
    pub version: String,
}

impl BrowserIdentity {
    pub fn new(family: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            version: version.into(),
        }
    }

    /// Aggregation key: `"<family> <version>"`, or just the family when
    /// there is no version
    pub fn canonical(&self) -> String {
        format!("{} {}", self.family, self.version).trim_end().to_string()
    }
}

/// A canonical identity split into display columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserVersion {
    pub name: String,
    pub major: u64,
    pub minor: u64,
}

/// A data row of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub rank: usize,
    pub percent: f64,
    pub count: u64,
    pub browser: String,
    pub major: u64,
    pub minor: u64,
}

/// Rollup of every entry ranked past the cutoff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OthersRow {
    pub percent: f64,
    pub count: u64,
}

/// Grand total over the whole table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalsRow {
    /// Running sum of the per-entry percentages, not recomputed from `count`
    pub percent: f64,
    pub count: u64,
}

/// Ranked, truncated report ready to be written out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub rows: Vec<RankedRow>,
    pub others: Option<OthersRow>,
    pub totals: TotalsRow,
}

impl Report {
    /// Number of lines the TSV encoding will contain, header included
    pub fn line_count(&self) -> usize {
        1 + self.rows.len() + usize::from(self.others.is_some()) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_with_version() {
        let id = BrowserIdentity::new("Chrome", "96.0.4664");
        assert_eq!(id.canonical(), "Chrome 96.0.4664");
    }

    #[test]
    fn test_canonical_without_version() {
        let id = BrowserIdentity::new("Googlebot", "");
        assert_eq!(id.canonical(), "Googlebot");
    }

    #[test]
    fn test_report_line_count() {
        let mut report = Report::default();
        assert_eq!(report.line_count(), 2);
        report.others = Some(OthersRow::default());
        assert_eq!(report.line_count(), 3);
    }
}
