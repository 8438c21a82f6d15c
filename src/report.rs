use crate::aggregator::AggregateTable;
use crate::models::*;
use regex::Regex;
use std::io::Write;

pub const HEADER: [&str; 6] = ["#", "Percent", "Count", "Browser", "Major version", "Minor version"];

/// `<name> <major>.<minor>`; the name is greedy, so the last version-looking
/// token wins
const VERSION_PATTERN: &str = r"(.+) (\d+)\.(\d+)";

/// Ranks an aggregate table and renders it as a TSV report
#[derive(Debug, Clone)]
pub struct Reporter {
    version_pattern: Regex,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            version_pattern: Regex::new(VERSION_PATTERN).expect("version pattern is a valid regex"),
        }
    }

    /// Split an identity into browser name, major and minor version.
    ///
    /// Identities without a `major.minor` suffix keep their full text as the
    /// name and get `0.0`.
    pub fn decompose(&self, identity: &str) -> BrowserVersion {
        let parsed = self.version_pattern.captures(identity).and_then(|caps| {
            let major = caps[2].parse::<u64>().ok()?;
            let minor = caps[3].parse::<u64>().ok()?;
            Some(BrowserVersion {
                name: caps[1].to_string(),
                major,
                minor,
            })
        });

        parsed.unwrap_or_else(|| BrowserVersion {
            name: identity.to_string(),
            major: 0,
            minor: 0,
        })
    }

    /// Sort, annotate with percentages and truncate to `top_n` rows.
    ///
    /// Ties on count are ordered by ascending identity. Ranks advance for
    /// every entry, including the ones folded into the Others rollup.
    pub fn rank(&self, table: &AggregateTable, top_n: i64) -> Report {
        let total = table.total();

        let mut entries: Vec<(&str, u64)> = table.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let mut report = Report::default();
        let mut others: Option<OthersRow> = None;
        let mut percent_sum = 0.0;

        for (index, (identity, count)) in entries.into_iter().enumerate() {
            let rank = index + 1;
            let percent = percent_of(count, total);
            percent_sum += percent;

            if i64::try_from(rank).map_or(false, |r| r <= top_n) {
                let version = self.decompose(identity);
                report.rows.push(RankedRow {
                    rank,
                    percent,
                    count,
                    browser: version.name,
                    major: version.major,
                    minor: version.minor,
                });
            } else {
                let rollup = others.get_or_insert_with(OthersRow::default);
                rollup.percent += percent;
                rollup.count = rollup.count.saturating_add(count);
            }
        }

        report.others = others;
        report.totals = TotalsRow {
            percent: percent_sum,
            count: total,
        };
        report
    }

    /// Write the report as tab-separated values, header first
    pub fn write_tsv<W: Write>(&self, report: &Report, writer: W) -> Result<(), csv::Error> {
        let mut tsv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        tsv.write_record(HEADER)?;

        for row in &report.rows {
            tsv.write_record([
                row.rank.to_string(),
                format_percent(row.percent),
                row.count.to_string(),
                row.browser.clone(),
                row.major.to_string(),
                row.minor.to_string(),
            ])?;
        }

        if let Some(others) = &report.others {
            tsv.write_record([
                SENTINEL.to_string(),
                format_percent(others.percent),
                others.count.to_string(),
                OTHERS_LABEL.to_string(),
                "0".to_string(),
                "0".to_string(),
            ])?;
        }

        tsv.write_record([
            SENTINEL.to_string(),
            format_percent(report.totals.percent),
            report.totals.count.to_string(),
            SENTINEL.to_string(),
            SENTINEL.to_string(),
            SENTINEL.to_string(),
        ])?;

        tsv.flush()?;
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Share of `total` in percent; 0.0 when the total is zero
pub fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

/// Six decimal places, always with a `.` separator
pub fn format_percent(percent: f64) -> String {
    format!("{:.6}", percent)
}
