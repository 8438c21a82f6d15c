use crate::aggregator::AggregateTable;
use crate::classifiers::{build_classifier, canonical_identity, UaClassifier};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::extractor::LineExtractor;
use crate::models::Report;
use crate::report::Reporter;
use crate::statistics::ExtractionStatistics;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Outcome of a completed report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub log_path: String,
    pub output_path: String,
    pub classifier: String,
    pub statistics: ExtractionStatistics,
    pub distinct_identities: usize,
    pub total_count: u64,
    pub data_rows: usize,
    /// Count folded into the Others row, if one was written
    pub others_count: Option<u64>,
    pub elapsed: Duration,
}

/// Stream `reader` line by line into an aggregate table.
///
/// Lines that do not match are skipped; lines whose count overflows are
/// dropped and recorded in `stats`. Only read failures abort.
pub fn aggregate_reader<R: BufRead>(
    mut reader: R,
    extractor: &LineExtractor,
    classifier: &dyn UaClassifier,
    stats: &mut ExtractionStatistics,
) -> io::Result<AggregateTable> {
    let mut table = AggregateTable::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        match extractor.try_extract(&line) {
            Ok(Some(record)) => {
                stats.record_match(record.count);
                table.update(canonical_identity(classifier, &record.user_agent), record.count);
            }
            Ok(None) => {
                debug!(line_number, "skipping line without a counted user agent");
                stats.record_skip();
            }
            Err(e) => {
                warn!(line_number, error = %e, "dropping line");
                stats.record_rejection(&e);
            }
        }
    }

    Ok(table)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Build the configured classifier and run the report
pub fn run(config: &ReportConfig) -> Result<RunSummary, ReportError> {
    config.validate()?;
    let classifier = build_classifier(config.classifier, config.regexes_path.as_deref())?;
    run_with_classifier(config, &classifier)
}

/// Read the log, rank identities and write `ua_output.tsv`.
///
/// The output file is only created once the whole input has been read, so an
/// unreadable log never leaves a report behind.
pub fn run_with_classifier(config: &ReportConfig, classifier: &dyn UaClassifier) -> Result<RunSummary, ReportError> {
    let started = Instant::now();
    let log_path = config.validate()?;
    let output_path = config.output_path();

    info!(log = %log_path.display(), classifier = classifier.name(), top_n = config.top_n, "report started");

    let (table, statistics) = read_log(log_path, classifier)?;
    info!(
        lines = statistics.total_lines,
        matched = statistics.matched_lines,
        identities = table.len(),
        "parsing done"
    );

    let reporter = Reporter::new();
    let report = reporter.rank(&table, config.top_n);

    info!(output = %output_path.display(), "writing report");
    write_report(&reporter, &report, &output_path)?;
    info!(elapsed = %humantime::format_duration(round_millis(started.elapsed())), "done");

    Ok(RunSummary {
        log_path: log_path.display().to_string(),
        output_path: output_path.display().to_string(),
        classifier: classifier.name().to_string(),
        distinct_identities: table.len(),
        total_count: report.totals.count,
        data_rows: report.rows.len(),
        others_count: report.others.as_ref().map(|o| o.count),
        statistics,
        elapsed: started.elapsed(),
    })
}

fn read_log(path: &Path, classifier: &dyn UaClassifier) -> Result<(AggregateTable, ExtractionStatistics), ReportError> {
    let file = File::open(path).map_err(|e| ReportError::input_io(path.display(), e))?;
    let extractor = LineExtractor::new();
    let mut statistics = ExtractionStatistics::new();
    let table = aggregate_reader(BufReader::new(file), &extractor, classifier, &mut statistics)
        .map_err(|e| ReportError::input_io(path.display(), e))?;
    Ok((table, statistics))
}

fn write_report(reporter: &Reporter, report: &Report, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::output_io(path.display(), e))?;
    reporter
        .write_tsv(report, file)
        .map_err(|e| ReportError::output_io(path.display(), e))
}

pub(crate) fn round_millis(elapsed: Duration) -> Duration {
    Duration::from_millis(elapsed.as_millis() as u64)
}
