use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::error::ReportError;

/// Line-level counters collected while streaming the input log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStatistics {
    /// Total number of lines read
    pub total_lines: usize,
    /// Lines that produced a record
    pub matched_lines: usize,
    /// Lines that did not match the record pattern
    pub skipped_lines: usize,
    /// Matching lines dropped because of a per-line error
    pub rejected_lines: usize,
    /// Sum of the counts of every matched line
    pub total_count: u64,
    /// Per-line errors by kind
    pub error_distribution: BTreeMap<String, usize>,
}

impl ExtractionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_match(&mut self, count: u64) {
        self.total_lines += 1;
        self.matched_lines += 1;
        self.total_count = self.total_count.saturating_add(count);
    }

    pub fn record_skip(&mut self) {
        self.total_lines += 1;
        self.skipped_lines += 1;
    }

    pub fn record_rejection(&mut self, error: &ReportError) {
        self.total_lines += 1;
        self.rejected_lines += 1;
        *self.error_distribution.entry(error.kind().to_string()).or_insert(0) += 1;
    }

    /// Matched lines as a percentage of all lines read
    pub fn match_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.matched_lines as f64 / self.total_lines as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_counters() {
        let mut stats = ExtractionStatistics::new();
        stats.record_match(10);
        stats.record_match(5);
        stats.record_skip();
        stats.record_rejection(&ReportError::CountOverflow { raw_count: "1".repeat(30) });

        assert_eq!(stats.total_lines, 4);
        assert_eq!(stats.matched_lines, 2);
        assert_eq!(stats.skipped_lines, 1);
        assert_eq!(stats.rejected_lines, 1);
        assert_eq!(stats.total_count, 15);
        assert_eq!(stats.error_distribution["CountOverflow"], 1);
        assert!((stats.match_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_match_rate() {
        assert_eq!(ExtractionStatistics::new().match_rate(), 0.0);
    }

    #[quickcheck(tests = 100)]
    fn prop_lines_are_partitioned(events: Vec<Option<u32>>) -> bool {
        let mut stats = ExtractionStatistics::new();
        for event in &events {
            match event {
                Some(count) => stats.record_match(*count as u64),
                None => stats.record_skip(),
            }
        }
        stats.total_lines == events.len()
            && stats.matched_lines + stats.skipped_lines + stats.rejected_lines == stats.total_lines
    }
}
