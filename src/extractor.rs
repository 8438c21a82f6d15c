use crate::error::ReportError;
use crate::models::RawRecord;
use regex::Regex;

/// Leading count, whitespace, then a quoted string closed by the first
/// unescaped quote. Escapes are kept verbatim.
const RECORD_PATTERN: &str = r#"^\s*([0-9]+)\s+"((?:[^"\\]|\\.)+)""#;

/// Pulls `count "user agent"` pairs out of log lines
#[derive(Debug, Clone)]
pub struct LineExtractor {
    record_pattern: Regex,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self {
            record_pattern: Regex::new(RECORD_PATTERN).expect("record pattern is a valid regex"),
        }
    }

    /// Extract a record, silently ignoring lines that do not match.
    ///
    /// A count too large for a u64 is treated like a non-matching line.
    pub fn extract(&self, line: &str) -> Option<RawRecord> {
        self.try_extract(line).ok().flatten()
    }

    /// Like [`extract`](Self::extract), but reports an oversized count as
    /// [`ReportError::CountOverflow`] so the caller can account for it.
    pub fn try_extract(&self, line: &str) -> Result<Option<RawRecord>, ReportError> {
        let Some(caps) = self.record_pattern.captures(line) else {
            return Ok(None);
        };

        let raw_count = &caps[1];
        let count = raw_count.parse::<u64>().map_err(|_| ReportError::CountOverflow {
            raw_count: raw_count.to_string(),
        })?;

        Ok(Some(RawRecord::new(count, &caps[2])))
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_basic_line() {
        let extractor = LineExtractor::new();
        let record = extractor.extract(r#"10 "Mozilla/5.0 Chrome/96.0""#).unwrap();
        assert_eq!(record, RawRecord::new(10, "Mozilla/5.0 Chrome/96.0"));
    }

    #[test]
    fn test_leading_whitespace_and_trailing_content() {
        let extractor = LineExtractor::new();
        let record = extractor.extract("   \t 42\t\"curl/7.64\" trailing junk").unwrap();
        assert_eq!(record.count, 42);
        assert_eq!(record.user_agent, "curl/7.64");
    }

    #[test]
    fn test_stops_at_first_unescaped_quote() {
        let extractor = LineExtractor::new();
        let record = extractor.extract(r#"3 "first" "second""#).unwrap();
        assert_eq!(record.user_agent, "first");

        let record = extractor.extract(r#"3 "say \"hi\" now" rest"#).unwrap();
        assert_eq!(record.user_agent, r#"say \"hi\" now"#);
    }

    #[test]
    fn test_non_matching_lines() {
        let extractor = LineExtractor::new();
        assert_eq!(extractor.extract(""), None);
        assert_eq!(extractor.extract("garbage no quotes"), None);
        assert_eq!(extractor.extract(r#""Mozilla/5.0" 10"#), None);
        assert_eq!(extractor.extract(r#"10"Mozilla/5.0""#), None);
        assert_eq!(extractor.extract(r#"10 Mozilla/5.0"#), None);
        assert_eq!(extractor.extract(r#"10 """#), None);
        assert_eq!(extractor.extract(r#"10 "unterminated"#), None);
        assert_eq!(extractor.extract(r#"-5 "Mozilla/5.0""#), None);
    }

    #[test]
    fn test_count_overflow() {
        let extractor = LineExtractor::new();
        let line = r#"184467440737095516160 "Mozilla/5.0""#;
        assert_eq!(extractor.extract(line), None);
        match extractor.try_extract(line) {
            Err(ReportError::CountOverflow { raw_count }) => {
                assert_eq!(raw_count, "184467440737095516160");
            }
            other => panic!("expected overflow, got {:?}", other),
        }

        let max = format!("{} \"ua\"", u64::MAX);
        assert_eq!(extractor.extract(&max).unwrap().count, u64::MAX);
    }

    #[quickcheck(tests = 200)]
    fn prop_well_formed_lines_round_trip(count: u64, user_agent: String, indent: u8) -> TestResult {
        let user_agent: String = user_agent
            .chars()
            .filter(|c| !matches!(c, '"' | '\\' | '\n' | '\r'))
            .collect();
        if user_agent.is_empty() {
            return TestResult::discard();
        }

        let line = format!("{}{} \"{}\"", " ".repeat(indent as usize % 4), count, user_agent);
        let extractor = LineExtractor::new();
        TestResult::from_bool(extractor.extract(&line) == Some(RawRecord::new(count, user_agent)))
    }

    #[quickcheck(tests = 200)]
    fn prop_lines_without_quotes_are_skipped(text: String) -> bool {
        let text: String = text.chars().filter(|c| *c != '"').collect();
        LineExtractor::new().extract(&text).is_none()
    }
}
