use crate::classifiers::ClassifierKind;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Identities shown individually before the Others rollup
pub const DEFAULT_TOP_N: i64 = 100;

/// Where the report goes when no output directory is given
pub const DEFAULT_OUTPUT_DIR: &str = "/spool1/";

pub const OUTPUT_FILE_NAME: &str = "ua_output.tsv";

/// Settings for a single report run, built once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Counted user-agent log to read
    pub log_path: Option<PathBuf>,
    /// Number of ranked rows before the Others rollup
    pub top_n: i64,
    /// Directory receiving `ua_output.tsv`
    pub output_dir: PathBuf,
    /// Classification engine
    pub classifier: ClassifierKind,
    /// ua-parser rules, required by the uaparser engine
    pub regexes_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            top_n: DEFAULT_TOP_N,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            classifier: ClassifierKind::default(),
            regexes_path: None,
        }
    }
}

impl ReportConfig {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: Some(log_path.into()),
            ..Self::default()
        }
    }

    pub fn with_top_n(mut self, top_n: i64) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_classifier(mut self, kind: ClassifierKind, regexes_path: Option<PathBuf>) -> Self {
        self.classifier = kind;
        self.regexes_path = regexes_path;
        self
    }

    /// Check required settings, returning the log path on success
    pub fn validate(&self) -> Result<&Path, ReportError> {
        let log_path = self.log_path.as_deref().ok_or_else(|| ReportError::ConfigurationError {
            parameter: "logfile".to_string(),
            error_message: "required -l parameter".to_string(),
        })?;

        if self.classifier == ClassifierKind::Uaparser && self.regexes_path.is_none() {
            return Err(ReportError::ConfigurationError {
                parameter: "regexes".to_string(),
                error_message: "the uaparser engine needs --regexes <PATH>".to_string(),
            });
        }

        Ok(log_path)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.top_n, 100);
        assert_eq!(config.output_path(), PathBuf::from("/spool1/ua_output.tsv"));
        assert_eq!(config.classifier, ClassifierKind::Woothee);
    }

    #[test]
    fn test_missing_log_path_is_rejected() {
        match ReportConfig::default().validate() {
            Err(ReportError::ConfigurationError { parameter, .. }) => assert_eq!(parameter, "logfile"),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_uaparser_without_regexes_is_rejected() {
        let config = ReportConfig::new("ua.log").with_classifier(ClassifierKind::Uaparser, None);
        assert!(config.validate().is_err());

        let config = ReportConfig::new("ua.log")
            .with_classifier(ClassifierKind::Uaparser, Some(PathBuf::from("regexes.yaml")));
        assert_eq!(config.validate().unwrap(), Path::new("ua.log"));
    }

    #[test]
    fn test_builders() {
        let config = ReportConfig::new("ua.log").with_top_n(-3).with_output_dir("/tmp/out");
        assert_eq!(config.top_n, -3);
        assert_eq!(config.output_path(), PathBuf::from("/tmp/out/ua_output.tsv"));
    }
}
