use crate::error::ReportError;
use crate::models::BrowserIdentity;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Common interface for user-agent classification engines.
///
/// Implementations never fail: text they cannot make sense of still gets
/// a fallback family.
pub trait UaClassifier {
    fn classify(&self, user_agent: &str) -> BrowserIdentity;
    fn name(&self) -> &'static str;
}

pub mod uaparser_classifier;
pub mod woothee_classifier;

pub use uaparser_classifier::UaParserClassifier;
pub use woothee_classifier::WootheeClassifier;

/// Family reported when an engine recognizes nothing
pub const FALLBACK_FAMILY: &str = "Other";

/// Resolve the aggregation key for a raw user-agent string
pub fn canonical_identity(classifier: &dyn UaClassifier, user_agent: &str) -> String {
    classifier.classify(user_agent).canonical()
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    /// Built-in woothee rules, no data file needed
    #[default]
    Woothee,
    /// ua-parser rules loaded from a regexes.yaml file
    Uaparser,
}

impl std::fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierKind::Woothee => write!(f, "woothee"),
            ClassifierKind::Uaparser => write!(f, "uaparser"),
        }
    }
}

pub enum UaEngine {
    Woothee(WootheeClassifier),
    UaParser(UaParserClassifier),
}

impl UaClassifier for UaEngine {
    fn classify(&self, user_agent: &str) -> BrowserIdentity {
        match self {
            UaEngine::Woothee(c) => c.classify(user_agent),
            UaEngine::UaParser(c) => c.classify(user_agent),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            UaEngine::Woothee(c) => c.name(),
            UaEngine::UaParser(c) => c.name(),
        }
    }
}

pub fn build_classifier(kind: ClassifierKind, regexes: Option<&Path>) -> Result<UaEngine, ReportError> {
    match kind {
        ClassifierKind::Woothee => Ok(UaEngine::Woothee(WootheeClassifier::new())),
        ClassifierKind::Uaparser => {
            let path = regexes.ok_or_else(|| ReportError::ConfigurationError {
                parameter: "regexes".to_string(),
                error_message: "the uaparser engine needs --regexes <PATH>".to_string(),
            })?;
            Ok(UaEngine::UaParser(UaParserClassifier::from_yaml(path)?))
        }
    }
}
