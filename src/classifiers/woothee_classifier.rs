use crate::classifiers::{UaClassifier, FALLBACK_FAMILY};
use crate::models::BrowserIdentity;
use woothee::parser::Parser;

/// Marker woothee uses for fields it could not resolve
const WOOTHEE_UNKNOWN: &str = "UNKNOWN";

pub struct WootheeClassifier {
    parser: Parser,
}

impl WootheeClassifier {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }
}

impl Default for WootheeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UaClassifier for WootheeClassifier {
    fn classify(&self, user_agent: &str) -> BrowserIdentity {
        let Some(result) = self.parser.parse(user_agent) else {
            return BrowserIdentity::new(FALLBACK_FAMILY, "");
        };

        let family = if result.name.is_empty() || result.name == WOOTHEE_UNKNOWN {
            FALLBACK_FAMILY.to_string()
        } else {
            result.name.to_string()
        };

        let version = if result.version == WOOTHEE_UNKNOWN {
            String::new()
        } else {
            result.version.to_string()
        };

        BrowserIdentity::new(family, version)
    }

    fn name(&self) -> &'static str {
        "woothee"
    }
}
