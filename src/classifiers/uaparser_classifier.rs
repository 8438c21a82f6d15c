use crate::classifiers::UaClassifier;
use crate::error::ReportError;
use crate::models::BrowserIdentity;
use std::path::Path;
use uaparser::{Parser, UserAgentParser};

pub struct UaParserClassifier {
    parser: UserAgentParser,
}

impl UaParserClassifier {
    /// Load ua-parser rules from a `regexes.yaml` file
    pub fn from_yaml(path: &Path) -> Result<Self, ReportError> {
        let bytes = std::fs::read(path).map_err(|e| ReportError::ClassifierInit {
            engine: "uaparser".to_string(),
            error_message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(regexes_yaml: &[u8]) -> Result<Self, ReportError> {
        let parser = UserAgentParser::from_bytes(regexes_yaml).map_err(|e| ReportError::ClassifierInit {
            engine: "uaparser".to_string(),
            error_message: e.to_string(),
        })?;
        Ok(Self { parser })
    }
}

impl UaClassifier for UaParserClassifier {
    fn classify(&self, user_agent: &str) -> BrowserIdentity {
        let ua = self.parser.parse_user_agent(user_agent);

        // major[.minor[.patch]], stopping at the first missing part
        let version = [ua.major.as_deref(), ua.minor.as_deref(), ua.patch.as_deref()]
            .into_iter()
            .map_while(|part| part.filter(|p| !p.is_empty()))
            .collect::<Vec<_>>()
            .join(".");

        BrowserIdentity::new(ua.family.to_string(), version)
    }

    fn name(&self) -> &'static str {
        "uaparser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_REGEXES: &str = r#"
user_agent_parsers:
  - regex: '(curl)/(\d+)\.(\d+)'
  - regex: '(Chrome)/(\d+)\.(\d+)\.(\d+)'
os_parsers: []
device_parsers: []
"#;

    #[test]
    fn test_version_parts_are_joined() {
        let classifier = UaParserClassifier::from_bytes(TEST_REGEXES.as_bytes()).unwrap();
        assert_eq!(classifier.classify("curl/7.64"), BrowserIdentity::new("curl", "7.64"));
        assert_eq!(
            classifier.classify("Mozilla/5.0 Chrome/96.0.4664.45"),
            BrowserIdentity::new("Chrome", "96.0.4664")
        );
    }

    #[test]
    fn test_unmatched_agent_uses_fallback_family() {
        let classifier = UaParserClassifier::from_bytes(TEST_REGEXES.as_bytes()).unwrap();
        let id = classifier.classify("nothing matches this");
        assert_eq!(id.family, "Other");
        assert_eq!(id.canonical(), "Other");
    }

    #[test]
    fn test_invalid_yaml() {
        let result = UaParserClassifier::from_bytes(b"user_agent_parsers: [[[");
        assert!(matches!(result, Err(ReportError::ClassifierInit { .. })));
    }
}
