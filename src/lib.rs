pub mod models;
pub mod error;
pub mod extractor;
pub mod classifiers;
pub mod aggregator;
pub mod report;
pub mod statistics;
pub mod config;
pub mod pipeline;
pub mod logging;
pub mod cli;
pub mod commands;


pub use models::*;
pub use error::ReportError;
pub use extractor::LineExtractor;
pub use classifiers::{build_classifier, canonical_identity, ClassifierKind, UaClassifier, UaEngine, UaParserClassifier, WootheeClassifier};
pub use aggregator::AggregateTable;
pub use report::Reporter;
pub use statistics::ExtractionStatistics;
pub use config::ReportConfig;
pub use pipeline::{aggregate_reader, run, run_with_classifier, RunSummary};
