use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use crate::classifiers::ClassifierKind;
use crate::config::{ReportConfig, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_N};

#[derive(Parser)]
#[command(name = "ua-report")]
#[command(author, version, about = "Rank browser identities from a counted user-agent log")]
pub struct Cli {
    /// Path to the log, one `count "user agent"` pair per line
    #[arg(long, short = 'l')]
    pub logfile: Option<PathBuf>,

    /// How many browsers are listed before the Others rollup
    #[arg(long, short = 't', default_value_t = DEFAULT_TOP_N, allow_negative_numbers = true)]
    pub top: i64,

    /// Directory to save ua_output.tsv into
    #[arg(long, short = 'p', default_value = DEFAULT_OUTPUT_DIR)]
    pub path: PathBuf,

    /// User-agent classification engine
    #[arg(long, value_enum, default_value_t = ClassifierKind::Woothee)]
    pub engine: ClassifierKind,

    /// ua-parser regexes.yaml (uaparser engine only)
    #[arg(long)]
    pub regexes: Option<PathBuf>,

    /// Run summary printed to stdout
    #[arg(long, value_enum, default_value = "table")]
    pub summary: SummaryFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn to_config(&self) -> ReportConfig {
        ReportConfig {
            log_path: self.logfile.clone(),
            top_n: self.top,
            output_dir: self.path.clone(),
            classifier: self.engine,
            regexes_path: self.regexes.clone(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable table
    Table,
    /// Single JSON object
    Json,
    /// Print nothing
    Off,
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryFormat::Table => write!(f, "table"),
            SummaryFormat::Json => write!(f, "json"),
            SummaryFormat::Off => write!(f, "off"),
        }
    }
}
