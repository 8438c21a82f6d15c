pub mod output;
pub mod report;

pub use output::print_run_summary;
pub use report::run_report;
