use clap::Parser;
use ua_report::cli::Cli;
use ua_report::commands::run_report;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_report(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
