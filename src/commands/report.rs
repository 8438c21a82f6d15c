use crate::cli::Cli;
use crate::commands::output::print_run_summary;
use crate::logging::init_logging;
use crate::pipeline;

pub fn run_report(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&cli.log_level);

    let config = cli.to_config();
    let summary = pipeline::run(&config)?;

    print_run_summary(&summary, cli.summary, &mut std::io::stdout())?;
    Ok(())
}
