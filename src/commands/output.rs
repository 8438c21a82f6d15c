use crate::cli::SummaryFormat;
use crate::pipeline::{round_millis, RunSummary};
use colored::*;
use std::io::{self, Write};

pub fn print_run_summary(summary: &RunSummary, format: SummaryFormat, writer: &mut impl Write) -> io::Result<()> {
    match format {
        SummaryFormat::Table => write_table(summary, writer),
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(summary)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(writer, "{}", json)
        }
        SummaryFormat::Off => Ok(()),
    }
}

fn write_table(summary: &RunSummary, w: &mut impl Write) -> io::Result<()> {
    let stats = &summary.statistics;

    writeln!(w, "\n{}", "═".repeat(50).cyan())?;
    writeln!(w, "{}", "SUMMARY".cyan().bold())?;
    writeln!(w, "{}", "═".repeat(50).cyan())?;
    writeln!(w, "Log file:         {}", summary.log_path.white())?;
    writeln!(w, "Report:           {}", summary.output_path.white().bold())?;
    writeln!(w, "Classifier:       {}", summary.classifier)?;
    writeln!(w, "Lines read:       {}", stats.total_lines.to_string().white().bold())?;
    writeln!(w, "Matched:          {} ({:.1}%)",
        stats.matched_lines.to_string().green(),
        stats.match_rate())?;
    writeln!(w, "Skipped:          {}", stats.skipped_lines.to_string().dimmed())?;
    if stats.rejected_lines > 0 {
        writeln!(w, "Rejected:         {}", stats.rejected_lines.to_string().red())?;
    }
    writeln!(w, "Identities:       {}", summary.distinct_identities.to_string().cyan())?;
    writeln!(w, "Total count:      {}", summary.total_count.to_string().white().bold())?;
    writeln!(w, "Ranked rows:      {}", summary.data_rows)?;
    if let Some(others) = summary.others_count {
        writeln!(w, "Others:           {}", others.to_string().yellow())?;
    }
    writeln!(w, "Elapsed:          {}", humantime::format_duration(round_millis(summary.elapsed)))?;
    Ok(())
}
