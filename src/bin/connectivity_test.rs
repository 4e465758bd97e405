use clap::Parser;
use colored::*;

use agriverse_tools::connectivity::config::Config;
use agriverse_tools::connectivity::{report, scenario};

/// Probes the AgriVerse REST endpoints with synthetic data and records
/// pass/fail outcomes.
#[derive(Parser)]
#[command(name = "connectivity-test")]
#[command(version, about = "AgriVerse backend/frontend connectivity test")]
struct Cli {
    /// Print a detail line under every passing probe
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env(cli.verbose);

    let summary = scenario::run(&config)?;

    report::print_summary(&summary);
    let path = report::save_report(&summary, &config)?;
    println!("{}", format!("Report saved: {}", path.display()).cyan());
    println!();

    // CI gate: any failed probe turns the run red.
    std::process::exit(summary.exit_code());
}
