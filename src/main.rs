use clap::Parser;
use log::{info, LevelFilter};
use serde_json::json;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process;

use percolation::{PercolationStats, StatsConfig};

/// Monte Carlo estimate of the site percolation threshold of an n-by-n grid.
#[derive(Debug, Parser)]
#[command(name = "percolation-stats", version)]
struct Cli {
    /// Grid size (the grid is n-by-n)
    n: usize,

    /// Number of independent trials
    trials: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn print_summary(stats: &PercolationStats, as_json: bool) {
    if as_json {
        let summary = json!({
            "n": stats.grid_size(),
            "trials": stats.trials(),
            "mean": stats.mean(),
            "stddev": stats.stddev(),
            "confidence_lo": stats.confidence_lo(),
            "confidence_hi": stats.confidence_hi(),
        });
        println!("{}", summary);
    } else {
        println!("mean                    = {}", stats.mean());
        println!("stddev                  = {}", stats.stddev());
        println!("95% confidence interval = [{}, {}]", stats.confidence_lo(), stats.confidence_hi());
    }
}

fn main() {
    let cli = Cli::parse();
    let _ = TermLogger::init(cli.log_level(), Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

    let config = StatsConfig {
        grid_size: cli.n,
        trials: cli.trials,
        seed: cli.seed,
    };
    info!("running {:?}", config);

    match config.run() {
        Ok(stats) => print_summary(&stats, cli.json),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
