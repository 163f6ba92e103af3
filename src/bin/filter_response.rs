use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use pdmfilter::FilterConfig;
use pdmfilter::output::{OutputFormat, ResponseRow, create_formatter, render};
use pdmfilter::signal_processing::{
    FirFilterCore, dc_gain, impulse_response, is_symmetric, response_table,
};

#[derive(Parser, Debug)]
#[command(name = "filter_response")]
#[command(about = "Print the impulse or frequency response of a FIR tap table", long_about = None)]
struct Args {
    /// TOML filter configuration file (built-in lowpass when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the impulse response instead of the frequency response
    #[arg(long)]
    impulse: bool,

    /// Number of frequency points from DC to Nyquist
    #[arg(long, default_value_t = 33)]
    points: usize,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };

    let mut core = FirFilterCore::new(config.tap_table()).context("Invalid tap table")?;
    log::info!(
        "{} taps, DC gain {:.6}, group delay {} samples, {}",
        core.num_taps(),
        dc_gain(core.taps()),
        core.group_delay_samples(),
        if is_symmetric(core.taps(), 1e-12) {
            "linear phase"
        } else {
            "not symmetric"
        }
    );

    let rows: Vec<ResponseRow> = if args.impulse {
        let len = core.num_taps() + 1;
        impulse_response(&mut core, len)
            .into_iter()
            .map(ResponseRow::Impulse)
            .collect()
    } else {
        response_table(core.taps(), config.sample_rate, args.points)
            .into_iter()
            .map(ResponseRow::Frequency)
            .collect()
    };

    let formatter = create_formatter(args.format, args.verbose > 0);
    for line in render(formatter.as_ref(), &rows) {
        println!("{}", line);
    }

    Ok(())
}
