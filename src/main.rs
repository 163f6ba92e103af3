use anyhow::{Context, Result};
use clap::Parser;
use rolling_stats::Stats;
use std::path::PathBuf;

use pdmfilter::{ChannelProcessor, FilterConfig, NonFinitePolicy, read_wav, save_wav};

#[derive(Parser, Debug)]
#[command(name = "pdmfilter")]
#[command(about = "Low-pass filter every channel of a WAV file", long_about = None)]
struct Args {
    /// WAV file to filter
    input: PathBuf,

    /// Output WAV file (32-bit float)
    #[arg(short, long)]
    output: PathBuf,

    /// TOML filter configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Non-finite sample handling (overrides the configuration file)
    #[arg(long, value_enum)]
    non_finite: Option<NonFinitePolicy>,

    /// Frames per processing block
    #[arg(long, default_value_t = 1024)]
    block_frames: usize,

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

    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    if let Some(policy) = args.non_finite {
        config.non_finite = policy;
    }

    let mut wav = read_wav(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    log::info!(
        "{}: {} channels, {} Hz, {} frames",
        args.input.display(),
        wav.channels,
        wav.sample_rate,
        wav.frames()
    );

    if (wav.sample_rate as f64 - config.sample_rate).abs() > f64::EPSILON {
        log::warn!(
            "File sample rate {} Hz differs from filter design rate {} Hz",
            wav.sample_rate,
            config.sample_rate
        );
    }

    let channels = wav.channels as usize;
    let mut processor = ChannelProcessor::new(&config, channels)?;
    processor
        .process_signal(&mut wav.samples, args.block_frames)
        .context("Filtering failed")?;

    for channel in 0..channels {
        let mut stats: Stats<f64> = Stats::new();
        for &sample in wav.samples.iter().skip(channel).step_by(channels) {
            stats.update(sample);
        }
        if stats.count > 0 {
            log::info!(
                "Channel {}: mean {:.6}, std dev {:.6}, min {:.6}, max {:.6}",
                channel,
                stats.mean,
                stats.std_dev,
                stats.min,
                stats.max
            );
        }
    }

    save_wav(&args.output, &wav)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Filtered {} frames x {} channels -> {}",
        wav.frames(),
        channels,
        args.output.display()
    );

    Ok(())
}
