//! FastRemap CLI entry point
//!
//! Resolves the lowest final value of an almanac in point and/or interval mode.

use clap::{Parser, ValueEnum};
use fast_remap::core::{MinimumResolver, Mode, StageChain};
use fast_remap::formats::parse_almanac_file;
use std::path::PathBuf;
use std::time::Instant;

/// Which modes to run (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ModeArg {
    /// Every seed is a single value
    #[value(name = "point")]
    Point,
    /// Seeds are (start, length) pairs
    #[value(name = "interval")]
    Interval,
    /// Run point mode, then interval mode
    #[default]
    #[value(name = "both")]
    Both,
}

impl ModeArg {
    fn modes(self) -> &'static [Mode] {
        match self {
            ModeArg::Point => &[Mode::Point],
            ModeArg::Interval => &[Mode::Interval],
            ModeArg::Both => &[Mode::Point, Mode::Interval],
        }
    }
}

#[derive(Parser)]
#[command(name = "fast-remap")]
#[command(about = "Map seeds through staged range offsets and report the lowest result")]
#[command(version)]
#[command(author = "FastRemap Contributors")]
struct Cli {
    /// Almanac file (plain, .gz or .bz2)
    almanac: PathBuf,

    /// Seed interpretation: point, interval or both
    #[arg(short = 'm', long, default_value = "both")]
    mode: ModeArg,

    /// Number of threads (default: 1)
    #[arg(short = 't', long, default_value = "1")]
    threads: usize,
}

fn load_resolver(path: &PathBuf, threads: usize) -> anyhow::Result<(Vec<u64>, MinimumResolver)> {
    let start = Instant::now();
    eprintln!("Loading almanac: {:?}", path);

    let almanac = parse_almanac_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to load almanac: {}", e))?;
    let chain = StageChain::from_raw(&almanac.stages)
        .map_err(|e| anyhow::anyhow!("Failed to build stage chain: {}", e))?;

    eprintln!(
        "Almanac loaded in {:.2}s ({} seeds, {} stages)",
        start.elapsed().as_secs_f64(),
        almanac.seeds.len(),
        chain.len()
    );

    Ok((almanac.seeds, MinimumResolver::with_threads(chain, threads)))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (seeds, resolver) = load_resolver(&cli.almanac, cli.threads)?;
    let mut timings = Vec::new();

    for &mode in cli.mode.modes() {
        let start = Instant::now();
        let lowest = resolver.resolve(&seeds, mode)?;
        timings.push((mode, start.elapsed()));
        println!("{}: {}", mode, lowest);
    }

    eprintln!("\n=== Performance ===");
    for (mode, elapsed) in timings {
        eprintln!("{:<10} {:.3}ms", format!("{}:", mode), elapsed.as_secs_f64() * 1000.0);
    }

    Ok(())
}
