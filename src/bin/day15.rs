use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use beacon_exclusion::free_space::count_free_cells;
use beacon_exclusion::locator::locate_gap;
use beacon_exclusion::{Coordinate, Survey, DEFAULT_BOUND_MAX, DEFAULT_ROW, TUNING_SCALE};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Part {
    #[value(name = "part1")]
    One,
    #[value(name = "part2")]
    Two,
    Both,
}

/// Beacon exclusion zones: free cells on one row, and the distress beacon.
#[derive(Debug, PartialEq, Parser)]
#[command(name = "day15")]
struct Opts {
    /// Which answer to print
    #[arg(value_enum)]
    part: Part,

    /// Row to count beacon-free cells on
    #[arg(short, long, default_value_t = DEFAULT_ROW, allow_negative_numbers = true)]
    row: i32,

    /// Low edge of the distress beacon search square, on both axes
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min: i32,

    /// High edge of the distress beacon search square, on both axes
    #[arg(long, default_value_t = DEFAULT_BOUND_MAX, allow_negative_numbers = true)]
    max: i32,

    /// Tuning frequency multiplier
    #[arg(short, long, default_value_t = TUNING_SCALE)]
    scale: i64,

    /// Read sensor reports from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Log search progress to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    debug: bool,
}

impl Opts {
    fn check(&self) -> Result<(), Box<dyn Error>> {
        if self.min > self.max {
            return Err(format!("empty search square: min {} > max {}", self.min, self.max).into());
        }
        Ok(())
    }
}

fn enable_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    opts.check()?;
    enable_tracing(opts.debug);

    let survey = match &opts.input {
        Some(path) => Survey::read(BufReader::new(File::open(path)?))?,
        None => Survey::read(std::io::stdin().lock())?,
    };
    if matches!(opts.part, Part::One | Part::Both) {
        println!("{}", part1(&survey, opts.row));
    }
    if matches!(opts.part, Part::Two | Part::Both) {
        let (gap, freq) = part2(&survey, &opts)?;
        println!("{}", gap);
        println!("{}", freq);
    }
    Ok(())
}

fn part1(survey: &Survey, row: i32) -> u64 {
    count_free_cells(&survey.sensors, &survey.excluded_on_row(row), row)
}

fn part2(survey: &Survey, opts: &Opts) -> Result<(Coordinate, i64), Box<dyn Error>> {
    let gap = locate_gap(&survey.sensors, opts.min, opts.max)?;
    Ok((gap, gap.tuning_frequency(opts.scale)))
}
