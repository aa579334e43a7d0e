//! CLI helpers.

mod bencher;
mod error;
mod output;
mod stdout_logger;


use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub use self::bencher::Bencher;
pub use self::error::error_context;
pub use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input used when no path is given.
pub const DEFAULT_INPUT: &str = "inputs/d03.txt";

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug)]
pub struct Opts {
    /// Path to the schematic.
    pub path: PathBuf,
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    pub verbose: bool,
    /// Output JSON lines.
    pub json: bool,
    /// Warmup period in milliseconds.
    pub warmup: Option<u64>,
    /// Bench period in milliseconds.
    pub time_limit: Option<u64>,
    /// Number of times to run benches.
    pub count: Option<usize>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT),
            mode: Mode::default(),
            verbose: false,
            json: false,
            warmup: None,
            time_limit: None,
            count: None,
        }
    }
}

impl Opts {
    /// Parse CLI options from the environment and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments, excluding the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut path = None;
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, "--count")?);
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    if path.replace(PathBuf::from(other)).is_some() {
                        bail!("unexpected argument: {other}");
                    }
                }
            }
        }

        for arg in it {
            if path.replace(PathBuf::from(arg)).is_some() {
                bail!("only one input path is supported");
            }
        }

        if let Some(path) = path {
            opts.path = path;
        }

        Ok(opts)
    }

    /// Construct the output matching these options.
    pub fn output<O>(&self, out: O) -> Output<O>
    where
        O: io::Write,
    {
        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        Output::new(out, kind)
    }
}

/// Parse the value following an option.
fn value<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> Result<T>
where
    T: core::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| format!("missing argument to `{name}`"))?;
    let value = value
        .to_str()
        .with_context(|| format!("missing string argument to `{name}`"))?;
    value
        .parse()
        .with_context(|| format!("bad argument to `{name}`"))
}

/// Timing report of a benchmark.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report out of sorted samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        let avg = if count == 0 {
            Duration::default()
        } else {
            let sum = samples.iter().map(Duration::as_nanos).sum::<u128>();
            Duration::from_nanos(u64::try_from(sum / (count as u128)).unwrap_or_default())
        };

        Self {
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Nearest-rank percentile of sorted samples.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    if samples.is_empty() {
        return Duration::default();
    }

    let rank = (samples.len() * p).div_ceil(100).max(1);
    samples.get(rank - 1).copied().unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
