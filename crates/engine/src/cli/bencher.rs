use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Error, Result};

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Repeatedly runs a computation and reports how long it takes.
#[derive(Default)]
pub struct Bencher {
    samples: Vec<Duration>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, writing progress and the final report to `o`.
    pub fn iter<T, O, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut iter: T,
    ) -> Result<Report>
    where
        T: FnMut() -> Result<O, E>,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            loop {
                black_box(iter()?);

                if start.elapsed() >= warmup {
                    break;
                }
            }
        }

        self.samples.clear();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                self.sample(&mut iter)?;
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                self.sample(&mut iter)?;

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        self.samples.sort();
        let report = Report::from_sorted(&self.samples);
        o.report(&report)?;
        Ok(report)
    }

    fn sample<T, O, E>(&mut self, iter: &mut T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        Error: From<E>,
    {
        let before = Instant::now();
        let value = iter()?;
        let after = Instant::now();
        black_box(value);
        self.samples.push(after.duration_since(before));
        Ok(())
    }
}
