use std::{
    hint::black_box,
    io::Write,
    time::{Duration, Instant},
};

use log::{debug, info};

use crate::errors::errors::{Error, ErrorImpl};

pub const MEGABYTE: usize = 1_048_576;

const RESOLUTION_SAMPLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMethod {
    /// Hand-written byte-by-byte loop.
    SetBuf,
    /// The library bulk fill.
    Memset,
}

impl ClearMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ClearMethod::SetBuf => "setBuf",
            ClearMethod::Memset => "memset",
        }
    }

    pub fn clear(&self, buffer: &mut [u8]) {
        match self {
            ClearMethod::SetBuf => set_buf(buffer),
            ClearMethod::Memset => buffer.fill(0),
        }
    }
}

/// Zeroes `buffer` one byte at a time. The stored value goes through
/// `black_box` so the loop is not turned back into a bulk fill.
pub fn set_buf(buffer: &mut [u8]) {
    for byte in buffer.iter_mut() {
        *byte = black_box(0);
    }
}

/// A benchmark variant. Everything is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub name: &'static str,
    pub size: usize,
    pub order: [ClearMethod; 2],
    pub iterations: usize,
    /// Clear once untimed first, so page faults on first touch are not
    /// measured.
    pub warm_up: bool,
    pub width: usize,
    pub decimals: usize,
    pub report_resolution: bool,
}

pub const V1: BenchConfig = BenchConfig {
    name: "v1",
    size: MEGABYTE,
    order: [ClearMethod::SetBuf, ClearMethod::Memset],
    iterations: 1,
    warm_up: false,
    width: 0,
    decimals: 6,
    report_resolution: false,
};

pub const V2: BenchConfig = BenchConfig {
    name: "v2",
    order: [ClearMethod::Memset, ClearMethod::SetBuf],
    ..V1
};

pub const V5: BenchConfig = BenchConfig {
    name: "v5",
    iterations: 5,
    warm_up: true,
    ..V1
};

pub const V6: BenchConfig = BenchConfig {
    name: "v6",
    size: 256 * MEGABYTE,
    width: 2,
    decimals: 2,
    report_resolution: true,
    ..V5
};

impl BenchConfig {
    /// The buffer this variant clears. Freshly allocated zero pages, so
    /// the first pass over it pays for faulting them in.
    pub fn allocate(&self) -> Vec<u8> {
        vec![0u8; self.size]
    }

    fn format_seconds(&self, duration: Duration) -> String {
        format!(
            "{:width$.decimals$}",
            duration.as_secs_f64(),
            width = self.width,
            decimals = self.decimals
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub method: ClearMethod,
    pub durations: Vec<Duration>,
}

impl Measurement {
    pub fn seconds(&self) -> Vec<f64> {
        self.durations.iter().map(Duration::as_secs_f64).collect()
    }
}

/// Times each method of `config` over `buffer` and prints the raw timings.
pub fn run(
    config: &BenchConfig,
    buffer: &mut [u8],
    out: &mut impl Write,
) -> Result<Vec<Measurement>, Error> {
    if buffer.is_empty() {
        return Err(Error::new(ErrorImpl::EmptyBuffer));
    }

    info!(
        "running {} over {} bytes, {} iteration(s) per method",
        config.name,
        buffer.len(),
        config.iterations
    );

    let mut measurements = vec![];

    for method in config.order {
        write!(out, "{}: ", method.label())?;

        if config.warm_up {
            method.clear(buffer);
        }

        let durations = time_method(config, method, buffer, out)?;
        writeln!(out, " seconds")?;

        measurements.push(Measurement { method, durations });
    }

    if config.report_resolution {
        writeln!(
            out,
            "Timer resolution is {:.15}",
            timer_resolution().as_secs_f64()
        )?;
    }

    out.flush()?;
    Ok(measurements)
}

fn time_method(
    config: &BenchConfig,
    method: ClearMethod,
    buffer: &mut [u8],
    out: &mut impl Write,
) -> Result<Vec<Duration>, Error> {
    let mut durations = Vec::with_capacity(config.iterations);

    for iteration in 0..config.iterations {
        let start = Instant::now();
        method.clear(buffer);
        let elapsed = start.elapsed();

        debug!("{} iteration {}: {:?}", method.label(), iteration, elapsed);

        write!(out, " {}", config.format_seconds(elapsed))?;
        durations.push(elapsed);
    }

    Ok(durations)
}

/// Smallest observable step of the monotonic clock.
pub fn timer_resolution() -> Duration {
    let mut best = Duration::MAX;

    for _ in 0..RESOLUTION_SAMPLES {
        let start = Instant::now();
        let mut now = Instant::now();
        while now == start {
            now = Instant::now();
        }
        best = best.min(now - start);
    }

    best
}
