use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use sparselife::GameOfLife;

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// One row of the stats csv
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sample {
    generation: usize,
    alive: usize,
    candidates: usize,
    micros: u128,
}

/// Per-generation population and sparse-map size of a running simulation
///
/// Progress lines are produced at most every [`REPORT_INTERVAL`]; rows for
/// the csv are only kept when `keep_samples` is set, so long runs without
/// `--stats` don't grow without bound.
pub struct GenerationStats {
    samples: Vec<Sample>,
    keep_samples: bool,
    latest: Option<Sample>,
    last_step: Instant,
    last_report: Instant,
    gens_since_report: usize,
}

impl GenerationStats {
    pub fn new(keep_samples: bool) -> Self {
        let now = Instant::now();
        Self {
            samples: Vec::new(),
            keep_samples,
            latest: None,
            last_step: now,
            last_report: now,
            gens_since_report: 0,
        }
    }

    /// Records the generation `game` just computed
    pub fn record(&mut self, game: &GameOfLife) {
        let sample = Sample {
            generation: game.generation(),
            alive: game.alive_count(),
            candidates: game.candidates(),
            micros: self.last_step.elapsed().as_micros(),
        };
        self.last_step = Instant::now();
        self.gens_since_report += 1;

        if self.keep_samples {
            self.samples.push(sample);
        }
        self.latest = Some(sample);
    }

    /// A progress line, if one is due and a generation has been recorded
    pub fn take_report(&mut self) -> Option<String> {
        let elapsed = self.last_report.elapsed();
        if elapsed < REPORT_INTERVAL {
            return None;
        }
        let latest = self.latest?;
        let gens_per_sec = self.gens_since_report as f64 / elapsed.as_secs_f64();
        self.last_report = Instant::now();
        self.gens_since_report = 0;

        Some(format!(
            "gen {}: {} alive, {} candidates ({:.02} gen/s)",
            latest.generation, latest.alive, latest.candidates, gens_per_sec
        ))
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"gen,alive,candidates,micros\n")?;
        for s in &self.samples {
            writeln!(
                out,
                "{},{},{},{}",
                s.generation, s.alive, s.candidates, s.micros
            )?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}
