use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::percolation::Percolation;

/// z-score for a two-sided 95% interval
const CONFIDENCE_95: f64 = 1.96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    pub grid_size: usize,
    pub trials: usize,
    pub seed: Option<u64>,
}

impl StatsConfig {
    /// Runs the trials with a `StdRng` seeded from `seed`, or from OS
    /// entropy when no seed is set.
    pub fn run(&self) -> Result<PercolationStats> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PercolationStats::run(self.grid_size, self.trials, &mut rng)
    }
}

/// Open uniformly random sites of a fresh `n`-by-`n` grid until it
/// percolates; returns the fraction of sites that ended up open.
pub fn estimate_threshold<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut p = Percolation::new(n)?;
    while !p.percolates() {
        p.open(rng.gen_range(1..=n), rng.gen_range(1..=n))?;
    }
    Ok(p.number_of_open_sites() as f64 / (n * n) as f64)
}

#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<PercolationStats> {
        if n < 1 {
            return Err(Error::invalid(format!("grid size must be at least 1, got {}", n)));
        }
        if trials < 1 {
            return Err(Error::invalid(format!("trial count must be at least 1, got {}", trials)));
        }
        let mut thresholds = Vec::with_capacity(trials);
        for t in 0..trials {
            let x = estimate_threshold(n, rng)?;
            debug!("trial {}/{}: threshold {:.5}", t + 1, trials, x);
            thresholds.push(x);
        }
        let stats = PercolationStats { grid_size: n, thresholds };
        info!("{} trials on a {}x{} grid: mean {:.5}, stddev {:.5}",
            trials, n, n, stats.mean(), stats.stddev());
        Ok(stats)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation. NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        let n = self.thresholds.len();
        if n < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.thresholds.iter()
            .map(|x| (x - mean) * (x - mean))
            .sum();
        (sum_sq / (n - 1) as f64).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
