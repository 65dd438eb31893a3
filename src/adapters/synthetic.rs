//! Synthetic dataset generator.
//!
//! Produces placeholder data for diseases without a live feed and for failed
//! live fetches. Shapes match what the live adapter returns.
//!
//! # Mutex Behavior
//!
//! The RNG sits behind a `Mutex` so one generator can be shared with the fetch
//! worker. A poisoned mutex is recovered rather than propagated: the RNG has no
//! invariants a panic could break.

use std::sync::{Arc, Mutex};

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::{MapPoint, TrendPoint};

/// Countries shown on the simulated map: (name, lat, long).
pub const SYNTHETIC_COUNTRIES: [(&str, f64, f64); 4] = [
    ("USA", 37.1, -95.7),
    ("India", 20.5, 78.9),
    ("Brazil", -14.2, -51.9),
    ("France", 46.2, 2.2),
];

/// Simulated map case counts are drawn from this half-open range.
pub const MAP_CASES: std::ops::Range<u64> = 2000..9000;

/// Simulated daily case counts are drawn from this half-open range.
pub const TREND_CASES: std::ops::Range<u64> = 1000..5000;

/// Number of days in a simulated trend.
pub const TREND_DAYS: usize = 30;

/// Pseudo-random placeholder data.
#[derive(Clone)]
pub struct SyntheticGenerator {
    rng: Arc<Mutex<ChaCha20Rng>>,
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticGenerator {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Arc::new(Mutex::new(ChaCha20Rng::from_entropy())),
        }
    }

    /// Deterministic generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(seed))),
        }
    }

    /// Four fixed countries with random case counts.
    #[must_use]
    pub fn map_points(&self) -> Vec<MapPoint> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        SYNTHETIC_COUNTRIES
            .iter()
            .map(|&(country, lat, long)| MapPoint {
                country: country.to_string(),
                cases: rng.gen_range(MAP_CASES),
                lat,
                long,
            })
            .collect()
    }

    /// [`TREND_DAYS`] consecutive days ending on `today`, oldest first.
    #[must_use]
    pub fn trend_points(&self, today: NaiveDate) -> Vec<TrendPoint> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..TREND_DAYS)
            .rev()
            .map(|back| TrendPoint {
                date: today
                    .checked_sub_days(Days::new(back as u64))
                    .unwrap_or(today),
                cases: rng.gen_range(TREND_CASES),
            })
            .collect()
    }
}
