//! Statistics source port: Trait for live disease statistics.
//!
//! This trait abstracts the HTTP statistics API from the data service, so the
//! fallback policy can be exercised without a network.

use crate::domain::{MapPoint, TrendPoint};

/// Errors that can occur while fetching live statistics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API returned HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Trait for live statistics feeds.
pub trait StatsSource: Send + Sync {
    /// Current case counts per country, with coordinates.
    ///
    /// # Errors
    /// Returns error on transport failure or an unparseable payload.
    fn country_cases(&self) -> Result<Vec<MapPoint>, SourceError>;

    /// Global daily case counts for the last `days` days, oldest first.
    ///
    /// # Errors
    /// Returns error on transport failure or an unparseable payload.
    fn historical_cases(&self, days: usize) -> Result<Vec<TrendPoint>, SourceError>;
}
