//! # Healthtrends
//!
//! Terminal dashboard for global disease statistics.
//!
//! This crate provides:
//! - Live COVID-19 case maps and trends, with simulated data as a fallback
//! - Simulated placeholder feeds for other diseases
//! - A keyword-driven health FAQ assistant
//! - Terminal UI with light and dark themes
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (Session, Page, Theme, datasets, ResponseMatcher)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (disease.sh HTTP, synthetic data, log sanitizing)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Disease, DiseaseDataset, Page, Session, Theme};

/// Result type for Healthtrends operations
pub type Result<T> = std::result::Result<T, HealthTrendsError>;

/// Main error type for Healthtrends
#[derive(Debug, thiserror::Error)]
pub enum HealthTrendsError {
    #[error("Network failure: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Input is empty")]
    EmptyUserInput,
}

impl From<ports::SourceError> for HealthTrendsError {
    fn from(e: ports::SourceError) -> Self {
        match e {
            ports::SourceError::Malformed(msg) => Self::MalformedResponse(msg),
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SourceError;

    #[test]
    fn test_source_error_classification() {
        assert!(matches!(
            HealthTrendsError::from(SourceError::Malformed("x".into())),
            HealthTrendsError::MalformedResponse(_)
        ));
        assert!(matches!(
            HealthTrendsError::from(SourceError::Timeout),
            HealthTrendsError::Network(_)
        ));
        assert!(matches!(
            HealthTrendsError::from(SourceError::Status(500)),
            HealthTrendsError::Network(_)
        ));
    }
}
