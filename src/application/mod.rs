//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the
//! dashboard's actions: loading datasets, answering questions and taking
//! alert subscriptions.

mod alerts;
mod assistant;
mod data;

pub use alerts::{AlertDesk, EMPTY_EMAIL_NOTICE};
pub use assistant::{Assistant, EMPTY_QUESTION_NOTICE};
pub use data::DataService;

use crate::HealthTrendsError;

/// Trim `input`, rejecting blank text.
fn require_text(input: &str) -> Result<&str, HealthTrendsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(HealthTrendsError::EmptyUserInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("  flu?\n").unwrap(), "flu?");
    }

    #[test]
    fn test_require_text_rejects_blank() {
        for blank in ["", " ", "\t\r\n"] {
            assert!(matches!(
                require_text(blank),
                Err(HealthTrendsError::EmptyUserInput)
            ));
        }
    }
}
