//! Alert desk: the subscribe action.
//!
//! Subscriptions are acknowledged but not stored or sent anywhere.

use crate::domain::Notice;

use super::require_text;

/// Notice shown when the e-mail box is blank.
pub const EMPTY_EMAIL_NOTICE: &str = "Please enter a valid email.";

/// Handles health-alert subscriptions.
#[derive(Debug, Default)]
pub struct AlertDesk;

impl AlertDesk {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Subscribe `email` to alerts.
    #[must_use]
    pub fn subscribe(&self, email: &str) -> Notice {
        match require_text(email) {
            Ok(email) => {
                // The log writer redacts the address itself.
                tracing::info!("Alert subscription for {}", email);
                Notice::success(format!("{email} subscribed successfully!"))
            }
            Err(_) => Notice::warning(EMPTY_EMAIL_NOTICE),
        }
    }
}
