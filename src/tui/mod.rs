//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides the dashboard's screens:
//! - Landing gate and page navigation
//! - World map and trend charts over live or simulated data
//! - Alert subscription and chatbot forms

mod app;
mod styles;
mod ui;
mod worker;

pub use app::App;
pub use styles::ThemeStyles;
pub use worker::{FetchRequest, FetchStatus, FetchWorker, FetchWorkerHandle};
