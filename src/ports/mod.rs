//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and external systems (the statistics API).

mod stats_source;

pub use stats_source::{SourceError, StatsSource};
