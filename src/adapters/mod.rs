//! Adapters layer: Concrete implementations of ports.
//!
//! - `disease_sh`: HTTP client for the disease.sh statistics API
//! - `synthetic`: seeded placeholder data
//! - `sanitize`: contact-detail filtering for logs

pub mod disease_sh;
pub mod sanitize;
pub mod synthetic;

pub use disease_sh::{ApiConfig, DiseaseShClient};
pub use synthetic::SyntheticGenerator;
