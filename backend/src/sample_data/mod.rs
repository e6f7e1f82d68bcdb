//! Optional sample data seeding for demo and development environments.
//!
//! When enabled through configuration, startup seeds the board with the
//! sample questions the site shipped with, so a fresh deployment has
//! something to render. Seeding is skipped when the board already has
//! content.

mod config;
mod startup;

pub use config::SampleDataSettings;
pub use startup::{SampleSeedError, SampleSeedOutcome, seed_sample_questions_on_startup};
