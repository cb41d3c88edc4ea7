//! Testlet Randomizer
//!
//! Validates a fixed-size bundle of test items and produces partially
//! shuffled orderings: a pretest-only prefix followed by a uniform
//! permutation of the rest.
//!
//! # Modules
//!
//! - [`core_types`] - Composition constants and id alias
//! - [`models`] - `Item` and `ItemType`
//! - [`error`] - Construction errors
//! - [`testlet`] - Validation and randomized ordering
//! - [`rng`] - Seeded / entropy random sources
//! - [`config`] - YAML configuration
//! - [`logging`] - Tracing subscriber setup

// Composition constants
pub mod core_types;

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod rng;
pub mod testlet;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError, RandomizerConfig};
pub use core_types::{
    COUNT_IN_ORDER, COUNT_OPERATIONAL, COUNT_OUT_OF_ORDER, COUNT_PRETEST, COUNT_TOTAL, ItemId,
};
pub use error::TestletError;
pub use models::{Item, ItemType};
pub use testlet::Testlet;
