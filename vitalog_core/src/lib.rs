#![forbid(unsafe_code)]

//! Core domain model and business logic for the Vitalog wellness tracker.
//!
//! This crate provides:
//! - Domain types (meals, water entries, goals, meditation sessions)
//! - The meal and water ledgers with derived totals
//! - The meditation session catalog and timer state machine
//! - The metrics projection consumed by presentation layers
//! - Persistence (key-value day/session store, completion journal)

pub mod types;
pub mod error;
pub mod goals;
pub mod meals;
pub mod water;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod meditation;
pub mod metrics;
pub mod store;
pub mod auth;
pub mod journal;

// Re-export commonly used types
pub use error::{AuthError, Error, Result};
pub use types::*;
pub use goals::GoalStore;
pub use meals::MealLedger;
pub use water::{WaterAdd, WaterLedger};
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use meditation::{MeditationEngine, Tick, TickHandle};
pub use metrics::{Metric, QuickAddCategory};
pub use store::JsonStore;
pub use auth::{AuthBackend, AuthSession};
pub use journal::{read_completions, CompletedSession, CompletionJournal};
