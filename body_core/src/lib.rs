#![forbid(unsafe_code)]

//! Core domain model and persistence for the bodyman tracker.
//!
//! This crate provides:
//! - Domain types (biometrics, food and exercise entries)
//! - User profile with BMR-based daily calorie target
//! - Food/exercise logs, weekly goal and body-composition tracker
//! - Program orchestration with daily and weekly reports
//! - Persistence (atomic JSON state, CSV export)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod profile;
pub mod logs;
pub mod goal;
pub mod progress;
pub mod state;
pub mod program;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use profile::UserProfile;
pub use logs::{ExerciseLog, FoodLog};
pub use goal::WeeklyExerciseGoal;
pub use progress::ProgressTracker;
pub use state::TrackerState;
pub use program::{BodyManagementProgram, DailySummary, WeeklySummary};
pub use export::export_csv;
