//! Tracker state persistence with file locking.
//!
//! This module handles saving and loading the persisted logs as a single
//! JSON document. The user profile is never written here.

use crate::{Error, ExerciseLog, FoodLog, ProgressTracker, Result, WeeklyExerciseGoal};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Everything that survives between invocations
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrackerState {
    pub food_log: FoodLog,
    pub exercise_log: ExerciseLog,
    pub weekly_exercise_goal: WeeklyExerciseGoal,
    pub progress_tracker: ProgressTracker,
}

impl TrackerState {
    /// Empty logs with the given weekly target
    pub fn new(weekly_goal_calories: f64) -> Self {
        Self {
            food_log: FoodLog::new(),
            exercise_log: ExerciseLog::new(),
            weekly_exercise_goal: WeeklyExerciseGoal::new(weekly_goal_calories),
            progress_tracker: ProgressTracker::new(),
        }
    }

    /// Load state from a file with shared locking
    ///
    /// Returns `None` if the file doesn't exist. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No data file found at {:?}, starting empty", path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        file.lock_shared()?;

        let mut contents = String::new();
        let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
        file.unlock()?;
        read?;

        let state: TrackerState = serde_json::from_str(&contents)?;
        tracing::debug!(
            "Loaded {} food and {} exercise entries from {:?}",
            state.food_log.len(),
            state.exercise_log.len(),
            path
        );
        Ok(Some(state))
    }

    /// Save state to a file with exclusive locking
    ///
    /// Atomically writes state by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string_pretty(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved tracker state to {:?}", path);
        Ok(())
    }
}

/// Delete the data file. A missing file is not an error.
pub fn reset(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!("Removed data file {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("Data file {:?} already absent", path);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
