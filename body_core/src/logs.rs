//! Append-only food and exercise logs.
//!
//! Both logs serialize as a bare JSON array of entries, preserving order.

use crate::{ExerciseEntry, FoodEntry, FoodTotals};
use serde::{Deserialize, Serialize};

/// Ordered record of food intake
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. No validation: zero or negative values are kept.
    pub fn add(&mut self, entry: FoodEntry) {
        self.entries.push(entry);
    }

    /// Sum calories and macros across all entries (all zero when empty)
    pub fn totals(&self) -> FoodTotals {
        self.entries
            .iter()
            .fold(FoodTotals::default(), |acc, e| FoodTotals {
                calories: acc.calories + e.calories,
                carbs: acc.carbs + e.carbs,
                fats: acc.fats + e.fats,
                proteins: acc.proteins + e.proteins,
            })
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered record of exercise sessions
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ExerciseLog {
    entries: Vec<ExerciseEntry>,
}

impl ExerciseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, calories_burned: f64) {
        self.entries.push(ExerciseEntry {
            name: name.into(),
            calories_burned,
        });
    }

    pub fn total_calories_burned(&self) -> f64 {
        self.entries.iter().map(|e| e.calories_burned).sum()
    }

    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
