//! Body-composition measurements.

use serde::{Deserialize, Serialize};

/// Parallel sequences of weight and body-fat readings.
///
/// The only mutator is [`ProgressTracker::log`], which appends to both, so the
/// two sequences always have the same length. Decoding rejects documents
/// where they differ.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawProgress")]
pub struct ProgressTracker {
    weights: Vec<f64>,
    body_fat_percentages: Vec<f64>,
}

/// On-disk form, checked before becoming a `ProgressTracker`
#[derive(Deserialize)]
struct RawProgress {
    weights: Vec<f64>,
    body_fat_percentages: Vec<f64>,
}

impl TryFrom<RawProgress> for ProgressTracker {
    type Error = String;

    fn try_from(raw: RawProgress) -> std::result::Result<Self, Self::Error> {
        if raw.weights.len() != raw.body_fat_percentages.len() {
            return Err(format!(
                "progress_tracker has {} weights but {} body fat readings",
                raw.weights.len(),
                raw.body_fat_percentages.len()
            ));
        }
        Ok(Self {
            weights: raw.weights,
            body_fat_percentages: raw.body_fat_percentages,
        })
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, weight: f64, body_fat_pct: f64) {
        self.weights.push(weight);
        self.body_fat_percentages.push(body_fat_pct);
    }

    /// (weights, body fat percentages), oldest first
    pub fn progress(&self) -> (&[f64], &[f64]) {
        (&self.weights, &self.body_fat_percentages)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
