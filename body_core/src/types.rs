//! Core domain types for the body management tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Biometric enums (gender, activity tier)
//! - Food and exercise log entries
//! - Aggregated nutrient totals

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Biometric Types
// ============================================================================

/// Gender, selecting the BMR formula branch
///
/// Only the token "male" selects `Male`; every other token falls back to
/// `Female`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender token, falling back to `Female`
    pub fn from_token(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Gender::from_token(&s)
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        g.as_str().to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity tier used to scale BMR into a daily energy expenditure
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
    /// Unrecognized tier, kept verbatim
    Other(String),
}

impl ActivityLevel {
    /// Parse an activity tier token.
    ///
    /// Case-insensitive; words may be separated by spaces, underscores or
    /// hyphens. Unknown tokens become `Other`.
    pub fn from_token(s: &str) -> Self {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightly active" => ActivityLevel::LightlyActive,
            "moderately active" => ActivityLevel::ModeratelyActive,
            "very active" => ActivityLevel::VeryActive,
            "extra active" => ActivityLevel::ExtraActive,
            _ => ActivityLevel::Other(s.to_string()),
        }
    }

    /// Multiplier applied to BMR. Unknown tiers use the sedentary value.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
            ActivityLevel::Other(_) => 1.2,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::VeryActive => "very active",
            ActivityLevel::ExtraActive => "extra active",
            ActivityLevel::Other(s) => s,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(s: String) -> Self {
        ActivityLevel::from_token(&s)
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        level.as_str().to_string()
    }
}

// ============================================================================
// Log Entries
// ============================================================================

/// A single food intake record. Macros are in grams.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub fats: f64,
    pub proteins: f64,
}

/// A single exercise record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseEntry {
    pub name: String,
    pub calories_burned: f64,
}

/// Elementwise nutrient sums over a food log
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FoodTotals {
    pub calories: f64,
    pub carbs: f64,
    pub fats: f64,
    pub proteins: f64,
}
