//! User biometrics and the derived daily calorie target.

use crate::{ActivityLevel, Gender};

/// Static biometrics of the tracked user.
///
/// `daily_calories` is computed once in [`UserProfile::new`] and is a
/// snapshot: changing `weight_kg` or `age` afterwards does not update it.
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal_weight_kg: f64,
    daily_calories: f64,
}

impl UserProfile {
    pub fn new(
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        goal_weight_kg: f64,
    ) -> Self {
        let mut profile = Self {
            age,
            gender,
            height_cm,
            weight_kg,
            activity_level,
            goal_weight_kg,
            daily_calories: 0.0,
        };
        profile.daily_calories = profile.bmr() * profile.activity_level.multiplier();
        tracing::debug!(
            "Computed daily calorie target {:.1} for {} profile",
            profile.daily_calories,
            profile.gender
        );
        profile
    }

    /// Mifflin-St Jeor basal metabolic rate from the current field values
    pub fn bmr(&self) -> f64 {
        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * f64::from(self.age);
        match self.gender {
            Gender::Male => base + 5.0,
            Gender::Female => base - 161.0,
        }
    }

    /// Daily calorie target captured at construction
    pub fn daily_calories(&self) -> f64 {
        self.daily_calories
    }
}
