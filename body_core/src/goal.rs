//! Weekly calorie-burn goal.

use serde::{Deserialize, Serialize};

/// Running total of calories burned against a weekly target
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyExerciseGoal {
    pub goal_calories: f64,
    pub current_calories_burned: f64,
}

impl WeeklyExerciseGoal {
    pub fn new(goal_calories: f64) -> Self {
        Self {
            goal_calories,
            current_calories_burned: 0.0,
        }
    }

    /// Add to the accumulator. Any value is accepted, including negatives.
    pub fn update(&mut self, calories: f64) {
        self.current_calories_burned += calories;
    }

    /// Replace the target, leaving the accumulator untouched
    pub fn set_goal(&mut self, goal_calories: f64) {
        self.goal_calories = goal_calories;
    }

    /// (current, goal)
    pub fn progress(&self) -> (f64, f64) {
        (self.current_calories_burned, self.goal_calories)
    }

    pub fn goal_achieved(&self) -> bool {
        self.current_calories_burned >= self.goal_calories
    }
}
