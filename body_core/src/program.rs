//! Orchestration of the logs, the weekly goal and their reports.

use crate::state::TrackerState;
use crate::{
    ExerciseLog, FoodEntry, FoodLog, FoodTotals, ProgressTracker, Result, UserProfile,
    WeeklyExerciseGoal,
};
use std::fmt;
use std::path::Path;

/// The tracker for one user: a profile plus the persisted logs
#[derive(Clone, Debug)]
pub struct BodyManagementProgram {
    profile: UserProfile,
    state: TrackerState,
}

/// Food and exercise totals for the recorded log
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailySummary {
    pub daily_calorie_target: f64,
    pub food: FoodTotals,
    pub calories_burned: f64,
    pub net_calories: f64,
}

/// Weekly goal status
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeeklySummary {
    pub goal_calories: f64,
    pub current_calories_burned: f64,
    pub achieved: bool,
    /// current - goal
    pub difference: f64,
}

impl BodyManagementProgram {
    /// Fresh program with empty logs
    pub fn new(profile: UserProfile, weekly_goal_calories: f64) -> Self {
        Self {
            profile,
            state: TrackerState::new(weekly_goal_calories),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn food_log(&self) -> &FoodLog {
        &self.state.food_log
    }

    pub fn exercise_log(&self) -> &ExerciseLog {
        &self.state.exercise_log
    }

    pub fn weekly_goal(&self) -> &WeeklyExerciseGoal {
        &self.state.weekly_exercise_goal
    }

    pub fn progress_tracker(&self) -> &ProgressTracker {
        &self.state.progress_tracker
    }

    pub fn add_food_entry(&mut self, entry: FoodEntry) {
        tracing::debug!("Adding food entry {:?}", entry.name);
        self.state.food_log.add(entry);
    }

    /// Record an exercise and credit the same amount to the weekly goal
    pub fn add_exercise_entry(&mut self, name: impl Into<String>, calories_burned: f64) {
        let name = name.into();
        tracing::debug!("Adding exercise {:?} ({} kcal)", name, calories_burned);
        self.state.exercise_log.add(name, calories_burned);
        self.state.weekly_exercise_goal.update(calories_burned);
    }

    pub fn log_progress(&mut self, weight: f64, body_fat_pct: f64) {
        self.state.progress_tracker.log(weight, body_fat_pct);
    }

    /// Replace the weekly target without touching calories already burned
    pub fn change_weekly_goal(&mut self, goal_calories: f64) {
        tracing::info!(
            "Weekly goal changed from {} to {}",
            self.state.weekly_exercise_goal.goal_calories,
            goal_calories
        );
        self.state.weekly_exercise_goal.set_goal(goal_calories);
    }

    pub fn daily_summary(&self) -> DailySummary {
        let food = self.state.food_log.totals();
        let calories_burned = self.state.exercise_log.total_calories_burned();
        DailySummary {
            daily_calorie_target: self.profile.daily_calories(),
            food,
            calories_burned,
            net_calories: food.calories - calories_burned,
        }
    }

    pub fn weekly_summary(&self) -> WeeklySummary {
        let goal = &self.state.weekly_exercise_goal;
        let (current, target) = goal.progress();
        WeeklySummary {
            goal_calories: target,
            current_calories_burned: current,
            achieved: goal.goal_achieved(),
            difference: current - target,
        }
    }

    /// Write the logs (not the profile) to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        self.state.save(path)
    }

    /// Replace the logs with the contents of `path`, if it exists
    pub fn load(&mut self, path: &Path) -> Result<()> {
        if let Some(state) = TrackerState::load(path)? {
            self.state = state;
        }
        Ok(())
    }
}

/// Round to one decimal for display, folding -0.0 into 0
fn tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daily Summary:")?;
        writeln!(f, "Daily Calorie Target: {:.0}", self.daily_calorie_target)?;
        writeln!(f, "Total Calories Consumed: {}", tenths(self.food.calories))?;
        writeln!(f, "Total Carbs: {}g", tenths(self.food.carbs))?;
        writeln!(f, "Total Fats: {}g", tenths(self.food.fats))?;
        writeln!(f, "Total Proteins: {}g", tenths(self.food.proteins))?;
        writeln!(f, "Total Calories Burned: {}", tenths(self.calories_burned))?;
        write!(f, "Net Calories: {}", tenths(self.net_calories))
    }
}

impl WeeklySummary {
    /// Difference to one decimal with an explicit sign: `+N` when the rounded
    /// value is non-negative, `-N` otherwise
    pub fn signed_difference(&self) -> String {
        let difference = tenths(self.difference);
        if difference >= 0.0 {
            format!("+{}", difference)
        } else {
            format!("{}", difference)
        }
    }
}

impl fmt::Display for WeeklySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Weekly Exercise Summary:")?;
        writeln!(f, "Goal: {} calories", tenths(self.goal_calories))?;
        writeln!(
            f,
            "Current: {} calories burned",
            tenths(self.current_calories_burned)
        )?;
        writeln!(
            f,
            "Goal Achieved: {}",
            if self.achieved { "Yes" } else { "No" }
        )?;
        write!(f, "Difference: {}", self.signed_difference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityLevel, Gender};

    fn program(goal: f64) -> BodyManagementProgram {
        let profile = UserProfile::new(
            30,
            Gender::Female,
            165.0,
            68.0,
            ActivityLevel::ModeratelyActive,
            60.0,
        );
        BodyManagementProgram::new(profile, goal)
    }

    fn food(name: &str, calories: f64) -> FoodEntry {
        FoodEntry {
            name: name.into(),
            calories,
            carbs: 10.0,
            fats: 5.0,
            proteins: 8.0,
        }
    }

    #[test]
    fn test_exercise_dual_write() {
        let mut p = program(3000.0);
        for amount in [200.0, 0.0, 150.5, -20.0] {
            let log_before = p.exercise_log().total_calories_burned();
            let goal_before = p.weekly_goal().current_calories_burned;

            p.add_exercise_entry("session", amount);

            assert_eq!(p.exercise_log().total_calories_burned() - log_before, amount);
            assert_eq!(p.weekly_goal().current_calories_burned - goal_before, amount);
        }
    }

    #[test]
    fn test_food_entry_does_not_touch_goal() {
        let mut p = program(3000.0);
        p.add_food_entry(food("toast", 250.0));
        assert_eq!(p.weekly_goal().current_calories_burned, 0.0);
        assert_eq!(p.food_log().len(), 1);
    }

    #[test]
    fn test_daily_summary_net_calories() {
        let mut p = program(3000.0);
        p.add_food_entry(food("lunch", 500.0));
        p.add_food_entry(food("dinner", 700.0));
        p.add_exercise_entry("run", 300.0);

        let summary = p.daily_summary();
        assert_eq!(summary.food.calories, 1200.0);
        assert_eq!(summary.calories_burned, 300.0);
        assert_eq!(summary.net_calories, 900.0);

        let text = summary.to_string();
        assert!(text.starts_with("Daily Summary:"));
        assert!(text.contains("Daily Calorie Target: 2170"));
        assert!(text.contains("Total Calories Consumed: 1200"));
        assert!(text.contains("Total Carbs: 20g"));
        assert!(text.contains("Net Calories: 900"));
    }

    #[test]
    fn test_daily_summary_on_empty_logs() {
        let p = program(3000.0);
        let summary = p.daily_summary();
        assert_eq!(summary.food, FoodTotals::default());
        assert_eq!(summary.net_calories, 0.0);
    }

    #[test]
    fn test_weekly_difference_positive_has_plus() {
        let mut p = program(3000.0);
        p.add_exercise_entry("ride", 3500.0);
        let summary = p.weekly_summary();
        assert!(summary.achieved);
        assert_eq!(summary.signed_difference(), "+500");
        assert!(summary.to_string().contains("Goal Achieved: Yes"));
    }

    #[test]
    fn test_weekly_difference_negative_has_minus() {
        let mut p = program(3000.0);
        p.add_exercise_entry("walk", 2000.0);
        let summary = p.weekly_summary();
        assert!(!summary.achieved);
        assert_eq!(summary.signed_difference(), "-1000");
        assert!(summary.to_string().contains("Difference: -1000"));
    }

    #[test]
    fn test_weekly_boundary_is_achieved() {
        let mut p = program(3000.0);
        p.add_exercise_entry("ride", 3000.0);
        let summary = p.weekly_summary();
        assert!(summary.achieved);
        assert_eq!(summary.signed_difference(), "+0");
    }

    #[test]
    fn test_reports_round_to_one_decimal() {
        let mut p = program(3000.0);
        p.add_food_entry(FoodEntry {
            name: "crumb".into(),
            calories: 0.1,
            carbs: 0.1,
            fats: 0.0,
            proteins: 0.0,
        });
        p.add_food_entry(FoodEntry {
            name: "crumb".into(),
            calories: 0.2,
            carbs: 0.2,
            fats: 0.0,
            proteins: 0.0,
        });
        let daily = p.daily_summary().to_string();
        assert!(daily.contains("Total Calories Consumed: 0.3\n"));
        assert!(daily.contains("Total Carbs: 0.3g"));

        p.add_exercise_entry("walk", 2999.9);
        let weekly = p.weekly_summary();
        assert_eq!(weekly.signed_difference(), "-0.1");
        assert!(weekly.to_string().contains("Current: 2999.9 calories burned"));
    }

    #[test]
    fn test_change_goal_keeps_burned_calories() {
        let mut p = program(3000.0);
        p.add_exercise_entry("run", 800.0);
        p.change_weekly_goal(500.0);
        assert_eq!(p.weekly_goal().progress(), (800.0, 500.0));
        assert!(p.weekly_summary().achieved);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.json");

        let mut p = program(3000.0);
        p.add_food_entry(food("a", 100.0));
        p.add_food_entry(food("b", 200.0));
        p.add_exercise_entry("run", 250.0);
        p.log_progress(68.0, 28.0);
        p.save(&path).unwrap();

        let mut restored = program(1.0);
        restored.load(&path).unwrap();
        assert_eq!(restored.food_log(), p.food_log());
        assert_eq!(restored.food_log().entries()[1].name, "b");
        assert_eq!(restored.exercise_log(), p.exercise_log());
        assert_eq!(restored.weekly_goal(), p.weekly_goal());
        assert_eq!(restored.progress_tracker(), p.progress_tracker());
    }

    #[test]
    fn test_load_missing_file_keeps_fresh_state() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut p = program(3000.0);
        p.load(&temp_dir.path().join("missing.json")).unwrap();

        assert!(p.food_log().is_empty());
        assert!(p.exercise_log().is_empty());
        assert!(p.progress_tracker().is_empty());
        assert_eq!(p.weekly_goal(), &WeeklyExerciseGoal::new(3000.0));
    }
}
