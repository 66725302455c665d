//! CSV export of the raw food and exercise logs.

use crate::{BodyManagementProgram, Result};
use serde::Serialize;
use std::path::Path;

pub const FOOD_CSV_NAME: &str = "food_log.csv";
pub const EXERCISE_CSV_NAME: &str = "exercise_log.csv";

/// Write `food_log.csv` and `exercise_log.csv` into `dir`
///
/// Existing files are overwritten. Returns the total number of rows written
/// across both files (headers excluded).
pub fn export_csv(program: &BodyManagementProgram, dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(dir)?;

    let food_rows = write_rows(
        &dir.join(FOOD_CSV_NAME),
        &["name", "calories", "carbs", "fats", "proteins"],
        program.food_log().entries(),
    )?;
    let exercise_rows = write_rows(
        &dir.join(EXERCISE_CSV_NAME),
        &["name", "calories_burned"],
        program.exercise_log().entries(),
    )?;

    tracing::info!(
        "Exported {} food and {} exercise rows to {:?}",
        food_rows,
        exercise_rows,
        dir
    );
    Ok(food_rows + exercise_rows)
}

/// Header is written explicitly so that an empty log still gets one
fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}
