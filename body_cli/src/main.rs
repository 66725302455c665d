use body_core::*;
use clap::{CommandFactory, Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bodyman")]
#[command(about = "Body management tracker for food, exercise and weekly calorie goals", long_about = None)]
struct Cli {
    /// Add a food entry (prompts for name and nutrition values)
    #[arg(long)]
    add_food: bool,

    /// Add an exercise entry (prompts for name and calories burned)
    #[arg(long)]
    add_exercise: bool,

    /// Show a summary
    #[arg(long, value_enum, value_name = "PERIOD")]
    summary: Option<SummaryKind>,

    /// Change the weekly calorie-burn goal (prompts for the new target)
    #[arg(long)]
    change_goal: bool,

    /// Delete all recorded data
    #[arg(long)]
    reset: bool,

    /// Export food and exercise logs as CSV files into DIR
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Override data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Use a specific config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SummaryKind {
    Daily,
    Weekly,
}

impl Cli {
    fn has_action(&self) -> bool {
        self.add_food
            || self.add_exercise
            || self.summary.is_some()
            || self.change_goal
            || self.export.is_some()
    }
}

fn main() -> Result<()> {
    // Initialize logging
    body_core::logging::init();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        // Reset only needs the data path, so a broken config must not block it
        Err(e) if cli.reset => {
            tracing::warn!("Failed to load config ({}), resetting default data path", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };
    if let Some(dir) = &cli.data_dir {
        config.data.data_dir = dir.clone();
    }
    let data_path = config.data_file_path();
    tracing::debug!("Using data file {:?}", data_path);

    if cli.reset {
        body_core::state::reset(&data_path)?;
        println!("All data has been reset.");
        return Ok(());
    }

    if !cli.has_action() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let profile = config.profile.to_profile()?;
    let mut program = BodyManagementProgram::new(profile, config.goal.weekly_calories);
    program.load(&data_path)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if cli.add_food {
        cmd_add_food(&mut program, &mut input, &data_path)?;
    }
    if cli.add_exercise {
        cmd_add_exercise(&mut program, &mut input, &data_path)?;
    }
    if cli.change_goal {
        cmd_change_goal(&mut program, &mut input, &data_path)?;
    }
    match cli.summary {
        Some(SummaryKind::Daily) => println!("{}", program.daily_summary()),
        Some(SummaryKind::Weekly) => println!("{}", program.weekly_summary()),
        None => {}
    }
    if let Some(dir) = &cli.export {
        let rows = export_csv(&program, dir)?;
        println!("✓ Exported {} entries to {}", rows, dir.display());
    }

    Ok(())
}

fn cmd_add_food(
    program: &mut BodyManagementProgram,
    input: &mut impl BufRead,
    data_path: &Path,
) -> Result<()> {
    let name = prompt(input, "Food name")?;
    let calories = prompt_number(input, "Calories")?;
    let carbs = prompt_number(input, "Carbs (g)")?;
    let fats = prompt_number(input, "Fats (g)")?;
    let proteins = prompt_number(input, "Proteins (g)")?;

    program.add_food_entry(FoodEntry {
        name,
        calories,
        carbs,
        fats,
        proteins,
    });
    program.save(data_path)?;

    println!("\n{}", program.daily_summary());
    Ok(())
}

fn cmd_add_exercise(
    program: &mut BodyManagementProgram,
    input: &mut impl BufRead,
    data_path: &Path,
) -> Result<()> {
    let name = prompt(input, "Exercise name")?;
    let calories_burned = prompt_number(input, "Calories burned")?;

    program.add_exercise_entry(name, calories_burned);
    program.save(data_path)?;

    println!("\n{}", program.weekly_summary());
    Ok(())
}

fn cmd_change_goal(
    program: &mut BodyManagementProgram,
    input: &mut impl BufRead,
    data_path: &Path,
) -> Result<()> {
    let goal = prompt_number(input, "New weekly calorie-burn goal")?;

    program.change_weekly_goal(goal);
    program.save(data_path)?;

    println!("\n{}", program.weekly_summary());
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_number(input: &mut impl BufRead, label: &str) -> Result<f64> {
    let raw = prompt(input, label)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Input(format!(
            "{}: expected a number, got {:?}",
            label, raw
        ))),
    }
}
