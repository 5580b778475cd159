use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use trainer_core::*;
use uuid::Uuid;

/// How far back `progress` looks for the latest logged set
const PROGRESSION_WINDOW_DAYS: i64 = 90;

/// How far back `summary` aggregates
const SUMMARY_WINDOW_DAYS: i64 = 365;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(about = "Rule-driven workout program generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly workout program (default)
    Plan {
        /// Training days per week (integer or e.g. "3 times a week")
        #[arg(long)]
        days: Option<String>,

        /// Training goal (muscle_gain, strength, endurance)
        #[arg(long)]
        goal: Option<String>,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long)]
        level: Option<String>,

        /// Exclude an exercise (repeatable; adds to stored dislikes)
        #[arg(long)]
        exclude: Vec<String>,

        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the program as JSON instead of the boxed view
        #[arg(long)]
        json: bool,
    },

    /// Record a performed set for an exercise
    Log {
        /// Exercise name as it appears in the catalog
        exercise: String,

        #[arg(long)]
        sets: Option<u32>,

        /// Reps as a number, range, or per-set figures ("8-8-7")
        #[arg(long)]
        reps: Option<String>,

        /// Weight lifted in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Reps left in reserve
        #[arg(long)]
        rir: Option<i32>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Suggest progression for an exercise from the training journal
    Progress {
        /// Exercise name as logged
        exercise: String,
    },

    /// Suggest substitutes for a disliked exercise
    Swap {
        /// The exercise to replace
        exercise: String,

        /// Its muscle group (chest, back, legs, shoulders, biceps, triceps, core)
        group: String,
    },

    /// Show or update stored training preferences
    Profile {
        #[arg(long)]
        goal: Option<String>,

        #[arg(long)]
        days: Option<String>,

        #[arg(long)]
        level: Option<String>,

        /// Add an exercise to the dislike list (repeatable)
        #[arg(long)]
        dislike: Vec<String>,

        /// Remove an exercise from the dislike list (repeatable)
        #[arg(long)]
        undislike: Vec<String>,
    },

    /// Show a training summary from the journal
    Summary,

    /// Roll up journal entries to CSV
    Rollup {
        /// Clean up processed journal files after rollup
        #[arg(long)]
        cleanup: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    trainer_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Plan {
            days,
            goal,
            level,
            exclude,
            seed,
            json,
        }) => cmd_plan(data_dir, &config, days, goal, level, exclude, seed, json),
        Some(Commands::Log {
            exercise,
            sets,
            reps,
            weight,
            rir,
            notes,
        }) => cmd_log(data_dir, &config, exercise, sets, reps, weight, rir, notes),
        Some(Commands::Progress { exercise }) => cmd_progress(data_dir, exercise),
        Some(Commands::Swap { exercise, group }) => cmd_swap(&config, exercise, group),
        Some(Commands::Profile {
            goal,
            days,
            level,
            dislike,
            undislike,
        }) => cmd_profile(data_dir, goal, days, level, dislike, undislike),
        Some(Commands::Summary) => cmd_summary(data_dir),
        Some(Commands::Rollup { cleanup }) => cmd_rollup(data_dir, cleanup),
        None => {
            // Default to "plan" with stored preferences
            cmd_plan(data_dir, &config, None, None, None, Vec::new(), None, false)
        }
    }
}

fn journal_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("wal").join("performance_logs.wal")
}

fn csv_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("logs.csv")
}

fn settings_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("wal").join("settings.json")
}

/// Parse a day count that may arrive as free text ("3 times a week")
fn parse_days_arg(raw: &str) -> Result<i32> {
    raw.trim()
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<i32>().ok())
        .ok_or_else(|| {
            Error::Validation(format!(
                "Invalid format for days: '{}'. Expected an integer or a phrase like \"3 times a week\".",
                raw
            ))
        })
}

/// Build the catalog from the defaults plus config extensions, validated
fn load_catalog(config: &Config) -> Result<ExerciseCatalog> {
    let catalog = build_default_catalog().with_custom(&config.catalog.custom);
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    Ok(catalog)
}

#[allow(clippy::too_many_arguments)]
fn cmd_plan(
    data_dir: PathBuf,
    config: &Config,
    days: Option<String>,
    goal: Option<String>,
    level: Option<String>,
    exclude: Vec<String>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    // Ensure directories exist
    std::fs::create_dir_all(data_dir.join("wal"))?;

    let catalog = load_catalog(config)?;
    let settings = UserSettings::load(&settings_path(&data_dir))?;

    // Flags override stored preferences; unknown values fall back
    let goal = goal
        .as_deref()
        .and_then(|g| match Goal::parse(g) {
            Some(goal) => Some(goal),
            None => {
                eprintln!("Unknown goal: {}. Using stored preference.", g);
                None
            }
        })
        .unwrap_or(settings.goal);

    let experience = level
        .as_deref()
        .and_then(|l| match ExperienceLevel::parse(l) {
            Some(level) => Some(level),
            None => {
                eprintln!("Unknown level: {}. Using stored preference.", l);
                None
            }
        })
        .unwrap_or(settings.experience);

    let days_per_week = match days {
        Some(raw) => parse_days_arg(&raw)?,
        None => settings.days_per_week,
    };

    let mut disliked_exercises = settings.disliked_exercises;
    disliked_exercises.extend(exclude);

    let profile = Profile {
        goal,
        experience,
        days_per_week,
        disliked_exercises,
    };

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let program = build_program(&catalog, &profile, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else {
        display_program(&program, &profile);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_log(
    data_dir: PathBuf,
    config: &Config,
    exercise: String,
    sets: Option<u32>,
    reps: Option<String>,
    weight: Option<f64>,
    rir: Option<i32>,
    notes: Option<String>,
) -> Result<()> {
    std::fs::create_dir_all(data_dir.join("wal"))?;

    let catalog = load_catalog(config)?;
    if !catalog.contains(&exercise) {
        eprintln!(
            "Exercise '{}' not found. Please ensure it exists in the catalog or add it via config.",
            exercise
        );
        return Err(Error::Validation(format!("unknown exercise '{}'", exercise)));
    }

    let entry = PerformanceLog {
        id: Uuid::new_v4(),
        exercise_name: exercise.clone(),
        logged_at: Utc::now(),
        sets_completed: sets,
        reps_achieved: reps,
        weight_lifted: weight,
        rir_achieved: rir,
        notes,
    };

    let mut sink = JsonlSink::new(journal_path(&data_dir));
    sink.append(&entry)?;

    println!("\n✓ Set logged for {}!", exercise);
    Ok(())
}

fn cmd_progress(data_dir: PathBuf, exercise: String) -> Result<()> {
    let logs = load_recent_logs(
        &journal_path(&data_dir),
        &csv_path(&data_dir),
        PROGRESSION_WINDOW_DAYS,
    )?;

    let last = find_last_log_for_exercise(&logs, &exercise);
    let suggestion = suggest_progression(last);

    println!("\n{}", suggestion);
    Ok(())
}

fn cmd_swap(config: &Config, exercise: String, group: String) -> Result<()> {
    let catalog = load_catalog(config)?;

    let muscle_group = MuscleGroup::parse(&group).ok_or_else(|| {
        eprintln!(
            "Unknown muscle group: {}. Expected one of chest, back, legs, shoulders, biceps, triceps, core.",
            group
        );
        Error::Validation(format!("unknown muscle group '{}'", group))
    })?;

    let mut rng = StdRng::from_os_rng();
    let message = alternative_exercises(&catalog, &exercise, muscle_group, &mut rng);

    println!("\n{}", message);
    Ok(())
}

fn cmd_profile(
    data_dir: PathBuf,
    goal: Option<String>,
    days: Option<String>,
    level: Option<String>,
    dislike: Vec<String>,
    undislike: Vec<String>,
) -> Result<()> {
    std::fs::create_dir_all(data_dir.join("wal"))?;
    let path = settings_path(&data_dir);

    let has_changes = goal.is_some()
        || days.is_some()
        || level.is_some()
        || !dislike.is_empty()
        || !undislike.is_empty();

    // Hard-error on bad values here - this command persists them
    let goal = goal
        .as_deref()
        .map(|g| Goal::parse(g).ok_or_else(|| Error::Validation(format!("unknown goal '{}'", g))))
        .transpose()?;
    let level = level
        .as_deref()
        .map(|l| {
            ExperienceLevel::parse(l)
                .ok_or_else(|| Error::Validation(format!("unknown level '{}'", l)))
        })
        .transpose()?;
    let days = days
        .as_deref()
        .map(|d| {
            let parsed = parse_days_arg(d)?;
            if parsed <= 0 {
                return Err(Error::Validation("days per week must be positive".into()));
            }
            Ok(parsed)
        })
        .transpose()?;

    let settings = if has_changes {
        UserSettings::update(&path, |settings| {
            if let Some(goal) = goal {
                settings.goal = goal;
            }
            if let Some(level) = level {
                settings.experience = level;
            }
            if let Some(days) = days {
                settings.days_per_week = days;
            }
            for name in &dislike {
                settings.disliked_exercises.insert(name.clone());
            }
            for name in &undislike {
                settings.disliked_exercises.remove(name);
            }
            Ok(())
        })?
    } else {
        UserSettings::load(&path)?
    };

    display_settings(&settings);
    Ok(())
}

fn cmd_summary(data_dir: PathBuf) -> Result<()> {
    let logs = load_recent_logs(
        &journal_path(&data_dir),
        &csv_path(&data_dir),
        SUMMARY_WINDOW_DAYS,
    )?;

    let summary = summarize(&logs);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  TRAINING SUMMARY (LAST {} DAYS)", SUMMARY_WINDOW_DAYS);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Sessions: {}", summary.total_sessions);
    println!("  Total volume lifted: {}kg", summary.total_volume);

    if summary.recent.is_empty() {
        println!("\n  No sets logged yet.");
    } else {
        println!("\n  Recent sets:");
        for line in &summary.recent {
            println!("  - {}  {}: {}", line.date, line.exercise_name, line.details);
        }
    }

    println!();
    Ok(())
}

fn cmd_rollup(data_dir: PathBuf, cleanup: bool) -> Result<()> {
    let wal_dir = data_dir.join("wal");
    let journal = journal_path(&data_dir);
    let csv = csv_path(&data_dir);

    if !journal.exists() {
        println!("No journal file found - nothing to roll up.");
        return Ok(());
    }

    let count = trainer_core::csv_rollup::journal_to_csv_and_archive(&journal, &csv)?;

    println!("✓ Rolled up {} logged sets to CSV", count);
    println!("  CSV: {}", csv.display());

    if cleanup {
        let cleaned = trainer_core::csv_rollup::cleanup_processed_journals(&wal_dir)?;
        if cleaned > 0 {
            println!("✓ Cleaned up {} processed journal files", cleaned);
        }
    }

    Ok(())
}

fn display_program(program: &Program, profile: &Profile) {
    println!("\n╭─────────────────────────────────────────╮");
    println!(
        "│  {} PROGRAM - {} DAYS ({})",
        profile.goal.as_str().to_uppercase(),
        program.days.len(),
        profile.experience.as_str()
    );
    println!("╰─────────────────────────────────────────╯");

    for (i, day) in program.days.iter().enumerate() {
        println!("\nDay {}: {}", i + 1, day.day_name);

        if day.exercises.is_empty() {
            println!("  (no exercises available - check your dislike list)");
            continue;
        }

        for exercise in &day.exercises {
            println!(
                "  - {}: {} sets of {} reps, RIR {}, Rest: {}s",
                exercise.name, exercise.sets, exercise.reps, exercise.rir, exercise.rest_seconds
            );
            if let Some(note) = &exercise.technique_note {
                println!("    Note: {}", note);
            }
        }
    }

    println!();
}

fn display_settings(settings: &UserSettings) {
    println!("\nStored training preferences:");
    println!("  Goal: {}", settings.goal.as_str());
    println!("  Level: {}", settings.experience.as_str());
    println!("  Days per week: {}", settings.days_per_week);

    if settings.disliked_exercises.is_empty() {
        println!("  Disliked exercises: none");
    } else {
        let mut disliked: Vec<&String> = settings.disliked_exercises.iter().collect();
        disliked.sort();
        println!(
            "  Disliked exercises: {}",
            disliked
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    println!();
}
