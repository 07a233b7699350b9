use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitalog_core::*;

mod day;

use day::DayState;

#[derive(Parser)]
#[command(name = "vitalog")]
#[command(about = "Personal wellness tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's progress against goals
    Status,

    /// Log and inspect meals
    Meal {
        #[command(subcommand)]
        command: MealCommands,
    },

    /// Log and inspect water intake
    Water {
        #[command(subcommand)]
        command: WaterCommands,
    },

    /// Guided meditation sessions
    Meditate {
        #[command(subcommand)]
        command: MeditateCommands,
    },

    /// Goal-capped quick increment for a category
    Quick {
        /// Category to bump (water, calories, meditation)
        category: String,
    },

    /// Update daily goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },

    /// List completed meditation sessions
    History,
}

#[derive(Subcommand)]
enum MealCommands {
    /// Add a meal to today's ledger
    Add {
        /// Meal name
        name: String,

        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long = "type")]
        meal_type: Option<String>,
    },

    /// Remove a meal by id (no-op if absent)
    Remove { id: u64 },

    /// List today's meals
    List,
}

#[derive(Subcommand)]
enum WaterCommands {
    /// Add a water entry in ml
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove the most recent entry
    RemoveLast,

    /// List today's entries
    List,
}

#[derive(Subcommand)]
enum MeditateCommands {
    /// List available guided sessions
    List,

    /// Run a session to completion
    Run {
        /// Session id (see `meditate list`)
        session: String,

        /// Tick without waiting between seconds
        #[arg(long)]
        speed_up: bool,
    },
}

#[derive(Subcommand)]
enum GoalCommands {
    /// Merge the supplied fields into today's goals
    Set {
        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        /// Daily water goal in ml
        #[arg(long)]
        water: Option<u32>,

        /// Daily meditation goal in minutes
        #[arg(long)]
        meditation: Option<u32>,
    },
}

fn main() -> Result<()> {
    vitalog_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let store = JsonStore::open(data_dir.join("state"));
    let journal_path = data_dir.join("completions.jsonl");

    match cli.command {
        Commands::Status => cmd_status(&store, &config),
        Commands::Meal { command } => cmd_meal(&store, &config, command),
        Commands::Water { command } => cmd_water(&store, &config, command),
        Commands::Meditate { command } => cmd_meditate(&store, &config, &journal_path, command),
        Commands::Quick { category } => cmd_quick(&store, &config, &category),
        Commands::Goal { command } => cmd_goal(&store, &config, command),
        Commands::History => cmd_history(&journal_path),
    }
}

fn cmd_status(store: &JsonStore, config: &Config) -> Result<()> {
    let mut day = DayState::load(store, config)?;
    let engine = MeditationEngine::with_logged_minutes(day.meditation_minutes);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  TODAY'S PROGRESS");
    println!("╰─────────────────────────────────────────╯");
    for metric in metrics::snapshot(&day.meals, &day.water, &engine, &day.goals) {
        println!(
            "  {:<14} {:>7.0} / {:<6.0} {:<4} ({:.0}%)",
            metric.label,
            metric.current,
            metric.goal,
            metric.unit,
            metric.percentage()
        );
    }

    let totals = day.meals.totals();
    println!();
    println!(
        "  Macros: {:.0} kcal, P {:.0} g, C {:.0} g, F {:.0} g",
        totals.calories, totals.protein, totals.carbs, totals.fat
    );
    if day.water.warning_active(chrono::Utc::now()) {
        println!("  ⚠ You've exceeded your daily water goal!");
    }

    Ok(())
}

fn cmd_meal(store: &JsonStore, config: &Config, command: MealCommands) -> Result<()> {
    let mut day = DayState::load(store, config)?;

    match command {
        MealCommands::Add {
            name,
            calories,
            protein,
            carbs,
            fat,
            meal_type,
        } => {
            let draft = MealDraft {
                name: Some(name),
                calories,
                protein,
                carbs,
                fat,
                meal_type: meal_type.as_deref().map(MealType::parse_or_default),
            };
            let id = day.meals.add_meal(draft);
            day.save(store)?;
            println!("✓ Meal logged (id {})", id);
        }

        MealCommands::Remove { id } => {
            day.meals.remove_meal(MealId(id));
            day.save(store)?;
            println!("✓ Meal {} removed (if present)", id);
        }

        MealCommands::List => {
            if day.meals.is_empty() {
                println!("No meals logged today.");
                return Ok(());
            }
            for meal in day.meals.meals() {
                println!(
                    "  [{}] {:<20} {:?}  {:.0} kcal  P {:.0} / C {:.0} / F {:.0}  at {}",
                    meal.id,
                    meal.name,
                    meal.meal_type,
                    meal.calories,
                    meal.protein,
                    meal.carbs,
                    meal.fat,
                    meal.eaten_at.format("%H:%M")
                );
            }
            let totals = day.meals.totals();
            println!(
                "  Total: {:.0} kcal / {:.0} goal",
                totals.calories, day.goals.nutrition.calories
            );
        }
    }

    Ok(())
}

fn cmd_water(store: &JsonStore, config: &Config, command: WaterCommands) -> Result<()> {
    let mut day = DayState::load(store, config)?;
    let now = chrono::Utc::now();

    match command {
        WaterCommands::Add { amount } => {
            // Non-positive or non-numeric input never reaches the ledger
            let Some(amount_ml) = water::parse_custom_amount(&amount) else {
                println!("Amount must be a positive whole number of ml.");
                return Ok(());
            };

            match day.water.add_water(amount_ml, day.goals.water_ml, now) {
                WaterAdd::Added => {
                    day.save(store)?;
                    println!(
                        "✓ Added {} ml ({} / {} ml)",
                        amount_ml,
                        day.water.total_ml(),
                        day.goals.water_ml
                    );
                }
                WaterAdd::GoalExceeded => {
                    println!("⚠ You've exceeded your daily water goal! Entry not added.");
                }
            }
        }

        WaterCommands::RemoveLast => {
            day.water.remove_last_entry();
            day.save(store)?;
            println!("✓ Last entry removed ({} ml total)", day.water.total_ml());
        }

        WaterCommands::List => {
            if day.water.entries().is_empty() {
                println!("No water logged today.");
                return Ok(());
            }
            for entry in day.water.entries() {
                println!(
                    "  {:>5} ml at {}",
                    entry.amount_ml,
                    entry.logged_at.format("%H:%M")
                );
            }
            println!("  Total: {} / {} ml", day.water.total_ml(), day.goals.water_ml);
        }
    }

    Ok(())
}

fn cmd_meditate(
    store: &JsonStore,
    config: &Config,
    journal_path: &std::path::Path,
    command: MeditateCommands,
) -> Result<()> {
    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match command {
        MeditateCommands::List => {
            for def in catalog.sessions.values() {
                println!(
                    "  {:<18} {:<16} {:>5}  {:?}",
                    def.id,
                    def.title,
                    meditation::format_seconds(def.duration_seconds),
                    def.category
                );
            }
        }

        MeditateCommands::Run { session, speed_up } => {
            let Some(def) = catalog.session(&session) else {
                println!("Unknown session '{}'. Try `vitalog meditate list`.", session);
                return Ok(());
            };

            let mut day = DayState::load(store, config)?;
            let mut engine = MeditationEngine::with_logged_minutes(day.meditation_minutes);
            let handle = engine.start(def);

            println!("▶ {} ({})", def.title, meditation::format_seconds(def.duration_seconds));

            loop {
                if !speed_up {
                    std::thread::sleep(std::time::Duration::from_secs(1));
                }
                match engine.tick(&handle) {
                    Tick::Running { remaining_seconds } => {
                        if remaining_seconds % 60 == 0 {
                            println!("  {} remaining", meditation::format_seconds(remaining_seconds));
                        }
                    }
                    Tick::Completed => break,
                    Tick::Ignored => {
                        // Schedule was cancelled out from under us; stop driving it
                        return Ok(());
                    }
                }
            }

            let mut journal = CompletionJournal::new(journal_path);
            journal.append(&CompletedSession::new(
                &def.id,
                def.duration_seconds,
                chrono::Utc::now(),
            ))?;

            day.meditation_minutes = engine.minutes_logged();
            day.save(store)?;
            println!(
                "✓ Session complete! {} min meditated today.",
                day.meditation_minutes
            );
        }
    }

    Ok(())
}

fn cmd_quick(store: &JsonStore, config: &Config, category: &str) -> Result<()> {
    let category = match category.to_lowercase().as_str() {
        "water" => QuickAddCategory::Water,
        "calories" => QuickAddCategory::Calories,
        "meditation" => QuickAddCategory::Meditation,
        other => {
            println!("Unknown category '{}'. Use water, calories or meditation.", other);
            return Ok(());
        }
    };

    let mut day = DayState::load(store, config)?;
    let mut engine = MeditationEngine::with_logged_minutes(day.meditation_minutes);

    let applied = metrics::quick_add(
        category,
        &mut day.meals,
        &mut day.water,
        &mut engine,
        &day.goals,
        &config.quick_add,
        chrono::Utc::now(),
    );
    day.meditation_minutes = engine.minutes_logged();
    day.save(store)?;

    if applied > 0.0 {
        println!("✓ Quick-added {:.0}", applied);
    } else {
        println!("Already at goal; nothing added.");
    }

    Ok(())
}

fn cmd_goal(store: &JsonStore, config: &Config, command: GoalCommands) -> Result<()> {
    let mut day = DayState::load(store, config)?;

    match command {
        GoalCommands::Set {
            calories,
            protein,
            carbs,
            fat,
            water,
            meditation,
        } => {
            day.goals.update_nutrition(&NutritionGoalPatch {
                calories,
                protein,
                carbs,
                fat,
            });
            if let Some(ml) = water {
                day.goals.set_water_goal(ml);
            }
            if let Some(minutes) = meditation {
                day.goals.set_meditation_goal(minutes);
            }
            day.save(store)?;

            println!(
                "✓ Goals: {:.0} kcal, P {:.0} g, C {:.0} g, F {:.0} g, {} ml water, {} min meditation",
                day.goals.nutrition.calories,
                day.goals.nutrition.protein,
                day.goals.nutrition.carbs,
                day.goals.nutrition.fat,
                day.goals.water_ml,
                day.goals.meditation_minutes
            );
        }
    }

    Ok(())
}

fn cmd_history(journal_path: &std::path::Path) -> Result<()> {
    let completions = read_completions(journal_path)?;
    if completions.is_empty() {
        println!("No completed sessions yet.");
        return Ok(());
    }

    for completion in completions {
        println!(
            "  {}  {:<18} {}",
            completion.completed_at.format("%Y-%m-%d %H:%M"),
            completion.def_id,
            meditation::format_seconds(completion.duration_seconds)
        );
    }

    Ok(())
}
