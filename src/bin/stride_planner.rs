// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use stride_planner::config::{EngineConfig, ServiceConfig};
use stride_planner::database::Database;
use stride_planner::logging::LoggingConfig;
use stride_planner::models::{FitnessLevel, PlanSpecification, RunningGoal, TimeOfDay, Weekday};
use stride_planner::services::{EventBus, PlanService, StaticIdentity};
use stride_planner::training::{phase_summary, CalendarSchedule};
use tracing::info;
use uuid::Uuid;

const IN_MEMORY_DATABASE: &str = "sqlite::memory:";

#[derive(Parser)]
#[command(name = "stride-planner")]
#[command(about = "Generate running training plans and structured workouts")]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<String>,

    /// User owning the plans (default: STRIDE_USER_ID)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a plan and print it as JSON
    Generate {
        #[command(flatten)]
        plan: PlanArgs,

        /// Persist the plan to the database
        #[arg(long)]
        save: bool,
    },
    /// Print the per-day calendar for a plan
    Calendar {
        #[command(flatten)]
        plan: PlanArgs,
    },
    /// Print the structured device workouts for a plan
    Compile {
        #[command(flatten)]
        plan: PlanArgs,
    },
    /// Print the phase blocks of a plan of the given length
    Phases {
        #[arg(long)]
        weeks: u32,
    },
    /// List the available goals and fitness levels
    Goals,
    /// List saved plans
    List,
    /// Rebuild the workouts of a saved plan from its own settings
    Regenerate {
        #[arg(long)]
        id: Uuid,
    },
    /// Delete a saved plan
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
struct PlanArgs {
    /// beginner_fitness, couch_to_5k, race_training or improve_pace
    #[arg(long, value_parser = parse_serde_name::<RunningGoal>)]
    goal: RunningGoal,

    /// beginner, intermediate or advanced
    #[arg(long, value_parser = parse_serde_name::<FitnessLevel>)]
    level: FitnessLevel,

    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// Last day of the plan (YYYY-MM-DD)
    #[arg(long)]
    end: NaiveDate,

    /// Comma separated weekdays; defaults to the level's recommended days
    #[arg(long, value_delimiter = ',', value_parser = parse_serde_name::<Weekday>)]
    days: Vec<Weekday>,

    /// morning, afternoon or evening
    #[arg(long, value_parser = parse_serde_name::<TimeOfDay>, default_value = "morning")]
    time: TimeOfDay,

    /// Target race distance in km
    #[arg(long, requires = "race_time")]
    race_distance: Option<f64>,

    /// Target race time in seconds
    #[arg(long, requires = "race_distance")]
    race_time: Option<f64>,

    /// Current 5K time in seconds
    #[arg(long)]
    current_5k: Option<f64>,
}

impl PlanArgs {
    fn specification(&self) -> PlanSpecification {
        let days: Vec<Weekday> = if self.days.is_empty() {
            self.level.recommended_workout_days().into_iter().collect()
        } else {
            self.days.clone()
        };

        let mut spec = PlanSpecification::new(self.goal, self.level, self.start, self.end, days)
            .with_preferred_time(self.time);
        if let (Some(distance), Some(time)) = (self.race_distance, self.race_time) {
            spec = spec.with_race(distance, time);
        }
        if let Some(seconds) = self.current_5k {
            spec = spec.with_current_5k_time(seconds);
        }
        spec
    }
}

/// Parse a CLI value using the serde name of a unit enum
fn parse_serde_name<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase()))
        .map_err(|_| format!("unrecognized value '{value}'"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Make sure the directory of a file-backed SQLite URL exists
fn ensure_database_dir(database_url: &str) -> Result<()> {
    let path = database_url.trim_start_matches("sqlite:").trim_start_matches("//");
    if path.starts_with(':') {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let service_config = ServiceConfig::from_env()?;
    LoggingConfig::from_env().init()?;

    let cli = Cli::parse();

    let engine_config = EngineConfig::load(cli.config.clone().or(service_config.engine_config_path.clone()))?;

    let persistent = matches!(
        cli.command,
        Commands::Generate { save: true, .. }
            | Commands::List
            | Commands::Regenerate { .. }
            | Commands::Delete { .. }
    );
    let database_url = if persistent {
        ensure_database_dir(&service_config.database_url)?;
        service_config.database_url.as_str()
    } else {
        IN_MEMORY_DATABASE
    };
    info!("{}", service_config.summary());

    let service = PlanService::new(
        Arc::new(StaticIdentity::new(cli.user.clone().or(service_config.user_id.clone()))),
        Arc::new(Database::new(database_url).await?),
        EventBus::new(service_config.event_channel_capacity),
        &engine_config,
    );

    match cli.command {
        Commands::Generate { plan, save } => {
            let plan = service.prepare_plan(&plan.specification()).await?;
            if save {
                service.save_plan(&plan).await?;
            }
            print_json(&plan)?;
        }
        Commands::Calendar { plan } => {
            let plan = service.prepare_plan(&plan.specification()).await?;
            print_json(&CalendarSchedule::for_plan(&plan))?;
        }
        Commands::Compile { plan } => {
            let plan = service.prepare_plan(&plan.specification()).await?;
            print_json(&service.compile_plan(&plan)?)?;
        }
        Commands::Phases { weeks } => {
            print_json(&phase_summary(weeks))?;
        }
        Commands::Goals => {
            for goal in RunningGoal::ALL {
                println!("{:<18} {}", goal.title(), goal.description());
            }
            println!();
            for level in FitnessLevel::ALL {
                let days: Vec<String> = level
                    .recommended_workout_days()
                    .iter()
                    .map(|day| day.to_string())
                    .collect();
                println!("{:<18} {}", level.title(), days.join(", "));
            }
        }
        Commands::List => {
            let plans = service.plans_for_current_user().await?;
            for plan in &plans {
                println!(
                    "{}  {}  {} to {}  {} workouts",
                    plan.id,
                    plan.name,
                    plan.start_date,
                    plan.end_date,
                    plan.workouts.len()
                );
            }
        }
        Commands::Regenerate { id } => {
            let plan = service.get_plan(id).await?;
            let plan = service.regenerate(&plan).await?;
            println!("Regenerated plan {id} with {} workouts", plan.workouts.len());
        }
        Commands::Delete { id } => {
            service.delete_plan(id).await?;
            println!("Deleted plan {id}");
        }
    }

    Ok(())
}
