use chrono::{Local, Timelike};
use clap::Subcommand;
use serde::Serialize;
use streakgate_core::{Config, StreakProgress, StreakStatus};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Classify today's progress and print the status message
    Evaluate {
        /// Qualifying actions completed today
        #[arg(long)]
        completed: u32,
        /// Daily goal (defaults to streak.daily_goal)
        #[arg(long)]
        goal: Option<u32>,
        /// Treat the day-window as closing
        #[arg(long, conflicts_with = "not_late")]
        late: bool,
        /// Treat the day-window as open
        #[arg(long)]
        not_late: bool,
        /// Print JSON instead of the message
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct EvaluationOutput {
    #[serde(flatten)]
    progress: StreakProgress,
    status: StreakStatus,
    message: String,
}

/// Late once the local hour reaches the configured cutoff.
fn is_late_at(hour: u32, late_after_hour: u32) -> bool {
    hour >= late_after_hour
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StreakAction::Evaluate {
            completed,
            goal,
            late,
            not_late,
            json,
        } => {
            let config = Config::load()?;
            let goal = goal.unwrap_or(config.streak.daily_goal);
            let is_late = if late {
                true
            } else if not_late {
                false
            } else {
                let hour = Local::now().hour();
                tracing::debug!(hour, cutoff = config.streak.late_after_hour, "lateness from local clock");
                is_late_at(hour, config.streak.late_after_hour)
            };

            let progress = StreakProgress::new(completed, goal, is_late)?;
            let status = progress.status();
            let message = status.message();

            if json {
                let output = EvaluationOutput {
                    progress,
                    status,
                    message,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{message}");
            }
        }
    }
    Ok(())
}
