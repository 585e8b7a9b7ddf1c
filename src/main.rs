mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use momento::config::MomentoConfig;
use momento::model::profile::DEFAULT_LIFE_EXPECTANCY;
use momento::model::{GoalCategory, GoalPriority, GoalStatus, ReflectionType};
use momento::widget::WidgetMode;

#[derive(Parser)]
#[command(name = "momento", version, about = "Memento mori: your time, counted down")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create your profile and finish onboarding
    Onboard {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth_date: String,
        /// Expected lifespan in years (20-120)
        #[arg(long, default_value_t = DEFAULT_LIFE_EXPECTANCY.to_string())]
        life_expectancy: String,
        #[arg(long, default_value = "")]
        name: String,
        /// Region code, e.g. SE
        #[arg(long)]
        country: Option<String>,
    },
    /// Compute statistics locally without a profile or backend
    Calc {
        #[arg(long)]
        birth_date: String,
        #[arg(long, default_value_t = DEFAULT_LIFE_EXPECTANCY.to_string())]
        life_expectancy: String,
    },
    /// Show your mortality statistics
    Stats,
    /// Show today's quote
    Quote,
    /// Manage goals
    Goals {
        #[command(subcommand)]
        action: GoalsAction,
    },
    /// Write and review reflections
    Reflections {
        #[command(subcommand)]
        action: ReflectionsAction,
    },
    /// Run the floating widget in the terminal
    Widget {
        /// Start in `countdown` or `quote` mode
        #[arg(long, default_value = "countdown")]
        mode: WidgetMode,
    },
    /// Forget the local session and cached statistics
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Check the session database
    Doctor,
}

#[derive(Subcommand)]
enum GoalsAction {
    /// List goals, optionally filtered by status
    List {
        #[arg(long)]
        status: Option<GoalStatus>,
    },
    /// Add a goal
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "personal")]
        category: GoalCategory,
        #[arg(long, default_value = "medium")]
        priority: GoalPriority,
        /// Target date, YYYY-MM-DD
        #[arg(long)]
        target_date: Option<String>,
    },
    /// Change a goal's status
    SetStatus { id: String, status: GoalStatus },
}

#[derive(Subcommand)]
enum ReflectionsAction {
    /// List reflections, optionally filtered by type
    List {
        #[arg(long = "type")]
        reflection_type: Option<ReflectionType>,
    },
    /// Show the prompts for a reflection type
    Prompts {
        #[arg(long = "type", default_value = "daily")]
        reflection_type: ReflectionType,
    },
    /// Write a reflection; responses answer the prompts in order
    Add {
        #[arg(long = "type", default_value = "daily")]
        reflection_type: ReflectionType,
        /// 1-5
        #[arg(long)]
        mood: u8,
        /// 1-5
        #[arg(long)]
        productivity: u8,
        #[arg(long = "response")]
        responses: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MomentoConfig::load()?;

    // stderr keeps stdout clean for command output.
    let filter =
        EnvFilter::try_new(&config.app.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Onboard {
            birth_date,
            life_expectancy,
            name,
            country,
        } => {
            let form = momento::onboarding::OnboardingForm {
                birth_date,
                life_expectancy,
                name,
                country,
            };
            cli::onboard::onboard(&config, form).await?;
        }
        Command::Calc {
            birth_date,
            life_expectancy,
        } => cli::calc::calc(&birth_date, &life_expectancy)?,
        Command::Stats => cli::stats::stats(&config).await?,
        Command::Quote => cli::quote::quote(&config).await?,
        Command::Goals { action } => match action {
            GoalsAction::List { status } => cli::goals::list(&config, status).await?,
            GoalsAction::Add {
                title,
                description,
                category,
                priority,
                target_date,
            } => {
                let input = cli::goals::NewGoal {
                    title,
                    description,
                    category,
                    priority,
                    target_date,
                };
                cli::goals::add(&config, input).await?;
            }
            GoalsAction::SetStatus { id, status } => {
                cli::goals::set_status(&config, &id, status).await?
            }
        },
        Command::Reflections { action } => match action {
            ReflectionsAction::List { reflection_type } => {
                cli::reflections::list(&config, reflection_type).await?
            }
            ReflectionsAction::Prompts { reflection_type } => {
                cli::reflections::prompts(reflection_type)
            }
            ReflectionsAction::Add {
                reflection_type,
                mood,
                productivity,
                responses,
            } => {
                cli::reflections::add(&config, reflection_type, mood, productivity, &responses)
                    .await?
            }
        },
        Command::Widget { mode } => cli::widget::run(&config, mode).await?,
        Command::Reset { yes } => cli::reset::reset(&config, yes)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
