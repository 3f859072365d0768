mod commands;
mod dates;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planner_core::{EventId, EventStore, FileStorage, GuestId, PlannerConfig, TaskId};

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan events: guests, tasks, expenses, notes and upcoming reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    List {
        /// Print the raw event collection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an event (prompts for missing title/date)
    New {
        title: Option<String>,

        /// Event date (YYYY-MM-DD or e.g. "next friday")
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        budget: Option<String>,
    },
    /// Show an event with its guests, tasks, expenses and notes
    Show { id: EventId },
    /// Change an event's title, date, location or budget
    Edit {
        id: EventId,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        budget: Option<String>,
    },
    /// Delete an event with everything attached to it
    Delete {
        id: EventId,

        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Manage an event's guest list
    Guest {
        #[command(subcommand)]
        action: GuestAction,
    },
    /// Manage an event's tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Record spending against an event's budget
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },
    /// Show or change an event's notes
    Notes {
        id: EventId,

        /// Replace the notes with this text
        #[arg(long, conflicts_with = "clear")]
        set: Option<String>,

        /// Erase the notes
        #[arg(long)]
        clear: bool,
    },
    /// Events coming up in the next few days
    Reminders,
    /// Show config and data locations
    Config {
        /// Save a new reminder window (days ahead of today)
        #[arg(long)]
        reminder_days: Option<i64>,
    },
}

#[derive(Subcommand)]
enum GuestAction {
    Add {
        event: EventId,
        name: String,

        #[arg(short, long)]
        email: Option<String>,
    },
    Remove { event: EventId, guest: GuestId },
}

#[derive(Subcommand)]
enum TaskAction {
    Add {
        event: EventId,
        description: String,

        /// Due date (YYYY-MM-DD or e.g. "tomorrow")
        #[arg(long)]
        due: Option<String>,
    },
    Toggle { event: EventId, task: TaskId },
}

#[derive(Subcommand)]
enum ExpenseAction {
    Add {
        event: EventId,
        description: String,
        amount: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => commands::list::run(&open_store()?, json),
        Commands::New {
            title,
            date,
            location,
            budget,
        } => commands::new::run(&mut open_store()?, title, date, location, budget),
        Commands::Show { id } => commands::show::run(&open_store()?, id),
        Commands::Edit {
            id,
            title,
            date,
            location,
            budget,
        } => commands::edit::run(&mut open_store()?, id, title, date, location, budget),
        Commands::Delete { id, force } => commands::delete::run(&mut open_store()?, id, force),
        Commands::Guest { action } => {
            let mut store = open_store()?;
            match action {
                GuestAction::Add { event, name, email } => {
                    commands::guest::add(&mut store, event, &name, email.as_deref())
                }
                GuestAction::Remove { event, guest } => {
                    commands::guest::remove(&mut store, event, guest)
                }
            }
        }
        Commands::Task { action } => {
            let mut store = open_store()?;
            match action {
                TaskAction::Add {
                    event,
                    description,
                    due,
                } => commands::task::add(&mut store, event, &description, due.as_deref()),
                TaskAction::Toggle { event, task } => {
                    commands::task::toggle(&mut store, event, task)
                }
            }
        }
        Commands::Expense { action } => match action {
            ExpenseAction::Add {
                event,
                description,
                amount,
            } => commands::expense::add(&mut open_store()?, event, &description, &amount),
        },
        Commands::Notes { id, set, clear } => {
            // --clear writes empty notes, which reads back the same as none
            let update = if clear { Some(String::new()) } else { set };
            commands::notes::run(&mut open_store()?, id, update)
        }
        Commands::Reminders => commands::reminders::run(&open_store()?),
        Commands::Config { reminder_days } => commands::config::run(reminder_days),
    }
}

fn open_store() -> Result<EventStore<FileStorage>> {
    let config = PlannerConfig::load()?;
    let data_path = config.data_path();
    log::debug!("Opening event store at {}", data_path.display());
    let storage = FileStorage::open(data_path)?;

    Ok(EventStore::open(storage).with_reminder_days(config.reminder_days))
}
