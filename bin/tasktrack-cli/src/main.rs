//! tasktrack – command-line client for the tasktrack REST API.
//!
//! Every mutation performs one blocking round trip, then re-fetches the full
//! task list and renders it; there is no optimistic update. Search filtering
//! and the theme preference are purely local.

mod api;
mod error;
mod prefs;
mod render;

use clap::{Parser, Subcommand};

use tasktrack_types::{InvalidTask, NewTask, TaskPatch, TaskStatus};

use crate::api::ApiClient;
use crate::prefs::{Preferences, Theme};

const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "tasktrack", version, about = "Task tracker command-line client")]
struct Cli {
    /// Server base URL (defaults to $TASKTRACK_SERVER, then localhost:3000).
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a task (status defaults to todo).
    Add {
        description: String,
        #[arg(long, value_parser = parse_status)]
        status: Option<TaskStatus>,
    },
    /// List tasks, optionally filtered.
    List {
        /// Server-side status filter, passed verbatim; values outside
        /// todo/in-progress/done match nothing.
        #[arg(long)]
        status: Option<String>,
        /// Local case-insensitive substring filter over descriptions.
        #[arg(long)]
        search: Option<String>,
    },
    /// Update a task's description and/or status.
    Update {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_status)]
        status: Option<TaskStatus>,
    },
    /// Delete a task.
    Delete { id: String },
    /// Mark a task as in-progress.
    Start { id: String },
    /// Mark a task as done.
    Done { id: String },
    /// Show or set the persisted theme preference.
    Theme { theme: Option<Theme> },
}

fn parse_status(s: &str) -> Result<TaskStatus, InvalidTask> {
    s.parse()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let prefs = Preferences::load();

    let base = cli
        .server
        .or_else(|| std::env::var("TASKTRACK_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_owned());
    let client = ApiClient::new(base)?;

    match cli.command {
        Command::Add {
            description,
            status,
        } => {
            let reply = client.add_task(&NewTask {
                description,
                status,
            })?;
            println!("{}", reply.message);
            refresh_and_render(&client, prefs.theme);
        }
        Command::List { status, search } => {
            let tasks = match status.as_deref() {
                Some(status) => client.list_tasks_by_status(status)?,
                None => client.list_tasks()?,
            };
            match search.as_deref() {
                Some(needle) => {
                    let hits = render::filter_tasks(&tasks, needle);
                    println!("{}", render::render_tasks(hits, prefs.theme));
                }
                None => println!("{}", render::render_tasks(&tasks, prefs.theme)),
            }
        }
        Command::Update {
            id,
            description,
            status,
        } => {
            let reply = client.update_task(
                &id,
                &TaskPatch {
                    description,
                    status,
                },
            )?;
            println!("{}", reply.message);
            refresh_and_render(&client, prefs.theme);
        }
        Command::Delete { id } => {
            let reply = client.delete_task(&id)?;
            println!("{}", reply.message);
            refresh_and_render(&client, prefs.theme);
        }
        Command::Start { id } => {
            let reply = client.mark_in_progress(&id)?;
            println!("{}", reply.message);
            refresh_and_render(&client, prefs.theme);
        }
        Command::Done { id } => {
            let reply = client.mark_done(&id)?;
            println!("{}", reply.message);
            refresh_and_render(&client, prefs.theme);
        }
        Command::Theme { theme } => match theme {
            Some(theme) => {
                let prefs = Preferences { theme };
                prefs.save()?;
                println!("theme set to {theme}");
            }
            None => println!("theme is {}", prefs.theme),
        },
    }

    Ok(())
}

/// Re-fetch and render the full list after a successful mutation. A failed
/// refresh only logs; the mutation itself already succeeded.
fn refresh_and_render(client: &ApiClient, theme: Theme) {
    match client.list_tasks() {
        Ok(tasks) => println!("{}", render::render_tasks(&tasks, theme)),
        Err(e) => eprintln!("warning: could not refresh task list: {e}"),
    }
}
