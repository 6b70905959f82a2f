mod api;
mod commands;
mod feed;
mod mock;
mod progress;
mod view;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lineup_core::activity::ActivityCounter;
use lineup_core::config::Config;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use crate::api::ApiClient;
use crate::feed::EventFeed;
use crate::view::FestivalDay;

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Pick festival bands and browse the two-day schedule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the band lineup in a random order
    Bands,
    /// Save band picks for a person
    Pick {
        /// Band ids to pick, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,

        /// Who is picking
        #[arg(long)]
        person: String,
    },
    /// List the schedule, grouped by day
    Events,
    /// Create a schedule event
    New {
        title: String,

        /// Start date/time (e.g., "2026-02-14T18:00:00-03:00")
        #[arg(short, long)]
        start: String,

        /// End date/time
        #[arg(short, long)]
        end: String,

        /// Hex color like #FF5D38
        #[arg(long)]
        color: Option<String>,

        /// Stage name
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Attendees, comma separated
        #[arg(long, value_delimiter = ',')]
        attendees: Vec<String>,

        #[arg(long)]
        all_day: bool,
    },
    /// Update a schedule event
    Update {
        id: String,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        start: String,

        #[arg(short, long)]
        end: String,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a schedule event
    Delete { id: String },
    /// Print the widget options for one festival day as JSON
    Schedule {
        /// Festival day (14 or 15)
        #[arg(long, default_value_t = 14)]
        day: u8,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Warn,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let cli = Cli::parse();
    let config = Config::load()?;

    let activity = Arc::new(ActivityCounter::new());
    let _spinner = progress::attach_spinner(&activity, "Loading");
    let api = ApiClient::new(config.base_url, Arc::clone(&activity));

    match cli.command {
        Commands::Bands => commands::bands::run(&api).await,
        Commands::Pick { ids, person } => commands::pick::run(&api, ids, person).await,
        Commands::Events => {
            let feed = EventFeed::new(api);
            commands::events::run(&feed).await
        }
        Commands::New {
            title,
            start,
            end,
            color,
            location,
            description,
            attendees,
            all_day,
        } => {
            commands::new::run(
                &api,
                title,
                start,
                end,
                color,
                location,
                description,
                attendees,
                all_day,
            )
            .await
        }
        Commands::Update {
            id,
            title,
            start,
            end,
            color,
            location,
            description,
        } => commands::update::run(&api, id, title, start, end, color, location, description).await,
        Commands::Delete { id } => commands::delete::run(&api, id).await,
        Commands::Schedule { day } => {
            let day = FestivalDay::from_number(day)
                .ok_or_else(|| anyhow::anyhow!("Invalid festival day {day}, expected 14 or 15"))?;
            let feed = EventFeed::new(api);
            commands::schedule::run(&feed, day).await
        }
    }
}
