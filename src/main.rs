mod config;
mod fetch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use korkal_core::{assemble_calendar, extract_events, EventRecord, PlainEvent};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

/// URL of the rendered choir calendar page.
const CALENDAR_PAGE_URL: &str = "https://m.grundfoskoret.dk/korkalender";

#[derive(Parser)]
#[command(name = "korkal")]
#[command(about = "Sync the Grundfos choir calendar page to an iCalendar file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the calendar page and write the .ics file
    Sync {
        /// Path of the generated .ics file
        #[arg(short, long, default_value = "data/grundfoskoret.ics")]
        output: PathBuf,
    },
    /// Fetch the calendar page and print the events as JSON
    Events,
}

#[tokio::main]
async fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { output } => cmd_sync(output).await,
        Commands::Events => cmd_events().await,
    }
}

async fn cmd_sync(output: PathBuf) -> Result<()> {
    let events = fetch_and_extract().await?;

    let document = assemble_calendar(&events)?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    std::fs::write(&output, document.as_bytes())
        .with_context(|| format!("Failed to write calendar to {}", output.display()))?;

    println!("Wrote {} events to {}", events.len(), output.display());

    Ok(())
}

async fn cmd_events() -> Result<()> {
    let events = fetch_and_extract().await?;

    let plain: Vec<PlainEvent> = events.iter().map(PlainEvent::from).collect();
    println!("{}", serde_json::to_string_pretty(&plain)?);

    Ok(())
}

/// The shared front half of both commands: login, fetch, extract.
async fn fetch_and_extract() -> Result<Vec<EventRecord>> {
    let credentials = config::Credentials::from_env()?;

    let html = fetch::fetch_calendar_page(CALENDAR_PAGE_URL, &credentials).await?;
    let events = extract_events(&html)?;

    log::info!("Extracted {} events", events.len());

    Ok(events)
}
