use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use widgetcore::api::HttpItemFetcher;
use widgetcore::config::AppConfig;
use widgetcore::counter::BoundedCounter;
use widgetcore::loader::{ListLoader, LoadPhase};

#[derive(Parser)]
#[command(name = "widgetcore", about = "Demo driver for the widget state cores")]
struct Cli {
    /// Path to a TOML config file (defaults apply if absent).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted bounded-counter session and print each transition.
    Counter,
    /// Fetch users through the list loader and print phase changes.
    Users {
        /// Maximum number of users to request.
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Command::Counter => run_counter(&config),
        Command::Users { limit } => run_users(&config, limit).await,
    }
}

fn run_counter(config: &AppConfig) -> Result<()> {
    let c = &config.counter;
    let mut counter = BoundedCounter::with_bounds(c.initial, c.step, c.min, c.max);
    println!(
        "counter start: value={} (min={:?} max={:?} step={})",
        counter.value(),
        c.min,
        c.max,
        c.step
    );

    for _ in 0..3 {
        counter.increment();
        report(&counter, "increment");
    }
    counter.decrement();
    report(&counter, "decrement");
    counter.reset();
    report(&counter, "reset");
    Ok(())
}

fn report(counter: &BoundedCounter, op: &str) {
    println!(
        "{op}: value={} can_increment={} can_decrement={}",
        counter.value(),
        counter.can_increment(),
        counter.can_decrement()
    );
}

async fn run_users(config: &AppConfig, limit: u32) -> Result<()> {
    let fetcher = HttpItemFetcher::from_config(&config.api);
    let loader = ListLoader::new(fetcher, limit);
    let mut rx = loader.subscribe();

    let load = loader.load(limit);
    let watcher = async {
        while rx.changed().await.is_ok() {
            let phase = rx.borrow_and_update().clone();
            match &phase {
                LoadPhase::Loading => println!("loading users..."),
                LoadPhase::Success(_) | LoadPhase::Error(_) => break,
                LoadPhase::Idle => {}
            }
        }
    };
    tokio::join!(load, watcher);

    match loader.phase() {
        LoadPhase::Success(users) => {
            if users.is_empty() {
                println!("no users found");
            } else {
                println!("{}", serde_json::to_string_pretty(&users)?);
            }
            Ok(())
        }
        LoadPhase::Error(message) => anyhow::bail!("fetch failed: {message}"),
        LoadPhase::Idle | LoadPhase::Loading => unreachable!("load future resolved"),
    }
}
