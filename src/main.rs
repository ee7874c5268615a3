mod cli;

use daydo::config::Config;
use daydo::storage::{load_store, save_store};
use daydo::todo::TodoStore;
use daydo::utils::dates::{date_key, offset_date_key, parse_date_key, today_key};
use daydo::utils::paths::get_logs_dir;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::path::PathBuf;

/// Initialize file-based logging.
///
/// Logs are written to ~/.daydo/logs/daydo.log, rolling daily. Log level can
/// be controlled with the RUST_LOG env var (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = match get_logs_dir() {
        Ok(dir) => dir,
        Err(_) => return None,
    };

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "daydo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .init();

    Some(guard)
}

/// Load the persisted store, windowed around `focus`. Corrupt or missing
/// state starts empty; that is the storage adapter's contract.
fn open_store(config: &Config, focus: NaiveDate, side_length: usize) -> Result<(TodoStore, PathBuf)> {
    let path = config.store_path()?;
    let data = load_store(&path);
    let store = TodoStore::with_items(data.list, data.next_id, focus, side_length);
    Ok((store, path))
}

/// Resolve the date an `add` lands on: an explicit key, an offset from
/// today, or today itself.
fn resolve_target_date(date: Option<String>, offset: Option<i64>) -> Result<String> {
    match (date, offset) {
        (Some(key), _) => {
            parse_date_key(&key)?;
            Ok(key)
        }
        (None, Some(days)) => offset_date_key(&today_key(), days),
        (None, None) => Ok(today_key()),
    }
}

fn handle_add(config: &Config, text: String, date: Option<String>, offset: Option<i64>) -> Result<()> {
    let target = resolve_target_date(date, offset)?;
    let (mut store, path) = open_store(config, Local::now().date_naive(), config.side_length)?;

    let id = store.add(text, &target);
    save_store(&path, &store)?;

    tracing::info!(id, date = %target, "todo added");
    println!("Added #{id} to {target}");
    Ok(())
}

fn handle_done(config: &Config, id: u64) -> Result<()> {
    let (mut store, path) = open_store(config, Local::now().date_naive(), config.side_length)?;

    store.done(id)?;
    save_store(&path, &store)?;

    println!("Done #{id}");
    Ok(())
}

fn handle_remove(config: &Config, id: u64) -> Result<()> {
    let (mut store, path) = open_store(config, Local::now().date_naive(), config.side_length)?;

    let existed = store.items().iter().any(|item| item.id == id);
    store.remove(id);
    save_store(&path, &store)?;

    if existed {
        println!("Removed #{id}");
    } else {
        println!("No todo with id {id}, nothing removed");
    }
    Ok(())
}

fn handle_edit(config: &Config, id: u64, text: String) -> Result<()> {
    let (mut store, path) = open_store(config, Local::now().date_naive(), config.side_length)?;

    store.update_text(id, text)?;
    save_store(&path, &store)?;

    println!("Updated #{id}");
    Ok(())
}

fn handle_move(config: &Config, id: u64, rank: usize) -> Result<()> {
    let (mut store, path) = open_store(config, Local::now().date_naive(), config.side_length)?;

    store.update_priority(id, rank)?;
    save_store(&path, &store)?;

    println!("Moved #{id} to rank {rank}");
    Ok(())
}

fn handle_show(config: &Config, date: Option<String>, side: Option<usize>) -> Result<()> {
    let focus = match date {
        Some(key) => parse_date_key(&key)?,
        None => Local::now().date_naive(),
    };
    let side_length = side.unwrap_or(config.side_length);
    let (store, _path) = open_store(config, focus, side_length)?;

    for key in store.dates() {
        let pending = store.pending_for(&key);
        let done = store.done_for(&key);
        let marker = if key == date_key(focus) { ">" } else { " " };

        println!("{marker} {key} ({} open, {} done)", pending.len(), done.len());

        for item in pending {
            println!("    [ ] #{} {}", item.id, item.text);
        }
        for item in done {
            println!("    [x] #{} {}", item.id, item.text);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Guard must be kept alive for the duration of the app
    let _log_guard = init_file_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Add { text, date, offset }) => {
            handle_add(&config, text, date, offset)?;
        }
        Some(Commands::Done { id }) => {
            handle_done(&config, id)?;
        }
        Some(Commands::Rm { id }) => {
            handle_remove(&config, id)?;
        }
        Some(Commands::Edit { id, text }) => {
            handle_edit(&config, id, text)?;
        }
        Some(Commands::Move { id, rank }) => {
            handle_move(&config, id, rank)?;
        }
        Some(Commands::Show { date, side }) => {
            handle_show(&config, date, side)?;
        }
        None => {
            handle_show(&config, None, None)?;
        }
    }

    Ok(())
}
