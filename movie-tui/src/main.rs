mod app;
mod cli;
mod config;
mod controller;
mod logging;
mod lookup;
mod recents;
mod runtime;
mod term_store;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::MovieTuiConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lookup::{DevCatalog, MovieLookup, OmdbLookup};
use omdb::OmdbClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use recents::RecentTerms;
use std::io;
use std::sync::Arc;
use term_store::{FileTermStore, MemoryTermStore, TermStore};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = MovieTuiConfig::load()?;

    match cli.command {
        Commands::ConfigPath => {
            let path = MovieTuiConfig::config_path()?;
            if !path.exists() {
                config.save()?;
                println!("Created default config at {}", path.display());
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::ClearRecents => {
            let mut recents = RecentTerms::load(open_term_store(cli.no_history));
            recents.clear();
            println!("Recent searches cleared.");
            Ok(())
        }
        Commands::Run => {
            let api_key = config.resolve_api_key().with_context(|| {
                format!(
                    "No OMDb API key found. Set OMDB_API_KEY or api_key in {}",
                    MovieTuiConfig::config_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| "config.toml".to_string())
                )
            })?;
            let client = OmdbClient::new(config.api_url.clone(), api_key);
            run_tui(&config, cli.no_history, Arc::new(OmdbLookup::new(client)), "OMDb").await
        }
        Commands::Dev => {
            run_tui(&config, cli.no_history, Arc::new(DevCatalog::new()), "dev catalog").await
        }
    }
}

fn open_term_store(no_history: bool) -> Box<dyn TermStore> {
    if no_history {
        return Box::new(MemoryTermStore::new());
    }
    match FileTermStore::in_config_dir() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("recent searches will not be saved: {:#}", e);
            Box::new(MemoryTermStore::new())
        }
    }
}

async fn run_tui(
    config: &MovieTuiConfig,
    no_history: bool,
    lookup: Arc<dyn MovieLookup>,
    source_label: &str,
) -> Result<()> {
    if let Err(e) = logging::init(config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    info!(source = source_label, debounce_ms = config.debounce().as_millis() as u64, "starting");

    let mut app = App::new(open_term_store(no_history), config.debounce(), source_label);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, lookup, config.lookup_timeout()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("event loop failed: {:?}", err);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_history_store_does_not_persist_between_opens() {
        let mut recents = RecentTerms::load(open_term_store(true));
        assert!(recents.is_empty());
        recents.record("Heat");
        assert_eq!(recents.terms(), ["Heat"]);

        assert!(RecentTerms::load(open_term_store(true)).is_empty());
    }
}
