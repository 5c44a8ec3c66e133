use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "movie-tui")]
#[command(about = "Terminal UI for searching movies by title")]
pub struct Cli {
    /// Keep recent searches in memory only
    #[arg(long, global = true)]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the OMDb API
    Run,
    /// Search a local in-memory catalog, no API key needed
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
    /// Remove persisted recent searches
    ClearRecents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_no_history_after_subcommand() {
        let cli = Cli::try_parse_from(["movie-tui", "dev", "--no-history"]).unwrap();
        assert!(cli.no_history);
        assert!(matches!(cli.command, Commands::Dev));
    }

    #[test]
    fn parses_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["movie-tui", "clear-recents"]).unwrap();
        assert!(matches!(cli.command, Commands::ClearRecents));
        assert!(!cli.no_history);
    }
}
