//! Command-line interface for the tic-tac-toe client.

use crate::Locale;
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a computer that plays at random
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Language of the on-screen text
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.locale.is_none());
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--config",
            "game.toml",
            "--seed",
            "9",
            "--locale",
            "ru",
            "--log-file",
            "out.log",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.locale, Some(Locale::Ru));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn test_bad_locale_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--locale", "fr"]).is_err());
    }
}
