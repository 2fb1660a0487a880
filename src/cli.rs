use std::path::PathBuf;

use clap::Parser;

use crate::model::Level;

#[derive(Parser, Debug)]
#[command(name = "kwis", version, about = "Dizze Kwis is Nait Normaal: a timed Gronings quiz")]
pub struct Cli {
    /// Directory for highscores, settings and the log [default: platform data dir]
    #[arg(long, value_name = "dir")]
    pub data_dir: Option<PathBuf>,

    /// Skip the menus and start this level (easy, medium, hard)
    #[arg(long, value_name = "level")]
    pub level: Option<Level>,

    /// Print highscores without entering the TUI
    #[arg(long)]
    pub highscores: bool,

    /// Clear the highscores of every level
    #[arg(long)]
    pub reset_highscores: bool,

    /// Clear the highscore of one level
    #[arg(long, value_name = "level", conflicts_with = "reset_highscores")]
    pub reset: Option<Level>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_flags() {
        let cli = Cli::try_parse_from(["kwis", "--level", "hard", "--reset", "makkelijk"]).unwrap();
        assert_eq!(cli.level, Some(Level::Hard));
        assert_eq!(cli.reset, Some(Level::Easy));
        assert!(!cli.highscores);
    }

    #[test]
    fn test_reset_flags_conflict() {
        assert!(Cli::try_parse_from(["kwis", "--reset-highscores", "--reset", "easy"]).is_err());
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(Cli::try_parse_from(["kwis", "--level", "expert"]).is_err());
    }
}
