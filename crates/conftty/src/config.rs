//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::app::{StartScreen, conftty_home};
use crate::infra::catalog::{Catalog, CatalogError};

/// Log file name under the conftty home directory.
pub const LOG_FILE: &str = "conftty.log";

/// Terminal companion for conference schedules.
#[derive(Debug, Parser)]
#[command(name = "conftty", version, about, long_about = None)]
pub struct Cli {
    /// Conference catalog JSON file. The bundled demo catalog is used when
    /// omitted.
    #[arg(long, env = "CONFTTY_DATA", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Open the detail screen of this session.
    #[arg(long, value_name = "ID", conflicts_with = "speaker")]
    pub session: Option<String>,

    /// Open the speaker list focused on this speaker.
    #[arg(long, value_name = "ID")]
    pub speaker: Option<String>,

    /// Write logs here instead of `~/.conftty/conftty.log`.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Returns the screen to mount first.
    pub fn start_screen(&self) -> StartScreen {
        if let Some(session_id) = &self.session {
            return StartScreen::Session(session_id.clone());
        }

        StartScreen::Speakers {
            focus_speaker_id: self.speaker.clone().unwrap_or_default(),
        }
    }

    /// Returns the log file path.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| conftty_home().join(LOG_FILE))
    }

    /// Loads the configured catalog, or the bundled demo.
    ///
    /// # Errors
    /// Returns an error when the catalog cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.data {
            Some(path) => Catalog::load(path),
            None => Catalog::demo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_screen_is_full_speaker_list() {
        // Arrange
        let cli = Cli::try_parse_from(["conftty"]).expect("failed to parse args");

        // Act
        let start_screen = cli.start_screen();

        // Assert
        assert_eq!(start_screen, StartScreen::default());
    }

    #[test]
    fn test_session_flag_selects_session_detail() {
        // Arrange
        let cli = Cli::try_parse_from(["conftty", "--session", "session-keynote"])
            .expect("failed to parse args");

        // Act
        let start_screen = cli.start_screen();

        // Assert
        assert_eq!(
            start_screen,
            StartScreen::Session("session-keynote".to_string())
        );
    }

    #[test]
    fn test_speaker_flag_focuses_speaker_list() {
        // Arrange
        let cli = Cli::try_parse_from(["conftty", "--speaker", "speaker-lena"])
            .expect("failed to parse args");

        // Act
        let start_screen = cli.start_screen();

        // Assert
        assert_eq!(
            start_screen,
            StartScreen::Speakers {
                focus_speaker_id: "speaker-lena".to_string(),
            }
        );
    }

    #[test]
    fn test_session_and_speaker_flags_conflict() {
        // Arrange & Act
        let result = Cli::try_parse_from(["conftty", "--session", "s1", "--speaker", "sp1"]);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_log_file_flag_overrides_default_path() {
        // Arrange
        let cli = Cli::try_parse_from(["conftty", "--log-file", "/tmp/conftty-test.log"])
            .expect("failed to parse args");

        // Act
        let log_file_path = cli.log_file_path();

        // Assert
        assert_eq!(log_file_path, PathBuf::from("/tmp/conftty-test.log"));
    }

    #[test]
    fn test_default_log_file_lives_in_home_dir() {
        // Arrange
        let cli = Cli::try_parse_from(["conftty"]).expect("failed to parse args");

        // Act
        let log_file_path = cli.log_file_path();

        // Assert
        assert!(log_file_path.ends_with(".conftty/conftty.log"));
    }

    #[test]
    fn test_load_catalog_reports_missing_data_file() {
        // Arrange
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("missing.json").to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["conftty", "--data", missing.as_str()])
            .expect("failed to parse args");

        // Act
        let result = cli.load_catalog();

        // Assert
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
