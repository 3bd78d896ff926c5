//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

pub mod terminal;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use terminal::{PresetDialog, TerminalDialog, TerminalNotifier};

/// Share Note - Publish a markdown note and copy the share link.
#[derive(Parser, Debug)]
#[command(name = "share-note")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to the platform data directory).
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish a note and copy the share URL to the clipboard.
    Publish {
        /// Note to publish, relative to the vault (defaults to the most recently modified note).
        note: Option<PathBuf>,

        /// Vault directory containing the notes.
        #[arg(long, default_value = ".")]
        vault: PathBuf,

        /// Password readers must enter to view the note (with --no-prompt).
        #[arg(short, long, requires = "no_prompt")]
        password: Option<String>,

        /// Delete the note on the server after one view (with --no-prompt).
        #[arg(short, long, requires = "no_prompt")]
        expire_after_read: bool,

        /// Do not prompt; submit the options given as flags once.
        #[arg(long)]
        no_prompt: bool,
    },

    /// View or edit the share server settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show the settings file path being used.
    Paths,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show current settings.
    Show,

    /// Set the base URL of the share server.
    SetBaseUrl {
        /// For example `http://localhost:8000`.
        url: String,
    },

    /// Set the secret used for API authentication.
    SetSecret {
        /// Empty string clears the secret.
        secret: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_publish_flags() {
        let cli = Cli::parse_from([
            "share-note",
            "-v",
            "publish",
            "notes/a.md",
            "--vault",
            "/tmp/vault",
            "-e",
            "--no-prompt",
        ]);

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Publish {
                note,
                vault,
                password,
                expire_after_read,
                no_prompt,
            } => {
                assert_eq!(note, Some(PathBuf::from("notes/a.md")));
                assert_eq!(vault, PathBuf::from("/tmp/vault"));
                assert_eq!(password, None);
                assert!(expire_after_read);
                assert!(no_prompt);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_option_flags_require_no_prompt() {
        assert!(Cli::try_parse_from(["share-note", "publish", "-p", "secret"]).is_err());
        assert!(Cli::try_parse_from(["share-note", "publish", "-e"]).is_err());
        assert!(
            Cli::try_parse_from(["share-note", "publish", "-p", "secret", "--no-prompt"]).is_ok()
        );
    }

    #[test]
    fn test_parse_settings_edit() {
        let cli = Cli::parse_from([
            "share-note",
            "settings",
            "set-base-url",
            "https://share.example.com",
            "--settings",
            "/tmp/s.toml",
        ]);

        assert_eq!(cli.settings, Some(PathBuf::from("/tmp/s.toml")));
        assert!(matches!(
            cli.command,
            Commands::Settings {
                action: SettingsAction::SetBaseUrl { ref url }
            } if url == "https://share.example.com"
        ));
    }
}
