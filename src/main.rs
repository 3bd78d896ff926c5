//! Share Note - Publish a markdown note to a sharing server.
//!
//! Sends the note to `POST {apiBaseUrl}/create/` and copies the returned
//! link to the clipboard.
//!
//!   share-note settings set-base-url https://notes.example.com
//!   share-note settings set-secret <token>
//!   share-note publish daily/today.md
//!   share-note publish --vault ~/notes -e --no-prompt

mod application;
mod cli;
mod domain;
mod infrastructure;

use clap::Parser;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{PublishWorkflow, SettingsService};
use cli::{Cli, Commands, PresetDialog, SettingsAction, TerminalDialog, TerminalNotifier};
use domain::{NoteAccessor, NoticeLevel, Notifier, PublishOptions, ShareDialog};
use infrastructure::{FileSettingsStore, ShareClient, SystemClipboard, Vault};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
async fn run(cli: Cli) -> domain::Result<()> {
    let store = cli
        .settings
        .map_or_else(FileSettingsStore::at_default_location, |path| {
            FileSettingsStore::new(path)
        });
    let notifier = TerminalNotifier;

    match cli.command {
        Commands::Publish {
            note,
            vault,
            password,
            expire_after_read,
            no_prompt,
        } => {
            let mut vault = Vault::new(vault);
            if let Some(note) = note {
                vault = vault.with_active(note);
            }

            if no_prompt {
                let mut dialog = PresetDialog::new(PublishOptions {
                    password: password.unwrap_or_default(),
                    expire_after_read,
                });
                cmd_publish(store, &vault, &notifier, &mut dialog).await?;
            } else {
                let title = vault
                    .active_note()
                    .map_or_else(|| "note".to_string(), |n| n.display_name());
                let mut dialog = TerminalDialog::stdin(title);
                cmd_publish(store, &vault, &notifier, &mut dialog).await?;
            }
        }
        Commands::Settings { action } => {
            cmd_settings(store, &notifier, action);
        }
        Commands::Paths => {
            cmd_paths(&store);
        }
    }

    Ok(())
}

/// Publish the active note and print the share URL.
///
/// A missing note, an unreadable note or a dismissal after failed attempts
/// is an error so the process exits nonzero.
async fn cmd_publish<D: ShareDialog>(
    store: FileSettingsStore,
    vault: &Vault,
    notifier: &TerminalNotifier,
    dialog: &mut D,
) -> domain::Result<()> {
    let settings = SettingsService::load(store);
    let client = ShareClient::new()?;
    let clipboard = SystemClipboard;

    let report = PublishWorkflow::new(vault, &client, &clipboard, notifier)
        .run(&settings, dialog)
        .await?;

    if let Some(url) = report.into_url()? {
        println!("{url}");
    }

    Ok(())
}

/// View or edit settings. Each edit is saved immediately.
fn cmd_settings(store: FileSettingsStore, notifier: &TerminalNotifier, action: SettingsAction) {
    let mut settings = SettingsService::load(store);

    let saved = match action {
        SettingsAction::Show => {
            print_settings(&settings);
            return;
        }
        SettingsAction::SetBaseUrl { url } => settings.set_api_base_url(url),
        SettingsAction::SetSecret { secret } => settings.set_api_password(secret),
    };

    match saved {
        Ok(()) => notifier.notify(NoticeLevel::Info, "Settings saved."),
        Err(e) => notifier.notify(NoticeLevel::Warning, &format!("Warning: {e}")),
    }
}

fn print_settings(settings: &SettingsService<FileSettingsStore>) {
    let current = settings.settings();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["API Base URL".to_string(), current.api_base_url.clone()]);
    table.add_row(vec!["API Password".to_string(), current.masked_password()]);

    println!("{table}");
    println!("Stored in: {}", settings.store().path().display());
}

/// Show settings file path command.
fn cmd_paths(store: &FileSettingsStore) {
    let path = store.path();
    let state = if path.exists() {
        "exists".green()
    } else {
        "not created yet".yellow()
    };

    println!("{}", "📂 Share Note Paths".bold());
    println!();
    println!("  settings: {} [{}]", path.display(), state);
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
