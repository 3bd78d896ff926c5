//! Terminal implementations of the host dialog and notice surfaces.

use std::io::IsTerminal;

use async_trait::async_trait;
use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::domain::{AppError, NoticeLevel, Notifier, PublishOptions, Result, ShareDialog};

/// Notices printed to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        eprintln!("{}", render_notice(level, message));
    }
}

fn render_notice(level: NoticeLevel, message: &str) -> String {
    match level {
        NoticeLevel::Error => format!("{} {}", "✗".red().bold(), message.red()),
        NoticeLevel::Warning => format!("{} {}", "!".yellow().bold(), message.yellow()),
        NoticeLevel::Info => format!("{} {}", "✓".green().bold(), message),
    }
}

/// Line-based publish form.
///
/// After a failed share the next submit first asks whether to retry.
pub struct TerminalDialog<R> {
    lines: Lines<R>,
    title: String,
    attempts: usize,
    open: bool,
    hide_password: bool,
}

impl TerminalDialog<BufReader<Stdin>> {
    /// Dialog reading from stdin. The password is not echoed on a terminal.
    #[must_use]
    pub fn stdin(title: impl Into<String>) -> Self {
        let mut dialog = Self::new(BufReader::new(tokio::io::stdin()), title);
        dialog.hide_password = std::io::stdin().is_terminal();
        dialog
    }
}

impl<R: AsyncBufRead + Unpin> TerminalDialog<R> {
    pub fn new(reader: R, title: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            title: title.into(),
            attempts: 0,
            open: true,
            hide_password: false,
        }
    }

    /// Like [`Self::ask`] but reads raw key presses without echo.
    async fn ask_hidden(&mut self, prompt: &str) -> Result<Option<String>> {
        eprint!("{prompt} ");
        tokio::task::spawn_blocking(read_hidden_line)
            .await
            .map_err(prompt_error)?
    }

    /// Print `prompt` and read one trimmed line. `None` on EOF.
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        eprint!("{prompt} ");
        self.lines
            .next_line()
            .await
            .map(|line| line.map(|l| l.trim().to_string()))
            .map_err(prompt_error)
    }

    async fn ask_flag(&mut self, prompt: &str, default: bool) -> Result<Option<bool>> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        Ok(self
            .ask(&format!("{prompt} {hint}"))
            .await?
            .map(|answer| parse_flag(&answer, default)))
    }
}

#[async_trait(?Send)]
impl<R: AsyncBufRead + Unpin> ShareDialog for TerminalDialog<R> {
    async fn await_submit(&mut self) -> Result<Option<PublishOptions>> {
        if !self.open {
            return Ok(None);
        }

        if self.attempts == 0 {
            eprintln!("{}", format!("Publish {}", self.title).bold());
        } else if self.ask_flag("Retry?", true).await? != Some(true) {
            return Ok(None);
        }
        self.attempts += 1;

        let password = if self.hide_password {
            self.ask_hidden("Password (optional):").await?
        } else {
            self.ask("Password (optional):").await?
        };
        let Some(password) = password else {
            return Ok(None);
        };
        let Some(expire_after_read) = self.ask_flag("Delete after one view?", false).await? else {
            return Ok(None);
        };

        Ok(Some(PublishOptions {
            password,
            expire_after_read,
        }))
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Submits fixed options once, then dismisses.
#[derive(Debug)]
pub struct PresetDialog {
    options: Option<PublishOptions>,
}

impl PresetDialog {
    #[must_use]
    pub const fn new(options: PublishOptions) -> Self {
        Self {
            options: Some(options),
        }
    }
}

#[async_trait(?Send)]
impl ShareDialog for PresetDialog {
    async fn await_submit(&mut self) -> Result<Option<PublishOptions>> {
        Ok(self.options.take())
    }

    fn close(&mut self) {
        self.options = None;
    }
}

/// Effect of one key press on a hidden line.
#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Pending,
    Submit,
    Dismiss,
}

fn apply_key(line: &mut String, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Esc => KeyOutcome::Dismiss,
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Dismiss
        }
        KeyCode::Backspace => {
            line.pop();
            KeyOutcome::Pending
        }
        KeyCode::Char(c) => {
            line.push(c);
            KeyOutcome::Pending
        }
        _ => KeyOutcome::Pending,
    }
}

fn read_hidden_line() -> Result<Option<String>> {
    terminal::enable_raw_mode().map_err(prompt_error)?;
    let line = collect_hidden_line();
    let restored = terminal::disable_raw_mode();
    eprintln!();
    restored.map_err(prompt_error)?;
    line
}

fn collect_hidden_line() -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        let Event::Key(key) = event::read().map_err(prompt_error)? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match apply_key(&mut line, key) {
            KeyOutcome::Pending => {}
            KeyOutcome::Submit => return Ok(Some(line.trim().to_string())),
            KeyOutcome::Dismiss => return Ok(None),
        }
    }
}

fn prompt_error(err: impl std::fmt::Display) -> AppError {
    AppError::Prompt {
        message: err.to_string(),
    }
}

fn parse_flag(answer: &str, default: bool) -> bool {
    match answer.to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
