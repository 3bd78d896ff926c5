//! Markdown vault access.
//!
//! A vault is a directory of notes. The active note is either the one
//! named on the command line or the most recently modified markdown file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;

use crate::domain::{AppError, NoteAccessor, NoteHandle, Result};

/// File extensions treated as notes.
const NOTE_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Directories skipped while scanning.
const IGNORED_DIRS: &[&str] = &[".git", ".obsidian", ".trash", "node_modules"];

/// Note accessor over a directory of markdown files.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    explicit: Option<PathBuf>,
}

impl Vault {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            explicit: None,
        }
    }

    /// Pin the active note to `note`. Relative paths resolve against the vault root.
    #[must_use]
    pub fn with_active(mut self, note: impl Into<PathBuf>) -> Self {
        let note = note.into();
        self.explicit = Some(if note.is_absolute() {
            note
        } else {
            self.root.join(note)
        });
        self
    }

    /// Most recently modified note under the vault root.
    fn latest_note(&self) -> Option<PathBuf> {
        let mut latest: Option<(SystemTime, PathBuf)> = None;
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Failed to read directory {}: {}", dir.display(), e);
                    continue;
                }
            };

            for entry in entries.filter_map(std::result::Result::ok) {
                let path = entry.path();
                let Ok(meta) = entry.metadata() else { continue };

                if meta.is_dir() {
                    if !is_ignored_dir(&path) {
                        pending.push(path);
                    }
                    continue;
                }

                if !is_note(&path) {
                    continue;
                }

                let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                if latest.as_ref().is_none_or(|(t, _)| modified > *t) {
                    latest = Some((modified, path));
                }
            }
        }

        latest.map(|(_, path)| path)
    }
}

fn is_note(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| NOTE_EXTENSIONS.iter().any(|n| ext.eq_ignore_ascii_case(n)))
}

fn is_ignored_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

#[async_trait(?Send)]
impl NoteAccessor for Vault {
    fn active_note(&self) -> Option<NoteHandle> {
        let path = match &self.explicit {
            Some(path) if path.is_file() => path.clone(),
            Some(path) => {
                tracing::debug!("Requested note does not exist: {}", path.display());
                return None;
            }
            None => self.latest_note()?,
        };

        tracing::debug!("Active note: {}", path.display());
        Some(NoteHandle::new(path))
    }

    async fn read_content(&self, note: &NoteHandle) -> Result<String> {
        tokio::fs::read_to_string(&note.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NoteNotFound {
                    path: note.path.clone(),
                }
            } else {
                AppError::io(format!("Failed to read {}", note.path.display()), e)
            }
        })
    }
}
