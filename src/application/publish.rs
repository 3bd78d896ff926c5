//! Publish workflow.
//!
//! Active note → content → dialog → share server → clipboard. A failed
//! share leaves the dialog open so the user can submit again or dismiss.

use crate::domain::{
    AppError, ClipboardWriter, NoteAccessor, NoticeLevel, Notifier, PublishOutcome, PublishReport,
    Result, SettingsStore, ShareBackend, ShareDialog, ShareRequest,
};

use super::SettingsService;

/// Notice shown after the URL reached the clipboard.
pub const SHARED_NOTICE: &str = "Note shared! URL copied to clipboard.";

/// Host collaborators needed to publish a note.
pub struct PublishWorkflow<'a, N, B, C, M> {
    notes: &'a N,
    backend: &'a B,
    clipboard: &'a C,
    notifier: &'a M,
}

impl<'a, N, B, C, M> PublishWorkflow<'a, N, B, C, M>
where
    N: NoteAccessor,
    B: ShareBackend,
    C: ClipboardWriter,
    M: Notifier,
{
    pub const fn new(notes: &'a N, backend: &'a B, clipboard: &'a C, notifier: &'a M) -> Self {
        Self {
            notes,
            backend,
            clipboard,
            notifier,
        }
    }

    /// Run one publish action.
    ///
    /// # Errors
    /// Returns error if the dialog fails. Read and share failures are
    /// notices, not errors.
    pub async fn run<S, D>(
        &self,
        settings: &SettingsService<S>,
        dialog: &mut D,
    ) -> Result<PublishReport>
    where
        S: SettingsStore,
        D: ShareDialog,
    {
        let Some(note) = self.notes.active_note() else {
            self.notifier
                .notify(NoticeLevel::Error, &AppError::NoActiveDocument.to_string());
            return Ok(PublishReport::NoActiveNote);
        };

        let content = match self.notes.read_content(&note).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(note = %note.display_name(), "Note read failed: {e}");
                self.notifier.notify(NoticeLevel::Error, &format!("Error: {e}"));
                return Ok(PublishReport::ReadFailed);
            }
        };
        tracing::debug!(note = %note.display_name(), len = content.len(), "Note content read");

        let mut failed_attempts = 0;
        while let Some(options) = dialog.await_submit().await? {
            let request = ShareRequest::new(content.clone(), options);
            let snapshot = settings.snapshot();

            match self
                .backend
                .share(&snapshot.api_base_url, &snapshot.api_password, &request)
                .await
            {
                PublishOutcome::Success { url } => {
                    let copied = match self.clipboard.write_text(&url) {
                        Ok(()) => {
                            self.notifier.notify(NoticeLevel::Info, SHARED_NOTICE);
                            true
                        }
                        Err(e) => {
                            tracing::warn!("Clipboard write failed: {e}");
                            self.notifier.notify(
                                NoticeLevel::Warning,
                                &format!(
                                    "Warning: note shared at {url}, but copying to clipboard failed: {e}"
                                ),
                            );
                            false
                        }
                    };
                    dialog.close();
                    return Ok(PublishReport::Published { url, copied });
                }
                PublishOutcome::Failure { message } => {
                    failed_attempts += 1;
                    self.notifier
                        .notify(NoticeLevel::Error, &format!("Error: {message}"));
                }
            }
        }

        tracing::debug!(failed_attempts, "Publish dialog dismissed");
        Ok(PublishReport::Dismissed { failed_attempts })
    }
}
