use recall_lib::memory::{MemorySession, ProgressSnapshot, SessionError, StudyItem};

/// Presentation state wrapped around a study session.
///
/// The translation toggle lives here and never reaches the scheduler. It
/// falls back to `reveal_by_default` whenever the displayed item changes.
pub struct StudyView {
    pub group_name: String,
    session: MemorySession,
    reveal_by_default: bool,
    show_translation: bool,
}

impl StudyView {
    pub fn new(group_name: String, session: MemorySession, reveal_by_default: bool) -> Self {
        Self {
            group_name,
            session,
            reveal_by_default,
            show_translation: reveal_by_default,
        }
    }

    pub fn current_item(&self) -> Option<&StudyItem> {
        self.session.current_item()
    }

    pub fn progress(&self) -> ProgressSnapshot {
        self.session.progress_snapshot()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_session_complete()
    }

    pub fn translation_visible(&self) -> bool {
        self.show_translation
    }

    pub fn reveal_translation(&mut self) {
        self.show_translation = true;
    }

    pub fn keep(&mut self) -> Result<(), SessionError> {
        self.session.keep()?;
        self.reset_translation();
        Ok(())
    }

    pub fn remember(&mut self) -> Result<(), SessionError> {
        self.session.remember()?;
        self.reset_translation();
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.session.restart()?;
        self.reset_translation();
        Ok(())
    }

    pub fn finish(self) -> ProgressSnapshot {
        self.session.exit()
    }

    fn reset_translation(&mut self) {
        self.show_translation = self.reveal_by_default;
    }
}
