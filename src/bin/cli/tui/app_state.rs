use recall_lib::memory::SessionError;

use crate::study_view::StudyView;

pub struct TuiState {
    pub view: StudyView,
    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(view: StudyView) -> Self {
        Self {
            view,
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    pub fn keep(&mut self) {
        let result = self.view.keep();
        self.report(result);
    }

    pub fn remember(&mut self) {
        let result = self.view.remember();
        self.report(result);
    }

    pub fn restart(&mut self) {
        match self.view.restart() {
            Ok(()) => self.flash_message = Some("Started a new round".to_string()),
            Err(e) => self.flash_message = Some(e.to_string()),
        }
    }

    fn report(&mut self, result: Result<(), SessionError>) {
        match result {
            Ok(()) if self.view.is_complete() => {
                self.flash_message = Some("Every item remembered!".to_string());
            }
            Ok(()) => {}
            Err(e) => self.flash_message = Some(e.to_string()),
        }
    }
}
