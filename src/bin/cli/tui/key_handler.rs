use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::TuiState;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char('?') => state.show_help = !state.show_help,
        KeyCode::Char('R') => state.restart(),
        _ if state.view.is_complete() => handle_finished_key(state, key),
        _ => handle_card_key(state, key),
    }
}

fn handle_card_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('s') => state.view.reveal_translation(),
        KeyCode::Char('r') | KeyCode::Enter => state.remember(),
        KeyCode::Char('k') | KeyCode::Right => state.keep(),
        _ => {}
    }
}

fn handle_finished_key(state: &mut TuiState, key: KeyEvent) {
    if let KeyCode::Char('r') | KeyCode::Enter = key.code {
        state.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recall_lib::memory::{MemorySession, SessionMode, StudyItem};

    use crate::study_view::StudyView;

    fn state(count: usize) -> TuiState {
        let items = (0..count).map(|i| StudyItem::new(i, format!("w{}", i))).collect();
        let view = StudyView::new("Test".to_string(), MemorySession::new(items).unwrap(), false);
        TuiState::new(view)
    }

    fn press(state: &mut TuiState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_reveal_then_judge_hides_translation() {
        let mut s = state(3);
        press(&mut s, KeyCode::Char(' '));
        assert!(s.view.translation_visible());

        press(&mut s, KeyCode::Char('k'));
        assert!(!s.view.translation_visible());
        assert_eq!(s.view.current_item().map(|i| i.index), Some(1));
    }

    #[test]
    fn test_completion_and_new_round() {
        let mut s = state(2);
        press(&mut s, KeyCode::Char('r'));
        press(&mut s, KeyCode::Char('r'));
        assert!(s.view.is_complete());
        assert!(s.flash_message.is_some());

        // Judging keys do nothing once complete; 'r' starts over
        press(&mut s, KeyCode::Char('k'));
        assert!(s.view.is_complete());
        press(&mut s, KeyCode::Char('r'));
        assert!(!s.view.is_complete());
        assert_eq!(s.view.current_item().map(|i| i.index), Some(0));
    }

    #[test]
    fn test_restart_key_mid_review() {
        let mut s = state(4);
        press(&mut s, KeyCode::Char('k'));
        press(&mut s, KeyCode::Char('k'));
        let progress = s.view.progress();
        assert_eq!(progress.mode, SessionMode::Review);
        assert_eq!(progress.review_queue_len, 2);

        press(&mut s, KeyCode::Char(' '));
        press(&mut s, KeyCode::Char('R'));
        let progress = s.view.progress();
        assert_eq!(progress.mode, SessionMode::Learn);
        assert_eq!(progress.review_queue_len, 0);
        assert_eq!(progress.remembered, 0);
        assert_eq!(s.view.current_item().map(|i| i.index), Some(0));
        assert!(!s.view.translation_visible());
        assert!(s.flash_message.is_some());
    }

    #[test]
    fn test_quit() {
        let mut s = state(1);
        press(&mut s, KeyCode::Char('q'));
        assert!(s.quit);
    }
}
