use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::render::terminal;

use super::app_state::TuiState;
use super::{card_widget, status_bar};

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Header, card, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", state.view.group_name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            terminal::progress_line(&state.view.progress(), state.view.current_item()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), outer[0]);

    card_widget::draw(f, outer[1], state);
    status_bar::draw(f, outer[2], state);
}
