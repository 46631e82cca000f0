use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let view = &state.view;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut text: Vec<Line> = vec![Line::from("")];

    if view.is_complete() {
        let total = view.progress().total;
        text.push(Line::from(Span::styled(
            "  Round complete!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(""));
        text.push(Line::from(format!("  All {} items remembered.", total)));
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "  r: another round   q: exit",
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(item) = view.current_item() {
        let mut title = vec![Span::styled(
            format!("  {}", item.text),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if item.is_phrase {
            title.push(Span::styled("  [phrase]", Style::default().fg(Color::DarkGray)));
        }
        text.push(Line::from(title));

        if !item.sentence.is_empty() {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                format!("  {}", item.sentence),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        text.push(Line::from(""));
        if view.translation_visible() {
            let translation = if item.translation.is_empty() {
                "(no translation)"
            } else {
                item.translation.as_str()
            };
            text.push(Line::from(vec![
                Span::raw("  Translation: "),
                Span::styled(translation.to_string(), Style::default().fg(Color::Green)),
            ]));
        } else {
            text.push(Line::from(Span::styled(
                "  Press space to show the translation",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if state.show_help {
        text.push(Line::from(""));
        for help in [
            "  space/s  show translation",
            "  r/Enter  remembered - drop from future reviews",
            "  k/Right  keep - review it again later",
            "  R        start over",
            "  q/Esc    exit",
        ] {
            text.push(Line::from(Span::styled(help, Style::default().fg(Color::Yellow))));
        }
    }

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
