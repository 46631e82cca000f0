use recall_lib::groups::GroupWord;
use recall_lib::memory::{ProgressSnapshot, SessionMode, StudyItem};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const GREEN: &str = "\x1b[32m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI style when color is enabled
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Header line describing where the session stands
pub fn progress_line(progress: &ProgressSnapshot, current: Option<&StudyItem>) -> String {
    let position = match (progress.mode, current) {
        (SessionMode::Review, _) => format!("Reviewing ({} left)", progress.review_queue_len),
        (SessionMode::Learn, Some(item)) => {
            format!("New item {}/{}", item.index + 1, progress.total)
        }
        (SessionMode::Learn, None) => "Done".to_string(),
    };
    format!(
        "{} | Remembered: {}/{}",
        position, progress.remembered, progress.total
    )
}

/// Render a study card as terminal lines
pub fn render_item(item: &StudyItem, show_translation: bool, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let mut title = paint(&item.text, Color::BOLD, use_color);
    if item.is_phrase {
        title.push(' ');
        title.push_str(&paint("[phrase]", Color::GRAY, use_color));
    }
    lines.push(title);

    if !item.sentence.is_empty() {
        lines.push(paint(&item.sentence, Color::ITALIC, use_color));
    }

    if show_translation {
        let translation = if item.translation.is_empty() {
            "(no translation)"
        } else {
            item.translation.as_str()
        };
        lines.push(format!(
            "Translation: {}",
            paint(translation, Color::GREEN, use_color)
        ));
    }

    lines
}

/// One-line summary of a saved word for listings
pub fn render_word(word: &GroupWord, use_color: bool) -> String {
    let mut line = paint(&word.text, Color::BOLD, use_color);
    if word.is_phrase {
        line.push(' ');
        line.push_str(&paint("[phrase]", Color::GRAY, use_color));
    }
    if let Some(translation) = word.translation.as_deref().filter(|t| !t.is_empty()) {
        line.push_str(" - ");
        line.push_str(translation);
    }
    if word.key.is_some() {
        line.push_str(&paint(&format!("  ({})", word.word_key()), Color::DIM, use_color));
    }
    line
}
