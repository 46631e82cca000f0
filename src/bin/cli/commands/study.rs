use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use recall_lib::memory::{MemorySession, ProgressSnapshot};

use crate::app::App;
use crate::render::terminal::{self, paint, Color};
use crate::study_view::StudyView;

/// Build a study view for a group. Empty groups are refused.
pub fn start(app: &App, group_name: &str) -> Result<StudyView> {
    let group = app.find_group(group_name)?;
    let session = MemorySession::new(group.study_items())
        .with_context(|| format!("Cannot study '{}'", group.group_name))?;

    log::info!(
        "Starting study session for '{}' ({} items)",
        group.group_name,
        group.words.len()
    );
    Ok(StudyView::new(
        group.group_name,
        session,
        app.config.reveal_translation,
    ))
}

/// Line-based study loop for terminals without the full-screen view
pub fn run_plain(app: &App, group_name: &str, use_color: bool) -> Result<()> {
    let mut view = start(app, group_name)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", paint(&view.group_name, Color::BOLD, use_color));

    loop {
        if view.is_complete() {
            let progress = view.progress();
            println!();
            println!(
                "{}",
                paint(
                    &format!("All {} items remembered!", progress.total),
                    Color::GREEN,
                    use_color
                )
            );
            match prompt(&mut input, "[R] another round  [q] quit > ")?.as_deref() {
                Some("R") | Some("r") => {
                    view.restart()?;
                    continue;
                }
                _ => break,
            }
        }

        let Some(item) = view.current_item() else {
            break;
        };

        println!();
        println!(
            "{}",
            paint(
                &terminal::progress_line(&view.progress(), Some(item)),
                Color::DIM,
                use_color
            )
        );
        for line in terminal::render_item(item, view.translation_visible(), use_color) {
            println!("  {}", line);
        }

        let hint = "[s] show  [r] remember  [k] keep  [R] restart  [q] quit > ";
        let Some(answer) = prompt(&mut input, hint)? else {
            break;
        };
        match answer.as_str() {
            "s" | "" => view.reveal_translation(),
            "r" => view.remember()?,
            "k" => view.keep()?,
            "R" => view.restart()?,
            "q" => break,
            other => println!("Unknown choice '{}'", other),
        }
    }

    print_summary(&view.finish(), use_color);
    Ok(())
}

fn prompt(input: &mut impl BufRead, hint: &str) -> Result<Option<String>> {
    print!("{}", hint);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn print_summary(progress: &ProgressSnapshot, use_color: bool) {
    println!(
        "{}",
        paint(
            &format!(
                "Session ended: {}/{} remembered",
                progress.remembered, progress.total
            ),
            Color::DIM,
            use_color
        )
    );
}
