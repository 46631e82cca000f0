use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, group_name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let group = app.find_group(group_name)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&group)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(&group.group_name, Color::BOLD, use_color));
            println!(
                "{}",
                paint(
                    &format!("{} words and phrases", group.words.len()),
                    Color::DIM,
                    use_color
                )
            );
            println!();

            if group.words.is_empty() {
                println!("  (empty)");
            }
            for (i, word) in group.words.iter().enumerate() {
                println!("{:>4}. {}", i + 1, terminal::render_word(word, use_color));
                if !word.sentence.is_empty() {
                    println!("      {}", paint(&word.sentence, Color::GRAY, use_color));
                }
            }
        }
    }

    Ok(())
}
