use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let groups = app.list_groups()?;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = groups
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "groupName": g.group_name,
                        "wordCount": g.words.len(),
                        "createdAt": g.created_at,
                        "updatedAt": g.updated_at,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if groups.is_empty() {
                println!("No word groups yet. Add words with `recall-cli add`.");
                return Ok(());
            }

            let max_name_len = groups
                .iter()
                .map(|g| g.group_name.chars().count())
                .max()
                .unwrap_or(5)
                .max(5);

            println!("{:<width$} Words", "Group", width = max_name_len + 1);
            println!(
                "{} {}",
                "\u{2500}".repeat(max_name_len + 1),
                "\u{2500}".repeat(6)
            );

            for group in &groups {
                let padded = format!("{:<width$}", group.group_name, width = max_name_len + 1);
                println!("{}{}", paint(&padded, Color::BOLD, use_color), group.words.len());
            }

            println!("\n{} groups total", groups.len());
        }
    }

    Ok(())
}
