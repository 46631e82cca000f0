use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run_remove(app: &App, group_name: &str, word_key: &str, format: &OutputFormat) -> Result<()> {
    let group = app.remove_word(group_name, word_key)?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "groupName": group.group_name,
                    "removed": word_key,
                    "wordCount": group.words.len(),
                }))?
            );
        }
        OutputFormat::Plain => {
            println!(
                "Removed '{}' from '{}' ({} left)",
                word_key,
                group.group_name,
                group.words.len()
            );
        }
    }
    Ok(())
}

pub fn run_delete(app: &App, group_name: &str, format: &OutputFormat) -> Result<()> {
    let deleted = app.delete_group(group_name)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": deleted }));
        }
        OutputFormat::Plain => println!("Deleted group '{}'", deleted),
    }
    Ok(())
}
