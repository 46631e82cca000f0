use std::fs;

use anyhow::{Context, Result};

use recall_lib::groups::{AddedWords, GroupWord};

use crate::app::App;
use crate::OutputFormat;

pub struct NewWord {
    pub text: String,
    pub translation: Option<String>,
    pub sentence: Option<String>,
    pub phrase: bool,
    pub key: Option<String>,
}

/// Add a single word typed on the command line
pub fn run_add(
    app: &App,
    group_name: &str,
    new_word: NewWord,
    format: &OutputFormat,
) -> Result<()> {
    let mut word = GroupWord::new(new_word.text);
    word.translation = new_word.translation;
    word.sentence = new_word.sentence.unwrap_or_default();
    word.is_phrase = new_word.phrase;
    word.key = new_word.key;

    let result = app.add_words(group_name, vec![word])?;
    report(&result, format)
}

/// Add a JSON array of words from a file, or stdin when `source` is "-"
pub fn run_import(
    app: &App,
    group_name: &str,
    source: &str,
    format: &OutputFormat,
) -> Result<()> {
    let json = if source == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))?
    };

    let words = App::parse_words(&json)?;
    let result = app.add_words(group_name, words)?;
    report(&result, format)
}

fn report(result: &AddedWords, format: &OutputFormat) -> Result<()> {
    let AddedWords { group, added } = result;
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "groupName": group.group_name,
                    "added": added,
                    "wordCount": group.words.len(),
                }))?
            );
        }
        OutputFormat::Plain => {
            println!(
                "Added {} word(s) to '{}' ({} total)",
                added,
                group.group_name,
                group.words.len()
            );
        }
    }
    Ok(())
}
