use anyhow::Result;

use crate::batch::bulk_upsert;
use crate::cli::display::print_batch_result;
use crate::cli::ui::{prompt_field, FormResult};
use crate::db::Database;
use crate::error::MalformedInputError;
use crate::models::BatchEntry;

/// Turn whitespace-separated `name phone name phone ...` tokens into entries.
pub fn parse_pairs<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<BatchEntry>, MalformedInputError> {
    if tokens.len() % 2 != 0 {
        return Err(MalformedInputError::OddTokenCount(tokens.len()));
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| BatchEntry::new(pair[0].as_ref(), pair[1].as_ref()))
        .collect())
}

/// Parse a single line of console input.
pub fn parse_line(line: &str) -> Result<Vec<BatchEntry>, MalformedInputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    parse_pairs(&tokens)
}

/// Execute the bulk command. With no tokens, prompt for one line.
pub fn run_bulk(db: &Database, tokens: Vec<String>) -> Result<()> {
    let entries = if tokens.is_empty() {
        match prompt_field("name phone pairs")? {
            FormResult::Value(line) => parse_line(&line)?,
            FormResult::Cancelled => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        parse_pairs(&tokens)?
    };

    let result = bulk_upsert(db, entries)?;
    print_batch_result(&result);
    Ok(())
}
