//! Batch command - answer one question per line, in parallel

use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

pub fn execute(config_path: &Path, file: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read queries from {}", file.display()))?;
    let queries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    let advisor = super::load_advisor(config_path)?;
    let results = advisor.answer_texts(&queries);

    if json {
        let rows: Vec<_> = queries
            .iter()
            .zip(&results)
            .map(|(query, result)| match result {
                Ok(answer) => json!({ "query": query, "result": answer }),
                Err(e) => json!({ "query": query, "error": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for (query, result) in queries.iter().zip(&results) {
        println!("? {}", query);
        match result {
            Ok(answer) => super::ask::print_answer(answer),
            Err(e) => println!("✗ {}", e),
        }
        println!();
    }
    Ok(())
}
