//! Knowledge command - list the knowledge base without loading the model

use agri_advisor::{AdvisorConfig, KnowledgeBase};
use anyhow::Result;
use std::path::Path;

pub fn execute(config_path: &Path, json: bool) -> Result<()> {
    let config = AdvisorConfig::load(config_path)?;
    let knowledge = match &config.knowledge.path {
        Some(path) => KnowledgeBase::load(path)?,
        None => KnowledgeBase::builtin(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(knowledge.entries())?);
        return Ok(());
    }

    println!("📚 {} knowledge entries", knowledge.len());
    for entry in knowledge.entries() {
        println!("  #{:<3} {}", entry.id, entry.question);
        for rec in &entry.recommendations {
            println!("        → {} ({})", rec.name, rec.price);
        }
    }
    Ok(())
}
