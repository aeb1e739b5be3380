//! Image command - diagnose a plant photo

use agri_advisor::EscalationDecision;
use anyhow::{Context, Result};
use std::path::Path;

pub fn execute(config_path: &Path, image_path: &Path, json: bool) -> Result<()> {
    let bytes = std::fs::read(image_path)
        .with_context(|| format!("Failed to read image {}", image_path.display()))?;

    let advisor = super::load_advisor(config_path)?;
    let answer = advisor.answer_image(&bytes);

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
        return Ok(());
    }

    let marker = match answer.decision {
        EscalationDecision::AutoAnswer => "✓",
        EscalationDecision::Escalate => "⚠️ ",
    };
    println!(
        "{} {} (confidence {:.2})",
        marker, answer.label, answer.confidence
    );
    println!("  {}", answer.solution);
    if answer.decision == EscalationDecision::Escalate {
        println!("  Escalated to an expert.");
    }
    Ok(())
}
