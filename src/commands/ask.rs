//! Ask command - answer one text question or escalate it

use agri_advisor::{EscalationDecision, TextAnswer};
use anyhow::Result;
use std::path::Path;

pub fn execute(config_path: &Path, query: &str, json: bool) -> Result<()> {
    let advisor = super::load_advisor(config_path)?;
    let answer = advisor.answer_text(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print_answer(&answer);
    }
    Ok(())
}

pub(crate) fn print_answer(answer: &TextAnswer) {
    match answer.decision {
        EscalationDecision::AutoAnswer => {
            println!(
                "✓ Answer (confidence {:.2}, matched #{}):",
                answer.confidence, answer.matched_id
            );
            if let Some(text) = &answer.answer {
                println!("  {}", text);
            }
            if !answer.recommendations.is_empty() {
                println!("  Recommended:");
                for rec in &answer.recommendations {
                    println!("    • {} - {} ({})", rec.name, rec.location, rec.price);
                }
            }
        }
        EscalationDecision::Escalate => {
            println!(
                "⚠️  Escalated to an expert (confidence {:.2}, closest #{}: {:?})",
                answer.confidence, answer.matched_id, answer.matched_question
            );
        }
    }
}
