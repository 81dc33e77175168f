// ABOUTME: CLI steps command - print the onboarding step catalog
//
// Shows: position, id, panel kind, title and description of every step

use super::OutputFormat;
use crate::models::StepCatalog;
use anyhow::Result;
use serde::Serialize;

/// A step as printed by the steps command
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    pub number: usize,
    pub id: String,
    pub kind: &'static str,
    pub title: String,
    pub description: String,
}

/// Flatten a catalog into printable rows
pub fn summarize(catalog: &StepCatalog) -> Vec<StepSummary> {
    catalog
        .iter()
        .enumerate()
        .map(|(idx, step)| StepSummary {
            number: idx + 1,
            id: step.id.clone(),
            kind: step.content.kind(),
            title: step.title.clone(),
            description: step.description.clone(),
        })
        .collect()
}

/// Execute the steps command
pub fn execute(catalog: &StepCatalog, format: OutputFormat) -> Result<()> {
    let steps = summarize(catalog);

    match format {
        OutputFormat::Json => output_json(&steps)?,
        OutputFormat::Text => output_text(&steps),
    }

    Ok(())
}

/// Output steps as JSON
fn output_json(steps: &[StepSummary]) -> Result<()> {
    let json = serde_json::to_string_pretty(steps)?;
    println!("{json}");
    Ok(())
}

/// Output steps as a text table
fn output_text(steps: &[StepSummary]) {
    println!("{:<3} {:<22} {:<13} TITLE", "#", "ID", "PANEL");
    let separator = "-".repeat(72);
    println!("{separator}");

    for step in steps {
        println!(
            "{:<3} {:<22} {:<13} {}",
            step.number,
            truncate(&step.id, 22),
            step.kind,
            step.title
        );
        println!("    {}", step.description);
    }
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
