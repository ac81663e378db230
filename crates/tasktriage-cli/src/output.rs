//! Result rendering

use crate::config::OutputFormat;
use std::fmt::Write;
use tasktriage_classifiers::{CategoryInfo, ClassificationHistory, ClassificationResult};

/// Render one result in the requested format
pub fn render(result: &ClassificationResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

fn render_text(result: &ClassificationResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "Category:    {} ({})",
        result.primary_label, result.primary_category
    );
    let _ = writeln!(out, "Confidence:  {:.2}", result.confidence);
    if !result.secondary_categories.is_empty() {
        let _ = writeln!(out, "Secondary:   {}", result.secondary_categories.join(", "));
    }
    let _ = writeln!(
        out,
        "Complexity:  {} ({})",
        result.complexity, result.estimated_time
    );
    let _ = writeln!(out, "Priority:    {}", result.priority);
    if !result.matched_terms.is_empty() {
        let _ = writeln!(out, "Matched:     {}", result.matched_terms.join(", "));
    }
    if !result.reasoning.is_empty() {
        let _ = writeln!(out, "Reasoning:   {}", result.reasoning_summary());
    }
    if !result.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions:");
        for suggestion in &result.suggestions {
            let _ = writeln!(out, "  - {}", suggestion);
        }
    }

    out
}

/// Per-category counts for the results still held in a history
pub fn render_summary(history: &ClassificationHistory, format: OutputFormat) -> anyhow::Result<String> {
    let counts = history.category_counts();

    match format {
        OutputFormat::Json => {
            let counts: Vec<_> = counts
                .into_iter()
                .map(|(category, count)| serde_json::json!({ "category": category, "count": count }))
                .collect();
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "retained": history.len(),
                "categories": counts,
            }))?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Recent classifications: {}", history.len());
            for (category, count) in counts {
                let _ = writeln!(out, "  {:<28} {}", category, count);
            }
            Ok(out)
        }
    }
}

/// Registered profiles with each category's label and base weight
pub fn render_profiles(
    profiles: &[(String, Vec<CategoryInfo>)],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let json: Vec<_> = profiles
                .iter()
                .map(|(name, categories)| serde_json::json!({ "name": name, "categories": categories }))
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, categories) in profiles {
                let _ = writeln!(out, "{}", name);
                for category in categories {
                    let _ = writeln!(
                        out,
                        "  {:<28} {:<28} weight {:.2}",
                        category.id, category.label, category.base_weight
                    );
                }
            }
            Ok(out)
        }
    }
}
