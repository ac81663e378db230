//! Result assembly

use crate::attributes::Attributes;
use crate::classifier::{CategoryScore, ClassificationResult};
use crate::ranker::Ranking;
use crate::scorer::ScoreBoard;
use chrono::Utc;

/// Package a ranked score board and derived attributes into a result
///
/// Only the primary category's reasoning and suggestions are kept. Matched
/// terms cover every category.
pub fn assemble(board: &ScoreBoard<'_>, ranking: &Ranking, attributes: Attributes) -> ClassificationResult {
    let primary = &board.cards[ranking.primary()];

    let secondary_categories = ranking
        .secondary
        .iter()
        .map(|&i| board.cards[i].category().to_string())
        .collect();

    let scores = ranking
        .order
        .iter()
        .map(|&i| CategoryScore {
            category: board.cards[i].category().to_string(),
            score: board.cards[i].score,
        })
        .collect();

    ClassificationResult {
        primary_category: primary.rule.id.clone(),
        primary_label: primary.rule.label.clone(),
        confidence: ranking.confidence,
        secondary_categories,
        matched_terms: board.matched_terms().into_iter().map(str::to_string).collect(),
        reasoning: primary.reasoning(),
        suggestions: primary.rule.suggestions.clone(),
        complexity: attributes.complexity,
        priority: attributes.priority,
        estimated_time: attributes.estimated_time.to_string(),
        scores,
        created_at: Utc::now(),
    }
}
