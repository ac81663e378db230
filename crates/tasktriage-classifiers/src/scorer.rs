//! Per-category scoring
//!
//! Each category earns a raw score from four signals:
//!
//! | Signal     | Counted on        | Weight (default) |
//! |------------|-------------------|------------------|
//! | keywords   | lowercased input  | 0.3              |
//! | patterns   | raw input         | 0.4              |
//! | context    | lowercased input  | 0.2              |
//! | auxiliary  | lowercased input  | 0.1              |
//!
//! Scores are not clamped here. Only the winner's score is clamped, when the
//! result is assembled.

use crate::rules::{CategoryRule, RuleTable};
use std::collections::HashSet;

/// Input text alongside its lowercased form
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    raw: &'a str,
    normalized: String,
}

impl<'a> NormalizedText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: raw.to_lowercase(),
        }
    }

    /// Original text, used for pattern matching
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Lowercased text, used for term matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Signals that fired for one category
#[derive(Debug, Clone)]
pub struct ScoreCard<'a> {
    pub rule: &'a CategoryRule,
    pub keyword_hits: Vec<&'a str>,
    pub pattern_hits: usize,
    pub context_hits: usize,
    pub auxiliary_hits: usize,
    pub score: f32,
}

impl<'a> ScoreCard<'a> {
    pub fn category(&self) -> &'a str {
        &self.rule.id
    }

    /// Human-readable notes for the signals that fired
    ///
    /// Notes appear in a fixed order (keywords, patterns, context,
    /// auxiliary) and a note is left out when its count is zero.
    pub fn reasoning(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if !self.keyword_hits.is_empty() {
            parts.push(format!("Found {} relevant keywords", self.keyword_hits.len()));
        }
        if self.pattern_hits > 0 {
            parts.push(format!("Matched {} specific patterns", self.pattern_hits));
        }
        if self.context_hits > 0 {
            parts.push(format!("Detected {} context indicators", self.context_hits));
        }
        if let Some(aux) = self.rule.auxiliary.as_ref().filter(|_| self.auxiliary_hits > 0) {
            parts.push(format!("Found {} {}", self.auxiliary_hits, aux.name));
        }

        parts
    }
}

/// Scores for every category, in declaration order
#[derive(Debug, Clone)]
pub struct ScoreBoard<'a> {
    pub cards: Vec<ScoreCard<'a>>,
}

impl<'a> ScoreBoard<'a> {
    /// Raw score of a category, if it exists
    pub fn score_of(&self, id: &str) -> Option<f32> {
        self.cards.iter().find(|c| c.rule.id == id).map(|c| c.score)
    }

    /// Every keyword that hit in any category, deduplicated, in discovery order
    pub fn matched_terms(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .flat_map(|card| card.keyword_hits.iter().copied())
            .filter(|term| seen.insert(*term))
            .collect()
    }
}

/// Score a single category
pub fn score_category<'a>(rule: &'a CategoryRule, text: &NormalizedText<'_>, table: &RuleTable) -> ScoreCard<'a> {
    let weights = table.weights();
    let normalized = text.normalized();

    let keyword_hits = rule.keywords.matches(normalized);
    let pattern_hits = rule.pattern_hits(text.raw());
    let context_hits = rule.context_terms.count(normalized);
    let auxiliary_hits = rule
        .auxiliary
        .as_ref()
        .map(|aux| aux.terms.count(normalized))
        .unwrap_or(0);

    let score = keyword_hits.len() as f32 * weights.keyword
        + pattern_hits as f32 * weights.pattern
        + context_hits as f32 * weights.context
        + auxiliary_hits as f32 * weights.auxiliary;

    ScoreCard {
        rule,
        keyword_hits,
        pattern_hits,
        context_hits,
        auxiliary_hits,
        score,
    }
}

/// Score every category of the table against the text
pub fn score_text<'a>(table: &'a RuleTable, text: &NormalizedText<'_>) -> ScoreBoard<'a> {
    let cards = table
        .categories()
        .iter()
        .map(|rule| score_category(rule, text, table))
        .collect();

    ScoreBoard { cards }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::from_yaml(
            r#"
categories:
  - id: bug_fix
    keywords: [bug, fix, broken]
    patterns: ['\bfix\b.*\bbug\b', '(?-i)NPE']
    context_terms: [login, redirect]
  - id: refactoring
    keywords: [refactor, hooks, fix]
    patterns: ['\brefactor']
    context_terms: [component]
auxiliary_indicators:
  refactoring:
    name: code structure indicators
    terms: [component, hook, props]
"#,
        )
        .unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_weighted_sum() {
        let table = table();
        let text = NormalizedText::new("Fix the login bug");
        let board = score_text(&table, &text);

        let bug = &board.cards[0];
        assert_eq!(bug.keyword_hits, vec!["bug", "fix"]);
        assert_eq!(bug.pattern_hits, 1);
        assert_eq!(bug.context_hits, 1);
        // 2 * 0.3 + 1 * 0.4 + 1 * 0.2
        assert!(approx(bug.score, 1.2));

        let refactoring = &board.cards[1];
        assert_eq!(refactoring.keyword_hits, vec!["fix"]);
        assert!(approx(refactoring.score, 0.3));
    }

    #[test]
    fn test_auxiliary_bonus_only_for_categories_that_define_it() {
        let table = table();
        let text = NormalizedText::new("refactor the component props with hooks");
        let board = score_text(&table, &text);

        let refactoring = &board.cards[1];
        assert_eq!(refactoring.auxiliary_hits, 3);
        // keywords: refactor, hooks; pattern: 1; context: component; aux: component, hook, props
        assert!(approx(refactoring.score, 2.0 * 0.3 + 0.4 + 0.2 + 3.0 * 0.1));
        assert_eq!(board.cards[0].auxiliary_hits, 0);
    }

    #[test]
    fn test_scores_are_not_clamped() {
        let table = table();
        let text = NormalizedText::new("Refactor component hooks props, refactor again");
        let board = score_text(&table, &text);
        assert!(board.score_of("refactoring").unwrap() > 1.0);
    }

    #[test]
    fn test_reasoning_order_and_omission() {
        let table = table();
        let text = NormalizedText::new("refactor the component props");
        let board = score_text(&table, &text);

        assert_eq!(
            board.cards[1].reasoning(),
            vec![
                "Found 1 relevant keywords",
                "Matched 1 specific patterns",
                "Detected 1 context indicators",
                "Found 2 code structure indicators",
            ]
        );
        assert!(board.cards[0].reasoning().is_empty());
    }

    #[test]
    fn test_keyword_matching_ignores_case_but_patterns_see_raw_text() {
        let table = table();

        let upper = score_text(&table, &NormalizedText::new("BROKEN NPE"));
        let lower = score_text(&table, &NormalizedText::new("broken npe"));

        assert_eq!(upper.cards[0].keyword_hits, lower.cards[0].keyword_hits);
        assert_eq!(upper.cards[0].pattern_hits, 1);
        assert_eq!(lower.cards[0].pattern_hits, 0);
    }

    #[test]
    fn test_matched_terms_span_all_categories() {
        let table = table();
        let board = score_text(&table, &NormalizedText::new("fix the bug then refactor"));
        assert_eq!(board.matched_terms(), vec!["bug", "fix", "refactor"]);
    }
}
