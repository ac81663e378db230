//! Compiled rule tables
//!
//! [`RuleTable::compile`] validates a [`RuleTableSpec`] and builds the
//! matchers used at classification time. Every configuration problem is
//! reported here, so scoring itself never fails.

use crate::config::{RuleTableSpec, ScoreWeights};
use aho_corasick::AhoCorasick;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::path::Path;
use tasktriage_core::{Error, Result};
use tracing::info;

/// Lowercased terms with a matcher that finds every term present in a text
#[derive(Debug, Clone)]
pub struct TermSet {
    terms: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl TermSet {
    /// Lowercase, deduplicate and compile a list of terms
    ///
    /// Surrounding spaces are part of the term, so `" ui "` does not hit
    /// inside "build".
    fn compile(category: &str, kind: &str, raw: &[String]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut terms = Vec::with_capacity(raw.len());

        for term in raw {
            let term = term.to_lowercase();
            if term.trim().is_empty() {
                return Err(Error::config(format!(
                    "category '{}' has a blank {} entry",
                    category, kind
                )));
            }
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }

        let matcher = if terms.is_empty() {
            None
        } else {
            let ac = AhoCorasick::new(&terms).map_err(|e| {
                Error::config(format!(
                    "Failed to build {} matcher for category '{}': {}",
                    kind, category, e
                ))
            })?;
            Some(ac)
        };

        Ok(Self { terms, matcher })
    }

    /// Terms found in `normalized`, in declaration order
    ///
    /// Each term counts once however often it occurs. Overlapping search is
    /// required so that a term nested inside another ("hook" in "hooks")
    /// is still reported.
    pub fn matches<'a>(&'a self, normalized: &str) -> Vec<&'a str> {
        let Some(matcher) = &self.matcher else {
            return Vec::new();
        };

        let mut found = vec![false; self.terms.len()];
        for m in matcher.find_overlapping_iter(normalized) {
            found[m.pattern().as_usize()] = true;
        }

        self.terms
            .iter()
            .zip(found)
            .filter_map(|(term, hit)| hit.then_some(term.as_str()))
            .collect()
    }

    /// Number of distinct terms found in `normalized`
    pub fn count(&self, normalized: &str) -> usize {
        self.matches(normalized).len()
    }

    /// The normalized terms
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Named auxiliary indicator list attached to one category
#[derive(Debug, Clone)]
pub struct AuxiliaryIndicators {
    pub name: String,
    pub terms: TermSet,
}

/// A compiled category
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub id: String,
    pub label: String,
    pub keywords: TermSet,
    /// Matched against raw input; case-insensitive unless a pattern opts out with `(?-i)`
    pub patterns: Vec<Regex>,
    pub context_terms: TermSet,
    pub auxiliary: Option<AuxiliaryIndicators>,
    pub suggestions: Vec<String>,
    pub base_weight: f32,
}

impl CategoryRule {
    /// Number of patterns matching anywhere in `raw`
    pub fn pattern_hits(&self, raw: &str) -> usize {
        self.patterns.iter().filter(|p| p.is_match(raw)).count()
    }
}

/// Immutable, validated rule table
#[derive(Debug, Clone)]
pub struct RuleTable {
    description: Option<String>,
    categories: Vec<CategoryRule>,
    weights: ScoreWeights,
}

impl RuleTable {
    /// Validate a spec and compile its matchers
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - the table has no categories
    /// - a category id is blank or duplicated
    /// - a base weight lies outside (0, 1]
    /// - a weight is negative or not finite
    /// - a keyword, context term, indicator or pattern is blank
    /// - a pattern is not a valid regular expression
    /// - an auxiliary list or suggestion entry names an unknown category
    pub fn compile(spec: &RuleTableSpec) -> Result<Self> {
        if spec.categories.is_empty() {
            return Err(Error::config("rule table has no categories"));
        }

        for (name, weight) in spec.weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::config(format!(
                    "{} weight must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        let mut ids = HashSet::new();
        for category in &spec.categories {
            if category.id.trim().is_empty() {
                return Err(Error::config("category id must not be blank"));
            }
            if !ids.insert(category.id.as_str()) {
                return Err(Error::DuplicateCategory(category.id.clone()));
            }
        }

        for id in spec.auxiliary_indicators.keys() {
            if !ids.contains(id.as_str()) {
                return Err(Error::config(format!(
                    "auxiliary indicators reference unknown category '{}'",
                    id
                )));
            }
        }

        for id in spec.suggestions.keys() {
            if !ids.contains(id.as_str()) {
                return Err(Error::config(format!(
                    "suggestions reference unknown category '{}'",
                    id
                )));
            }
        }

        let mut categories = Vec::with_capacity(spec.categories.len());

        for category in &spec.categories {
            let id = category.id.as_str();

            if !(category.base_weight > 0.0 && category.base_weight <= 1.0) {
                return Err(Error::config(format!(
                    "category '{}' base_weight must be in (0, 1], got {}",
                    id, category.base_weight
                )));
            }

            let patterns = category
                .patterns
                .iter()
                .map(|pattern| compile_pattern(id, pattern))
                .collect::<Result<Vec<_>>>()?;

            let auxiliary = spec
                .auxiliary_indicators
                .get(id)
                .map(|aux| -> Result<AuxiliaryIndicators> {
                    Ok(AuxiliaryIndicators {
                        name: aux.name.clone(),
                        terms: TermSet::compile(id, "auxiliary indicator", &aux.terms)?,
                    })
                })
                .transpose()?;

            categories.push(CategoryRule {
                id: category.id.clone(),
                label: category.label.clone().unwrap_or_else(|| category.id.clone()),
                keywords: TermSet::compile(id, "keyword", &category.keywords)?,
                patterns,
                context_terms: TermSet::compile(id, "context term", &category.context_terms)?,
                auxiliary,
                suggestions: spec.suggestions.get(id).cloned().unwrap_or_default(),
                base_weight: category.base_weight,
            });
        }

        info!(
            categories = categories.len(),
            "Compiled rule table{}",
            spec.description
                .as_deref()
                .map(|d| format!(": {}", d))
                .unwrap_or_default()
        );

        Ok(Self {
            description: spec.description.clone(),
            categories,
            weights: spec.weights,
        })
    }

    /// Parse and compile a YAML rule table
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::compile(&RuleTableSpec::from_yaml(yaml)?)
    }

    /// Read, parse and compile a YAML rule table file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::compile(&RuleTableSpec::from_file(path)?)
    }

    /// Categories in declaration order
    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }

    /// Look up a category by id
    pub fn get(&self, id: &str) -> Option<&CategoryRule> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Category ids in declaration order
    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Number of categories; a compiled table always has at least one
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn compile_pattern(category: &str, pattern: &str) -> Result<Regex> {
    if pattern.trim().is_empty() {
        return Err(Error::invalid_pattern(category, pattern, "pattern is blank"));
    }

    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::invalid_pattern(category, pattern, e))
}
