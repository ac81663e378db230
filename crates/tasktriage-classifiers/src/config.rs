//! Configuration for rule tables
//!
//! A rule table is described in YAML and compiled into a [`RuleTable`]
//! before any text is classified. The spec types here are plain data; all
//! validation happens in [`RuleTable::compile`].
//!
//! [`RuleTable`]: crate::rules::RuleTable
//! [`RuleTable::compile`]: crate::rules::RuleTable::compile

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tasktriage_core::Result;

/// Weight of each distinct keyword hit
pub const KEYWORD_WEIGHT: f32 = 0.3;

/// Weight of each matching pattern
pub const PATTERN_WEIGHT: f32 = 0.4;

/// Weight of each distinct context term hit
pub const CONTEXT_WEIGHT: f32 = 0.2;

/// Weight of each distinct auxiliary indicator hit
pub const AUX_WEIGHT: f32 = 0.1;

/// Complete rule table specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTableSpec {
    /// Table description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Categories in declaration order. Order is the tie-break for equal scores.
    pub categories: Vec<CategorySpec>,

    /// Auxiliary indicator lists by category id
    #[serde(default)]
    pub auxiliary_indicators: HashMap<String, AuxiliarySpec>,

    /// Canned suggestions by category id
    #[serde(default)]
    pub suggestions: HashMap<String, Vec<String>>,

    /// Per-signal weights
    #[serde(default)]
    pub weights: ScoreWeights,
}

/// A single category as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Stable category identifier
    pub id: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Terms matched as substrings of the lowercased input
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Regular expressions matched against the raw input
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Domain terms scored separately from keywords
    #[serde(default)]
    pub context_terms: Vec<String>,

    /// Prior in (0, 1], kept for display
    #[serde(default = "default_base_weight")]
    pub base_weight: f32,
}

/// Auxiliary indicator list for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuxiliarySpec {
    /// Name used in reasoning strings, e.g. "code structure indicators"
    #[serde(default = "default_auxiliary_name")]
    pub name: String,

    /// Indicator terms
    pub terms: Vec<String>,
}

/// Multipliers applied to each signal count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_keyword_weight")]
    pub keyword: f32,

    #[serde(default = "default_pattern_weight")]
    pub pattern: f32,

    #[serde(default = "default_context_weight")]
    pub context: f32,

    #[serde(default = "default_auxiliary_weight")]
    pub auxiliary: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: KEYWORD_WEIGHT,
            pattern: PATTERN_WEIGHT,
            context: CONTEXT_WEIGHT,
            auxiliary: AUX_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Named view over the weights, used for validation messages
    pub fn entries(&self) -> [(&'static str, f32); 4] {
        [
            ("keyword", self.keyword),
            ("pattern", self.pattern),
            ("context", self.context),
            ("auxiliary", self.auxiliary),
        ]
    }
}

impl RuleTableSpec {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Category ids in declaration order
    pub fn category_ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }
}

fn default_base_weight() -> f32 {
    1.0
}

fn default_auxiliary_name() -> String {
    "auxiliary indicators".to_string()
}

fn default_keyword_weight() -> f32 {
    KEYWORD_WEIGHT
}

fn default_pattern_weight() -> f32 {
    PATTERN_WEIGHT
}

fn default_context_weight() -> f32 {
    CONTEXT_WEIGHT
}

fn default_auxiliary_weight() -> f32 {
    AUX_WEIGHT
}
