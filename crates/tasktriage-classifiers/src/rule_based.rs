//! Rule-weighted classifier
//!
//! Runs the whole pipeline in one synchronous call:
//! scorer → ranker → attribute deriver → result assembler.

use crate::assembler::assemble;
use crate::attributes::derive_attributes;
use crate::classifier::{CategoryInfo, ClassificationResult, Classifier};
use crate::config::RuleTableSpec;
use crate::ranker::{rank, SecondaryMode};
use crate::rules::RuleTable;
use crate::scorer::{score_text, NormalizedText};
use std::sync::Arc;
use std::time::Instant;
use tasktriage_core::{Error, Result};
use tracing::debug;

/// Classifier backed by an immutable rule table
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    name: String,
    table: Arc<RuleTable>,
    secondary_mode: SecondaryMode,
}

impl RuleClassifier {
    /// Create a classifier over a compiled table
    pub fn new(name: impl Into<String>, table: Arc<RuleTable>) -> Self {
        Self {
            name: name.into(),
            table,
            secondary_mode: SecondaryMode::default(),
        }
    }

    /// Compile a spec and wrap it in a classifier
    pub fn from_spec(name: impl Into<String>, spec: &RuleTableSpec) -> Result<Self> {
        Ok(Self::new(name, Arc::new(RuleTable::compile(spec)?)))
    }

    /// Compile a YAML rule table and wrap it in a classifier
    pub fn from_yaml(name: impl Into<String>, yaml: &str) -> Result<Self> {
        Ok(Self::new(name, Arc::new(RuleTable::from_yaml(yaml)?)))
    }

    /// Choose how secondary categories are reported
    pub fn with_secondary_mode(mut self, mode: SecondaryMode) -> Self {
        self.secondary_mode = mode;
        self
    }

    pub fn table(&self) -> &Arc<RuleTable> {
        &self.table
    }

    pub fn secondary_mode(&self) -> SecondaryMode {
        self.secondary_mode
    }
}

impl Classifier for RuleClassifier {
    fn classify(&self, text: &str) -> Result<ClassificationResult> {
        if text.trim().is_empty() {
            return Err(Error::precondition("cannot classify empty input"));
        }

        let start = Instant::now();

        let text = NormalizedText::new(text);
        let board = score_text(&self.table, &text);
        let ranking = rank(&board, self.secondary_mode);
        let attributes = derive_attributes(text.normalized());
        let result = assemble(&board, &ranking, attributes);

        let latency_us = start.elapsed().as_micros() as u64;

        metrics::counter!(
            "tasktriage_classifications_total",
            "profile" => self.name.clone(),
            "category" => result.primary_category.clone()
        )
        .increment(1);
        metrics::histogram!(
            "tasktriage_classification_latency_us",
            "profile" => self.name.clone()
        )
        .record(latency_us as f64);

        debug!(
            profile = %self.name,
            category = %result.primary_category,
            confidence = result.confidence,
            complexity = %result.complexity,
            priority = %result.priority,
            latency_us,
            "Classified request"
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> Vec<&str> {
        self.table.ids()
    }

    fn category_info(&self) -> Vec<CategoryInfo> {
        self.table
            .categories()
            .iter()
            .map(|rule| CategoryInfo {
                id: rule.id.clone(),
                label: rule.label.clone(),
                base_weight: rule.base_weight,
            })
            .collect()
    }
}
