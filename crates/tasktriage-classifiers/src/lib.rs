//! tasktriage Classifiers
//!
//! Deterministic, explainable classifiers that route free-text developer
//! requests to a category with a confidence score.
//!
//! A classification runs in one synchronous call:
//! - Scorer: keyword, pattern, context and auxiliary hits per category
//! - Ranker: stable sort by score, primary plus up to two secondaries
//! - Attribute deriver: complexity, priority and time estimate
//! - Result assembler: one immutable [`ClassificationResult`]
//!
//! Rule tables are plain YAML, validated once when compiled, and shared
//! read-only afterwards.

pub mod assembler;
pub mod attributes;
pub mod classifier;
pub mod config;
pub mod history;
pub mod profiles;
pub mod ranker;
pub mod registry;
pub mod rule_based;
pub mod rules;
pub mod scorer;

pub use attributes::Attributes;
pub use classifier::{CategoryInfo, CategoryScore, ClassificationResult, Classifier};
pub use config::{AuxiliarySpec, CategorySpec, RuleTableSpec, ScoreWeights};
pub use history::{ClassificationHistory, SharedHistory, DEFAULT_HISTORY_CAPACITY};
pub use ranker::SecondaryMode;
pub use registry::ClassifierRegistry;
pub use rule_based::RuleClassifier;
pub use rules::{CategoryRule, RuleTable};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier};
    pub use crate::config::RuleTableSpec;
    pub use crate::history::{ClassificationHistory, SharedHistory};
    pub use crate::ranker::SecondaryMode;
    pub use crate::registry::ClassifierRegistry;
    pub use crate::rule_based::RuleClassifier;
    pub use crate::rules::RuleTable;
}
