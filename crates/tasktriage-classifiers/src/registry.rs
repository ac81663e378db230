//! Classifier registry initialization and management

use crate::{
    profiles::{builtin_profiles, DEFAULT_PROFILE},
    Classifier, RuleClassifier, RuleTableSpec, SecondaryMode,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tasktriage_core::{Error, Result};
use tracing::info;

/// Registry of named classifiers
///
/// Every classifier is built and validated when it is registered, so lookups
/// never fail on configuration problems.
pub struct ClassifierRegistry {
    /// Secondary mode applied to rule classifiers built by this registry
    secondary_mode: SecondaryMode,

    /// Instantiated classifiers by name
    classifiers: BTreeMap<String, Arc<dyn Classifier>>,
}

impl ClassifierRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            secondary_mode: SecondaryMode::default(),
            classifiers: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in profile
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.load_builtin_profiles()?;
        Ok(registry)
    }

    /// Set the secondary mode for classifiers registered afterwards
    pub fn with_secondary_mode(mut self, mode: SecondaryMode) -> Self {
        self.secondary_mode = mode;
        self
    }

    /// Compile and register the built-in profiles
    pub fn load_builtin_profiles(&mut self) -> Result<()> {
        info!("Loading built-in profiles");

        for (name, yaml) in builtin_profiles() {
            let spec = RuleTableSpec::from_yaml(yaml)
                .map_err(|e| Error::config(format!("built-in profile '{}': {}", name, e)))?;
            self.register_spec(name, &spec)?;
        }

        info!("Loaded {} classifiers", self.classifiers.len());

        Ok(())
    }

    /// Register an already-built classifier, replacing any with the same name
    pub fn register(&mut self, name: impl Into<String>, classifier: Arc<dyn Classifier>) {
        let name = name.into();
        if self.classifiers.insert(name.clone(), classifier).is_some() {
            info!("Replaced classifier: {}", name);
        }
    }

    /// Compile a rule table spec and register it
    pub fn register_spec(&mut self, name: &str, spec: &RuleTableSpec) -> Result<()> {
        let classifier = RuleClassifier::from_spec(name, spec)?.with_secondary_mode(self.secondary_mode);
        self.register(name, Arc::new(classifier));
        Ok(())
    }

    /// Load a rule table file and register it
    pub fn register_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Loading profile '{}' from {}", name, path.display());

        let spec = RuleTableSpec::from_file(path).map_err(|e| {
            Error::config(format!("Failed to load rule table {}: {}", path.display(), e))
        })?;
        self.register_spec(name, &spec)
    }

    /// Look up a classifier by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Classifier>> {
        self.classifiers
            .get(name)
            .cloned()
            .ok_or_else(|| Error::config(format!("Profile '{}' not found", name)))
    }

    /// The default profile, if registered
    pub fn default_classifier(&self) -> Result<Arc<dyn Classifier>> {
        self.get(DEFAULT_PROFILE)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.classifiers.keys().map(String::as_str).collect()
    }

    /// Get the number of registered classifiers
    pub fn count(&self) -> usize {
        self.classifiers.len()
    }
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}
