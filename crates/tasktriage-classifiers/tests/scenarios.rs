//! End-to-end classification scenarios against the built-in profiles

use tasktriage_classifiers::profiles::{BUG_CATEGORIES, ERROR_TYPES, TASK_TYPES};
use tasktriage_classifiers::{Classifier, ClassifierRegistry, ClassificationHistory};
use tasktriage_core::{Complexity, Priority};

fn registry() -> ClassifierRegistry {
    ClassifierRegistry::builtin().expect("built-in profiles compile")
}

#[test]
fn test_refactoring_request() {
    let classifier = registry().get(TASK_TYPES).unwrap();
    let result = classifier
        .classify("Refactor this component to use custom hooks and improve performance")
        .unwrap();

    assert_eq!(result.primary_category, "refactoring");
    assert_eq!(result.primary_label, "Refactoring");
    assert_eq!(result.confidence, 1.0);
    assert_eq!(
        result.secondary_categories,
        vec!["performance_optimization", "bug_fix"]
    );
    assert_eq!(result.complexity, Complexity::Medium);
    assert_eq!(result.priority, Priority::Medium);
    assert_eq!(result.estimated_time, "1-2 hours");
    assert_eq!(
        result.reasoning,
        vec![
            "Found 4 relevant keywords",
            "Matched 2 specific patterns",
            "Detected 1 context indicators",
            "Found 2 code structure indicators",
        ]
    );
    assert_eq!(
        result.matched_terms,
        vec!["refactor", "custom hook", "hooks", "improve", "performance"]
    );
    assert!(!result.suggestions.is_empty());
}

#[test]
fn test_bug_report() {
    let classifier = registry().get(TASK_TYPES).unwrap();
    let result = classifier
        .classify("The login form submits successfully but doesn't redirect to dashboard")
        .unwrap();

    assert_eq!(result.primary_category, "bug_fix");
    assert_eq!(result.complexity, Complexity::Simple);
    assert_eq!(result.priority, Priority::Medium);
    assert_eq!(result.estimated_time, "15-30 minutes");
    assert_eq!(result.matched_terms, vec!["doesn't"]);
    assert_eq!(
        result.reasoning,
        vec![
            "Found 1 relevant keywords",
            "Matched 1 specific patterns",
            "Detected 3 context indicators",
        ]
    );
}

#[test]
fn test_comprehensive_solution_request() {
    let classifier = registry().get(TASK_TYPES).unwrap();
    let result = classifier
        .classify(
            "Create a complete user management system with authentication, profiles, and admin dashboard",
        )
        .unwrap();

    assert_eq!(result.primary_category, "comprehensive_solution");
    assert_eq!(result.complexity, Complexity::Complex);
    assert_eq!(result.estimated_time, "2-4 hours");
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn test_empty_input_is_rejected() {
    let classifier = registry().get(TASK_TYPES).unwrap();
    let err = classifier.classify("").unwrap_err();
    assert!(err.is_precondition());
}

#[test]
fn test_no_signal_falls_back_to_first_category() {
    let classifier = registry().get(TASK_TYPES).unwrap();
    let result = classifier.classify("xyzzy plugh").unwrap();

    assert_eq!(result.primary_category, "bug_fix");
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.secondary_categories, vec!["refactoring", "comprehensive_solution"]);
    assert!(result.reasoning.is_empty());
    assert!(result.matched_terms.is_empty());
    assert!(result.scores.iter().all(|s| s.score == 0.0));
}

#[test]
fn test_priority_keywords() {
    let classifier = registry().get(TASK_TYPES).unwrap();

    let result = classifier.classify("Critical: checkout crashes on submit").unwrap();
    assert_eq!(result.priority, Priority::High);
    assert_eq!(result.primary_category, "bug_fix");

    let result = classifier.classify("Nice to have: add a dark mode option").unwrap();
    assert_eq!(result.priority, Priority::Low);
    assert_eq!(result.primary_category, "feature_implementation");
}

#[test]
fn test_bug_categories_profile() {
    let registry = registry();
    let classifier = registry.get(BUG_CATEGORIES).unwrap();

    let result = classifier
        .classify("After login the app redirects back to the login page instead of the dashboard")
        .unwrap();
    assert_eq!(result.primary_category, "authentication");

    let result = classifier
        .classify("fetch to /api/orders fails with 500 from the server")
        .unwrap();
    assert_eq!(result.primary_category, "api_network");

    let result = classifier.classify("The cart total shows 9 instead of 10").unwrap();
    assert_eq!(result.primary_category, "logic_error");
}

#[test]
fn test_error_types_profile() {
    let registry = registry();
    let classifier = registry.get(ERROR_TYPES).unwrap();

    let result = classifier
        .classify("TypeError: Cannot read properties of undefined (reading 'map')")
        .unwrap();
    assert_eq!(result.primary_category, "type_error");

    let result = classifier.classify("ReferenceError: process is not defined").unwrap();
    assert_eq!(result.primary_category, "reference_error");

    let result = classifier.classify("Module not found: Can't resolve './utils'").unwrap();
    assert_eq!(result.primary_category, "build_error");
}

#[test]
fn test_case_sensitive_pattern_only_affects_pattern_hits() {
    let registry = registry();
    let classifier = registry.get(ERROR_TYPES).unwrap();

    let upper = classifier.classify("TypeError in the console").unwrap();
    let lower = classifier.classify("typeerror in the console").unwrap();

    assert_eq!(upper.matched_terms, lower.matched_terms);
    assert_eq!(upper.primary_category, "type_error");
    assert_eq!(lower.primary_category, "type_error");
    assert!(upper.confidence > lower.confidence);
}

#[test]
fn test_history_of_a_session() {
    let classifier = registry().get(TASK_TYPES).unwrap();
    let mut history = ClassificationHistory::default();

    let requests = [
        "Fix the crash when saving a draft",
        "Refactor the settings page into smaller components",
        "Write unit tests for the date helpers",
        "Fix the error shown after logout",
    ];
    for text in requests {
        history.record(classifier.classify(text).unwrap());
    }

    assert_eq!(history.len(), 4);
    assert_eq!(history.latest().unwrap().primary_category, "bug_fix");
    assert_eq!(history.category_counts()[0], ("bug_fix".to_string(), 2));
}
