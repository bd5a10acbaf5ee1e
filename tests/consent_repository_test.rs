//
// Copyright (c) 2026 Tudor Caloian
//
use dashexecs::data::repositories::ConsentRepositoryImpl;
use dashexecs::data::sources::{KeyValueSource, MemorySource};
use dashexecs::domain::entities::{CategoryPreferences, ConsentCategory, ConsentDecision};
use dashexecs::domain::managers::consent::ConsentManager;
use dashexecs::domain::repositories::ConsentRepository;
use std::sync::Arc;

fn repo_over(source: Arc<MemorySource>) -> ConsentRepositoryImpl {
    ConsentRepositoryImpl::new(source as Arc<dyn KeyValueSource>)
}

#[test]
fn test_empty_store_is_undecided() {
    let source = Arc::new(MemorySource::new());
    let repo = repo_over(source);
    assert!(repo.get_decision().unwrap().is_none());
    assert!(repo.get_preferences().unwrap().is_none());
}

#[test]
fn test_put_consent_roundtrip() {
    let source = Arc::new(MemorySource::new());
    let repo = repo_over(source.clone());
    let mut preferences = CategoryPreferences::default();
    preferences.set(ConsentCategory::Preferences, true);
    repo.put_consent(ConsentDecision::Custom, &preferences).unwrap();

    // both slots hold the documented wire formats
    let raw = source.get_value("dashexecs_cookie_consent").unwrap();
    assert_eq!(raw.as_deref(), Some("custom"));
    let raw = source.get_value("dashexecs_cookie_categories").unwrap();
    assert!(raw.unwrap().contains("\"necessary\":true"));

    let actual = repo.get_decision().unwrap();
    assert_eq!(actual, Some(ConsentDecision::Custom));
    let actual = repo.get_preferences().unwrap().unwrap();
    assert_eq!(actual, preferences);
}

// Values written by an older release, or by hand, that are not recognized
// simply mean the visitor is undecided.
#[test]
fn test_unrecognized_decision_value() {
    let source = Arc::new(MemorySource::new());
    source
        .put_value("dashexecs_cookie_consent", "ask me tomorrow")
        .unwrap();
    let repo = repo_over(source);
    assert!(repo.get_decision().unwrap().is_none());
}

#[test]
fn test_malformed_preferences_payload() {
    let source = Arc::new(MemorySource::new());
    source
        .put_value("dashexecs_cookie_categories", "{\"analytics\":")
        .unwrap();
    let repo = repo_over(source);
    assert!(repo.get_preferences().is_err());
}

// A custom decision whose preference payload has been corrupted falls back
// to the defaults without surfacing an error.
#[test]
fn test_manager_defaults_on_corrupt_preferences() {
    let source = Arc::new(MemorySource::new());
    source
        .put_value("dashexecs_cookie_consent", "custom")
        .unwrap();
    source
        .put_value("dashexecs_cookie_categories", "not json")
        .unwrap();
    let repo: Arc<dyn ConsentRepository> = Arc::new(repo_over(source));
    let manager = ConsentManager::new(repo);
    assert_eq!(manager.decision(), ConsentDecision::Custom);
    assert!(!manager.banner_visible());
    assert!(manager.preferences().essential_only());
}

// A tampered payload cannot clear the necessary flag on the way in.
#[test]
fn test_tampered_necessary_flag_forced_true() {
    let source = Arc::new(MemorySource::new());
    source
        .put_value("dashexecs_cookie_consent", "custom")
        .unwrap();
    source
        .put_value(
            "dashexecs_cookie_categories",
            "{\"necessary\":false,\"analytics\":true,\"marketing\":false,\"preferences\":false}",
        )
        .unwrap();
    let repo = repo_over(source);
    let actual = repo.get_preferences().unwrap().unwrap();
    assert!(actual.allows(ConsentCategory::Necessary));
    assert!(actual.allows(ConsentCategory::Analytics));
}
