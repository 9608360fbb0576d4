use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use ctq_api::config::ApiConfig;
use ctq_api::store::{MemoryStore, OptionStore, StoreError};
use ctq_core::models::quiz::OptionId;
use ctq_core::models::submission::QuizRef;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_environment_is_empty() {
    let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        config,
        ApiConfig {
            port: 3001,
            store_path: None,
            scoring_table: None,
        }
    );
}

#[test]
fn reads_port_and_paths() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("CTQ_STORE_PATH", "/srv/quizzes.json"),
        ("CTQ_SCORING_CONFIG", ""),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.store_path, Some(PathBuf::from("/srv/quizzes.json")));
    assert_eq!(config.scoring_table, None);
}

#[test]
fn rejects_invalid_port() {
    let err = ApiConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn seeded_store_holds_ctq_sf() {
    let store = MemoryStore::seeded().unwrap();
    let quiz = store.quiz(&QuizRef::Slug("ctq-sf".to_string())).unwrap();
    assert_eq!(quiz.questions.len(), 28);
    assert_eq!(store.quiz(&QuizRef::Id(1)).map(|q| q.slug), Some(quiz.slug));
    assert!(store.quiz(&QuizRef::Id(2)).is_none());
}

#[test]
fn option_values_omit_unknown_ids() {
    let store = MemoryStore::seeded().unwrap();
    let values = store.option_values(&[OptionId(11), OptionId(285), OptionId(7)]);
    assert_eq!(values.len(), 2);
    assert_eq!(values[&OptionId(11)], 1);
    assert_eq!(values[&OptionId(285)], 5);
}

#[test]
fn load_reads_store_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"quizzes": [{"id": 9, "title": "Short", "slug": "short", "questions": [
            {"id": 1, "text": "Item", "answer_options": [{"id": 5, "text": "Yes", "value": 1}]}
        ]}]}"#,
    )
    .unwrap();

    let store = MemoryStore::load(file.path()).unwrap();
    assert!(store.quiz(&QuizRef::Slug("short".to_string())).is_some());
    assert_eq!(store.option_values(&[OptionId(5)])[&OptionId(5)], 1);
}

#[test]
fn load_reports_missing_and_malformed_documents() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        MemoryStore::load(&dir.path().join("none.json")),
        Err(StoreError::Io { .. })
    ));
    assert!(matches!(
        MemoryStore::from_json("{\"quizzes\": 3}"),
        Err(StoreError::Parse(_))
    ));
}
