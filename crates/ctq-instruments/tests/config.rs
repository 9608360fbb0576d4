use std::collections::HashSet;
use std::io::Write;

use ctq_core::models::answer::QuestionId;
use ctq_instruments::config::{CONFIG_VERSION, ConfigError, ScoringConfig};
use ctq_instruments::scoring::{ClinicalScale, Scale, SeverityCutoffs};

fn standard() -> ScoringConfig {
    ScoringConfig::standard().clone()
}

#[test]
fn shipped_table_is_valid() {
    let config = ScoringConfig::standard();
    config.validate().unwrap();
    assert_eq!(config.version, CONFIG_VERSION);
    assert_eq!(config.item_count, 28);
}

#[test]
fn shipped_table_covers_every_item_exactly_once() {
    let ids = ScoringConfig::standard().question_ids();
    let expected: Vec<QuestionId> = (1..=28).map(QuestionId).collect();
    assert_eq!(ids, expected);
}

#[test]
fn clinical_scales_are_disjoint() {
    let config = ScoringConfig::standard();
    let mut seen = HashSet::new();
    for (scale, items) in config.membership.iter() {
        assert_eq!(items.len(), 5, "{scale}");
        for item in items {
            assert!(seen.insert(*item), "{item} appears in more than one scale");
        }
    }
    assert_eq!(config.minimization.len(), 3);
    assert!(config.minimization.iter().all(|q| !seen.contains(q)));
}

#[test]
fn owner_lookup() {
    let config = ScoringConfig::standard();
    assert_eq!(
        config.owner(QuestionId(3)),
        Some(Scale::Clinical(ClinicalScale::EmotionalAbuse))
    );
    assert_eq!(config.owner(QuestionId(16)), Some(Scale::MinimizationDenial));
    assert_eq!(config.owner(QuestionId(29)), None);
}

#[test]
fn overlapping_scales_are_rejected() {
    let mut config = standard();
    config.membership.physical_abuse[0] = QuestionId(3);
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Overlap {
            question: QuestionId(3),
            first: Scale::Clinical(ClinicalScale::EmotionalAbuse),
            second: Scale::Clinical(ClinicalScale::PhysicalAbuse),
        }
    ));
}

#[test]
fn minimization_item_claimed_by_clinical_scale_is_rejected() {
    let mut config = standard();
    config.minimization[0] = QuestionId(1);
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::Overlap {
            second: Scale::MinimizationDenial,
            ..
        }
    ));
}

#[test]
fn duplicate_item_within_a_scale_is_rejected() {
    let mut config = standard();
    config.membership.sexual_abuse[1] = QuestionId(20);
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::DuplicateItem {
            question: QuestionId(20),
            ..
        }
    ));
}

#[test]
fn item_outside_instrument_is_rejected() {
    let mut config = standard();
    config.membership.emotional_abuse[0] = QuestionId(29);
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::OutOfRange {
            question: QuestionId(29),
            item_count: 28,
            ..
        }
    ));
}

#[test]
fn empty_scale_is_rejected() {
    let mut config = standard();
    config.minimization.clear();
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::EmptyScale(Scale::MinimizationDenial)
    ));
}

#[test]
fn reverse_item_outside_clinical_scales_is_rejected() {
    let mut config = standard();
    config.reverse_coded.insert(QuestionId(10));
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::OrphanReverseItem(QuestionId(10))
    ));
}

#[test]
fn non_ascending_cutoffs_are_rejected() {
    let mut config = standard();
    config.severity.physical_neglect = SeverityCutoffs {
        low: 8,
        moderate: 8,
        severe: 13,
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::CutoffOrder {
            scale: ClinicalScale::PhysicalNeglect,
            ..
        }
    ));
}

#[test]
fn zero_positive_cutoff_is_rejected() {
    let mut config = standard();
    config.positive.sexual_abuse = 0;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::ZeroPositiveCutoff(ClinicalScale::SexualAbuse)
    ));
}

#[test]
fn unknown_version_is_rejected() {
    let mut config = standard();
    config.version = CONFIG_VERSION + 1;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::UnsupportedVersion { .. }
    ));
}

#[test]
fn json_with_unknown_fields_is_rejected() {
    let mut value = serde_json::to_value(standard()).unwrap();
    value["bonus"] = serde_json::json!(1);
    let err = ScoringConfig::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_and_validates_a_table_file() {
    let mut table = standard();
    table.positive.emotional_abuse = 14;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&table).unwrap().as_bytes())
        .unwrap();

    let loaded = ScoringConfig::load(file.path()).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScoringConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
