//! Integration tests for the EDA analysis core.
//!
//! These tests verify end-to-end behavior over CSV fixtures: load, profile,
//! assess quality, evaluate insights, assemble reports.

use eda_profiling::{
    DataProfiler, EdaError, InsightEngine, InsightKind, QualityAssessor, ReportGenerator,
    SessionStore, loader,
};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> DataFrame {
    loader::load_csv(fixtures_path().join(filename)).expect("Failed to load fixture")
}

fn insight_kinds(df: &DataFrame) -> Vec<InsightKind> {
    let profile = DataProfiler::profile_table(df).unwrap();
    InsightEngine::default()
        .evaluate(&profile)
        .iter()
        .map(|i| i.kind)
        .collect()
}

// ============================================================================
// Full Analysis over the Loans Fixture
// ============================================================================

#[test]
fn test_full_analysis_loans_subset() {
    let df = load_fixture("loans_subset.csv");
    assert_eq!(df.shape(), (16, 5));

    let profile = DataProfiler::profile_table(&df).unwrap();
    assert_eq!(profile.row_count, 16);
    assert_eq!(profile.column_count, 5);
    assert_eq!(profile.total_null_count, 4);
    assert_eq!(profile.duplicate_row_count, 1);
    assert_eq!(profile.numeric_column_count(), 2);
    assert_eq!(profile.categorical_column_count(), 3);

    let quality = QualityAssessor::assess(&profile, &df).unwrap();
    assert_eq!(quality.duplicate_row_count, 1);
    // gender 1, married 1, loan_amount 2
    assert_eq!(quality.missing_values.len(), 3);
    assert_eq!(quality.missing_values[0].column, "loan_amount");
    assert_eq!(quality.missing_values[0].null_count, 2);
}

#[test]
fn test_loans_subset_insights() {
    let df = load_fixture("loans_subset.csv");
    let kinds = insight_kinds(&df);

    // 16 rows is a small dataset
    assert!(kinds.contains(&InsightKind::SmallDataset));
    // 4 nulls of 80 cells is exactly 5%, which is not above the moderate cutoff
    assert!(kinds.contains(&InsightKind::CleanData));
    // 1 duplicate of 16 rows is 6.25%
    assert!(kinds.contains(&InsightKind::DuplicateConcern));
    // 2 numeric vs 3 categorical columns
    assert!(kinds.contains(&InsightKind::BalancedMix));
}

#[test]
fn test_no_nulls_fixture_is_clean() {
    let df = load_fixture("no_nulls.csv");

    let profile = DataProfiler::profile_table(&df).unwrap();
    assert_eq!(profile.total_null_count, 0);
    assert_eq!(profile.duplicate_row_count, 0);

    let quality = QualityAssessor::assess(&profile, &df).unwrap();
    assert!(quality.missing_values.is_empty());

    let kinds = insight_kinds(&df);
    assert!(kinds.contains(&InsightKind::CleanData));
    assert!(!kinds.contains(&InsightKind::DuplicateConcern));
}

// ============================================================================
// Edge-Case Scenarios
// ============================================================================

// Scenario A: zero-row table analyzes without raising.
#[test]
fn test_scenario_zero_row_table() {
    let df = load_fixture("header_only.csv");
    assert_eq!(df.height(), 0);

    let profile = DataProfiler::profile_table(&df).unwrap();
    assert_eq!(profile.row_count, 0);
    assert_eq!(profile.overall_missing_percentage(), 0.0);

    let quality = QualityAssessor::assess(&profile, &df).unwrap();
    assert!(quality.missing_values.is_empty());
    assert_eq!(quality.duplicate_row_count, 0);

    let kinds = insight_kinds(&df);
    assert!(kinds.contains(&InsightKind::CleanData));

    // A table with no columns at all reports the balanced mix by convention
    let kinds = insight_kinds(&DataFrame::empty());
    assert!(kinds.contains(&InsightKind::CleanData));
    assert!(kinds.contains(&InsightKind::BalancedMix));
}

// Scenario B: 10-row table with 2 nulls in "age".
#[test]
fn test_scenario_age_column_missing_percentage() {
    let df = df![
        "age" => [Some(1i64), Some(2), None, Some(4), Some(5), Some(6), None, Some(8), Some(9), Some(10)],
    ]
    .unwrap();

    let profile = DataProfiler::profile_table(&df).unwrap();
    let quality = QualityAssessor::assess(&profile, &df).unwrap();

    assert_eq!(quality.missing_values[0].null_percentage, 20.0);
    // Single column, so the overall percentage matches and is not above 20
    let kinds = insight_kinds(&df);
    assert!(kinds.contains(&InsightKind::ModerateMissingData));
}

// Scenario C: rows [("a",1), ("a",1), ("b",2)] have exactly one duplicate.
#[test]
fn test_scenario_single_duplicate() {
    let df = load_fixture("duplicates.csv");

    let profile = DataProfiler::profile_table(&df).unwrap();
    assert_eq!(profile.duplicate_row_count, 1);

    let quality = QualityAssessor::assess(&profile, &df).unwrap();
    assert_eq!(quality.duplicate_row_count, 1);
    assert_eq!(quality.duplicate_rows.height(), 1);
}

// Scenario D: large and small dataset advisories never co-occur.
#[test]
fn test_scenario_dataset_size_advisories() {
    let large = df!["n" => (0..200_000i64).collect::<Vec<i64>>()].unwrap();
    let kinds = insight_kinds(&large);
    assert!(kinds.contains(&InsightKind::LargeDataset));
    assert!(!kinds.contains(&InsightKind::SmallDataset));

    let small = df!["n" => (0..50i64).collect::<Vec<i64>>()].unwrap();
    let kinds = insight_kinds(&small);
    assert!(kinds.contains(&InsightKind::SmallDataset));
    assert!(!kinds.contains(&InsightKind::LargeDataset));
}

// ============================================================================
// Cross-Component Properties
// ============================================================================

#[test]
fn test_property_duplicate_count_bound() {
    for fixture in ["loans_subset.csv", "no_nulls.csv", "duplicates.csv"] {
        let df = load_fixture(fixture);
        let profile = DataProfiler::profile_table(&df).unwrap();

        let distinct_rows = df
            .unique::<&str, &str>(None, UniqueKeepStrategy::First, None)
            .unwrap()
            .height();
        assert!(
            profile.duplicate_row_count <= df.height() - distinct_rows,
            "fixture {}",
            fixture
        );
    }
}

#[test]
fn test_property_null_counts_consistent() {
    let df = load_fixture("loans_subset.csv");
    let profile = DataProfiler::profile_table(&df).unwrap();
    let quality = QualityAssessor::assess(&profile, &df).unwrap();

    let report_total: usize = quality.missing_values.iter().map(|e| e.null_count).sum();
    assert_eq!(report_total, profile.total_null_count);
}

#[test]
fn test_property_missing_entries_sorted() {
    let df = load_fixture("loans_subset.csv");
    let profile = DataProfiler::profile_table(&df).unwrap();
    let quality = QualityAssessor::assess(&profile, &df).unwrap();

    for pair in quality.missing_values.windows(2) {
        assert!(pair[0].null_percentage >= pair[1].null_percentage);
    }
    assert!(quality.missing_values.iter().all(|e| e.null_count > 0));
}

#[test]
fn test_property_analysis_is_idempotent() {
    let df = load_fixture("loans_subset.csv");

    let first = DataProfiler::profile_table(&df).unwrap();
    let second = DataProfiler::profile_table(&df).unwrap();
    assert_eq!(first, second);

    let q1 = QualityAssessor::assess(&first, &df).unwrap();
    let q2 = QualityAssessor::assess(&second, &df).unwrap();
    assert_eq!(
        serde_json::to_string(&q1).unwrap(),
        serde_json::to_string(&q2).unwrap()
    );
    assert_eq!(q1.duplicate_rows, q2.duplicate_rows);
}

#[test]
fn test_property_exactly_one_per_message_group() {
    for fixture in ["loans_subset.csv", "no_nulls.csv", "header_only.csv"] {
        let df = load_fixture(fixture);
        let kinds = insight_kinds(&df);

        let missing_group = kinds
            .iter()
            .filter(|k| {
                matches!(
                    k,
                    InsightKind::HighMissingData
                        | InsightKind::ModerateMissingData
                        | InsightKind::CleanData
                )
            })
            .count();
        let balance_group = kinds
            .iter()
            .filter(|k| {
                matches!(
                    k,
                    InsightKind::NumericalHeavy
                        | InsightKind::CategoricalHeavy
                        | InsightKind::BalancedMix
                )
            })
            .count();

        assert_eq!(missing_group, 1, "fixture {}", fixture);
        assert_eq!(balance_group, 1, "fixture {}", fixture);
    }
}

// ============================================================================
// Loader Boundary
// ============================================================================

#[test]
fn test_loader_handles_quoted_content() {
    let df = load_fixture("quoted_notes.csv");
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 2);
}

#[test]
fn test_loader_missing_file_is_recoverable() {
    let err = loader::load_csv(fixtures_path().join("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, EdaError::SourceNotFound(_)));
    assert!(err.is_recoverable());
}

// ============================================================================
// Session Store End-to-End
// ============================================================================

#[test]
fn test_session_lifecycle_end_to_end() {
    let store = SessionStore::new();

    // Upload, analyze
    store.put("user-1", load_fixture("loans_subset.csv"));
    let report = store.analyze("user-1").unwrap();
    assert_eq!(report.profile.row_count, 16);
    assert!(
        report
            .insights
            .iter()
            .any(|i| i.kind == InsightKind::DuplicateConcern)
    );

    // New upload replaces the table, derived values follow
    store.put("user-1", load_fixture("no_nulls.csv"));
    let report = store.analyze("user-1").unwrap();
    assert_eq!(report.profile.row_count, 4);
    assert!(report.quality.missing_values.is_empty());

    // Session end
    store.evict("user-1");
    assert!(matches!(
        store.analyze("user-1"),
        Err(EdaError::NoDataLoaded(_))
    ));
}

#[test]
fn test_report_round_trip_to_json_file() {
    let df = load_fixture("loans_subset.csv");
    let engine = InsightEngine::default();
    let report = ReportGenerator::build_report(&df, Some("loans_subset.csv"), &engine).unwrap();

    let dir = std::env::temp_dir().join("eda_profiling_integration_report");
    let generator = ReportGenerator::new(dir.clone(), None);
    let path = generator.write_report_to_file(&report, "loans_subset").unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["profile"]["row_count"], 16);
    assert_eq!(value["quality"]["duplicate_row_count"], 1);
    assert!(value["insights"].as_array().unwrap().len() >= 3);

    std::fs::remove_dir_all(&dir).ok();
}
