use chrono::{Duration, NaiveDate, NaiveDateTime};
use safeall::analysis::ResponseTimeAnalyzer;
use safeall::config::AnalysisConfig;
use safeall::error::AnalysisError;
use safeall::incident::synthetic;
use safeall::incident::{IncidentTable, RawIncident};

fn origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 5, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn row_secs(offset_days: i64, response_secs: i64) -> RawIncident {
    let reported = origin() + Duration::days(offset_days);
    RawIncident::from_instants(reported, reported + Duration::seconds(response_secs))
}

fn row(minutes: i64) -> RawIncident {
    row_secs(0, minutes * 60)
}

#[test]
fn computes_cohort_and_derived_fields() {
    let table: IncidentTable = (1..=20).map(|m| row(m * 5)).collect();
    let summary = ResponseTimeAnalyzer::default().analyze(&table).unwrap();

    // 5..=100 step 5; rank 17.1 → 90 + 0.1 * 5
    assert!((summary.high_risk_threshold_minutes - 90.5).abs() < 1e-9);
    assert_eq!(summary.cohort_size(), 2);
    assert!((summary.high_risk_mean_minutes - 97.5).abs() < 1e-9);
    assert_eq!(summary.estimated_lives_saved, 0);
    assert_eq!(summary.estimated_cost_saving_units, 0.0);
    assert!((summary.mean_response_minutes - 52.5).abs() < 1e-9);
    assert_eq!(summary.counts.analyzed, 20);
}

#[test]
fn identical_values_put_everyone_in_cohort() {
    let table: IncidentTable = (0..100).map(|i| row_secs(i, 50 * 60)).collect();
    let summary = ResponseTimeAnalyzer::default().analyze(&table).unwrap();

    assert_eq!(summary.high_risk_threshold_minutes, 50.0);
    assert_eq!(summary.cohort_size(), 100);
    assert_eq!(summary.high_risk_mean_minutes, 50.0);
    assert_eq!(summary.estimated_lives_saved, 20);
    assert!((summary.estimated_cost_saving_units - 32.0).abs() < 1e-9);
}

#[test]
fn out_of_window_records_are_excluded_not_fatal() {
    let mut rows: Vec<RawIncident> = (1..=5).map(|m| row(m * 10)).collect();
    rows.push(row(-10));
    rows.push(row(-10));
    rows.push(row(900));
    rows.push(row(900));
    rows.push(row(900));
    let summary = ResponseTimeAnalyzer::default()
        .analyze(&IncidentTable::new(rows))
        .unwrap();

    assert_eq!(summary.counts.total, 10);
    assert_eq!(summary.counts.out_of_range, 5);
    assert_eq!(summary.counts.analyzed, 5);
    assert!(summary.high_risk_threshold_minutes <= 50.0);
}

#[test]
fn window_bounds_are_inclusive() {
    let rows = vec![row(0), row(720), row_secs(0, 720 * 60 + 1)];
    let (kept, counts) =
        ResponseTimeAnalyzer::default().normalize_and_filter(&IncidentTable::new(rows));
    assert_eq!(kept.len(), 2);
    assert_eq!(counts.out_of_range, 1);
}

#[test]
fn unparseable_rows_are_dropped() {
    let rows = vec![
        row(30),
        RawIncident::new("2023-05-01", "080000", "20230501", "083000"),
        RawIncident::new("20230501", "", "20230501", "083000"),
        RawIncident::new("20230231", "080000", "20230231", "083000"),
        RawIncident::new("20230501", "80000", "20230501", "83000"),
    ];
    let summary = ResponseTimeAnalyzer::default()
        .analyze(&IncidentTable::new(rows))
        .unwrap();
    assert_eq!(summary.counts.unparseable, 3);
    assert_eq!(summary.counts.analyzed, 2);
    assert_eq!(summary.cohort_size(), 2);
    assert_eq!(summary.high_risk_mean_minutes, 30.0);
}

#[test]
fn empty_table_fails_with_no_analyzable_data() {
    let err = ResponseTimeAnalyzer::default()
        .analyze(&IncidentTable::default())
        .unwrap_err();
    assert_eq!(
        err,
        AnalysisError::NoAnalyzableData {
            total: 0,
            unparseable: 0,
            out_of_range: 0,
            max_minutes: 720.0,
        }
    );
}

#[test]
fn all_invalid_fails_with_no_analyzable_data() {
    let rows = vec![row(-10), row(900), RawIncident::new("x", "y", "z", "w")];
    let err = ResponseTimeAnalyzer::default()
        .analyze(&IncidentTable::new(rows))
        .unwrap_err();
    let AnalysisError::NoAnalyzableData {
        total,
        unparseable,
        out_of_range,
        ..
    } = err;
    assert_eq!((total, unparseable, out_of_range), (3, 1, 2));
}

#[test]
fn coefficients_come_from_config() {
    let config = AnalysisConfig {
        high_risk_quantile: 0.5,
        max_response_minutes: 60.0,
        lives_saved_fraction: 0.5,
        cost_per_life_units: 2.0,
    };
    let table: IncidentTable = (1..=10).map(|m| row(m * 10)).collect();
    let summary = ResponseTimeAnalyzer::new(config).analyze(&table).unwrap();

    // 10..=60 survive; median 35 → 40, 50, 60
    assert_eq!(summary.counts.analyzed, 6);
    assert_eq!(summary.cohort_size(), 3);
    assert_eq!(summary.estimated_lives_saved, 1);
    assert_eq!(summary.estimated_cost_saving_units, 2.0);
}

#[test]
fn mixed_population_tail_sits_above_bulk() {
    let table = synthetic::generate_with_seed(40.0, synthetic::SEED);
    let summary = ResponseTimeAnalyzer::default().analyze(&table).unwrap();

    assert_eq!(summary.counts.analyzed, 100);
    assert!(summary.high_risk_threshold_minutes > 40.0);
    assert!(summary.high_risk_mean_minutes > 40.0);
    assert!(summary.high_risk_mean_minutes >= summary.high_risk_threshold_minutes);
    assert!(summary.high_risk_mean_minutes > summary.mean_response_minutes);
    assert!(summary.cohort_size() >= 10);
    assert_eq!(
        summary.estimated_lives_saved,
        (summary.cohort_size() as f64 * 0.2).floor() as u64
    );
}

#[test]
fn repeated_analysis_is_identical() {
    let table = synthetic::generate_with_seed(42.0, 9);
    let analyzer = ResponseTimeAnalyzer::default();
    assert_eq!(
        analyzer.analyze(&table).unwrap(),
        analyzer.analyze(&table).unwrap()
    );
}
