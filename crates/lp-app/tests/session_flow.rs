use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use lp_app::*;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn fill_scenario<S: Storage>(session: &mut ComparisonSession<S>) {
    let ids: Vec<EntryId> = session.entries().iter().map(|e| e.id).collect();
    session.set_volume(ids[0], Volume::Standard(330)).unwrap();
    session.set_price(ids[0], "5.00").unwrap();
    session.set_volume(ids[1], Volume::Standard(600)).unwrap();
    session.set_price(ids[1], "8.00").unwrap();
    session.set_volume(ids[2], Volume::Custom).unwrap();
    session.set_custom_volume(ids[2], "1000").unwrap();
    session.set_price(ids[2], "12.00").unwrap();
}

#[test]
fn calculate_records_history() {
    let config = ComparatorConfig::default();
    let mut session = ComparisonSession::new(&config, MemoryStorage::new()).unwrap();
    fill_scenario(&mut session);

    let results = session.calculate().unwrap().to_vec();
    assert_eq!(results.len(), 3);
    assert!(results[2].is_lowest_price);
    assert_eq!(results[2].volume, "1000");

    assert_eq!(session.current_results(), results.as_slice());
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].results, results);

    let rows = result_rows(session.current_results(), session.currency_symbol());
    let shown: Vec<&str> = rows.iter().map(|r| r.price_per_liter.as_str()).collect();
    assert_eq!(shown, vec!["R$ 15.15", "R$ 13.33", "R$ 12.00"]);
}

#[test]
fn failed_calculation_leaves_state_alone() {
    let config = ComparatorConfig::default();
    let mut session = ComparisonSession::new(&config, MemoryStorage::new()).unwrap();

    let err = session.calculate().unwrap_err();
    assert!(matches!(err, AppError::Comparison(_)));
    assert!(err.is_user_facing());
    assert!(session.current_results().is_empty());
    assert!(session.history().is_empty());

    fill_scenario(&mut session);
    session.calculate().unwrap();

    let id = session.entries()[0].id;
    for entry in session.entries().to_vec() {
        session.set_price(entry.id, "0").unwrap();
    }
    assert!(session.calculate().is_err());
    assert_eq!(session.current_results().len(), 3);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.entries()[0].id, id);
}

#[test]
fn minimum_row_violation_is_user_facing() {
    let config = ComparatorConfig {
        initial_entries: 1,
        ..Default::default()
    };
    let mut session = ComparisonSession::new(&config, MemoryStorage::new()).unwrap();
    assert!(!session.can_remove());

    let only = session.entries()[0].id;
    let err = session.remove_entry(only).unwrap_err();
    assert!(err.is_user_facing());
    assert_eq!(session.entries().len(), 1);

    let added = session.add_entry().unwrap();
    assert!(session.can_remove());
    session.remove_entry(added).unwrap();
}

#[test]
fn history_survives_restart_and_clear() {
    let dir = unique_temp_dir("lp_app_session");
    let config = ComparatorConfig {
        storage_dir: Some(dir.clone()),
        max_history: 2,
        ..Default::default()
    };

    let mut session = ComparisonSession::open(&config).expect("failed to open session");
    fill_scenario(&mut session);
    for _ in 0..3 {
        session.calculate().unwrap();
    }
    assert_eq!(session.history().len(), 2);
    let written = session.history().to_vec();

    let mut reopened = ComparisonSession::open(&config).unwrap();
    assert_eq!(reopened.history(), written.as_slice());
    assert!(reopened.current_results().is_empty());
    assert!(history_summary(&reopened.history()[0], "R$").contains("best Item 3"));

    reopened.clear_history().unwrap();
    let fresh = ComparisonSession::open(&config).unwrap();
    assert!(fresh.history().is_empty());
    assert!(!dir.join("comparisonHistory.json").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ComparatorConfig {
        min_entries: 0,
        ..Default::default()
    };
    assert!(matches!(
        ComparisonSession::new(&config, MemoryStorage::new()),
        Err(AppError::Config(_))
    ));
}

#[test]
fn history_survives_in_memory_restart() {
    let config = ComparatorConfig::default();
    let mut session = ComparisonSession::new(&config, MemoryStorage::new()).unwrap();
    fill_scenario(&mut session);
    session.calculate().unwrap();
    let written = session.history().to_vec();

    let restarted = ComparisonSession::new(&config, session.into_storage()).unwrap();
    assert_eq!(restarted.history(), written.as_slice());
    assert!(restarted.current_results().is_empty());
}

#[test]
fn unusable_storage_dir_surfaces_as_history_error() {
    let dir = unique_temp_dir("lp_app_storage_is_file");
    fs::write(&dir, "not a directory").unwrap();
    let config = ComparatorConfig {
        storage_dir: Some(dir.join("nested")),
        ..Default::default()
    };

    let err = ComparisonSession::open(&config).unwrap_err();
    assert!(matches!(err, AppError::History(_)), "got {err:?}");
    assert!(!err.is_user_facing());

    let _ = fs::remove_file(&dir);
}
