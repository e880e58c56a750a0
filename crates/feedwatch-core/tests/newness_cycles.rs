mod common;

use common::{activity, ids, open_cache, record_a, record_b, record_c};
use feedwatch_core::{fingerprint, SeenStore};
use tempfile::TempDir;

#[test]
fn test_three_cycle_scenario() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    std::fs::write(&path, "[]").unwrap();
    let mut cache = open_cache(&path);

    // Cycle 1: empty store on first run, batch absorbed silently
    let fresh = cache.filter(vec![record_a(), record_b()]).unwrap();
    assert!(fresh.is_empty());
    let stored = SeenStore::open(&path).load().unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.contains(&fingerprint(&record_a())));
    assert!(stored.contains(&fingerprint(&record_b())));

    // Cycle 2: only C is new
    let fresh = cache.filter(vec![record_a(), record_b(), record_c()]).unwrap();
    assert_eq!(ids(&fresh), vec!["103"]);
    assert_eq!(SeenStore::open(&path).load().unwrap().len(), 3);

    // Cycle 3: all seen, duplicate C suppressed too
    let fresh = cache.filter(vec![record_b(), record_c(), record_c()]).unwrap();
    assert!(fresh.is_empty());
    assert_eq!(SeenStore::open(&path).load().unwrap().len(), 3);
}

#[test]
fn test_bootstrap_then_single_new_record() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    let mut cache = open_cache(&path);

    let first: Vec<_> = (0..10)
        .map(|i| activity(&i.to_string(), "ann", &format!("book-{i}"), "rated"))
        .collect();
    assert!(cache.filter(first.clone()).unwrap().is_empty());

    let mut second = first;
    second.push(activity("extra", "bob", "book-extra", "rated"));
    let fresh = cache.filter(second).unwrap();
    assert_eq!(ids(&fresh), vec!["extra"]);
}

#[test]
fn test_no_duplicate_reporting_across_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");

    {
        let mut cache = open_cache(&path);
        cache.filter(vec![record_a()]).unwrap();
        let fresh = cache.filter(vec![record_a(), record_b()]).unwrap();
        assert_eq!(ids(&fresh), vec!["102"]);
    }

    // Restart: same underlying events refetched under new ids
    let mut restarted = open_cache(&path);
    let mut a = record_a();
    a.id = "9001".to_string();
    let mut b = record_b();
    b.id = "9002".to_string();
    b.timestamp = Some(chrono::Utc::now());

    let fresh = restarted.filter(vec![a, b, record_c()]).unwrap();
    assert_eq!(ids(&fresh), vec!["103"]);
}

#[test]
fn test_restart_with_populated_store_skips_bootstrap() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    open_cache(&path).filter(vec![record_a()]).unwrap();

    let mut restarted = open_cache(&path);
    assert!(restarted.is_first_run());
    let fresh = restarted.filter(vec![record_a(), record_b()]).unwrap();
    assert_eq!(ids(&fresh), vec!["102"]);
}

#[test]
fn test_interrupted_cycle_reports_again_after_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    open_cache(&path).filter(vec![record_a()]).unwrap();

    // Filtered but killed before the store was written
    let mut doomed = open_cache(&path);
    let staged = doomed.stage(vec![record_a(), record_b()]).unwrap();
    assert_eq!(ids(&staged), vec!["102"]);
    drop(doomed);

    // At-least-once: B is reported again by the next process
    let mut restarted = open_cache(&path);
    let fresh = restarted.filter(vec![record_a(), record_b()]).unwrap();
    assert_eq!(ids(&fresh), vec!["102"]);
}

#[test]
fn test_corrupt_store_on_first_run_bootstraps() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    std::fs::write(&path, "[{\"id\": ").unwrap();

    let mut cache = open_cache(&path);
    let fresh = cache.filter(vec![record_a(), record_b()]).unwrap();
    assert!(fresh.is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_corrupt_store_without_bootstrap_reports_everything_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    std::fs::write(&path, "not json at all").unwrap();

    let mut cache = open_cache(&path).with_bootstrap(false);
    let fresh = cache.filter(vec![record_a(), record_b()]).unwrap();
    assert_eq!(ids(&fresh), vec!["101", "102"]);

    let fresh = cache.filter(vec![record_a(), record_b()]).unwrap();
    assert!(fresh.is_empty());
}

#[test]
fn test_store_io_failure_propagates() {
    let temp = TempDir::new().unwrap();
    // A directory where the store file should be cannot be read as a file
    let path = temp.path().join("seen.json");
    std::fs::create_dir(&path).unwrap();

    let mut cache = open_cache(&path);
    let result = cache.filter(vec![record_a()]);
    assert!(matches!(result, Err(feedwatch_core::StoreError::Io { .. })));
    assert!(cache.is_first_run());
}

#[test]
fn test_non_utf8_store_treated_as_corrupt() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    std::fs::write(&path, [0xff, 0xfe, b'[', 0x80]).unwrap();

    assert!(SeenStore::open(&path).load().unwrap().is_empty());

    let mut cache = open_cache(&path);
    assert!(cache.filter(Vec::new()).unwrap().is_empty());
    // Rewritten as a valid (empty) array on the same cycle
    assert!(SeenStore::open(&path).load().unwrap().is_empty());
    assert!(std::str::from_utf8(&std::fs::read(&path).unwrap()).is_ok());
}

#[test]
fn test_retry_after_failed_save_reports_new_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("seen.json");
    let mut cache = open_cache(&path);
    assert!(cache.filter(vec![record_a()]).unwrap().is_empty());

    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("occupied"), "x").unwrap();
    assert!(cache.filter(vec![record_a(), record_b()]).is_err());

    std::fs::remove_dir_all(&path).unwrap();
    let fresh = cache.filter(vec![record_a(), record_b()]).unwrap();
    assert_eq!(ids(&fresh), vec!["102"]);
}
