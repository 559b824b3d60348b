use super::*;

use chrono::TimeZone;

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn sample_catalog() -> ArticleCatalog {
    ArticleCatalog::from_entries([(100, ts(1_000)), (101, ts(3_000)), (102, ts(2_000))])
}

#[test]
fn test_sorts_newest_first() {
    let catalog = sample_catalog();
    let sorted = catalog.sort_by_freshness(&[100, 101, 102]);
    assert_eq!(sorted, vec![101, 102, 100]);
}

#[test]
fn test_pure_resort_never_adds_articles() {
    let catalog = sample_catalog();
    let sorted = catalog.sort_by_freshness(&[102, 100]);
    assert_eq!(sorted, vec![102, 100]);
}

#[test]
fn test_drops_articles_missing_from_catalog() {
    let catalog = sample_catalog();
    let sorted = catalog.sort_by_freshness(&[101, 999, 100]);
    assert_eq!(sorted, vec![101, 100]);
}

#[test]
fn test_equal_timestamps_keep_rank_order() {
    let catalog = ArticleCatalog::from_entries([(1, ts(500)), (2, ts(500)), (3, ts(500))]);
    let sorted = catalog.sort_by_freshness(&[3, 1, 2]);
    assert_eq!(sorted, vec![3, 1, 2]);
}

#[test]
fn test_empty_inputs() {
    let catalog = sample_catalog();
    assert!(catalog.sort_by_freshness(&[]).is_empty());
    assert!(ArticleCatalog::new().sort_by_freshness(&[100]).is_empty());
}

#[test]
fn test_lookup() {
    let mut catalog = sample_catalog();
    assert_eq!(catalog.created_at(100), Some(ts(1_000)));
    assert_eq!(catalog.created_at(999), None);
    assert!(catalog.contains(101));
    assert_eq!(catalog.len(), 3);

    catalog.insert(103, ts(4_000));
    assert_eq!(catalog.len(), 4);
    assert!(!catalog.is_empty());
}
