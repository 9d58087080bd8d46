//! Tests for ranking change detection.

use blue1_analysis::RankWatcher;
use blue1_core::EventRanking;

fn table(order: &[u32]) -> Vec<EventRanking> {
    order
        .iter()
        .enumerate()
        .map(|(i, team)| EventRanking::new(i as u32 + 1, *team))
        .collect()
}

#[test]
fn test_first_observation_reports() {
    let mut watcher = RankWatcher::new(Some(7042));

    let change = watcher.observe(&table(&[254, 7042, 1678])).unwrap();

    assert_eq!(*change.previous_rank(), None);
    assert_eq!(*change.current_rank(), Some(2));
    assert_eq!(change.standings().len(), 3);
}

#[test]
fn test_unchanged_table_is_quiet() {
    let mut watcher = RankWatcher::new(None);
    assert!(watcher.observe(&table(&[254, 7042])).is_some());
    assert!(watcher.observe(&table(&[254, 7042])).is_none());
}

#[test]
fn test_any_change_reports_without_team() {
    let mut watcher = RankWatcher::new(None);
    watcher.observe(&table(&[254, 7042, 1678]));

    let change = watcher.observe(&table(&[254, 1678, 7042])).unwrap();

    assert_eq!(*change.team(), None);
    assert_eq!(*change.current_rank(), None);
    assert_eq!(change.standings().get(&1678), Some(&2));
}

#[test]
fn test_other_movement_is_ignored_for_watched_team() {
    let mut watcher = RankWatcher::new(Some(254));
    watcher.observe(&table(&[254, 7042, 1678]));

    assert!(watcher.observe(&table(&[254, 1678, 7042])).is_none());
    // the quiet poll did not advance the stored table
    assert_eq!(watcher.previous().unwrap().get(&7042), Some(&2));

    let change = watcher.observe(&table(&[1678, 254, 7042])).unwrap();
    assert_eq!(*change.previous_rank(), Some(1));
    assert_eq!(*change.current_rank(), Some(2));
}

#[test]
fn test_watched_team_appearing_reports() {
    let mut watcher = RankWatcher::new(Some(7042));
    watcher.observe(&[]);

    let change = watcher.observe(&table(&[7042])).unwrap();

    assert_eq!(*change.previous_rank(), None);
    assert_eq!(*change.current_rank(), Some(1));
}
