//! Rebalancer integration tests against on-disk canonical sources.

use std::fs;
use std::path::{Path, PathBuf};

use ccg_balance::cards::{BaseStats, TrainingBonus};
use ccg_balance::core::{BalanceError, PatchFailure};
use ccg_balance::rebalance::{EditList, EditOutcome, RebalanceEdit, Rebalancer};

const SOURCE: &str = "\
export const cards = {
  Fire: {
    rarity: \"Legendary\",
    baseStats: { HP: 0, Attack: 70, Defense: 0, Instinct: 10, Speed: 15 },
    trainingBonus: { typeMatch: 11, otherStats: 1, maxFriendshipTypeMatch: 29 },
    appearanceRate: 0.30,
  },
  Water: {
    rarity: \"Rare\",
    baseStats: { HP: 20, Attack: 40, Defense: 10, Instinct: 5, Speed: 5 },
    trainingBonus: { typeMatch: 8, otherStats: 1, maxFriendshipTypeMatch: 20 },
    appearanceRate: 0.40,
  },
  Leaf: {
    rarity: \"Common\",
    baseStats: { HP: 10, Attack: 10, Defense: 10, Instinct: 10, Speed: 10 },
    trainingBonus: { typeMatch: 5, otherStats: 0, maxFriendshipTypeMatch: 10 },
    appearanceRate: 0.55,
  },
};
";

fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("cards.js");
    fs::write(&path, SOURCE).unwrap();
    path
}

fn fire_attack_70_to_65() -> RebalanceEdit {
    RebalanceEdit::base_stats(
        "Fire",
        BaseStats::new(0, 70, 0, 10, 15),
        BaseStats::new(0, 65, 0, 10, 15),
    )
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_rerun_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());
    let edits = vec![fire_attack_70_to_65()];

    let first = Rebalancer::new().run(&path, &edits).unwrap();
    assert_eq!(first.applied(), 1);
    assert!(first.written);
    let after_first = fs::read_to_string(&path).unwrap();
    assert!(after_first.contains("Attack: 65"));

    let second = Rebalancer::new().run(&path, &edits).unwrap();
    assert_eq!(second.applied(), 0);
    assert_eq!(second.skipped(), 1);
    assert!(!second.written);
    assert!(matches!(
        second.reports[0].outcome,
        EditOutcome::Skipped(PatchFailure::PatternNotFound { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

// =============================================================================
// Partial Failure
// =============================================================================

#[test]
fn test_partial_failure_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    let edits = vec![
        fire_attack_70_to_65(),
        // Stale: Water's Attack is 40, not 45
        RebalanceEdit::base_stats(
            "Water",
            BaseStats::new(20, 45, 10, 5, 5),
            BaseStats::new(20, 35, 10, 5, 5),
        ),
        RebalanceEdit::training_bonus(
            "Leaf",
            TrainingBonus::new(5.0, 0.0, 10.0),
            TrainingBonus::new(7.0, 0.0, 12.0),
        ),
    ];

    let summary = Rebalancer::new().run(&path, &edits).unwrap();

    assert_eq!(summary.applied(), 2);
    assert_eq!(summary.skipped(), 1);
    assert!(summary.reports[0].is_applied());
    assert!(!summary.reports[1].is_applied());
    assert!(summary.reports[2].is_applied());
    let failures: Vec<_> = summary.failures().map(|f| f.card()).collect();
    assert_eq!(failures, ["Water"]);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("baseStats: { HP: 0, Attack: 65, Defense: 0, Instinct: 10, Speed: 15 }"));
    assert!(text.contains("baseStats: { HP: 20, Attack: 40, Defense: 10, Instinct: 5, Speed: 5 }"));
    assert!(text.contains("trainingBonus: { typeMatch: 7, otherStats: 0, maxFriendshipTypeMatch: 12 }"));
}

#[test]
fn test_untouched_bytes_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    Rebalancer::new().run(&path, &[fire_attack_70_to_65()]).unwrap();

    let expected = SOURCE.replacen("Attack: 70", "Attack: 65", 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_unanchored_card_searches_whole_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    let edit = RebalanceEdit::base_stats(
        "Earth",
        BaseStats::new(0, 70, 0, 10, 15),
        BaseStats::new(0, 1, 0, 10, 15),
    );
    let summary = Rebalancer::new().run(&path, &[edit]).unwrap();

    // No anchor for Earth: whole-text search finds Fire's block once.
    assert_eq!(summary.applied(), 1);
    assert!(fs::read_to_string(&path).unwrap().contains("Attack: 1,"));
}

#[test]
fn test_drifted_card_not_patched_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.js");
    let source = "\
export const cards = {
  Fire: { rarity: \"Legendary\", baseStats: { HP: 0, Attack: 72, Defense: 0, Instinct: 10, Speed: 15 } },
  Water: {
    rarity: \"Rare\",
    baseStats: { HP: 0, Attack: 70, Defense: 0, Instinct: 10, Speed: 15 },
  },
};
";
    fs::write(&path, source).unwrap();

    let summary = Rebalancer::new().run(&path, &[fire_attack_70_to_65()]).unwrap();

    assert_eq!(summary.applied(), 0);
    assert!(!summary.written);
    assert!(matches!(
        summary.reports[0].outcome,
        EditOutcome::Skipped(PatchFailure::PatternNotFound { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

// =============================================================================
// Dry Run and Write Failure
// =============================================================================

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    let summary = Rebalancer::new()
        .dry_run(true)
        .run(&path, &[fire_attack_70_to_65()])
        .unwrap();

    assert_eq!(summary.applied(), 1);
    assert!(!summary.written);
    assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
}

#[test]
fn test_missing_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.js");

    let err = Rebalancer::new()
        .run(&path, &[fire_attack_70_to_65()])
        .unwrap_err();
    assert!(matches!(err, BalanceError::Read { .. }));
}

#[test]
fn test_write_failure_reports_pending_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());

    // A directory squatting on the temp path makes the write fail.
    fs::create_dir(dir.path().join("cards.js.tmp")).unwrap();

    let err = Rebalancer::new()
        .run(&path, &[fire_attack_70_to_65()])
        .unwrap_err();
    match err {
        BalanceError::WriteFailure { pending_edits, .. } => assert_eq!(pending_edits, 1),
        other => panic!("expected write failure, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
}

#[test]
fn test_existing_temp_file_not_clobbered() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());
    let temp = dir.path().join("cards.js.tmp");
    fs::write(&temp, "keep").unwrap();

    let err = Rebalancer::new()
        .run(&path, &[fire_attack_70_to_65()])
        .unwrap_err();

    assert!(matches!(err, BalanceError::WriteFailure { pending_edits: 1, .. }));
    assert_eq!(fs::read_to_string(&temp).unwrap(), "keep");
    assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
}

// =============================================================================
// Edit Lists
// =============================================================================

#[test]
fn test_edit_list_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path());
    let edits_path = dir.path().join("edits.toml");
    fs::write(
        &edits_path,
        r#"
[[edit]]
card = "Water"
field = "baseStats"
from = { HP = 20, Attack = 40, Defense = 10, Instinct = 5, Speed = 5 }
to = { HP = 20, Attack = 44, Defense = 10, Instinct = 5, Speed = 5 }
"#,
    )
    .unwrap();

    let list = EditList::load(&edits_path).unwrap();
    let summary = Rebalancer::new().run(&path, &list.edits).unwrap();

    assert_eq!(summary.applied(), 1);
    assert!(fs::read_to_string(&path).unwrap().contains("Attack: 44"));
}
