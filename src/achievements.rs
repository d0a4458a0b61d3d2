//! Achievement catalog and unlock detection
//!
//! A fixed catalog of unlockables, each a threshold predicate over the
//! derived stats. Detection is pure; the command layer persists unlocked
//! keys and turns fresh unlocks into toasts.

use std::collections::HashSet;

use crate::models::content::{ToastEvent, ToastKind};
use crate::models::stats::UserStats;

pub struct Achievement {
  pub key: &'static str,
  pub title: &'static str,
  pub description: &'static str,
  unlock: fn(&UserStats) -> bool,
}

impl Achievement {
  pub fn unlocked_by(&self, stats: &UserStats) -> bool {
    (self.unlock)(stats)
  }

  pub fn toast(&self) -> ToastEvent {
    ToastEvent::new(
      ToastKind::Achievement,
      format!("Achievement: {}", self.title),
      self.description,
    )
  }
}

/// Everything a user can unlock, in display order.
pub const CATALOG: &[Achievement] = &[
  Achievement {
    key: "first_workout",
    title: "First Steps",
    description: "Complete your first workout",
    unlock: |s| s.total_workouts >= 1,
  },
  Achievement {
    key: "ten_workouts",
    title: "Regular",
    description: "Complete 10 workouts",
    unlock: |s| s.total_workouts >= 10,
  },
  Achievement {
    key: "fifty_workouts",
    title: "Veteran",
    description: "Complete 50 workouts",
    unlock: |s| s.total_workouts >= 50,
  },
  Achievement {
    key: "week_streak",
    title: "Seven Straight",
    description: "Train 7 days in a row",
    unlock: |s| s.best_streak >= 7,
  },
  Achievement {
    key: "month_streak",
    title: "Unstoppable",
    description: "Train 30 days in a row",
    unlock: |s| s.best_streak >= 30,
  },
  Achievement {
    key: "calories_10k",
    title: "Furnace",
    description: "Burn 10,000 total calories",
    unlock: |s| s.total_calories >= 10_000,
  },
  Achievement {
    key: "minutes_1000",
    title: "Time Served",
    description: "Log 1,000 total minutes",
    unlock: |s| s.total_minutes >= 1_000,
  },
  Achievement {
    key: "level_five",
    title: "High Five",
    description: "Reach level 5",
    unlock: |s| s.level >= 5,
  },
];

/// Catalog entries newly earned by `stats` that are not yet in
/// `already_unlocked`. Thresholds only ever ratchet up (best_streak,
/// totals), so an unlock can never be re-detected once recorded.
pub fn check_unlocks(
  stats: &UserStats,
  already_unlocked: &HashSet<String>,
) -> Vec<&'static Achievement> {
  CATALOG
    .iter()
    .filter(|a| !already_unlocked.contains(a.key) && a.unlocked_by(stats))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn unlocked(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
  }

  #[test]
  fn test_first_workout_unlocks() {
    let stats = UserStats {
      total_workouts: 1,
      ..UserStats::default()
    };
    let fresh = check_unlocks(&stats, &HashSet::new());
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].key, "first_workout");
  }

  #[test]
  fn test_already_unlocked_is_skipped() {
    let stats = UserStats {
      total_workouts: 12,
      ..UserStats::default()
    };
    let fresh = check_unlocks(&stats, &unlocked(&["first_workout"]));
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].key, "ten_workouts");
  }

  #[test]
  fn test_detection_is_idempotent_once_recorded() {
    let stats = UserStats {
      total_workouts: 12,
      ..UserStats::default()
    };
    let fresh = check_unlocks(&stats, &unlocked(&["first_workout", "ten_workouts"]));
    assert!(fresh.is_empty());
  }

  #[test]
  fn test_streak_achievement_uses_best_streak() {
    // The streak ended, but the best run still counts.
    let stats = UserStats {
      total_workouts: 8,
      current_streak: 0,
      best_streak: 9,
      ..UserStats::default()
    };
    let fresh = check_unlocks(&stats, &unlocked(&["first_workout"]));
    assert!(fresh.iter().any(|a| a.key == "week_streak"));
  }

  #[test]
  fn test_multiple_unlocks_in_one_pass() {
    let stats = UserStats {
      total_workouts: 60,
      total_calories: 15_000,
      total_minutes: 2_000,
      best_streak: 31,
      level: 6,
      experience: 5_500,
      ..UserStats::default()
    };
    let fresh = check_unlocks(&stats, &HashSet::new());
    assert_eq!(fresh.len(), CATALOG.len());
  }

  #[test]
  fn test_catalog_keys_are_unique() {
    let keys: HashSet<_> = CATALOG.iter().map(|a| a.key).collect();
    assert_eq!(keys.len(), CATALOG.len());
  }

  #[test]
  fn test_toast_carries_achievement_kind() {
    let toast = CATALOG[0].toast();
    assert_eq!(toast.kind, crate::models::content::ToastKind::Achievement);
    assert!(toast.title.contains("First Steps"));
  }
}
