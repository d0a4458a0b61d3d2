//! Progress visualization driver
//!
//! Maps already-computed stats to normalized fill ratios and animation
//! target values. No aggregation happens here, and nothing animates here:
//! the driver hands the destination value plus a duration/delay policy to
//! whatever rendering layer is in front of it.

use serde::{Deserialize, Serialize};

use crate::models::stats::{DayBucket, UserSettings, UserStats, XP_PER_LEVEL};

/// Zero-valued bars keep this much height so the chart row reads as a row,
/// rendered dimmed.
pub const MIN_BAR_RATIO: f64 = 0.04;

pub const RING_ANIMATION_MS: u64 = 900;
pub const RING_STAGGER_MS: u64 = 120;
pub const BAR_ANIMATION_MS: u64 = 600;
pub const BAR_STAGGER_MS: u64 = 60;

/// ---------------------------------------------------------------------------
/// Rings
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingMetric {
  WeeklyWorkouts,
  WeeklyCalories,
  WeeklyMinutes,
  LevelProgress,
}

/// The three rings shown on the progress screen, in display order.
pub const RING_ORDER: [RingMetric; 3] = [
  RingMetric::WeeklyWorkouts,
  RingMetric::WeeklyCalories,
  RingMetric::WeeklyMinutes,
];

/// Sums over one 7-bucket window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekTotals {
  pub workouts: i64,
  pub calories: i64,
  pub minutes: i64,
}

impl WeekTotals {
  pub fn from_buckets(buckets: &[DayBucket]) -> Self {
    let mut totals = WeekTotals::default();
    for b in buckets {
      totals.workouts += b.workouts;
      totals.calories += b.calories;
      totals.minutes += b.minutes;
    }
    totals
  }
}

/// Fill ratio for one ring, clamped to [0, 1]. Goal denominators are
/// floored at 1 so an unset goal can never divide by zero.
pub fn ring_progress(
  metric: RingMetric,
  stats: &UserStats,
  week: &WeekTotals,
  goals: &UserSettings,
) -> f64 {
  let ratio = match metric {
    RingMetric::WeeklyWorkouts => week.workouts as f64 / goals.weekly_workout_goal.max(1) as f64,
    RingMetric::WeeklyCalories => week.calories as f64 / goals.weekly_calorie_goal.max(1) as f64,
    RingMetric::WeeklyMinutes => week.minutes as f64 / goals.weekly_minute_goal.max(1) as f64,
    RingMetric::LevelProgress => stats.xp_into_level() as f64 / XP_PER_LEVEL as f64,
  };
  ratio.clamp(0.0, 1.0)
}

/// Animation destination for one ring: the value to interpolate toward and
/// when/how long to get there. The platform's animation engine does the
/// actual easing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingTarget {
  pub metric: RingMetric,
  pub value: f64,
  pub duration_ms: u64,
  pub delay_ms: u64,
}

/// Targets for the standard ring list, staggered by index.
pub fn ring_targets(stats: &UserStats, week: &WeekTotals, goals: &UserSettings) -> Vec<RingTarget> {
  RING_ORDER
    .iter()
    .enumerate()
    .map(|(index, &metric)| RingTarget {
      metric,
      value: ring_progress(metric, stats, week, goals),
      duration_ms: RING_ANIMATION_MS,
      delay_ms: index as u64 * RING_STAGGER_MS,
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Bars
/// ---------------------------------------------------------------------------

/// One bar of the weekly chart: normalized height plus whether it renders
/// dimmed (a day with zero workouts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
  pub height: f64,
  pub dimmed: bool,
  pub duration_ms: u64,
  pub delay_ms: u64,
}

/// Tallest bucket in the window, floored at 1 so an empty week still has a
/// valid denominator.
pub fn window_max_workouts(buckets: &[DayBucket]) -> i64 {
  buckets.iter().map(|b| b.workouts).max().unwrap_or(0).max(1)
}

pub fn bar_spec(bucket: &DayBucket, max_workouts: i64, index: usize) -> BarSpec {
  let max = max_workouts.max(1) as f64;
  let (height, dimmed) = if bucket.workouts == 0 {
    (MIN_BAR_RATIO, true)
  } else {
    ((bucket.workouts as f64 / max).clamp(MIN_BAR_RATIO, 1.0), false)
  };
  BarSpec {
    height,
    dimmed,
    duration_ms: BAR_ANIMATION_MS,
    delay_ms: index as u64 * BAR_STAGGER_MS,
  }
}

/// Bar specs for a full window, staggered left to right.
pub fn bar_specs(buckets: &[DayBucket]) -> Vec<BarSpec> {
  let max = window_max_workouts(buckets);
  buckets
    .iter()
    .enumerate()
    .map(|(index, bucket)| bar_spec(bucket, max, index))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::models::stats::DayBucket;
  use chrono::NaiveDate;

  fn bucket(offset: u64, workouts: i64) -> DayBucket {
    let date = NaiveDate::from_ymd_opt(2025, 6, 9).expect("valid date")
      + chrono::Duration::days(offset as i64);
    DayBucket {
      workouts,
      calories: workouts * 200,
      minutes: workouts * 30,
      ..DayBucket::empty(date)
    }
  }

  fn window(counts: [i64; 7]) -> Vec<DayBucket> {
    counts
      .iter()
      .enumerate()
      .map(|(i, &n)| bucket(i as u64, n))
      .collect()
  }

  #[test]
  fn test_ring_progress_clamped_to_unit_interval() {
    let goals = UserSettings::default();
    let stats = UserStats::default();
    let week = WeekTotals {
      workouts: 12,
      calories: 9000,
      minutes: 800,
    };

    for metric in RING_ORDER {
      let ratio = ring_progress(metric, &stats, &week, &goals);
      assert!((0.0..=1.0).contains(&ratio), "{:?} out of range", metric);
      assert_approx_eq!(ratio, 1.0, 1e-9);
    }
  }

  #[test]
  fn test_ring_progress_zero_goal_never_divides_by_zero() {
    let goals = UserSettings {
      weekly_workout_goal: 0,
      weekly_calorie_goal: 0,
      weekly_minute_goal: 0,
    };
    let week = WeekTotals::default();
    let ratio = ring_progress(RingMetric::WeeklyWorkouts, &UserStats::default(), &week, &goals);
    assert_approx_eq!(ratio, 0.0, 1e-9);
  }

  #[test]
  fn test_level_ring_tracks_xp_within_level() {
    let stats = UserStats {
      level: 3,
      experience: 2450,
      ..UserStats::default()
    };
    let ratio = ring_progress(
      RingMetric::LevelProgress,
      &stats,
      &WeekTotals::default(),
      &UserSettings::default(),
    );
    assert_approx_eq!(ratio, 0.45, 1e-9);
  }

  #[test]
  fn test_ring_targets_stagger_by_index() {
    let targets = ring_targets(
      &UserStats::default(),
      &WeekTotals::default(),
      &UserSettings::default(),
    );
    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0].delay_ms, 0);
    assert_eq!(targets[1].delay_ms, RING_STAGGER_MS);
    assert_eq!(targets[2].delay_ms, 2 * RING_STAGGER_MS);
    assert!(targets.iter().all(|t| t.duration_ms == RING_ANIMATION_MS));
  }

  #[test]
  fn test_zero_bar_keeps_floor_and_dims() {
    let specs = bar_specs(&window([0, 2, 4, 0, 1, 0, 3]));
    assert_eq!(specs.len(), 7);

    assert_approx_eq!(specs[0].height, MIN_BAR_RATIO, 1e-9);
    assert!(specs[0].dimmed);

    assert_approx_eq!(specs[2].height, 1.0, 1e-9);
    assert!(!specs[2].dimmed);

    assert_approx_eq!(specs[4].height, 0.25, 1e-9);
    assert!(!specs[4].dimmed);
  }

  #[test]
  fn test_empty_window_is_all_floor_bars() {
    let specs = bar_specs(&window([0; 7]));
    assert!(specs.iter().all(|s| s.dimmed));
    for s in &specs {
      assert_approx_eq!(s.height, MIN_BAR_RATIO, 1e-9);
    }
  }

  #[test]
  fn test_bar_stagger_left_to_right() {
    let specs = bar_specs(&window([1, 1, 1, 1, 1, 1, 1]));
    for (i, s) in specs.iter().enumerate() {
      assert_eq!(s.delay_ms, i as u64 * BAR_STAGGER_MS);
    }
  }

  #[test]
  fn test_week_totals_sum_buckets() {
    let totals = WeekTotals::from_buckets(&window([0, 2, 4, 0, 1, 0, 3]));
    assert_eq!(totals.workouts, 10);
    assert_eq!(totals.calories, 2000);
    assert_eq!(totals.minutes, 300);
  }
}
