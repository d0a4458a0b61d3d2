//! Deterministic stats layer over the workout log
//!
//! Everything here is a pure function of the history slice plus an injected
//! "today". Nothing reads the system clock, so outputs are reproducible for
//! any simulated date. The UI renders precomputed numbers and never does
//! date math itself.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::stats::{DayBucket, UserStats};
use crate::models::workout::{Difficulty, WorkoutRecord};

/// ---------------------------------------------------------------------------
/// Aggregation
/// ---------------------------------------------------------------------------

/// Derive the full stats snapshot from the workout history.
///
/// `experience` and `achievements` come from the storage layer; level is
/// derived from experience here and nowhere else. Records with no
/// `completed_at` still count toward the totals but are skipped by every
/// calendar computation.
pub fn compute_stats(
  history: &[WorkoutRecord],
  experience: i64,
  achievements: i64,
  today: NaiveDate,
) -> UserStats {
  let total_workouts = history.len() as i64;
  let total_calories = history.iter().map(|w| w.calories_burned).sum();
  let total_minutes = history.iter().map(|w| w.duration_minutes).sum();

  let streak_now = current_streak(history, today);
  // A streak in progress is itself a historical run.
  let streak_best = best_streak(history).max(streak_now);

  UserStats {
    level: UserStats::level_for(experience),
    experience: experience.max(0),
    total_workouts,
    total_calories,
    total_minutes,
    current_streak: streak_now,
    best_streak: streak_best,
    weekly_workouts: best_week_count(history),
    achievements,
  }
}

/// Partition the 7-day window starting at `window_start` into day buckets.
///
/// Always returns exactly 7 buckets in chronological order; days without
/// workouts yield zero-valued buckets so the chart never loses a bar.
pub fn weekly_buckets(history: &[WorkoutRecord], window_start: NaiveDate) -> Vec<DayBucket> {
  let mut buckets: Vec<DayBucket> = (0..7)
    .map(|offset| DayBucket::empty(window_start + Duration::days(offset)))
    .collect();

  for w in history {
    let Some(day) = completion_day(w) else {
      continue;
    };
    let offset = (day - window_start).num_days();
    if !(0..7).contains(&offset) {
      continue;
    }
    let bucket = &mut buckets[offset as usize];
    bucket.workouts += 1;
    bucket.calories += w.calories_burned;
    bucket.minutes += w.duration_minutes;
  }

  buckets
}

/// Consecutive days with at least one workout, ending today or yesterday.
/// Today without a workout does not break a streak that includes yesterday.
pub fn current_streak(history: &[WorkoutRecord], today: NaiveDate) -> i64 {
  streak_ending_at(&active_days(history), today)
}

/// Longest consecutive-day run anywhere in the history, independent of
/// whether it is still alive.
pub fn best_streak(history: &[WorkoutRecord]) -> i64 {
  longest_run(&active_days(history))
}

/// XP awarded for one completed workout: difficulty base plus one point
/// per minute.
pub fn xp_award(difficulty: Difficulty, duration_minutes: i64) -> i64 {
  difficulty.xp_base() + duration_minutes.max(0)
}

/// ---------------------------------------------------------------------------
/// Calendar helpers
/// ---------------------------------------------------------------------------

/// Local calendar day of a record's completion, if it has one.
pub(crate) fn completion_day(w: &WorkoutRecord) -> Option<NaiveDate> {
  w.completed_at
    .map(|ts| ts.with_timezone(&Local).date_naive())
}

fn active_days(history: &[WorkoutRecord]) -> BTreeSet<NaiveDate> {
  history.iter().filter_map(completion_day).collect()
}

fn streak_ending_at(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> i64 {
  let anchor = if days.contains(&today) {
    today
  } else {
    today - Duration::days(1)
  };
  if !days.contains(&anchor) {
    return 0;
  }

  let mut streak = 0;
  let mut cursor = anchor;
  while days.contains(&cursor) {
    streak += 1;
    cursor = cursor - Duration::days(1);
  }
  streak
}

fn longest_run(days: &BTreeSet<NaiveDate>) -> i64 {
  let mut best = 0;
  let mut run = 0;
  let mut prev: Option<NaiveDate> = None;

  for &day in days {
    run = match prev {
      Some(p) if day - p == Duration::days(1) => run + 1,
      _ => 1,
    };
    best = best.max(run);
    prev = Some(day);
  }

  best
}

/// Best single calendar week by workout count. Weeks are ISO weeks, Monday
/// start, so the number is stable from one day to the next.
fn best_week_count(history: &[WorkoutRecord]) -> i64 {
  let mut counts: HashMap<(i32, u32), i64> = HashMap::new();
  for w in history {
    if let Some(day) = completion_day(w) {
      let week = day.iso_week();
      *counts.entry((week.year(), week.week())).or_insert(0) += 1;
    }
  }
  counts.into_values().max().unwrap_or(0)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
