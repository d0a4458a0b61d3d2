use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: i64 = 1000;

/// Derived snapshot of the user's standing. Recomputed on demand from the
/// workout log plus the persisted experience total; never stored as a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
  pub level: i64,
  pub experience: i64,
  pub total_workouts: i64,
  pub total_calories: i64,
  pub total_minutes: i64,
  /// Consecutive days with at least one workout, ending today or yesterday.
  pub current_streak: i64,
  /// Longest consecutive-day run anywhere in history. Always >= current_streak.
  pub best_streak: i64,
  /// Best single calendar week (Monday start) by workout count.
  pub weekly_workouts: i64,
  pub achievements: i64,
}

impl Default for UserStats {
  fn default() -> Self {
    Self {
      level: 1,
      experience: 0,
      total_workouts: 0,
      total_calories: 0,
      total_minutes: 0,
      current_streak: 0,
      best_streak: 0,
      weekly_workouts: 0,
      achievements: 0,
    }
  }
}

impl UserStats {
  /// Level is strictly a function of experience, never stored on its own.
  pub fn level_for(experience: i64) -> i64 {
    experience.max(0) / XP_PER_LEVEL + 1
  }

  /// XP earned within the current level.
  pub fn xp_into_level(&self) -> i64 {
    self.experience.max(0) % XP_PER_LEVEL
  }

  /// XP still needed to reach the next level.
  pub fn xp_to_next_level(&self) -> i64 {
    XP_PER_LEVEL - self.xp_into_level()
  }
}

/// One calendar day inside a reporting window. A day without workouts is a
/// zero-valued bucket, not an omitted one, so charts always get a full row
/// of bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
  pub date: NaiveDate,
  /// Short weekday label for the chart axis ("Mon", "Tue", ...).
  pub day: String,
  pub workouts: i64,
  pub calories: i64,
  pub minutes: i64,
}

impl DayBucket {
  pub fn empty(date: NaiveDate) -> Self {
    Self {
      date,
      day: weekday_label(date),
      workouts: 0,
      calories: 0,
      minutes: 0,
    }
  }
}

pub fn weekday_label(date: NaiveDate) -> String {
  use chrono::{Datelike, Weekday};
  let label = match date.weekday() {
    Weekday::Mon => "Mon",
    Weekday::Tue => "Tue",
    Weekday::Wed => "Wed",
    Weekday::Thu => "Thu",
    Weekday::Fri => "Fri",
    Weekday::Sat => "Sat",
    Weekday::Sun => "Sun",
  };
  label.to_string()
}

/// Weekly goals that drive the progress rings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
  pub weekly_workout_goal: i64,
  pub weekly_calorie_goal: i64,
  pub weekly_minute_goal: i64,
}

impl Default for UserSettings {
  fn default() -> Self {
    Self {
      weekly_workout_goal: 5,
      weekly_calorie_goal: 1500,
      weekly_minute_goal: 150,
    }
  }
}
