use std::sync::Arc;

use chrono::{Datelike, Duration, Local, NaiveDate, Utc};
use serde::Serialize;
use tauri::State;

use crate::achievements;
use crate::db::AppState;
use crate::models::stats::{DayBucket, UserSettings, UserStats};
use crate::models::workout::NewWorkout;
use crate::progress::{self, BarSpec, RingTarget, WeekTotals};
use crate::stats;
use crate::storage::{self, StorageError};
use crate::toast;

/// ---------------------------------------------------------------------------
/// Stats Commands
/// ---------------------------------------------------------------------------

/// Current derived stats. Storage failures degrade to the zeroed default
/// instead of failing the render path.
#[tauri::command]
pub async fn get_user_stats(state: State<'_, Arc<AppState>>) -> Result<UserStats, String> {
  let today = Local::now().date_naive();
  Ok(load_stats(&state.db, today).await.unwrap_or_else(|e| {
    eprintln!("Stats unavailable, serving defaults: {}", e);
    UserStats::default()
  }))
}

async fn load_stats(pool: &crate::db::DbPool, today: NaiveDate) -> Result<UserStats, StorageError> {
  let history = storage::workout_history(pool).await?;
  let experience = storage::experience(pool).await?;
  let unlocked = storage::unlocked_achievements(pool).await?;
  Ok(stats::compute_stats(&history, experience, unlocked.len() as i64, today))
}

/// ---------------------------------------------------------------------------
/// Weekly Progress
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct WeeklyProgress {
  pub buckets: Vec<DayBucket>,
  pub bars: Vec<BarSpec>,
}

/// The rolling 7-day window ending today, bucketed per day, plus the bar
/// specs the chart animates toward.
#[tauri::command]
pub async fn get_weekly_progress(
  state: State<'_, Arc<AppState>>,
) -> Result<WeeklyProgress, String> {
  let history = storage::workout_history(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch workouts: {}", e))?;

  let today = Local::now().date_naive();
  let buckets = stats::weekly_buckets(&history, today - Duration::days(6));
  let bars = progress::bar_specs(&buckets);

  Ok(WeeklyProgress { buckets, bars })
}

/// Ring targets for the progress screen: this calendar week (Monday start)
/// measured against the configured goals.
#[tauri::command]
pub async fn get_progress_rings(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<RingTarget>, String> {
  let pool = &state.db;
  let history = storage::workout_history(pool)
    .await
    .map_err(|e| format!("Failed to fetch workouts: {}", e))?;
  let settings = storage::load_settings(pool)
    .await
    .map_err(|e| format!("Failed to load settings: {}", e))?;

  let today = Local::now().date_naive();
  let user_stats = load_stats(pool, today)
    .await
    .map_err(|e| format!("Failed to compute stats: {}", e))?;

  let buckets = stats::weekly_buckets(&history, monday_of(today));
  let week = WeekTotals::from_buckets(&buckets);

  Ok(progress::ring_targets(&user_stats, &week, &settings))
}

fn monday_of(day: NaiveDate) -> NaiveDate {
  day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// ---------------------------------------------------------------------------
/// Workout Completion
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct WorkoutOutcome {
  pub stats: UserStats,
  pub xp_gained: i64,
  pub leveled_up: bool,
  pub new_achievements: Vec<String>,
}

/// Record a finished workout: append it to the log, award XP, recompute
/// stats, and surface toasts for every milestone the transition crossed.
#[tauri::command]
pub async fn complete_workout(
  state: State<'_, Arc<AppState>>,
  workout: NewWorkout,
) -> Result<WorkoutOutcome, String> {
  let pool = &state.db;
  let today = Local::now().date_naive();
  let week_start = monday_of(today);

  let history = storage::workout_history(pool)
    .await
    .map_err(|e| format!("Failed to fetch workouts: {}", e))?;
  let xp_before = storage::experience(pool)
    .await
    .map_err(|e| format!("Failed to read experience: {}", e))?;
  let unlocked = storage::unlocked_achievements(pool)
    .await
    .map_err(|e| format!("Failed to read achievements: {}", e))?;

  let before = stats::compute_stats(&history, xp_before, unlocked.len() as i64, today);
  let week_before =
    WeekTotals::from_buckets(&stats::weekly_buckets(&history, week_start)).workouts;

  storage::insert_workout(pool, &workout)
    .await
    .map_err(|e| format!("Failed to record workout: {}", e))?;
  let xp_gained = stats::xp_award(workout.difficulty, workout.duration_minutes);
  let xp_after = storage::add_experience(pool, xp_gained)
    .await
    .map_err(|e| format!("Failed to award XP: {}", e))?;

  let history = storage::workout_history(pool)
    .await
    .map_err(|e| format!("Failed to refetch workouts: {}", e))?;
  let mut after = stats::compute_stats(&history, xp_after, unlocked.len() as i64, today);
  let week_after =
    WeekTotals::from_buckets(&stats::weekly_buckets(&history, week_start)).workouts;

  let fresh = achievements::check_unlocks(&after, &unlocked);
  for achievement in &fresh {
    storage::record_unlock(pool, achievement.key)
      .await
      .map_err(|e| format!("Failed to record unlock: {}", e))?;
  }
  after.achievements += fresh.len() as i64;

  let settings = storage::load_settings(pool)
    .await
    .map_err(|e| format!("Failed to load settings: {}", e))?;

  let mut events = toast::detect_transitions(&before, &after);
  if let Some(goal) =
    toast::weekly_goal_toast(week_before, week_after, settings.weekly_workout_goal)
  {
    events.push(goal);
  }
  events.extend(fresh.iter().map(|a| a.toast()));

  {
    let now = Utc::now();
    let mut sequencer = state
      .toasts
      .lock()
      .map_err(|_| "Toast state lock poisoned".to_string())?;
    for event in events {
      sequencer.notify(event, now);
    }
  }

  Ok(WorkoutOutcome {
    leveled_up: after.level > before.level,
    xp_gained,
    new_achievements: fresh.iter().map(|a| a.title.to_string()).collect(),
    stats: after,
  })
}

/// ---------------------------------------------------------------------------
/// Achievements
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AchievementView {
  pub key: &'static str,
  pub title: &'static str,
  pub description: &'static str,
  pub unlocked: bool,
}

#[tauri::command]
pub async fn get_achievements(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<AchievementView>, String> {
  let unlocked = storage::unlocked_achievements(&state.db)
    .await
    .map_err(|e| format!("Failed to read achievements: {}", e))?;

  Ok(
    achievements::CATALOG
      .iter()
      .map(|a| AchievementView {
        key: a.key,
        title: a.title,
        description: a.description,
        unlocked: unlocked.contains(a.key),
      })
      .collect(),
  )
}

/// ---------------------------------------------------------------------------
/// Settings Commands
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_user_settings(
  state: State<'_, Arc<AppState>>,
) -> Result<UserSettings, String> {
  storage::load_settings(&state.db)
    .await
    .map_err(|e| format!("Failed to get settings: {}", e))
}

#[tauri::command]
pub async fn update_user_settings(
  state: State<'_, Arc<AppState>>,
  weekly_workout_goal: Option<i64>,
  weekly_calorie_goal: Option<i64>,
  weekly_minute_goal: Option<i64>,
) -> Result<(), String> {
  storage::save_settings(
    &state.db,
    weekly_workout_goal,
    weekly_calorie_goal,
    weekly_minute_goal,
  )
  .await
  .map_err(|e| format!("Failed to update settings: {}", e))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
