//! SQLite storage service
//!
//! The only stateful collaborator in the app. Owns the workout log, the
//! persisted experience total, unlocked achievement keys, weekly goals,
//! and the favorites shelf. Everything derived is recomputed elsewhere.

use std::collections::HashSet;

use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::stats::UserSettings;
use crate::models::workout::{FavoriteVideo, NewWorkout, WorkoutRecord};

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("database error: {0}")]
  Db(#[from] sqlx::Error),
}

/// ---------------------------------------------------------------------------
/// Workout log
/// ---------------------------------------------------------------------------

/// Full workout history, most recent first. Rows with a NULL `completed_at`
/// sort last; the aggregation layer decides what to do with them.
pub async fn workout_history(pool: &SqlitePool) -> Result<Vec<WorkoutRecord>, StorageError> {
  let records = sqlx::query_as::<_, WorkoutRecord>(
    "SELECT * FROM workouts ORDER BY completed_at DESC",
  )
  .fetch_all(pool)
  .await?;
  Ok(records)
}

pub async fn insert_workout(pool: &SqlitePool, workout: &NewWorkout) -> Result<i64, StorageError> {
  let result = sqlx::query(
    r#"
    INSERT INTO workouts (title, completed_at, duration_minutes, calories_burned, difficulty)
    VALUES (?1, ?2, ?3, ?4, ?5)
    "#,
  )
  .bind(&workout.title)
  .bind(workout.completed_at)
  .bind(workout.duration_minutes)
  .bind(workout.calories_burned)
  .bind(workout.difficulty)
  .execute(pool)
  .await?;

  Ok(result.last_insert_rowid())
}

/// ---------------------------------------------------------------------------
/// Experience
/// ---------------------------------------------------------------------------

pub async fn experience(pool: &SqlitePool) -> Result<i64, StorageError> {
  let row: Option<(i64,)> = sqlx::query_as("SELECT experience FROM user_stats WHERE id = 1")
    .fetch_optional(pool)
    .await?;
  Ok(row.map(|(xp,)| xp).unwrap_or(0))
}

/// Add XP to the persisted total and return the new value. Negative deltas
/// are ignored: stored experience only ever grows.
pub async fn add_experience(pool: &SqlitePool, delta: i64) -> Result<i64, StorageError> {
  let delta = delta.max(0);
  sqlx::query(
    r#"
    INSERT INTO user_stats (id, experience) VALUES (1, ?1)
    ON CONFLICT(id) DO UPDATE SET
      experience = experience + excluded.experience,
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(delta)
  .execute(pool)
  .await?;

  experience(pool).await
}

/// ---------------------------------------------------------------------------
/// Achievements
/// ---------------------------------------------------------------------------

pub async fn unlocked_achievements(pool: &SqlitePool) -> Result<HashSet<String>, StorageError> {
  let rows: Vec<(String,)> = sqlx::query_as("SELECT key FROM achievements")
    .fetch_all(pool)
    .await?;
  Ok(rows.into_iter().map(|(key,)| key).collect())
}

pub async fn record_unlock(pool: &SqlitePool, key: &str) -> Result<(), StorageError> {
  sqlx::query("INSERT OR IGNORE INTO achievements (key) VALUES (?1)")
    .bind(key)
    .execute(pool)
    .await?;
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Settings
/// ---------------------------------------------------------------------------

pub async fn load_settings(pool: &SqlitePool) -> Result<UserSettings, StorageError> {
  let row: Option<(i64, i64, i64)> = sqlx::query_as(
    "SELECT weekly_workout_goal, weekly_calorie_goal, weekly_minute_goal FROM user_settings WHERE id = 1",
  )
  .fetch_optional(pool)
  .await?;

  Ok(match row {
    Some((workouts, calories, minutes)) => UserSettings {
      weekly_workout_goal: workouts,
      weekly_calorie_goal: calories,
      weekly_minute_goal: minutes,
    },
    None => UserSettings::default(),
  })
}

/// Partial update: any `None` keeps the stored value.
pub async fn save_settings(
  pool: &SqlitePool,
  weekly_workout_goal: Option<i64>,
  weekly_calorie_goal: Option<i64>,
  weekly_minute_goal: Option<i64>,
) -> Result<(), StorageError> {
  sqlx::query(
    r#"
    UPDATE user_settings SET
      weekly_workout_goal = COALESCE(?1, weekly_workout_goal),
      weekly_calorie_goal = COALESCE(?2, weekly_calorie_goal),
      weekly_minute_goal = COALESCE(?3, weekly_minute_goal),
      updated_at = CURRENT_TIMESTAMP
    WHERE id = 1
    "#,
  )
  .bind(weekly_workout_goal)
  .bind(weekly_calorie_goal)
  .bind(weekly_minute_goal)
  .execute(pool)
  .await?;

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Favorites
/// ---------------------------------------------------------------------------

pub async fn favorite_videos(pool: &SqlitePool) -> Result<Vec<FavoriteVideo>, StorageError> {
  let favorites = sqlx::query_as::<_, FavoriteVideo>(
    "SELECT * FROM favorite_videos ORDER BY added_at DESC",
  )
  .fetch_all(pool)
  .await?;
  Ok(favorites)
}

pub async fn add_favorite(
  pool: &SqlitePool,
  video_id: &str,
  title: &str,
  duration_minutes: Option<i64>,
  url: Option<&str>,
) -> Result<i64, StorageError> {
  let result = sqlx::query(
    r#"
    INSERT INTO favorite_videos (video_id, title, duration_minutes, url)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(video_id) DO UPDATE SET title = excluded.title
    "#,
  )
  .bind(video_id)
  .bind(title)
  .bind(duration_minutes)
  .bind(url)
  .execute(pool)
  .await?;

  Ok(result.last_insert_rowid())
}

pub async fn remove_favorite(pool: &SqlitePool, id: i64) -> Result<(), StorageError> {
  sqlx::query("DELETE FROM favorite_videos WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await?;
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
