//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Deterministic date helpers
//! - Helper assertions

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use sqlx::SqlitePool;

use crate::models::workout::{Difficulty, WorkoutRecord};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed the database with one workout per day going back `count` days.
/// Returns the IDs of created workouts
pub async fn seed_test_workouts(pool: &SqlitePool, count: usize) -> Vec<i64> {
  let mut workout_ids = Vec::new();

  for i in 0..count {
    let completed_at = Utc::now() - Duration::days(i as i64);
    let difficulty = match i % 3 {
      0 => "easy",
      1 => "medium",
      _ => "hard",
    };

    let result = sqlx::query(
      r#"
      INSERT INTO workouts (title, completed_at, duration_minutes, calories_burned, difficulty)
      VALUES (?1, ?2, ?3, ?4, ?5)
      "#,
    )
    .bind(format!("Workout {}", i))
    .bind(completed_at)
    .bind(20 + (i % 4) as i64 * 10)
    .bind(150 + (i % 5) as i64 * 50)
    .bind(difficulty)
    .execute(pool)
    .await
    .expect("Failed to insert test workout");

    workout_ids.push(result.last_insert_rowid());
  }

  workout_ids
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Timestamp at local noon on the given day, so the record's calendar day
/// is the same on every machine regardless of timezone.
pub fn local_noon(date: NaiveDate) -> DateTime<Utc> {
  let naive = date.and_hms_opt(12, 0, 0).expect("valid time");
  Local
    .from_local_datetime(&naive)
    .single()
    .expect("unambiguous local time")
    .with_timezone(&Utc)
}

/// In-memory workout record completed on the given day.
pub fn workout_on(
  date: NaiveDate,
  duration_minutes: i64,
  calories_burned: i64,
  difficulty: Difficulty,
) -> WorkoutRecord {
  WorkoutRecord {
    id: 0,
    title: "Test workout".to_string(),
    completed_at: Some(local_noon(date)),
    duration_minutes,
    calories_burned,
    difficulty,
    created_at: None,
  }
}

/// A corrupt record: no completion timestamp.
pub fn workout_without_timestamp(
  duration_minutes: i64,
  calories_burned: i64,
  difficulty: Difficulty,
) -> WorkoutRecord {
  WorkoutRecord {
    id: 0,
    title: "Untimestamped workout".to_string(),
    completed_at: None,
    duration_minutes,
    calories_burned,
    difficulty,
    created_at: None,
  }
}

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

/// Create a DateTime N days ago from now
pub fn datetime_days_ago(days: i64) -> DateTime<Utc> {
  Utc::now() - Duration::days(days)
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    // Verify key tables exist
    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('workouts', 'user_stats', 'user_settings', 'achievements', 'favorite_videos')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert!(tables.len() >= 5, "Expected at least 5 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_workouts_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_test_workouts(&pool, 5).await;
    assert_eq!(ids.len(), 5);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
      .fetch_one(&pool)
      .await
      .expect("Failed to count workouts");

    assert_eq!(count, 5);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 18).expect("valid date");

    let workout = workout_on(date, 30, 250, Difficulty::Medium);
    assert_eq!(workout.duration_minutes, 30);
    assert!(workout.completed_at.is_some());

    let corrupt = workout_without_timestamp(45, 300, Difficulty::Hard);
    assert!(corrupt.completed_at.is_none());
  }

  #[test]
  fn test_local_noon_round_trips_to_same_day() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 18).expect("valid date");
    let ts = local_noon(date);
    assert_eq!(ts.with_timezone(&Local).date_naive(), date);
  }

  #[test]
  fn test_datetime_helpers_produce_correct_dates() {
    let now = Utc::now();
    let past = datetime_days_ago(7);

    let diff = now - past;
    // Allow for slight timing differences (6-8 days is acceptable)
    assert!(diff.num_days() >= 6 && diff.num_days() <= 8,
            "Expected ~7 days difference, got {}", diff.num_days());
  }
}
