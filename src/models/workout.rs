use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workout difficulty tier. Also fixes the base XP award for completing
/// a workout of that tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn xp_base(self) -> i64 {
    match self {
      Difficulty::Easy => 50,
      Difficulty::Medium => 100,
      Difficulty::Hard => 150,
    }
  }
}

impl std::fmt::Display for Difficulty {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Easy => write!(f, "easy"),
      Self::Medium => write!(f, "medium"),
      Self::Hard => write!(f, "hard"),
    }
  }
}

impl std::str::FromStr for Difficulty {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "easy" => Ok(Self::Easy),
      "medium" => Ok(Self::Medium),
      "hard" => Ok(Self::Hard),
      _ => Err(format!("Unknown difficulty: {}", s)),
    }
  }
}

/// One completed workout. Append-only: records are never mutated after
/// completion, only filtered and aggregated.
///
/// `completed_at` is nullable so a single corrupt row cannot void the whole
/// aggregation; such records still count toward totals but are excluded
/// from streak and day-bucket computation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutRecord {
  pub id: i64,
  pub title: String,
  pub completed_at: Option<DateTime<Utc>>,
  pub duration_minutes: i64,
  pub calories_burned: i64,
  pub difficulty: Difficulty,
  pub created_at: Option<DateTime<Utc>>,
}

/// For inserting new workouts (without id, created_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
  pub title: String,
  pub completed_at: DateTime<Utc>,
  pub duration_minutes: i64,
  pub calories_burned: i64,
  pub difficulty: Difficulty,
}

/// A video saved to the favorites shelf. The catalog and playback live in
/// the frontend; the core only stores and lists the shelf.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteVideo {
  pub id: i64,
  pub video_id: String,
  pub title: String,
  pub duration_minutes: Option<i64>,
  pub url: Option<String>,
  pub added_at: Option<DateTime<Utc>>,
}
