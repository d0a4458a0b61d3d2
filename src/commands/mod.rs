pub mod stats;
pub mod tips;
pub mod toasts;

use std::sync::Arc;

use tauri::State;

use crate::db::AppState;
use crate::models::workout::{FavoriteVideo, WorkoutRecord};
use crate::storage;

#[tauri::command]
pub async fn get_workouts(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<WorkoutRecord>, String> {
  storage::workout_history(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch workouts: {}", e))
}

#[tauri::command]
pub async fn get_favorite_videos(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<FavoriteVideo>, String> {
  storage::favorite_videos(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch favorites: {}", e))
}

#[tauri::command]
pub async fn add_to_favorites(
  state: State<'_, Arc<AppState>>,
  video_id: String,
  title: String,
  duration_minutes: Option<i64>,
  url: Option<String>,
) -> Result<(), String> {
  storage::add_favorite(&state.db, &video_id, &title, duration_minutes, url.as_deref())
    .await
    .map(|_| ())
    .map_err(|e| format!("Failed to add favorite: {}", e))
}

#[tauri::command]
pub async fn remove_from_favorites(
  state: State<'_, Arc<AppState>>,
  id: i64,
) -> Result<(), String> {
  storage::remove_favorite(&state.db, id)
    .await
    .map_err(|e| format!("Failed to remove favorite: {}", e))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{setup_test_db, teardown_test_db};
  use serial_test::serial;
  use tauri::Manager;

  #[tokio::test]
  #[serial]
  async fn test_get_workouts_empty_db() {
    let pool = setup_test_db().await;
    let state = Arc::new(AppState::new(pool.clone()));
    let app = tauri::test::mock_app();
    app.manage(state);

    let result = get_workouts(app.state()).await;
    assert_eq!(result.expect("Should list").len(), 0);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_favorites_round_trip() {
    let pool = setup_test_db().await;
    let state = Arc::new(AppState::new(pool.clone()));
    let app = tauri::test::mock_app();
    app.manage(state);

    add_to_favorites(
      app.state(),
      "vid-9".to_string(),
      "Stretch routine".to_string(),
      Some(12),
      None,
    )
    .await
    .expect("Should add");

    let favorites = get_favorite_videos(app.state()).await.expect("Should list");
    assert_eq!(favorites.len(), 1);

    remove_from_favorites(app.state(), favorites[0].id)
      .await
      .expect("Should remove");
    let favorites = get_favorite_videos(app.state()).await.expect("Should relist");
    assert!(favorites.is_empty());

    teardown_test_db(pool).await;
  }
}
