use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tauri::Manager;

use crate::toast::ToastSequencer;

pub type DbPool = SqlitePool;

/// Application state holding the database connection pool and the toast
/// sequencer. The sequencer lives here, not in the webview, so its queue
/// survives screen navigation.
pub struct AppState {
  pub db: DbPool,
  pub toasts: Mutex<ToastSequencer>,
}

impl AppState {
  pub fn new(db: DbPool) -> Self {
    Self {
      db,
      toasts: Mutex::new(ToastSequencer::new()),
    }
  }
}

/// Get the path to the database file
/// Stored in the platform app-data dir, e.g. ~/.local/share/com.fitflow.app/fitflow.db
fn get_db_path<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<PathBuf, Box<dyn std::error::Error>> {
  let data_dir = app
    .path()
    .app_data_dir()
    .map_err(|e| format!("Failed to get app data dir: {}", e))?;

  // Create directory if it doesn't exist
  fs::create_dir_all(&data_dir)?;

  Ok(data_dir.join("fitflow.db"))
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<DbPool, Box<dyn std::error::Error>> {
  let db_path = get_db_path(app)?;
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  println!("Initializing database at: {}", db_path.display());

  // Create connection pool
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  // Run migrations
  sqlx::migrate!("./migrations").run(&pool).await?;

  println!("Database initialized successfully");

  Ok(pool)
}
