mod achievements;
mod commands;
mod db;
mod models;
mod motivation;
mod progress;
mod stats;
mod storage;
mod toast;

#[cfg(test)]
pub mod test_utils;

use std::sync::Arc;

use db::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Initialize database
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        match db::initialize_db(&app_handle).await {
          Ok(pool) => {
            let state = Arc::new(AppState::new(pool));
            app_handle.manage(state);
            println!("Database ready");
          }
          Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_workouts,
      commands::get_favorite_videos,
      commands::add_to_favorites,
      commands::remove_from_favorites,
      // Stats commands
      commands::stats::get_user_stats,
      commands::stats::get_weekly_progress,
      commands::stats::get_progress_rings,
      commands::stats::complete_workout,
      commands::stats::get_achievements,
      commands::stats::get_user_settings,
      commands::stats::update_user_settings,
      // Tip commands
      commands::tips::get_daily_tip,
      commands::tips::refresh_tip,
      commands::tips::get_motivation_message,
      // Toast commands
      commands::toasts::poll_toast,
      commands::toasts::dismiss_toast,
      commands::toasts::notify_toast,
      commands::toasts::clear_toasts,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
