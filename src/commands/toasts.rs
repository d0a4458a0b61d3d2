use std::sync::Arc;

use chrono::Utc;
use tauri::State;

use crate::db::AppState;
use crate::models::content::ToastEvent;
use crate::toast::{ToastSequencer, ToastView};

/// ---------------------------------------------------------------------------
/// Toast Commands
/// ---------------------------------------------------------------------------

fn with_sequencer<T>(
  state: &State<'_, Arc<AppState>>,
  f: impl FnOnce(&mut ToastSequencer) -> T,
) -> Result<T, String> {
  let mut sequencer = state
    .toasts
    .lock()
    .map_err(|_| "Toast state lock poisoned".to_string())?;
  Ok(f(&mut sequencer))
}

/// Advance the sequencer to now and return what the toast layer should
/// render. The frontend calls this on its animation tick.
#[tauri::command]
pub fn poll_toast(state: State<'_, Arc<AppState>>) -> Result<ToastView, String> {
  with_sequencer(&state, |seq| seq.poll(Utc::now()))
}

/// Explicit user dismissal of the visible toast.
#[tauri::command]
pub fn dismiss_toast(state: State<'_, Arc<AppState>>) -> Result<ToastView, String> {
  with_sequencer(&state, |seq| {
    let now = Utc::now();
    seq.dismiss(now);
    seq.poll(now)
  })
}

/// External trigger surface: queue an event produced outside the core
/// transition detection.
#[tauri::command]
pub fn notify_toast(
  state: State<'_, Arc<AppState>>,
  event: ToastEvent,
) -> Result<(), String> {
  with_sequencer(&state, |seq| seq.notify(event, Utc::now()))
}

/// Screen teardown: drop the visible toast and the queue so nothing fires
/// against a view that no longer exists.
#[tauri::command]
pub fn clear_toasts(state: State<'_, Arc<AppState>>) -> Result<(), String> {
  with_sequencer(&state, |seq| seq.reset())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
