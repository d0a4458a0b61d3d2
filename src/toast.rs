//! Toast sequencing
//!
//! One transient notification at a time: Hidden -> Showing -> Dismissing ->
//! Hidden. Events arriving while a toast is on screen queue FIFO (bounded)
//! and promote only after the current one fully hides. The sequencer is
//! poll-driven with an injected "now": a torn-down view simply stops
//! polling, so no timer can ever fire against stale state.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::content::{ToastEvent, ToastKind};
use crate::models::stats::UserStats;

/// Exit animation length once a toast starts dismissing.
pub const EXIT_ANIMATION_MS: i64 = 300;

/// Events queued beyond this are dropped; a burst of milestones must not
/// backlog the screen for half a minute.
pub const MAX_QUEUED: usize = 4;

/// Streak lengths that earn a toast when first reached.
pub const STREAK_MILESTONES: [i64; 3] = [7, 14, 30];

/// ---------------------------------------------------------------------------
/// State machine
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
  #[default]
  Hidden,
  Showing,
  Dismissing,
}

#[derive(Debug, Default)]
pub struct ToastSequencer {
  phase: ToastPhase,
  current: Option<ToastEvent>,
  /// When the current phase times out, if it does.
  deadline: Option<DateTime<Utc>>,
  queue: VecDeque<ToastEvent>,
}

impl ToastSequencer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Surface a new event. Shows immediately when idle, otherwise queues it
  /// FIFO behind whatever is on screen.
  pub fn notify(&mut self, event: ToastEvent, now: DateTime<Utc>) {
    match self.phase {
      ToastPhase::Hidden => self.show(event, now),
      ToastPhase::Showing | ToastPhase::Dismissing => {
        if self.queue.len() < MAX_QUEUED {
          self.queue.push_back(event);
        }
      }
    }
  }

  /// Advance timed transitions up to `now` and report what the screen
  /// should render.
  pub fn poll(&mut self, now: DateTime<Utc>) -> ToastView {
    // A single poll may cross several deadlines if the caller was away.
    loop {
      let Some(deadline) = self.deadline else { break };
      if now < deadline {
        break;
      }
      match self.phase {
        ToastPhase::Showing => self.start_dismissing(deadline),
        ToastPhase::Dismissing => {
          self.clear();
          if let Some(next) = self.queue.pop_front() {
            self.show(next, deadline);
          }
        }
        ToastPhase::Hidden => self.deadline = None,
      }
    }
    self.view()
  }

  /// Explicit user dismissal: jumps straight to the exit animation.
  pub fn dismiss(&mut self, now: DateTime<Utc>) {
    if self.phase == ToastPhase::Showing {
      self.start_dismissing(now);
    }
  }

  /// View teardown: drop the current toast and everything queued.
  pub fn reset(&mut self) {
    *self = Self::default();
  }

  #[allow(dead_code)]
  pub fn phase(&self) -> ToastPhase {
    self.phase
  }

  #[allow(dead_code)]
  pub fn queued(&self) -> usize {
    self.queue.len()
  }

  fn show(&mut self, event: ToastEvent, now: DateTime<Utc>) {
    self.deadline = Some(now + Duration::milliseconds(event.visible_ms.max(0)));
    self.phase = ToastPhase::Showing;
    self.current = Some(event);
  }

  fn start_dismissing(&mut self, now: DateTime<Utc>) {
    self.phase = ToastPhase::Dismissing;
    self.deadline = Some(now + Duration::milliseconds(EXIT_ANIMATION_MS));
  }

  fn clear(&mut self) {
    self.phase = ToastPhase::Hidden;
    self.current = None;
    self.deadline = None;
  }

  fn view(&self) -> ToastView {
    ToastView {
      phase: self.phase,
      toast: self.current.clone(),
      style: self.current.as_ref().map(|t| ToastStyle::for_kind(t.kind)),
    }
  }
}

/// What the frontend renders for the toast layer.
#[derive(Debug, Clone, Serialize)]
pub struct ToastView {
  pub phase: ToastPhase,
  pub toast: Option<ToastEvent>,
  pub style: Option<ToastStyle>,
}

/// ---------------------------------------------------------------------------
/// Styling
/// ---------------------------------------------------------------------------

/// Icon and gradient pair per toast kind. The mapping is total, so an
/// unmapped kind can never surface without a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToastStyle {
  pub icon: &'static str,
  pub gradient: [&'static str; 2],
}

impl ToastStyle {
  pub fn for_kind(kind: ToastKind) -> Self {
    match kind {
      ToastKind::Achievement => Self {
        icon: "trophy",
        gradient: ["#f7b733", "#fc4a1a"],
      },
      ToastKind::LevelUp => Self {
        icon: "arrow-up-circle",
        gradient: ["#7f53ac", "#647dee"],
      },
      ToastKind::Streak => Self {
        icon: "flame",
        gradient: ["#f5576c", "#f093fb"],
      },
      ToastKind::Goal => Self {
        icon: "target",
        gradient: ["#43e97b", "#38f9d7"],
      },
    }
  }
}

impl Default for ToastStyle {
  fn default() -> Self {
    Self::for_kind(ToastKind::default())
  }
}

/// ---------------------------------------------------------------------------
/// Transition detection
/// ---------------------------------------------------------------------------

/// Compare two stat snapshots and emit a toast for every threshold crossed
/// between them: level-ups and streak milestones.
pub fn detect_transitions(before: &UserStats, after: &UserStats) -> Vec<ToastEvent> {
  let mut events = Vec::new();

  if after.level > before.level {
    events.push(ToastEvent::new(
      ToastKind::LevelUp,
      format!("Level {}!", after.level),
      format!("{} XP to the next level.", after.xp_to_next_level()),
    ));
  }

  for milestone in STREAK_MILESTONES {
    if before.current_streak < milestone && after.current_streak >= milestone {
      events.push(ToastEvent::new(
        ToastKind::Streak,
        format!("{}-day streak!", milestone),
        format!("{} consecutive days of training.", after.current_streak),
      ));
    }
  }

  events
}

/// A toast for the moment the weekly workout goal is first reached.
pub fn weekly_goal_toast(week_before: i64, week_after: i64, goal: i64) -> Option<ToastEvent> {
  let goal = goal.max(1);
  if week_before < goal && week_after >= goal {
    Some(ToastEvent::new(
      ToastKind::Goal,
      "Weekly goal reached!",
      format!("{} workouts this week. Goal met.", week_after),
    ))
  } else {
    None
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
