use serde::{Deserialize, Serialize};

/// Default time a toast stays fully visible, in milliseconds.
pub const DEFAULT_TOAST_VISIBLE_MS: i64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
  Form,
  Motivation,
  Nutrition,
  Recovery,
  Technique,
}

impl TipCategory {
  /// Accent theme the frontend maps to a gradient.
  pub fn theme(self) -> &'static str {
    match self {
      TipCategory::Form => "teal",
      TipCategory::Motivation => "amber",
      TipCategory::Nutrition => "green",
      TipCategory::Recovery => "indigo",
      TipCategory::Technique => "violet",
    }
  }
}

/// A coaching tip. Ephemeral: selected per view, never persisted. Content
/// may carry live stat values interpolated at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
  pub category: TipCategory,
  pub title: String,
  pub content: String,
  pub theme: String,
}

impl Tip {
  pub fn new(category: TipCategory, title: impl Into<String>, content: impl Into<String>) -> Self {
    Self {
      category,
      title: title.into(),
      content: content.into(),
      theme: category.theme().to_string(),
    }
  }
}

/// Headline message for the home screen, chosen by precedence rules over
/// the current stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationMessage {
  pub title: String,
  pub body: String,
  pub theme: String,
}

/// What kind of milestone a toast announces. The style mapping over this
/// enum is total, so no kind can ever surface without an icon/gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
  #[default]
  Achievement,
  LevelUp,
  Streak,
  Goal,
}

/// A transient milestone notification. Created when a stat transition
/// crosses a threshold, destroyed once dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastEvent {
  pub kind: ToastKind,
  pub title: String,
  pub message: String,
  #[serde(default = "default_visible_ms")]
  pub visible_ms: i64,
}

fn default_visible_ms() -> i64 {
  DEFAULT_TOAST_VISIBLE_MS
}

impl ToastEvent {
  pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      kind,
      title: title.into(),
      message: message.into(),
      visible_ms: DEFAULT_TOAST_VISIBLE_MS,
    }
  }
}
