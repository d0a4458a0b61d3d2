//! Motivation and tip selection
//!
//! Precedence-ranked messaging over the current stats: the first matching
//! rule wins, evaluated top-down, and templated bodies interpolate live
//! values at selection time. Quote and fallback tip picks are uniform
//! random with the RNG passed in, so tests can seed it and pin outcomes.

use rand::Rng;

use crate::models::content::{MotivationMessage, Tip, TipCategory};
use crate::models::stats::UserStats;

// ---------------------------------------------------------------------------
/// Headline message rules
// ---------------------------------------------------------------------------

/// Pick the home-screen message for the given stats. Deterministic: the
/// same stats always select the same rule.
pub fn select_message(stats: &UserStats) -> MotivationMessage {
    if stats.current_streak >= 30 {
        message(
            "Legendary streak!",
            format!(
                "{} days without missing once. You are in rare company.",
                stats.current_streak
            ),
            "gold",
        )
    } else if stats.current_streak >= 14 {
        message(
            "Two weeks strong",
            format!(
                "A {}-day streak. This is what consistency looks like.",
                stats.current_streak
            ),
            "orange",
        )
    } else if stats.current_streak >= 7 {
        message(
            "On a roll",
            format!(
                "{} days in a row. Keep the chain going today.",
                stats.current_streak
            ),
            "amber",
        )
    } else if stats.total_workouts >= 50 {
        message(
            "Veteran status",
            format!(
                "{} workouts logged. Few people make it this far.",
                stats.total_workouts
            ),
            "violet",
        )
    } else if stats.level >= 5 {
        message(
            "Climbing the ranks",
            format!(
                "Level {} and rising. {} XP to the next one.",
                stats.level,
                stats.xp_to_next_level()
            ),
            "indigo",
        )
    } else if stats.total_calories >= 1000 {
        message(
            "Burning bright",
            format!(
                "{} calories burned so far. The engine is running.",
                stats.total_calories
            ),
            "red",
        )
    } else if stats.total_workouts >= 10 {
        message(
            "Momentum is building",
            format!(
                "{} workouts down. The habit is starting to stick.",
                stats.total_workouts
            ),
            "teal",
        )
    } else if stats.total_workouts >= 1 {
        message(
            "First steps taken",
            format!(
                "{} workout{} done. Every streak starts here.",
                stats.total_workouts,
                if stats.total_workouts == 1 { "" } else { "s" }
            ),
            "green",
        )
    } else {
        message(
            "Welcome to Fitflow",
            "Your first workout is waiting. Pick something easy and start.".to_string(),
            "blue",
        )
    }
}

fn message(title: &str, body: String, theme: &str) -> MotivationMessage {
    MotivationMessage {
        title: title.to_string(),
        body,
        theme: theme.to_string(),
    }
}

// ---------------------------------------------------------------------------
/// Quotes
// ---------------------------------------------------------------------------

/// Decorative quote pool. No precedence rules; a fresh uniform pick on
/// every request.
const QUOTES: &[&str] = &[
    "The hardest lift of all is lifting yourself off the couch.",
    "You don't have to be extreme, just consistent.",
    "A one-hour workout is four percent of your day.",
    "Strength doesn't come from what you can do, but from overcoming what you couldn't.",
    "The body achieves what the mind believes.",
    "Sweat is just your fat crying.",
    "Small daily improvements add up to big results.",
    "Motivation gets you started. Habit keeps you going.",
    "Rest when you're done, not when you're tired.",
    "The best time to start was yesterday. The next best time is now.",
];

pub fn random_quote(rng: &mut impl Rng) -> String {
    QUOTES[rng.gen_range(0..QUOTES.len())].to_string()
}

// ---------------------------------------------------------------------------
/// Tip rotation
// ---------------------------------------------------------------------------

/// Personalized tip selection. A smaller rule set than the headline
/// message; anything not covered falls through to a uniform random pick.
pub fn select_tip(stats: &UserStats, rng: &mut impl Rng) -> Tip {
    if stats.current_streak >= 7 {
        Tip::new(
            TipCategory::Motivation,
            "Protect the streak",
            format!(
                "{} straight days. Schedule tomorrow's session now, even a short one counts.",
                stats.current_streak
            ),
        )
    } else if stats.total_workouts < 5 {
        Tip::new(
            TipCategory::Form,
            "Form before load",
            "While everything is new, film one set per session and check your form. \
             Good patterns learned now pay off for years.",
        )
    } else if stats.level >= 5 {
        Tip::new(
            TipCategory::Technique,
            "Progressive overload",
            "You've built a base. Add a little weight, a rep, or a few minutes each \
             week - small, steady increases beat occasional heroics.",
        )
    } else {
        random_tip(rng)
    }
}

/// Manual refresh: always a fresh uniform pick, bypassing the rules above.
pub fn random_tip(rng: &mut impl Rng) -> Tip {
    let (category, title, content) = TIP_POOL[rng.gen_range(0..TIP_POOL.len())];
    Tip::new(category, title, content)
}

const TIP_POOL: &[(TipCategory, &str, &str)] = &[
    (
        TipCategory::Form,
        "Neutral spine",
        "Brace your core before every lift and keep your spine neutral; let the hips hinge, not the back.",
    ),
    (
        TipCategory::Form,
        "Full range of motion",
        "Half reps build half strength. Lighten the load until you own the whole movement.",
    ),
    (
        TipCategory::Motivation,
        "Two-minute rule",
        "On low-energy days, commit to just two minutes. Starting is the hard part; momentum does the rest.",
    ),
    (
        TipCategory::Motivation,
        "Train with a plan",
        "Walking in knowing exactly what you'll do cuts wasted time and doubles focus.",
    ),
    (
        TipCategory::Nutrition,
        "Protein at every meal",
        "Muscles rebuild from what you eat. Aim for a palm-sized portion of protein each meal.",
    ),
    (
        TipCategory::Nutrition,
        "Hydrate early",
        "Drink a glass of water before training, not just after. Even mild dehydration costs you reps.",
    ),
    (
        TipCategory::Recovery,
        "Sleep is training",
        "The adaptation happens overnight. Guard your sleep like you guard your training slot.",
    ),
    (
        TipCategory::Recovery,
        "Easy days easy",
        "Recovery sessions should feel almost too light. Save the intensity for the hard days.",
    ),
    (
        TipCategory::Technique,
        "Tempo work",
        "Slow the lowering phase to three seconds. Same weight, far more stimulus.",
    ),
    (
        TipCategory::Technique,
        "Breathe with the rep",
        "Exhale on effort, inhale on release. Rhythm in the breath brings rhythm to the set.",
    ),
];

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
