pub mod workout;
pub mod stats;
pub mod content;

pub use workout::{Difficulty, WorkoutRecord};
pub use stats::{DayBucket, UserStats};
pub use content::ToastEvent;
