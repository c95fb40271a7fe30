pub mod args;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod score;
pub mod storage;
pub mod view;

pub use error::{AppError, EngineError, ScoreTokenError, StorageError};
pub use score::{build_leaderboard, compute_course_handicap, compute_stroke_allocation};
