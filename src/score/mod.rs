pub mod handicap;
pub mod leaderboard;
pub mod normalize;
pub mod score_aggregators;
pub mod sort_utils;

pub use handicap::*;
pub use leaderboard::*;
pub use normalize::*;
pub use score_aggregators::*;
pub use sort_utils::*;
