pub mod course;
pub mod score;

pub use course::*;
pub use score::*;
