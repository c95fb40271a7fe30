use serde::{Deserialize, Serialize};

/// Number of holes a stroke index ranks; also the size of one "lap" of stroke holes.
pub const HOLES_PER_ROUND: i32 = 18;

/// Slope rating of a course of average difficulty.
pub const AVERAGE_SLOPE_RATING: f64 = 113.0;

/// Ratings for one tee/gender combination on a course.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TeeRating {
    pub slope_rating: i32,
    pub course_rating: f64,
    pub par: i32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleDefinition {
    pub number: i32,
    pub par: i32,
    /// Difficulty rank, 1 is the hardest hole.
    pub stroke_index: i32,
}

impl HoleDefinition {
    #[must_use]
    pub fn has_valid_stroke_index(&self) -> bool {
        is_valid_stroke_index(self.stroke_index)
    }
}

#[must_use]
pub fn is_valid_stroke_index(stroke_index: i32) -> bool {
    (1..=HOLES_PER_ROUND).contains(&stroke_index)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum CourseDataIssue {
    StrokeIndexOutOfRange { hole_number: i32, stroke_index: i32 },
    DuplicateStrokeIndex { stroke_index: i32, hole_numbers: Vec<i32> },
}
