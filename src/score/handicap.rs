use std::collections::BTreeMap;

use crate::model::{
    AVERAGE_SLOPE_RATING, CourseDataIssue, HOLES_PER_ROUND, HoleDefinition, PlayerContext,
    StrokeAllocation, TeeRating, is_valid_stroke_index,
};

/// Course handicap for one player on one tee.
///
/// `round(index * fraction * slope / 113 + (course_rating - par))`, rounding halves to even.
/// A result of zero or below is valid and simply means no strokes are received.
#[must_use]
pub fn compute_course_handicap(
    handicap_index: f64,
    tee_rating: &TeeRating,
    awarded_handicap_fraction: f64,
) -> i32 {
    let slope_adjusted = handicap_index * awarded_handicap_fraction
        * f64::from(tee_rating.slope_rating)
        / AVERAGE_SLOPE_RATING;
    let rating_adjustment = tee_rating.course_rating - f64::from(tee_rating.par);
    // `as` saturates, and NaN becomes 0 (no strokes)
    (slope_adjusted + rating_adjustment).round_ties_even() as i32
}

#[must_use]
pub fn course_handicap_for(player: &PlayerContext) -> i32 {
    compute_course_handicap(
        player.handicap_index,
        &player.tee,
        player.awarded_handicap_fraction,
    )
}

/// Bonus strokes (0, 1 or 2) received on a hole of the given stroke index.
///
/// Strokes go to the hardest holes first; a second lap starts once the course handicap
/// passes 18. Stroke indexes outside 1..=18 receive nothing.
#[must_use]
pub fn compute_stroke_allocation(course_handicap: i32, hole_stroke_index: i32) -> u8 {
    if course_handicap <= 0 || !is_valid_stroke_index(hole_stroke_index) {
        return 0;
    }

    let mut strokes = u8::from(course_handicap >= hole_stroke_index);
    if course_handicap > HOLES_PER_ROUND && hole_stroke_index <= course_handicap - HOLES_PER_ROUND
    {
        strokes += 1;
    }
    strokes
}

#[must_use]
pub fn allocate_strokes(
    player_id: &str,
    course_handicap: i32,
    holes: &[HoleDefinition],
) -> Vec<StrokeAllocation> {
    holes
        .iter()
        .map(|hole| StrokeAllocation {
            hole_number: hole.number,
            player_id: player_id.to_string(),
            strokes: compute_stroke_allocation(course_handicap, hole.stroke_index),
        })
        .collect()
}

/// Reports stroke indexes outside 1..=18 and stroke indexes shared by several holes.
///
/// Holes are deduplicated by number first, so the same hole seen for several players
/// is only checked once.
#[must_use]
pub fn check_stroke_indexes(holes: &[HoleDefinition]) -> Vec<CourseDataIssue> {
    let mut by_number: BTreeMap<i32, &HoleDefinition> = BTreeMap::new();
    for hole in holes {
        by_number.entry(hole.number).or_insert(hole);
    }

    let mut issues = vec![];
    let mut by_index: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for hole in by_number.values() {
        if hole.has_valid_stroke_index() {
            by_index.entry(hole.stroke_index).or_default().push(hole.number);
        } else {
            issues.push(CourseDataIssue::StrokeIndexOutOfRange {
                hole_number: hole.number,
                stroke_index: hole.stroke_index,
            });
        }
    }

    for (stroke_index, hole_numbers) in by_index {
        if hole_numbers.len() > 1 {
            issues.push(CourseDataIssue::DuplicateStrokeIndex {
                stroke_index,
                hole_numbers,
            });
        }
    }
    issues
}
