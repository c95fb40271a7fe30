use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::course::{HoleDefinition, TeeRating};
use crate::error::EngineError;

/// Handicap inputs for one player in one tournament.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlayerContext {
    pub handicap_index: f64,
    /// Tournament handicap allowance in (0, 1], e.g. 0.8 for team formats.
    pub awarded_handicap_fraction: f64,
    pub tee: TeeRating,
}

/// One hole of one player, joined with everything needed to score it.
///
/// Tee fields are optional because a player may not have been assigned a rated tee;
/// the engine refuses to guess and reports [`EngineError::MissingTeeData`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoreRow {
    pub hole_number: i32,
    pub stroke_index: i32,
    pub par: i32,
    /// Digit string, pickup sentinel `X`, or empty when not yet played.
    pub score_token: String,
    pub player_id: String,
    pub team_id: String,
    pub player_display_name: String,
    pub handicap_index: f64,
    pub awarded_handicap_fraction: f64,
    pub tee_slope_rating: Option<i32>,
    pub tee_course_rating: Option<f64>,
    pub tee_par: Option<i32>,
}

impl ScoreRow {
    #[must_use]
    pub fn hole(&self) -> HoleDefinition {
        HoleDefinition {
            number: self.hole_number,
            par: self.par,
            stroke_index: self.stroke_index,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if any of the tee ratings is absent
    pub fn tee_rating(&self) -> Result<TeeRating, EngineError> {
        match (self.tee_slope_rating, self.tee_course_rating, self.tee_par) {
            (Some(slope_rating), Some(course_rating), Some(par)) => Ok(TeeRating {
                slope_rating,
                course_rating,
                par,
            }),
            _ => Err(EngineError::MissingTeeData {
                player_id: self.player_id.clone(),
            }),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the player's tee is not rated
    pub fn player_context(&self) -> Result<PlayerContext, EngineError> {
        Ok(PlayerContext {
            handicap_index: self.handicap_index,
            awarded_handicap_fraction: self.awarded_handicap_fraction,
            tee: self.tee_rating()?,
        })
    }
}

/// Bonus strokes one player receives on one hole.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StrokeAllocation {
    pub hole_number: i32,
    pub player_id: String,
    pub strokes: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub entity_id: String,
    pub display_name: String,
    pub gross_relative_to_par: i32,
    pub net_relative_to_par: i32,
    pub holes_completed: i32,
    pub course_par: i32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    #[default]
    Team,
    Individual,
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationMode::Team => write!(f, "team"),
            AggregationMode::Individual => write!(f, "individual"),
        }
    }
}

impl FromStr for AggregationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "team" | "teams" => Ok(AggregationMode::Team),
            "individual" | "individuals" => Ok(AggregationMode::Individual),
            other => Err(format!("unknown leaderboard mode '{other}'")),
        }
    }
}

/// How a pickup (`X`) is scored: par plus a fixed number of strokes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupPolicy {
    pub strokes_over_par: i32,
}

impl Default for PickupPolicy {
    fn default() -> Self {
        Self {
            strokes_over_par: 3,
        }
    }
}

/// A non-empty score token that was excluded from aggregation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SkippedScore {
    pub player_id: String,
    pub hole_number: i32,
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct LeaderboardReport {
    pub rows: Vec<LeaderboardRow>,
    pub skipped: Vec<SkippedScore>,
}

/// A ranked row with its shared finishing position.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub position: usize,
    pub tied: bool,
    pub row: LeaderboardRow,
}

impl Standing {
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.tied {
            format!("T{}", self.position)
        } else {
            self.position.to_string()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScorecardEntry {
    pub player_id: String,
    pub player_display_name: String,
    pub hole_number: i32,
    pub par: i32,
    pub stroke_index: i32,
    pub strokes: u8,
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub score_display: Option<ScoreDisplay>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyOrWorse,
}

impl ScoreDisplay {
    /// Classifies a hole score by its distance from par.
    #[must_use]
    pub fn from_relative_to_par(i: i32) -> Self {
        match i {
            i32::MIN..=-3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            _ => ScoreDisplay::TripleBogeyOrWorse,
        }
    }
}
