use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

use super::handicap::{compute_stroke_allocation, course_handicap_for};
use super::normalize::normalize_score_token;
use super::sort_utils::sort_groups;
use crate::error::{EngineError, ScoreTokenError};
use crate::model::{AggregationMode, LeaderboardRow, PickupPolicy, ScoreRow, SkippedScore};

/// Partitions rows by team or by player, ordered by entity id.
#[must_use]
pub fn group_by_entity(rows: &[ScoreRow], mode: AggregationMode) -> Vec<(&str, Vec<&ScoreRow>)> {
    let mut grouped: HashMap<&str, Vec<&ScoreRow>, RandomState> = HashMap::default();

    for row in rows {
        let key = match mode {
            AggregationMode::Team => row.team_id.as_str(),
            AggregationMode::Individual => row.player_id.as_str(),
        };
        grouped.entry(key).or_default().push(row);
    }

    sort_groups(grouped)
}

/// Alphabetical, comma separated, each name once.
#[must_use]
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy)]
struct HoleResult<'a> {
    gross: i32,
    net: i32,
    player_id: &'a str,
}

impl HoleResult<'_> {
    // lowest gross wins; among equal gross the lower net, then player id
    fn beats(&self, other: &HoleResult<'_>) -> bool {
        (self.gross, self.net, self.player_id) < (other.gross, other.net, other.player_id)
    }
}

#[derive(Debug)]
struct HoleTally<'a> {
    par: i32,
    best: Option<HoleResult<'a>>,
}

/// Folds one entity's rows into a leaderboard row, best ball per hole.
///
/// A single-member group degenerates to that player's own scores, so the same fold
/// serves team and individual leaderboards. Unparsable tokens are appended to
/// `skipped` and do not count towards the hole.
///
/// # Errors
///
/// Will return `Err` if any member is missing tee ratings
pub fn aggregate_entity(
    entity_id: &str,
    members: &[&ScoreRow],
    pickup_policy: PickupPolicy,
    skipped: &mut Vec<SkippedScore>,
) -> Result<LeaderboardRow, EngineError> {
    let mut holes: BTreeMap<i32, HoleTally> = BTreeMap::new();

    for row in members {
        let course_handicap = course_handicap_for(&row.player_context()?);
        let tally = holes.entry(row.hole_number).or_insert_with(|| HoleTally {
            par: row.par,
            best: None,
        });

        let gross = match normalize_score_token(&row.score_token, row.par, pickup_policy) {
            Ok(Some(gross)) => gross,
            Ok(None) => continue,
            Err(ScoreTokenError::Unparsable(token)) => {
                warn!(
                    player_id = %row.player_id,
                    hole_number = row.hole_number,
                    token = %token,
                    "ignoring unparsable score token"
                );
                skipped.push(SkippedScore {
                    player_id: row.player_id.clone(),
                    hole_number: row.hole_number,
                    token,
                });
                continue;
            }
        };

        let strokes = compute_stroke_allocation(course_handicap, row.stroke_index);
        let candidate = HoleResult {
            gross,
            net: gross.saturating_sub(i32::from(strokes)),
            player_id: row.player_id.as_str(),
        };
        if tally.best.is_none_or(|best| candidate.beats(&best)) {
            tally.best = Some(candidate);
        }
    }

    let mut leaderboard_row = LeaderboardRow {
        entity_id: entity_id.to_string(),
        display_name: join_names(members.iter().map(|row| row.player_display_name.as_str())),
        gross_relative_to_par: 0,
        net_relative_to_par: 0,
        holes_completed: 0,
        course_par: 0,
    };

    // saturating: pars come straight from storage
    for tally in holes.values() {
        leaderboard_row.course_par = leaderboard_row.course_par.saturating_add(tally.par);
        if let Some(best) = tally.best {
            leaderboard_row.holes_completed += 1;
            leaderboard_row.gross_relative_to_par = leaderboard_row
                .gross_relative_to_par
                .saturating_add(best.gross.saturating_sub(tally.par));
            leaderboard_row.net_relative_to_par = leaderboard_row
                .net_relative_to_par
                .saturating_add(best.net.saturating_sub(tally.par));
        }
    }

    Ok(leaderboard_row)
}
