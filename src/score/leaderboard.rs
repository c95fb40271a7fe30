use tracing::{debug, warn};

use super::handicap::{check_stroke_indexes, compute_stroke_allocation, course_handicap_for};
use super::normalize::normalize_score_token;
use super::score_aggregators::{aggregate_entity, group_by_entity};
use super::sort_utils::rank_leaderboard;
use crate::error::EngineError;
use crate::model::{
    AggregationMode, HoleDefinition, LeaderboardReport, LeaderboardRow, PickupPolicy,
    ScoreDisplay, ScoreRow, ScorecardEntry,
};

/// Ranked leaderboard for a tournament's score rows.
///
/// # Errors
///
/// Will return `Err` if a player's tee ratings are missing
pub fn build_leaderboard(
    rows: &[ScoreRow],
    mode: AggregationMode,
    pickup_policy: PickupPolicy,
) -> Result<Vec<LeaderboardRow>, EngineError> {
    Ok(build_leaderboard_report(rows, mode, pickup_policy)?.rows)
}

/// Same as [`build_leaderboard`], also returning the score entries that were ignored.
///
/// # Errors
///
/// Will return `Err` if a player's tee ratings are missing
pub fn build_leaderboard_report(
    rows: &[ScoreRow],
    mode: AggregationMode,
    pickup_policy: PickupPolicy,
) -> Result<LeaderboardReport, EngineError> {
    let holes: Vec<HoleDefinition> = rows.iter().map(ScoreRow::hole).collect();
    for issue in check_stroke_indexes(&holes) {
        warn!(?issue, "malformed course data, affected holes receive no strokes");
    }

    let mut skipped = vec![];
    let mut leaderboard_rows = vec![];
    for (entity_id, members) in group_by_entity(rows, mode) {
        leaderboard_rows.push(aggregate_entity(
            entity_id,
            &members,
            pickup_policy,
            &mut skipped,
        )?);
    }

    skipped.sort_by(|a, b| {
        a.player_id
            .cmp(&b.player_id)
            .then_with(|| a.hole_number.cmp(&b.hole_number))
            .then_with(|| a.token.cmp(&b.token))
    });

    let rows = rank_leaderboard(leaderboard_rows);
    debug!(
        %mode,
        entities = rows.len(),
        skipped = skipped.len(),
        "leaderboard built"
    );

    Ok(LeaderboardReport { rows, skipped })
}

/// Hole by hole view of the given rows with each player's stroke holes marked.
///
/// # Errors
///
/// Will return `Err` if a player's tee ratings are missing
pub fn build_scorecard(
    rows: &[ScoreRow],
    pickup_policy: PickupPolicy,
) -> Result<Vec<ScorecardEntry>, EngineError> {
    let mut entries = rows
        .iter()
        .map(|row| {
            let course_handicap = course_handicap_for(&row.player_context()?);
            let strokes = compute_stroke_allocation(course_handicap, row.stroke_index);
            let gross = normalize_score_token(&row.score_token, row.par, pickup_policy)
                .unwrap_or_else(|e| {
                    warn!(player_id = %row.player_id, hole_number = row.hole_number, "{e}");
                    None
                });
            let net = gross.map(|gross| gross.saturating_sub(i32::from(strokes)));

            Ok(ScorecardEntry {
                player_id: row.player_id.clone(),
                player_display_name: row.player_display_name.clone(),
                hole_number: row.hole_number,
                par: row.par,
                stroke_index: row.stroke_index,
                strokes,
                gross,
                net,
                score_display: net
                    .map(|net| ScoreDisplay::from_relative_to_par(net.saturating_sub(row.par))),
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    entries.sort_by(|a, b| {
        a.player_display_name
            .cmp(&b.player_display_name)
            .then_with(|| a.player_id.cmp(&b.player_id))
            .then_with(|| a.hole_number.cmp(&b.hole_number))
    });

    Ok(entries)
}
