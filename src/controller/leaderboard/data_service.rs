use std::time::Instant;
use tracing::info;

use super::request::LeaderboardRequest;
use crate::error::{AppError, StorageError};
use crate::model::{AggregationMode, LeaderboardReport, PickupPolicy, ScorecardEntry};
use crate::score::{build_leaderboard_report, build_scorecard};
use crate::storage::{Storage, TournamentDetails};

#[derive(Debug, Clone)]
pub struct LeaderboardPage {
    pub tournament: TournamentDetails,
    pub mode: AggregationMode,
    pub report: LeaderboardReport,
    pub generated_at: String,
}

/// Recomputes the leaderboard from the current score rows. Nothing is cached.
///
/// # Errors
///
/// Will return `Err` if the tournament is unknown, the database fails, or course
/// and tee data are incomplete
pub async fn get_data_for_leaderboard_page(
    storage: &dyn Storage,
    request: &LeaderboardRequest,
    pickup_policy: PickupPolicy,
) -> Result<LeaderboardPage, AppError> {
    let start_time = Instant::now();

    let tournament = storage.get_tournament(&request.tournament_id).await?;
    let rows = storage.get_score_rows(&request.tournament_id).await?;
    let report = build_leaderboard_report(&rows, request.mode, pickup_policy)?;

    info!(
        tournament_id = %request.tournament_id,
        mode = %request.mode,
        score_rows = rows.len(),
        entities = report.rows.len(),
        skipped = report.skipped.len(),
        elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
        "leaderboard computed"
    );

    Ok(LeaderboardPage {
        tournament,
        mode: request.mode,
        report,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// # Errors
///
/// Will return `Err` if the tournament or team is unknown, or tee data is missing
pub async fn get_team_scorecard(
    storage: &dyn Storage,
    tournament_id: &str,
    team_id: &str,
    pickup_policy: PickupPolicy,
) -> Result<Vec<ScorecardEntry>, AppError> {
    storage.get_tournament(tournament_id).await?;

    let rows = storage.get_team_score_rows(tournament_id, team_id).await?;
    if rows.is_empty() {
        return Err(StorageError::NotFound(format!(
            "team {team_id} in tournament {tournament_id}"
        ))
        .into());
    }

    let scorecard = build_scorecard(&rows, pickup_policy)?;
    info!(
        tournament_id,
        team_id,
        holes = scorecard.len(),
        "team scorecard computed"
    );
    Ok(scorecard)
}
