use std::collections::HashMap;

use crate::error::AppError;
use crate::model::AggregationMode;

/// Everything a leaderboard request needs, parsed once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRequest {
    pub tournament_id: String,
    pub mode: AggregationMode,
    pub want_json: bool,
}

/// # Errors
///
/// Will return `Err` if the tournament id is blank or the mode is not recognised
#[allow(clippy::implicit_hasher)]
pub fn parse_leaderboard_request(
    tournament_id: &str,
    query: &HashMap<String, String>,
) -> Result<LeaderboardRequest, AppError> {
    let tournament_id = tournament_id.trim();
    if tournament_id.is_empty() {
        return Err(AppError::BadRequest(
            "tournament id is required".to_string(),
        ));
    }

    let mode = match query.get("mode") {
        Some(mode) => mode.parse().map_err(AppError::BadRequest)?,
        None => AggregationMode::default(),
    };
    let want_json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    Ok(LeaderboardRequest {
        tournament_id: tournament_id.to_string(),
        mode,
        want_json,
    })
}
