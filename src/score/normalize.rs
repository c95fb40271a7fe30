use crate::error::ScoreTokenError;
use crate::model::PickupPolicy;

pub const PICKUP_TOKEN: &str = "X";

/// Largest gross score accepted for a single hole.
pub const MAX_HOLE_STROKES: i32 = 99;

/// Turns a raw score token into gross strokes.
///
/// * empty (or whitespace) token: `Ok(None)`, the hole has not been played
/// * `X`: a pickup, scored as par plus the policy's penalty
/// * digits: the gross strokes, between 1 and [`MAX_HOLE_STROKES`]
///
/// # Errors
///
/// Will return `Err` for any other non-empty token. Callers exclude the row
/// rather than counting it as zero strokes.
pub fn normalize_score_token(
    score_token: &str,
    hole_par: i32,
    pickup_policy: PickupPolicy,
) -> Result<Option<i32>, ScoreTokenError> {
    let token = score_token.trim();
    if token.is_empty() {
        return Ok(None);
    }
    if token.eq_ignore_ascii_case(PICKUP_TOKEN) {
        return hole_par
            .checked_add(pickup_policy.strokes_over_par)
            .map(Some)
            .ok_or_else(|| ScoreTokenError::Unparsable(score_token.to_string()));
    }

    match token.parse::<i32>() {
        Ok(gross) if (1..=MAX_HOLE_STROKES).contains(&gross) => Ok(Some(gross)),
        _ => Err(ScoreTokenError::Unparsable(score_token.to_string())),
    }
}
