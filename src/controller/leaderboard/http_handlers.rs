use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use std::collections::HashMap;

use super::data_service::{get_data_for_leaderboard_page, get_team_scorecard};
use super::request::parse_leaderboard_request;
use crate::controller::AppState;
use crate::error::AppError;
use crate::view::leaderboard::render_leaderboard_template;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route(
            "/tournaments/{tournament_id}/leaderboard",
            web::get().to(leaderboard),
        )
        .route(
            "/tournaments/{tournament_id}/teams/{team_id}/scorecard",
            web::get().to(team_scorecard),
        );
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// # Errors
///
/// Will return `Err` if the request is malformed or the leaderboard cannot be computed
pub async fn leaderboard(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = parse_leaderboard_request(&path.into_inner(), &query)?;
    let page =
        get_data_for_leaderboard_page(state.storage.as_ref(), &request, state.pickup_policy)
            .await?;

    if request.want_json {
        Ok(HttpResponse::Ok().json(&page.report.rows))
    } else {
        let markup = render_leaderboard_template(&page);
        Ok(HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string()))
    }
}

/// # Errors
///
/// Will return `Err` if the tournament or team is unknown
pub async fn team_scorecard(
    path: web::Path<(String, String)>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (tournament_id, team_id) = path.into_inner();
    let scorecard = get_team_scorecard(
        state.storage.as_ref(),
        &tournament_id,
        &team_id,
        state.pickup_policy,
    )
    .await?;
    Ok(HttpResponse::Ok().json(scorecard))
}
