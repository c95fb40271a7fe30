mod common;

use actix_web::web::Data;
use actix_web::{App, http::StatusCode, test};
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::Arc;

use common::setup_test_storage;
use rusty_golf_handicap::controller::AppState;
use rusty_golf_handicap::controller::leaderboard::configure;
use rusty_golf_handicap::model::PickupPolicy;

async fn test_state() -> Result<AppState, Box<dyn std::error::Error>> {
    let storage = setup_test_storage().await?;
    Ok(AppState::new(Arc::new(storage), PickupPolicy::default()))
}

#[actix_web::test]
async fn test4_leaderboard_json() -> Result<(), Box<dyn std::error::Error>> {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(test_state().await?))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/tournaments/t1/leaderboard?json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().ok_or("leaderboard should be a json array")?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["entity_id"], "team-a");
    assert_eq!(rows[0]["display_name"], "Alice, Bob");
    assert_eq!(rows[0]["net_relative_to_par"], -1);
    assert_eq!(rows[1]["gross_relative_to_par"], 4);
    assert_eq!(rows[1]["holes_completed"], 3);

    let req = test::TestRequest::get()
        .uri("/tournaments/t1/leaderboard?json=1&mode=individual")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .ok_or("leaderboard should be a json array")?
        .iter()
        .filter_map(|row| row["display_name"].as_str())
        .collect();
    assert_eq!(names, vec!["Dan", "Alice", "Carol", "Bob"]);
    Ok(())
}

#[actix_web::test]
async fn test4_leaderboard_html() -> Result<(), Box<dyn std::error::Error>> {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(test_state().await?))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/tournaments/t1/leaderboard")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = Html::parse_document(std::str::from_utf8(&body)?);

    let title = Selector::parse("h1").unwrap();
    assert_eq!(
        html.select(&title).next().map(|h| h.text().collect::<String>()),
        Some("Spring Scramble".to_string())
    );

    let positions = Selector::parse("td.position").unwrap();
    let labels: Vec<String> = html
        .select(&positions)
        .map(|td| td.text().collect::<String>())
        .collect();
    assert_eq!(labels, vec!["T1", "T1"]);

    let gross = Selector::parse("td.gross").unwrap();
    let gross: Vec<String> = html
        .select(&gross)
        .map(|td| td.text().collect::<String>())
        .collect();
    assert_eq!(gross, vec!["E", "+4"]);

    let skipped = Selector::parse("p.skipped-scores").unwrap();
    assert!(html.select(&skipped).next().is_some());
    Ok(())
}

#[actix_web::test]
async fn test4_error_statuses() -> Result<(), Box<dyn std::error::Error>> {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(test_state().await?))
            .configure(configure),
    )
    .await;

    let cases = [
        ("/tournaments/t1/leaderboard?mode=matchplay", StatusCode::BAD_REQUEST),
        ("/tournaments/nope/leaderboard", StatusCode::NOT_FOUND),
        ("/tournaments/t2/leaderboard?json=1", StatusCode::UNPROCESSABLE_ENTITY),
        ("/tournaments/t3/leaderboard?json=1", StatusCode::UNPROCESSABLE_ENTITY),
        ("/tournaments/t1/teams/nope/scorecard", StatusCode::NOT_FOUND),
        ("/health", StatusCode::OK),
    ];
    for (uri, status) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/tournaments/t2/leaderboard?json=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["error"], "missing tee rating for player p5");
    Ok(())
}

#[actix_web::test]
async fn test4_team_scorecard() -> Result<(), Box<dyn std::error::Error>> {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(test_state().await?))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/tournaments/t1/teams/team-b/scorecard")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let entries = body.as_array().ok_or("scorecard should be a json array")?;
    assert_eq!(entries.len(), 6);

    // Carol first by name; pickup on hole 2 with two strokes
    assert_eq!(entries[1]["player_display_name"], "Carol");
    assert_eq!(entries[1]["hole_number"], 2);
    assert_eq!(entries[1]["gross"], 7);
    assert_eq!(entries[1]["strokes"], 2);
    assert_eq!(entries[1]["net"], 5);
    assert_eq!(entries[1]["score_display"], "Bogey");

    // Dan's unreadable hole has no score
    assert_eq!(entries[4]["player_display_name"], "Dan");
    assert_eq!(entries[4]["hole_number"], 2);
    assert!(entries[4]["gross"].is_null());
    Ok(())
}
