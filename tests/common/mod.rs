#![allow(dead_code)]

use rusty_golf_handicap::model::ScoreRow;
use rusty_golf_handicap::storage::{SqliteStorage, StorageError};

/// A hole row on an average-slope tee (113 / 72.0 / par 72) with full allowance.
pub fn score_row(
    player_id: &str,
    team_id: &str,
    display_name: &str,
    handicap_index: f64,
    hole_number: i32,
    stroke_index: i32,
    par: i32,
    score_token: &str,
) -> ScoreRow {
    ScoreRow {
        hole_number,
        stroke_index,
        par,
        score_token: score_token.to_string(),
        player_id: player_id.to_string(),
        team_id: team_id.to_string(),
        player_display_name: display_name.to_string(),
        handicap_index,
        awarded_handicap_fraction: 1.0,
        tee_slope_rating: Some(113),
        tee_course_rating: Some(72.0),
        tee_par: Some(72),
    }
}

/// Fresh in-memory database with the schema and `tests/fixtures/tournament_fixture.sql`.
///
/// t1: two teams of two on course c1 (par 4 everywhere, stroke index = hole number)
/// t2: one player on an unrated tee
/// t3: a course without hole definitions
pub async fn setup_test_storage() -> Result<SqliteStorage, StorageError> {
    let storage = SqliteStorage::open_in_memory()?;
    storage
        .execute_batch(include_str!("../../src/sql/schema/sqlite/00_table_drop.sql"))
        .await?;
    storage.create_tables().await?;
    storage
        .execute_batch(include_str!("../fixtures/tournament_fixture.sql"))
        .await?;
    Ok(storage)
}
