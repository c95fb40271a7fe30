use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::ScoreRow;

pub use crate::error::StorageError;

pub mod sqlite;

pub use sqlite::SqliteStorage;

pub const TABLES_AND_DDL: &[(&str, &str)] = &[
    ("courses", include_str!("../sql/schema/sqlite/01_course.sql")),
    ("tournaments", include_str!("../sql/schema/sqlite/02_tournament.sql")),
    ("players", include_str!("../sql/schema/sqlite/03_player.sql")),
    ("holes", include_str!("../sql/schema/sqlite/04_holes.sql")),
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TournamentDetails {
    pub tournament_id: String,
    pub name: String,
    pub course_name: String,
    pub awarded_handicap: f64,
}

/// Read side of the tournament database, handed to the service at startup.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_tournament(&self, tournament_id: &str) -> Result<TournamentDetails, StorageError>;

    /// Every hole of every player in the tournament, joined with course and tee data.
    async fn get_score_rows(&self, tournament_id: &str) -> Result<Vec<ScoreRow>, StorageError>;

    async fn get_team_score_rows(
        &self,
        tournament_id: &str,
        team_id: &str,
    ) -> Result<Vec<ScoreRow>, StorageError>;
}
