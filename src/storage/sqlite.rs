use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::{Arc, Mutex};

use super::{Storage, StorageError, TABLES_AND_DDL, TournamentDetails};
use crate::model::ScoreRow;

const SCORE_ROWS_SQL: &str = include_str!("../sql/functions/sqlite/01_sp_get_score_rows.sql");
const TOURNAMENT_SQL: &str = include_str!("../sql/functions/sqlite/02_sp_get_tournament.sql");

/// Sqlite backed [`Storage`]. One connection, used from the blocking pool.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    #[must_use]
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the database file cannot be opened
    pub fn open(db_name: &str) -> Result<Self, StorageError> {
        Ok(Self::new(Connection::open(db_name)?))
    }

    /// # Errors
    ///
    /// Will return `Err` if sqlite cannot allocate the database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    /// # Errors
    ///
    /// Will return `Err` if any statement fails; earlier statements are rolled back
    pub async fn execute_batch(&self, sql: &str) -> Result<(), StorageError> {
        let sql = sql.to_string();
        self.interact(move |conn| {
            let tx = conn.transaction()?;
            tx.execute_batch(&sql)?;
            tx.commit()?;
            Ok(())
        })
        .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the ddl fails
    pub async fn create_tables(&self) -> Result<(), StorageError> {
        let ddl = TABLES_AND_DDL
            .iter()
            .map(|(_, ddl)| *ddl)
            .collect::<Vec<_>>()
            .join("\n");
        self.execute_batch(&ddl).await
    }

    async fn interact<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|_| StorageError::Db("sqlite connection lock poisoned".to_string()))?;
            f(&mut conn)
        })
        .await?
    }
}

struct RawScoreRow {
    hole_number: i32,
    stroke_index: Option<i32>,
    par: Option<i32>,
    score: String,
    player_id: String,
    team_id: String,
    player_name: String,
    handicap_index: f64,
    awarded_handicap: f64,
    tee_slope_rating: Option<i32>,
    tee_course_rating: Option<f64>,
    tee_par: Option<i32>,
}

impl RawScoreRow {
    fn into_score_row(self, tournament_id: &str) -> Result<ScoreRow, StorageError> {
        let (Some(stroke_index), Some(par)) = (self.stroke_index, self.par) else {
            return Err(StorageError::MissingCourseData(format!(
                "tournament {tournament_id} has no course definition for hole {}",
                self.hole_number
            )));
        };
        Ok(ScoreRow {
            hole_number: self.hole_number,
            stroke_index,
            par,
            score_token: self.score,
            player_id: self.player_id,
            team_id: self.team_id,
            player_display_name: self.player_name,
            handicap_index: self.handicap_index,
            awarded_handicap_fraction: self.awarded_handicap,
            tee_slope_rating: self.tee_slope_rating,
            tee_course_rating: self.tee_course_rating,
            tee_par: self.tee_par,
        })
    }
}

fn query_score_rows(
    conn: &Connection,
    tournament_id: &str,
    team_id: Option<&str>,
) -> Result<Vec<ScoreRow>, StorageError> {
    let mut stmt = conn.prepare(SCORE_ROWS_SQL.trim())?;
    let raw_rows = stmt
        .query_map(params![tournament_id, team_id], |row| {
            Ok(RawScoreRow {
                hole_number: row.get("hole_number")?,
                stroke_index: row.get("stroke_index")?,
                par: row.get("par")?,
                score: row.get("score")?,
                player_id: row.get("player_id")?,
                team_id: row.get("team_id")?,
                player_name: row.get("player_name")?,
                handicap_index: row.get("handicap_index")?,
                awarded_handicap: row.get("awarded_handicap")?,
                tee_slope_rating: row.get("tee_slope_rating")?,
                tee_course_rating: row.get("tee_course_rating")?,
                tee_par: row.get("tee_par")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    raw_rows
        .into_iter()
        .map(|raw| raw.into_score_row(tournament_id))
        .collect()
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get_tournament(&self, tournament_id: &str) -> Result<TournamentDetails, StorageError> {
        let tournament_id = tournament_id.to_string();
        self.interact(move |conn| {
            conn.query_row(TOURNAMENT_SQL.trim(), params![tournament_id], |row| {
                Ok(TournamentDetails {
                    tournament_id: row.get("tournament_id")?,
                    name: row.get("tournament_name")?,
                    course_name: row.get("course_name")?,
                    awarded_handicap: row.get("awarded_handicap")?,
                })
            })
            .optional()?
            .ok_or_else(|| StorageError::NotFound(format!("tournament {tournament_id}")))
        })
        .await
    }

    async fn get_score_rows(&self, tournament_id: &str) -> Result<Vec<ScoreRow>, StorageError> {
        let tournament_id = tournament_id.to_string();
        self.interact(move |conn| query_score_rows(conn, &tournament_id, None))
            .await
    }

    async fn get_team_score_rows(
        &self,
        tournament_id: &str,
        team_id: &str,
    ) -> Result<Vec<ScoreRow>, StorageError> {
        let tournament_id = tournament_id.to_string();
        let team_id = team_id.to_string();
        self.interact(move |conn| query_score_rows(conn, &tournament_id, Some(&team_id)))
            .await
    }
}
