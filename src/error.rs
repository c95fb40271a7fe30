use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Errors that abort a whole leaderboard computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("missing tee rating for player {player_id}")]
    MissingTeeData { player_id: String },
}

/// A single score token that could not be read. Recoverable: the row is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreTokenError {
    #[error("unparsable score token {0:?}")]
    Unparsable(String),
}

#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("db error: {0}")]
    Db(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("missing course data: {0}")]
    MissingCourseData(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Db(err.to_string())
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Db(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(StorageError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Engine(EngineError::MissingTeeData { .. })
            | AppError::Storage(StorageError::MissingCourseData(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Storage(StorageError::Db(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}
