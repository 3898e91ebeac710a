//! src/error.rs

use crate::domain::ValidationError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

pub type AppResult<T> = Result<T, Error>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("A client with this email already exists")]
    ConflictError(#[source] sqlx::Error),
    /// The store answered with an error; `message` is what the caller gets to see.
    #[error("{message}")]
    StoreError {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ValidationError(_) => StatusCode::BAD_REQUEST,
            Error::ConflictError(_) => StatusCode::CONFLICT,
            Error::StoreError { .. } | Error::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: &self.to_string(),
        })
    }
}

impl Error {
    /// Map a failed store call to the error the caller should see.
    ///
    /// Errors reported by the database itself become a `StoreError` with the given
    /// message, or a `ConflictError` for unique violations. Failing to reach the
    /// database at all is unexpected.
    pub fn from_store_error(err: sqlx::Error, message: &'static str) -> Self {
        let is_unique_violation = matches!(
            &err,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation()
        );
        if is_unique_violation {
            return Error::ConflictError(err);
        }
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Error::UnexpectedError(
                anyhow::Error::new(err).context("Failed to reach the client store."),
            ),
            _ => Error::StoreError {
                message,
                source: err,
            },
        }
    }
}
