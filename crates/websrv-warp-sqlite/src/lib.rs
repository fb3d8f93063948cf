// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{convert::Infallible, error::Error as StdError, result::Result as StdResult};

use serde::Serialize;
use thiserror::Error;
use warp::{
    Reply,
    body::BodyDeserializeError,
    http::StatusCode,
    reject::{self, InvalidHeader, InvalidQuery, MethodNotAllowed, Reject, Rejection},
};

use iidx_score_backend_webapi_json as api;
use iidx_score_core::InputErrors;
use iidx_score_repo::prelude::RepoError;
use iidx_score_storage_sqlite::{
    self as db,
    connection::pool::{PooledConnection, gatekeeper::Gatekeeper as DatabaseConnectionGatekeeper},
};
use iidx_score_usecases_sqlite as uc;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BadRequest(anyhow::Error),

    /// Rejected input with one message per invalid field
    #[error(transparent)]
    Invalid(InputErrors),

    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("timeout: {reason}")]
    Timeout { reason: String },

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest(err) | Self::Other(err) => err.to_string(),
            Self::Invalid(_) => "invalid input".to_owned(),
            Self::NotFound | Self::Conflict | Self::ServiceUnavailable => {
                status_code_to_string(self.status_code())
            }
            Self::Timeout { reason } => reason.clone(),
        }
    }

    /// Field-level messages of rejected input
    #[must_use]
    pub fn field_errors(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => errors.messages(),
            _ => Vec::new(),
        }
    }
}

impl From<api::Error> for Error {
    fn from(err: api::Error) -> Self {
        match err {
            api::Error::BadRequest(err) => Self::BadRequest(err),
            api::Error::UseCase(err) => err.into(),
            api::Error::DatabaseTransaction(err) => Self::Other(err.into()),
            api::Error::Other(err) => Self::Other(err),
        }
    }
}

impl From<uc::Error> for Error {
    fn from(err: uc::Error) -> Self {
        match err {
            uc::Error::Input(errors) => Self::Invalid(errors),
            uc::Error::Storage(err) => err.into(),
            uc::Error::Repository(err) => err.into(),
            uc::Error::DatabaseMigration(err) | uc::Error::Other(err) => Self::Other(err),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::NotFound,
            RepoError::Conflict => Self::Conflict,
            RepoError::Other(err) => Self::Other(err),
        }
    }
}

impl From<db::Error> for Error {
    fn from(err: db::Error) -> Self {
        match err {
            db::Error::Database(err) => Self::Other(err.into()),
            db::Error::DatabaseConnection(err) => Self::Other(err.into()),
            db::Error::DatabaseConnectionPool(err) => Self::Other(err.into()),
            db::Error::TaskScheduling(err) => Self::Other(err.into()),
            db::Error::TaskTimeout { reason } => Self::Timeout { reason },
            db::Error::ServiceUnavailable => Self::ServiceUnavailable,
            db::Error::Other(err) => Self::Other(err),
        }
    }
}

pub type Result<T> = StdResult<T, Error>;

impl Reject for Error {}

pub fn reject_on_error(err: impl Into<Error>) -> Rejection {
    reject::custom(err.into())
}

pub fn after_blocking_task_finished<T, E1, E2>(res: StdResult<StdResult<T, E1>, E2>) -> Result<T>
where
    E1: Into<Error>,
    E2: Into<Error>,
{
    res.map_err(Into::into)
        .and_then(|res| res.map_err(Into::into))
}

pub async fn spawn_blocking_write_task<H, T, E>(
    gatekeeper: &DatabaseConnectionGatekeeper,
    handler: H,
) -> Result<T>
where
    H: FnOnce(PooledConnection) -> StdResult<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<Error> + Send + 'static,
{
    after_blocking_task_finished(gatekeeper.spawn_blocking_write_task(handler).await)
}

pub async fn spawn_blocking_read_task<H, T, E>(
    gatekeeper: &DatabaseConnectionGatekeeper,
    handler: H,
) -> Result<T>
where
    H: FnOnce(PooledConnection) -> StdResult<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<Error> + Send + 'static,
{
    after_blocking_task_finished(gatekeeper.spawn_blocking_read_task(handler).await)
}

/// An API error serializable to JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponseBody {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

fn status_code_to_string(code: StatusCode) -> String {
    code.canonical_reason()
        .unwrap_or_else(|| code.as_str())
        .to_owned()
}

fn source_message(err: &dyn StdError) -> String {
    err.source()
        .map_or_else(|| err.to_string(), ToString::to_string)
}

#[expect(clippy::unused_async)] // async needed for warp filter
pub async fn handle_rejection(reject: Rejection) -> StdResult<impl Reply, Infallible> {
    let mut errors = Vec::new();
    let (code, message) = if reject.is_not_found() {
        let code = StatusCode::NOT_FOUND;
        (code, status_code_to_string(code))
    } else if let Some(err) = reject.find::<Error>() {
        if matches!(err, Error::Other(_)) {
            log::warn!("Request failed: {err}");
        }
        errors = err.field_errors();
        (err.status_code(), err.message())
    } else if let Some(err) = reject.find::<InvalidHeader>() {
        (StatusCode::BAD_REQUEST, source_message(err))
    } else if let Some(err) = reject.find::<InvalidQuery>() {
        (StatusCode::BAD_REQUEST, source_message(err))
    } else if let Some(err) = reject.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, source_message(err))
    } else if let Some(err) = reject.find::<MethodNotAllowed>() {
        // This must have the least priority, because most rejections
        // contain a MethodNotAllowed element!
        (StatusCode::METHOD_NOT_ALLOWED, err.to_string())
    } else {
        log::error!("Unhandled rejection {reject:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{reject:?}"))
    };

    let json_reply = warp::reply::json(&ErrorResponseBody {
        code: code.as_u16(),
        message,
        errors,
    });

    Ok(warp::reply::with_status(json_reply, code))
}

#[cfg(test)]
mod tests;
