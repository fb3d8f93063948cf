// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::result::Result as StdResult;

use diesel::Connection as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use iidx_score_repo_sqlite::DbConnection;
use iidx_score_usecases_sqlite as uc;

pub mod score;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BadRequest(anyhow::Error),

    #[error(transparent)]
    UseCase(uc::Error),

    #[error(transparent)]
    DatabaseTransaction(#[from] diesel::result::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<uc::Error> for Error {
    fn from(err: uc::Error) -> Self {
        Self::UseCase(err)
    }
}

impl From<iidx_score_usecases::Error> for Error {
    fn from(err: iidx_score_usecases::Error) -> Self {
        uc::Error::from(err).into()
    }
}

pub type Result<T> = StdResult<T, Error>;

fn new_request_id() -> Uuid {
    Uuid::new_v4()
}
