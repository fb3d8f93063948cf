// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

use iidx_score_core::InputErrors;
use iidx_score_repo::prelude::RepoError;
use iidx_score_repo_sqlite::{DbConnection, prelude::Connection as RepoConnection};
use iidx_score_storage_sqlite::Error as StorageError;
use iidx_score_usecases as uc;

pub mod database;
pub mod score;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputErrors),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("database migration failed: {0}")]
    DatabaseMigration(anyhow::Error),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<uc::Error> for Error {
    fn from(err: uc::Error) -> Self {
        match err {
            uc::Error::Input(err) => Self::Input(err),
            uc::Error::Repository(err) => Self::Repository(err),
            uc::Error::Other(err) => Self::Other(err),
        }
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::Repository(RepoError::NotFound),
            err => Self::Storage(err.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
