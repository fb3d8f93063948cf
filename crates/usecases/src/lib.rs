// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::result::Result as StdResult;

use iidx_score_core::InputErrors;
use iidx_score_repo::prelude::*;
use thiserror::Error;

pub mod score;

#[derive(Error, Debug)]
pub enum Error {
    /// Rejected input with all field-level invalidities
    #[error(transparent)]
    Input(#[from] InputErrors),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = StdResult<T, Error>;
