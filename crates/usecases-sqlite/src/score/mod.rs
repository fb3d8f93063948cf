// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::Connection as _;

use iidx_score_core::{EntityId, ScoreEntity, ScoreInput};
use iidx_score_core_api::score::Params as QueryParams;
use iidx_score_usecases::score::Params;

use super::*;

pub fn create(
    connection: &mut DbConnection,
    params: &Params,
    input: &ScoreInput,
) -> Result<ScoreEntity> {
    connection.transaction::<_, Error, _>(|connection| {
        let mut repo = RepoConnection::new(connection);
        uc::score::create(&mut repo, params, input).map_err(Into::into)
    })
}

pub fn update(
    connection: &mut DbConnection,
    params: &Params,
    id: EntityId,
    input: &ScoreInput,
) -> Result<ScoreEntity> {
    connection.transaction::<_, Error, _>(|connection| {
        let mut repo = RepoConnection::new(connection);
        uc::score::update(&mut repo, params, id, input).map_err(Into::into)
    })
}

pub fn purge(connection: &mut DbConnection, id: EntityId) -> Result<()> {
    let mut repo = RepoConnection::new(connection);
    uc::score::purge(&mut repo, id).map_err(Into::into)
}

pub fn load_one(connection: &mut DbConnection, id: EntityId) -> Result<ScoreEntity> {
    let mut repo = RepoConnection::new(connection);
    uc::score::load_one(&mut repo, id).map_err(Into::into)
}

pub fn load_all(connection: &mut DbConnection) -> Result<Vec<ScoreEntity>> {
    let mut repo = RepoConnection::new(connection);
    uc::score::load_all(&mut repo).map_err(Into::into)
}

pub fn query(connection: &mut DbConnection, params: &QueryParams) -> Result<Vec<ScoreEntity>> {
    let mut repo = RepoConnection::new(connection);
    uc::score::query(&mut repo, params).map_err(Into::into)
}

pub fn seed_if_empty(connection: &mut DbConnection) -> Result<usize> {
    connection.transaction::<_, Error, _>(|connection| {
        let mut repo = RepoConnection::new(connection);
        uc::score::seed_if_empty(&mut repo).map_err(Into::into)
    })
}

#[cfg(test)]
mod tests;
