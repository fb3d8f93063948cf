// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_usecases::score::Params;

use super::*;

pub type RequestBody = Score;

pub type ResponseBody = Entity;

#[tracing::instrument(
    name = "Updating score",
    skip(
        connection,
    ),
    fields(
        request_id = %new_request_id(),
    )
)]
pub fn handle_request(
    connection: &mut DbConnection,
    params: &Params,
    id: EntityId,
    request_body: RequestBody,
) -> Result<ResponseBody> {
    let input = ScoreInput::from(request_body);
    uc::score::update(connection, params, id, &input)
        .map(Into::into)
        .map_err(Into::into)
}
