// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type ResponseBody = Entity;

#[tracing::instrument(
    name = "Loading score",
    skip(
        connection,
    ),
    fields(
        request_id = %new_request_id(),
    )
)]
pub fn handle_request(connection: &mut DbConnection, id: EntityId) -> Result<ResponseBody> {
    uc::score::load_one(connection, id)
        .map(Into::into)
        .map_err(Into::into)
}
