// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

pub type ResponseBody = ();

#[tracing::instrument(
    name = "Deleting score",
    skip(
        connection,
    ),
    fields(
        request_id = %new_request_id(),
    )
)]
pub fn handle_request(connection: &mut DbConnection, id: EntityId) -> Result<ResponseBody> {
    connection
        .transaction::<_, Error, _>(|connection| uc::score::purge(connection, id).map_err(Into::into))
}
