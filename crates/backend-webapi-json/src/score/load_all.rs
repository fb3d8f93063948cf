// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_core_api::score::Params;

use super::*;

/// Optional search and sort parameters
///
/// Scores are returned in id order if none of them is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl QueryParams {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self { q, sort, order } = self;
        q.is_none() && sort.is_none() && order.is_none()
    }
}

pub type ResponseBody = Vec<Entity>;

#[tracing::instrument(
    name = "Loading scores",
    skip(
        connection,
    ),
    fields(
        request_id = %new_request_id(),
    )
)]
pub fn handle_request(
    connection: &mut DbConnection,
    query_params: &QueryParams,
) -> Result<ResponseBody> {
    let entities = if query_params.is_empty() {
        uc::score::load_all(connection)?
    } else {
        let QueryParams { q, sort, order } = query_params;
        let params = Params::from_raw(q.as_deref(), sort.as_deref(), order.as_deref());
        uc::score::query(connection, &params)?
    };
    Ok(entities.into_iter().map(Into::into).collect())
}
