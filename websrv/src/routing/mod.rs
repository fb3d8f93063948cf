// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use warp::{Filter as _, Reply, filters::BoxedFilter};

use iidx_score_storage_sqlite::connection::pool::gatekeeper::Gatekeeper as DatabaseConnectionGatekeeper;
use iidx_score_usecases::score::Params as ScoreParams;

pub(crate) mod api;
pub(crate) mod pages;

/// Upper bound for the size of request bodies in bytes
const MAX_REQUEST_BODY_SIZE: u64 = 64 * 1024;

/// JSON routes below `/api` followed by the HTML pages
pub(crate) fn create_filters(
    shared_connection_gatekeeper: Arc<DatabaseConnectionGatekeeper>,
    score_params: ScoreParams,
) -> BoxedFilter<(impl Reply,)> {
    let api_filters = warp::path("api").and(api::create_filters(
        Arc::clone(&shared_connection_gatekeeper),
        score_params,
    ));
    let page_filters = pages::create_filters(shared_connection_gatekeeper, score_params);
    api_filters.or(page_filters).boxed()
}
