// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use warp::{Filter, Rejection, Reply, filters::BoxedFilter, http::StatusCode};

use iidx_score_backend_webapi_json as api;
use iidx_score_storage_sqlite::connection::pool::gatekeeper::Gatekeeper as DatabaseConnectionGatekeeper;
use iidx_score_usecases::score::Params as ScoreParams;
use iidx_score_websrv_warp_sqlite as websrv;

use super::MAX_REQUEST_BODY_SIZE;

type SharedGatekeeper = Arc<DatabaseConnectionGatekeeper>;

async fn load_all(
    query_params: api::score::load_all::QueryParams,
    gatekeeper: SharedGatekeeper,
) -> Result<impl Reply, Rejection> {
    websrv::spawn_blocking_read_task(&gatekeeper, move |mut pooled_connection| {
        api::score::load_all::handle_request(&mut pooled_connection, &query_params)
    })
    .await
    .map(|response_body| warp::reply::json(&response_body))
    .map_err(websrv::reject_on_error)
}

async fn load_one(id: String, gatekeeper: SharedGatekeeper) -> Result<impl Reply, Rejection> {
    let id = api::score::parse_entity_id(&id).map_err(websrv::reject_on_error)?;
    websrv::spawn_blocking_read_task(&gatekeeper, move |mut pooled_connection| {
        api::score::load_one::handle_request(&mut pooled_connection, id)
    })
    .await
    .map(|response_body| warp::reply::json(&response_body))
    .map_err(websrv::reject_on_error)
}

async fn create(
    request_body: api::score::create::RequestBody,
    gatekeeper: SharedGatekeeper,
    params: ScoreParams,
) -> Result<impl Reply, Rejection> {
    let response_body =
        websrv::spawn_blocking_write_task(&gatekeeper, move |mut pooled_connection| {
            api::score::create::handle_request(&mut pooled_connection, &params, request_body)
        })
        .await
        .map_err(websrv::reject_on_error)?;
    let location = format!("/api/scores/{id}", id = response_body.id);
    Ok(warp::reply::with_status(
        warp::reply::with_header(warp::reply::json(&response_body), "Location", location),
        StatusCode::CREATED,
    ))
}

async fn update(
    id: String,
    request_body: api::score::update::RequestBody,
    gatekeeper: SharedGatekeeper,
    params: ScoreParams,
) -> Result<impl Reply, Rejection> {
    let id = api::score::parse_entity_id(&id).map_err(websrv::reject_on_error)?;
    websrv::spawn_blocking_write_task(&gatekeeper, move |mut pooled_connection| {
        api::score::update::handle_request(&mut pooled_connection, &params, id, request_body)
    })
    .await
    .map(|response_body| warp::reply::json(&response_body))
    .map_err(websrv::reject_on_error)
}

async fn purge(id: String, gatekeeper: SharedGatekeeper) -> Result<impl Reply, Rejection> {
    let id = api::score::parse_entity_id(&id).map_err(websrv::reject_on_error)?;
    websrv::spawn_blocking_write_task(&gatekeeper, move |mut pooled_connection| {
        api::score::purge::handle_request(&mut pooled_connection, id)
    })
    .await
    .map(|()| StatusCode::NO_CONTENT)
    .map_err(websrv::reject_on_error)
}

pub(crate) fn create_filters(
    shared_connection_gatekeeper: SharedGatekeeper,
    score_params: ScoreParams,
) -> BoxedFilter<(impl Reply,)> {
    let gatekeeper = warp::any().map(move || Arc::clone(&shared_connection_gatekeeper));
    let score_params = warp::any().map(move || score_params);

    log::info!("Creating API routes");

    let scores_path = warp::path("scores");
    let path_param_id = warp::path::param::<String>();
    let json_body = warp::body::content_length_limit(MAX_REQUEST_BODY_SIZE).and(warp::body::json());

    let scores_load_all = warp::get()
        .and(scores_path)
        .and(warp::path::end())
        .and(warp::query())
        .and(gatekeeper.clone())
        .and_then(load_all);

    let scores_load_one = warp::get()
        .and(scores_path)
        .and(path_param_id)
        .and(warp::path::end())
        .and(gatekeeper.clone())
        .and_then(load_one);

    let scores_create = warp::post()
        .and(scores_path)
        .and(warp::path::end())
        .and(json_body)
        .and(gatekeeper.clone())
        .and(score_params)
        .and_then(create);

    let scores_update = warp::put()
        .and(scores_path)
        .and(path_param_id)
        .and(warp::path::end())
        .and(json_body)
        .and(gatekeeper.clone())
        .and(score_params)
        .and_then(update);

    let scores_purge = warp::delete()
        .and(scores_path)
        .and(path_param_id)
        .and(warp::path::end())
        .and(gatekeeper)
        .and_then(purge);

    scores_load_all
        .or(scores_load_one)
        .or(scores_create)
        .or(scores_update)
        .or(scores_purge)
        .boxed()
}
