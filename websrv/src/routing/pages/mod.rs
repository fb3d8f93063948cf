// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use serde::Deserialize;
use warp::{
    Filter, Rejection, Reply,
    filters::BoxedFilter,
    http::{StatusCode, Uri},
    reply::Response,
};

use iidx_score_backend_webapi_json as api;
use iidx_score_core::{EntityId, ScoreEntity, ScoreInput};
use iidx_score_core_api::score::Params as QueryParams;
use iidx_score_storage_sqlite::connection::pool::gatekeeper::Gatekeeper as DatabaseConnectionGatekeeper;
use iidx_score_usecases::score::Params as ScoreParams;
use iidx_score_usecases_sqlite as uc;
use iidx_score_websrv_warp_sqlite::{self as websrv, Error};

use self::html::{Flash, FormTarget};

use super::MAX_REQUEST_BODY_SIZE;

mod html;

type SharedGatekeeper = Arc<DatabaseConnectionGatekeeper>;

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    q: Option<String>,
    sort: Option<String>,
    order: Option<String>,
    added: Option<String>,
    updated: Option<String>,
    deleted: Option<String>,
}

impl ListQuery {
    fn flash(&self) -> Option<Flash> {
        let is_set = |flag: &Option<String>| flag.as_deref() == Some("1");
        if is_set(&self.added) {
            Some(Flash::Added)
        } else if is_set(&self.updated) {
            Some(Flash::Updated)
        } else if is_set(&self.deleted) {
            Some(Flash::Deleted)
        } else {
            None
        }
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::from_raw(
            self.q.as_deref(),
            self.sort.as_deref(),
            self.order.as_deref(),
        )
    }
}

/// Submitted form fields, named like the JSON properties
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormFields {
    title: Option<String>,
    artist: Option<String>,
    version: Option<String>,
    difficulty: Option<String>,
    level: Option<String>,
    score: Option<String>,
    dj_level: Option<String>,
    lamp: Option<String>,
    date: Option<String>,
}

impl From<FormFields> for ScoreInput {
    fn from(from: FormFields) -> Self {
        let FormFields {
            title,
            artist,
            version,
            difficulty,
            level,
            score,
            dj_level,
            lamp,
            date,
        } = from;
        Self {
            title,
            artist,
            version,
            difficulty,
            level,
            score,
            dj_level,
            lamp,
            date,
        }
    }
}

fn html_reply(status: StatusCode, body: String) -> Response {
    warp::reply::with_status(warp::reply::html(body), status).into_response()
}

fn error_reply(err: &Error) -> Response {
    if matches!(err, Error::Other(_)) {
        log::warn!("Request failed: {err}");
    }
    let status = err.status_code();
    html_reply(status, html::error_page(status, &err.message()))
}

/// Re-displays the submitted form if the input has been rejected
fn form_error_reply(target: FormTarget, input: &ScoreInput, err: &Error) -> Response {
    if matches!(err, Error::Invalid(_)) {
        html_reply(
            err.status_code(),
            html::form_page(target, input, &err.field_errors()),
        )
    } else {
        error_reply(err)
    }
}

fn redirect_to(location: &'static str) -> Response {
    warp::redirect::found(Uri::from_static(location)).into_response()
}

fn parse_entity_id(id: &str) -> Result<EntityId, Error> {
    api::score::parse_entity_id(id).map_err(Into::into)
}

async fn list(query: ListQuery, gatekeeper: SharedGatekeeper) -> Result<Response, Rejection> {
    let query_params = query.query_params();
    let result = websrv::spawn_blocking_read_task(&gatekeeper, {
        let query_params = query_params.clone();
        move |mut pooled_connection| uc::score::query(&mut pooled_connection, &query_params)
    })
    .await;
    let response = match result {
        Ok(entities) => html_reply(
            StatusCode::OK,
            html::list_page(&entities, &query_params, query.flash()),
        ),
        Err(err) => error_reply(&err),
    };
    Ok(response)
}

fn new_form() -> Response {
    html_reply(
        StatusCode::OK,
        html::form_page(FormTarget::Create, &html::new_score_input(), &[]),
    )
}

async fn create(
    fields: FormFields,
    gatekeeper: SharedGatekeeper,
    params: ScoreParams,
) -> Result<Response, Rejection> {
    let input = ScoreInput::from(fields);
    let result = websrv::spawn_blocking_write_task(&gatekeeper, {
        let input = input.clone();
        move |mut pooled_connection| uc::score::create(&mut pooled_connection, &params, &input)
    })
    .await;
    let response = match result {
        Ok(entity) => {
            log::debug!("Created score {id}", id = entity.id);
            redirect_to("/?added=1")
        }
        Err(err) => form_error_reply(FormTarget::Create, &input, &err),
    };
    Ok(response)
}

async fn load_one(
    id: EntityId,
    gatekeeper: &DatabaseConnectionGatekeeper,
) -> Result<ScoreEntity, Error> {
    websrv::spawn_blocking_read_task(gatekeeper, move |mut pooled_connection| {
        uc::score::load_one(&mut pooled_connection, id)
    })
    .await
}

/// Any single path segment that is not an id denotes an unknown page.
async fn detail(id: String, gatekeeper: SharedGatekeeper) -> Result<Response, Rejection> {
    let Ok(id) = id.parse::<EntityId>() else {
        return Ok(error_reply(&Error::NotFound));
    };
    let response = match load_one(id, &gatekeeper).await {
        Ok(entity) => html_reply(StatusCode::OK, html::detail_page(&entity)),
        Err(err) => error_reply(&err),
    };
    Ok(response)
}

async fn edit_form(id: String, gatekeeper: SharedGatekeeper) -> Result<Response, Rejection> {
    let id = match parse_entity_id(&id) {
        Ok(id) => id,
        Err(err) => return Ok(error_reply(&err)),
    };
    let response = match load_one(id, &gatekeeper).await {
        Ok(entity) => html_reply(
            StatusCode::OK,
            html::form_page(
                FormTarget::Update(entity.id),
                &ScoreInput::from(&entity.body),
                &[],
            ),
        ),
        Err(err) => error_reply(&err),
    };
    Ok(response)
}

async fn update(
    id: String,
    fields: FormFields,
    gatekeeper: SharedGatekeeper,
    params: ScoreParams,
) -> Result<Response, Rejection> {
    let id = match parse_entity_id(&id) {
        Ok(id) => id,
        Err(err) => return Ok(error_reply(&err)),
    };
    let input = ScoreInput::from(fields);
    let result = websrv::spawn_blocking_write_task(&gatekeeper, {
        let input = input.clone();
        move |mut pooled_connection| uc::score::update(&mut pooled_connection, &params, id, &input)
    })
    .await;
    let response = match result {
        Ok(_) => redirect_to("/?updated=1"),
        Err(err) => form_error_reply(FormTarget::Update(id), &input, &err),
    };
    Ok(response)
}

async fn delete(id: String, gatekeeper: SharedGatekeeper) -> Result<Response, Rejection> {
    let id = match parse_entity_id(&id) {
        Ok(id) => id,
        Err(err) => return Ok(error_reply(&err)),
    };
    let result = websrv::spawn_blocking_write_task(&gatekeeper, move |mut pooled_connection| {
        uc::score::purge(&mut pooled_connection, id)
    })
    .await;
    let response = match result {
        Ok(()) => redirect_to("/?deleted=1"),
        Err(err) => error_reply(&err),
    };
    Ok(response)
}

pub(crate) fn create_filters(
    shared_connection_gatekeeper: SharedGatekeeper,
    score_params: ScoreParams,
) -> BoxedFilter<(impl Reply,)> {
    let gatekeeper = warp::any().map(move || Arc::clone(&shared_connection_gatekeeper));
    let score_params = warp::any().map(move || score_params);

    log::info!("Creating page routes");

    let path_param_id = warp::path::param::<String>();
    let form_body = warp::body::content_length_limit(MAX_REQUEST_BODY_SIZE).and(warp::body::form());

    let scores_list = warp::get()
        .and(warp::path::end())
        .and(warp::query())
        .and(gatekeeper.clone())
        .and_then(list);

    let scores_new_form = warp::get()
        .and(warp::path("new"))
        .and(warp::path::end())
        .map(new_form);

    let scores_create = warp::post()
        .and(warp::path::end())
        .and(form_body)
        .and(gatekeeper.clone())
        .and(score_params)
        .and_then(create);

    let scores_detail = warp::get()
        .and(path_param_id)
        .and(warp::path::end())
        .and(gatekeeper.clone())
        .and_then(detail);

    let scores_edit_form = warp::get()
        .and(path_param_id)
        .and(warp::path("edit"))
        .and(warp::path::end())
        .and(gatekeeper.clone())
        .and_then(edit_form);

    let scores_update = warp::post()
        .and(path_param_id)
        .and(warp::path("update"))
        .and(warp::path::end())
        .and(form_body)
        .and(gatekeeper.clone())
        .and(score_params)
        .and_then(update);

    let scores_delete = warp::post()
        .and(path_param_id)
        .and(warp::path("delete"))
        .and(warp::path::end())
        .and(gatekeeper)
        .and_then(delete);

    // The new form must precede the detail page with its id parameter.
    scores_list
        .or(scores_new_form)
        .or(scores_create)
        .or(scores_detail)
        .or(scores_edit_form)
        .or(scores_update)
        .or(scores_delete)
        .boxed()
}

#[cfg(test)]
mod tests;
