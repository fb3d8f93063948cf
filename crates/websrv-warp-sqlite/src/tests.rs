// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_core::ScoreInputInvalidity;
use serde_json::{Value, json};

use super::*;

async fn reply_json(reject: Rejection) -> anyhow::Result<(StatusCode, Value)> {
    let Ok(reply) = handle_rejection(reject).await;
    let response = reply.into_response();
    let status = response.status();
    let bytes = warp::hyper::body::to_bytes(response.into_body()).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[test]
fn repository_errors() {
    assert!(matches!(Error::from(RepoError::NotFound), Error::NotFound));
    assert!(matches!(Error::from(RepoError::Conflict), Error::Conflict));
    assert_eq!(
        StatusCode::NOT_FOUND,
        Error::from(uc::Error::Repository(RepoError::NotFound)).status_code()
    );
    assert_eq!(
        StatusCode::CONFLICT,
        Error::from(api::Error::UseCase(uc::Error::Repository(RepoError::Conflict))).status_code()
    );
}

#[test]
fn timeouts() {
    let err = Error::from(db::Error::TaskTimeout {
        reason: "database is locked".to_owned(),
    });
    assert_eq!(StatusCode::REQUEST_TIMEOUT, err.status_code());
    assert_eq!("database is locked", err.message());
}

#[test]
fn decommissioned_database_is_unavailable() {
    let err = Error::from(db::Error::ServiceUnavailable);
    assert_eq!(StatusCode::SERVICE_UNAVAILABLE, err.status_code());
    assert_eq!("Service Unavailable", err.message());
}

#[tokio::test]
async fn invalid_input_lists_all_field_errors() -> anyhow::Result<()> {
    let errors = [
        ScoreInputInvalidity::TitleRequired,
        ScoreInputInvalidity::ArtistRequired,
    ]
    .into_iter()
    .collect::<InputErrors>();
    let (status, body) = reply_json(reject_on_error(uc::Error::Input(errors))).await?;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!(
        json!({
            "code": 400,
            "message": "invalid input",
            "errors": ["title is required", "artist is required"],
        }),
        body
    );
    Ok(())
}

#[tokio::test]
async fn not_found_without_field_errors() -> anyhow::Result<()> {
    let (status, body) = reply_json(reject_on_error(Error::NotFound)).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    assert_eq!(json!({ "code": 404, "message": "Not Found" }), body);

    let (status, body) = reply_json(warp::reject::not_found()).await?;
    assert_eq!(StatusCode::NOT_FOUND, status);
    assert_eq!(json!(404), body["code"]);
    Ok(())
}

#[tokio::test]
async fn bad_request() -> anyhow::Result<()> {
    let err = Error::BadRequest(anyhow::anyhow!("invalid id \"abc\""));
    let (status, body) = reply_json(reject_on_error(err)).await?;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!(json!("invalid id \"abc\""), body["message"]);
    assert!(body.get("errors").is_none());
    Ok(())
}
