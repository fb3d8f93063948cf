// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use warp::{http::Response, hyper::body::Bytes};

use crate::routing::tests::seeded_database;

use super::*;

fn page_filters() -> anyhow::Result<BoxedFilter<(impl Reply,)>> {
    let filters = create_filters(seeded_database()?, ScoreParams::default())
        .recover(websrv::handle_rejection)
        .boxed();
    Ok(filters)
}

fn text(response: &Response<Bytes>) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}

fn location(response: &Response<Bytes>) -> Option<&str> {
    response
        .headers()
        .get("Location")
        .and_then(|value| value.to_str().ok())
}

const VALID_FORM: &str = "title=Quasar&artist=dj+TAKA&version=tricoro&difficulty=ANOTHER\
                          &level=12&score=2500&djLevel=AA&lamp=CLEAR&date=2025-11-20";

#[test]
fn escape_html() {
    assert_eq!("plain text", html::escape("plain text"));
    assert_eq!(
        "&lt;a href=&quot;x&quot;&gt;R&amp;B&#39;s&lt;/a&gt;",
        html::escape(r#"<a href="x">R&B's</a>"#)
    );
}

#[test]
fn flash_flags() {
    let query = ListQuery {
        updated: Some("1".to_owned()),
        ..Default::default()
    };
    assert_eq!(Some(Flash::Updated), query.flash());
    let query = ListQuery {
        added: Some("true".to_owned()),
        ..Default::default()
    };
    assert_eq!(None, query.flash());
}

#[test]
fn new_form_preselects_defaults() {
    let page = html::form_page(FormTarget::Create, &html::new_score_input(), &[]);
    assert!(page.contains(r#"<option value="EPOLIS" selected>"#));
    assert!(page.contains(r#"<option value="HYPER" selected>"#));
    assert!(page.contains(r#"<option value="A" selected>"#));
    assert!(page.contains(r#"<option value="CLEAR" selected>"#));
    assert!(page.contains(r#"name="level" value="10""#));
    assert!(page.contains(r#"<form method="post" action="/">"#));
}

#[tokio::test]
async fn list_page() -> anyhow::Result<()> {
    let filters = page_filters()?;
    let response = warp::test::request().path("/").reply(&filters).await;
    assert_eq!(StatusCode::OK, response.status());
    let page = text(&response);
    for title in ["Blue Rain", "Sparkle Shower", "TAKA respect for J.S.B."] {
        assert!(page.contains(title), "{title}");
    }
    assert!(!page.contains("class=\"flash\""));
    // Default order is by descending score
    let v = page.find("TAKA respect").unwrap_or(usize::MAX);
    let blue_rain = page.find("Blue Rain").unwrap_or(usize::MAX);
    assert!(v < blue_rain);

    let response = warp::test::request()
        .path("/?q=sinobuz&added=1")
        .reply(&filters)
        .await;
    let page = text(&response);
    assert!(page.contains("Score added."));
    assert!(page.contains("Sparkle Shower"));
    assert!(!page.contains("Blue Rain"));
    assert!(page.contains(r#"name="q" value="sinobuz""#));
    Ok(())
}

#[tokio::test]
async fn new_form_is_not_a_detail_page() -> anyhow::Result<()> {
    let filters = page_filters()?;
    let response = warp::test::request().path("/new").reply(&filters).await;
    assert_eq!(StatusCode::OK, response.status());
    assert!(text(&response).contains("New score"));
    Ok(())
}

#[tokio::test]
async fn create_redirects_to_list() -> anyhow::Result<()> {
    let filters = page_filters()?;
    let response = warp::test::request()
        .method("POST")
        .path("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(VALID_FORM)
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::FOUND, response.status());
    assert_eq!(Some("/?added=1"), location(&response));

    let response = warp::test::request().path("/4").reply(&filters).await;
    assert_eq!(StatusCode::OK, response.status());
    assert!(text(&response).contains("Quasar"));
    Ok(())
}

#[tokio::test]
async fn create_redisplays_form_with_errors() -> anyhow::Result<()> {
    let filters = page_filters()?;
    let response = warp::test::request()
        .method("POST")
        .path("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("title=%3Cb%3E&artist=&version=EPOLIS&difficulty=HYPER&level=x&score=100&djLevel=A&lamp=CLEAR")
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    let page = text(&response);
    assert!(page.contains("artist is required"));
    assert!(page.contains("level must be an integer"));
    // Submitted values are kept and escaped
    assert!(page.contains(r#"name="title" value="&lt;b&gt;""#));
    assert!(!page.contains("<b>"));
    Ok(())
}

#[tokio::test]
async fn edit_and_update() -> anyhow::Result<()> {
    let filters = page_filters()?;
    let response = warp::test::request().path("/1/edit").reply(&filters).await;
    assert_eq!(StatusCode::OK, response.status());
    let page = text(&response);
    assert!(page.contains(r#"name="title" value="Blue Rain""#));
    assert!(page.contains(r#"<option value="BISTROVER" selected>"#));
    assert!(page.contains(r#"action="/1/update""#));

    let response = warp::test::request()
        .method("POST")
        .path("/1/update")
        .body(VALID_FORM)
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::FOUND, response.status());
    assert_eq!(Some("/?updated=1"), location(&response));

    let response = warp::test::request()
        .method("POST")
        .path("/1/update")
        .body("title=Quasar")
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    assert!(text(&response).contains(r#"action="/1/update""#));

    let response = warp::test::request()
        .method("POST")
        .path("/99/update")
        .body(VALID_FORM)
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    Ok(())
}

#[tokio::test]
async fn delete_twice() -> anyhow::Result<()> {
    let filters = page_filters()?;
    let response = warp::test::request()
        .method("POST")
        .path("/2/delete")
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::FOUND, response.status());
    assert_eq!(Some("/?deleted=1"), location(&response));

    let response = warp::test::request()
        .method("POST")
        .path("/2/delete")
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert!(text(&response).contains("404"));
    Ok(())
}

#[tokio::test]
async fn malformed_and_unknown_ids() -> anyhow::Result<()> {
    let filters = page_filters()?;
    for path in ["/abc/edit", "/0/edit"] {
        let response = warp::test::request().path(path).reply(&filters).await;
        assert_eq!(StatusCode::BAD_REQUEST, response.status(), "{path}");
    }
    // A single segment that is not an id is an unknown page
    for path in ["/abc", "/0", "/favicon.ico"] {
        let response = warp::test::request().path(path).reply(&filters).await;
        assert_eq!(StatusCode::NOT_FOUND, response.status(), "{path}");
        assert!(text(&response).contains("404"));
    }
    let response = warp::test::request()
        .method("POST")
        .path("/x/delete")
        .reply(&filters)
        .await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let response = warp::test::request().path("/42").reply(&filters).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    Ok(())
}
