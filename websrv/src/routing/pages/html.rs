// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Minimal server-side rendering of the score pages

use std::{borrow::Cow, fmt::Write as _};

use strum::IntoEnumIterator as _;
use warp::http::StatusCode;

use iidx_score_core::{
    Difficulty, DjLevel, EntityId, Lamp, ScoreEntity, ScoreInput, Version, vocabulary::Term,
};
use iidx_score_core_api::{
    score::{Params as QueryParams, SortField},
    sorting::SortDirection,
};

const APP_TITLE: &str = "IIDX Score Tracker";

/// Replaces all characters with a special meaning in HTML
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - {APP_TITLE}</title>
</head>
<body>
<h1><a href="/">{APP_TITLE}</a></h1>
{body}</body>
</html>
"#,
        title = escape(title),
    )
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flash {
    Added,
    Updated,
    Deleted,
}

impl Flash {
    const fn message(self) -> &'static str {
        match self {
            Self::Added => "Score added.",
            Self::Updated => "Score updated.",
            Self::Deleted => "Score deleted.",
        }
    }
}

fn push_select_options<'a>(
    html: &mut String,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
    selected: &str,
) {
    for (value, label) in options {
        let selected = if value == selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            r#"<option value="{value}"{selected}>{label}</option>"#,
            value = escape(value),
            label = escape(label),
        );
    }
}

pub(crate) fn list_page(
    entities: &[ScoreEntity],
    query_params: &QueryParams,
    flash: Option<Flash>,
) -> String {
    let mut html = String::new();
    if let Some(flash) = flash {
        let _ = writeln!(html, r#"<p class="flash">{}</p>"#, flash.message());
    }
    html.push_str("<p><a href=\"/new\">New score</a></p>\n");

    let q = query_params
        .search_text
        .as_ref()
        .map_or("", |search_text| search_text.as_str());
    let _ = writeln!(
        html,
        r#"<form method="get" action="/">
<input type="search" name="q" value="{q}" placeholder="Search">
<select name="sort">"#,
        q = escape(q),
    );
    push_select_options(
        &mut html,
        SortField::iter().map(|field| (field.as_str(), field.as_str())),
        query_params.ordering.field.as_str(),
    );
    html.push_str("</select>\n<select name=\"order\">\n");
    push_select_options(
        &mut html,
        [SortDirection::Descending, SortDirection::Ascending]
            .into_iter()
            .map(|direction| (direction.as_str(), direction.as_str())),
        query_params.ordering.direction.as_str(),
    );
    html.push_str("</select>\n<button type=\"submit\">Apply</button>\n</form>\n");

    if entities.is_empty() {
        html.push_str("<p>No scores.</p>\n");
        return layout("Scores", &html);
    }

    html.push_str(
        "<table>\n<thead><tr><th>Title</th><th>Artist</th><th>Version</th><th>Difficulty</th>\
         <th>Level</th><th>Score</th><th>DJ level</th><th>Lamp</th><th>Date</th><th></th></tr></thead>\n<tbody>\n",
    );
    for ScoreEntity { id, body: score } in entities {
        let _ = writeln!(
            html,
            r#"<tr><td><a href="/{id}">{title}</a></td><td>{artist}</td><td>{version}</td><td>{difficulty}</td><td>{level}</td><td>{ex_score}</td><td>{dj_level}</td><td>{lamp}</td><td>{date}</td><td><a href="/{id}/edit">Edit</a> <form method="post" action="/{id}/delete"><button type="submit">Delete</button></form></td></tr>"#,
            title = escape(&score.title),
            artist = escape(&score.artist),
            version = escape(score.version.as_str()),
            difficulty = score.difficulty.as_str(),
            level = score.level,
            ex_score = score.ex_score,
            dj_level = score.dj_level.as_str(),
            lamp = score.lamp.as_str(),
            date = score.date,
        );
    }
    html.push_str("</tbody>\n</table>\n");
    layout("Scores", &html)
}

pub(crate) fn detail_page(entity: &ScoreEntity) -> String {
    let ScoreEntity { id, body: score } = entity;
    let mut html = String::new();
    let _ = writeln!(html, "<h2>{}</h2>\n<dl>", escape(&score.title));
    for (label, value) in [
        ("Artist", Cow::Borrowed(score.artist.as_str())),
        ("Version", Cow::Borrowed(score.version.as_str())),
        ("Difficulty", Cow::Borrowed(score.difficulty.as_str())),
        ("Level", Cow::Owned(score.level.to_string())),
        ("Score", Cow::Owned(score.ex_score.to_string())),
        ("DJ level", Cow::Borrowed(score.dj_level.as_str())),
        ("Lamp", Cow::Borrowed(score.lamp.as_str())),
        ("Date", Cow::Owned(score.date.to_string())),
    ] {
        let _ = writeln!(html, "<dt>{label}</dt><dd>{}</dd>", escape(&value));
    }
    let _ = writeln!(
        html,
        r#"</dl>
<p><a href="/{id}/edit">Edit</a></p>
<form method="post" action="/{id}/delete"><button type="submit">Delete</button></form>"#
    );
    layout(&score.title, &html)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FormTarget {
    Create,
    Update(EntityId),
}

/// Form fields preset for entering a new score
pub(crate) fn new_score_input() -> ScoreInput {
    ScoreInput {
        version: Some(Version::Epolis.as_str().to_owned()),
        difficulty: Some(Difficulty::Hyper.as_str().to_owned()),
        level: Some("10".to_owned()),
        dj_level: Some(DjLevel::A.as_str().to_owned()),
        lamp: Some(Lamp::Clear.as_str().to_owned()),
        ..Default::default()
    }
}

fn push_text_field(html: &mut String, input_type: &str, name: &str, label: &str, value: Option<&str>) {
    let _ = writeln!(
        html,
        r#"<p><label>{label} <input type="{input_type}" name="{name}" value="{value}"></label></p>"#,
        value = escape(value.unwrap_or_default()),
    );
}

fn push_term_field<T: Term>(html: &mut String, name: &str, label: &str, value: Option<&str>) {
    let _ = writeln!(html, r#"<p><label>{label} <select name="{name}">"#);
    // Match the submitted value leniently, but fall back to the raw text.
    let selected = value
        .and_then(T::lookup)
        .map_or_else(|| value.unwrap_or_default(), |term| term.as_str());
    push_select_options(
        html,
        T::vocabulary()
            .terms()
            .iter()
            .map(|term| (term.as_str(), term.as_str())),
        selected,
    );
    html.push_str("</select></label></p>\n");
}

pub(crate) fn form_page(target: FormTarget, input: &ScoreInput, errors: &[String]) -> String {
    let (title, action) = match target {
        FormTarget::Create => ("New score", Cow::Borrowed("/")),
        FormTarget::Update(id) => ("Edit score", Cow::Owned(format!("/{id}/update"))),
    };
    let mut html = String::new();
    let _ = writeln!(html, "<h2>{title}</h2>");
    if !errors.is_empty() {
        html.push_str("<ul class=\"errors\">\n");
        for error in errors {
            let _ = writeln!(html, "<li>{}</li>", escape(error));
        }
        html.push_str("</ul>\n");
    }
    let _ = writeln!(html, r#"<form method="post" action="{action}">"#);
    let ScoreInput {
        title: score_title,
        artist,
        version,
        difficulty,
        level,
        score,
        dj_level,
        lamp,
        date,
    } = input;
    push_text_field(&mut html, "text", "title", "Title", score_title.as_deref());
    push_text_field(&mut html, "text", "artist", "Artist", artist.as_deref());
    push_term_field::<Version>(&mut html, "version", "Version", version.as_deref());
    push_term_field::<Difficulty>(&mut html, "difficulty", "Difficulty", difficulty.as_deref());
    push_text_field(&mut html, "number", "level", "Level", level.as_deref());
    push_text_field(&mut html, "number", "score", "Score", score.as_deref());
    push_term_field::<DjLevel>(&mut html, "djLevel", "DJ level", dj_level.as_deref());
    push_term_field::<Lamp>(&mut html, "lamp", "Lamp", lamp.as_deref());
    push_text_field(&mut html, "date", "date", "Date", date.as_deref());
    html.push_str("<p><button type=\"submit\">Save</button> <a href=\"/\">Cancel</a></p>\n</form>\n");
    layout(title, &html)
}

pub(crate) fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let html = format!(
        "<h2>{code} {title}</h2>\n<p>{message}</p>\n<p><a href=\"/\">Back to the list</a></p>\n",
        code = status.as_u16(),
        message = escape(message),
    );
    layout(title, &html)
}
