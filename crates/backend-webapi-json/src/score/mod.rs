// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_core::{EntityId, ScoreInput, prelude::*};

use super::*;

mod _inner {
    pub(super) use iidx_score_core::{Score, ScoreEntity};
}

pub mod create;
pub mod load_all;
pub mod load_one;
pub mod purge;
pub mod update;

/// A score as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub version: String,
    pub difficulty: String,
    pub level: u8,
    pub score: u16,
    pub dj_level: String,
    pub lamp: String,
    /// ISO 8601 calendar date, i.e. `YYYY-MM-DD`
    pub date: String,
}

impl From<_inner::ScoreEntity> for Entity {
    fn from(from: _inner::ScoreEntity) -> Self {
        let _inner::ScoreEntity { id, body } = from;
        let _inner::Score {
            title,
            artist,
            version,
            difficulty,
            level,
            ex_score,
            dj_level,
            lamp,
            date,
        } = body;
        Self {
            id: id.to_inner(),
            title,
            artist,
            version: version.as_str().to_owned(),
            difficulty: difficulty.as_str().to_owned(),
            level: level.value(),
            score: ex_score.value(),
            dj_level: dj_level.as_str().to_owned(),
            lamp: lamp.as_str().to_owned(),
            date: date.to_string(),
        }
    }
}

/// A field value that is submitted either as a string or as a number
///
/// Numbers are passed on in their textual representation and parsed
/// like any other submitted text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<FieldValue> for String {
    fn from(from: FieldValue) -> Self {
        match from {
            FieldValue::Text(text) => text,
            FieldValue::Number(number) => number.to_string(),
        }
    }
}

/// Fields of a score as submitted by clients
///
/// Missing and `null` fields are accepted here and reported
/// during validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub title: Option<FieldValue>,
    pub artist: Option<FieldValue>,
    pub version: Option<FieldValue>,
    pub difficulty: Option<FieldValue>,
    pub level: Option<FieldValue>,
    pub score: Option<FieldValue>,
    pub dj_level: Option<FieldValue>,
    pub lamp: Option<FieldValue>,
    pub date: Option<FieldValue>,
}

impl From<Score> for ScoreInput {
    fn from(from: Score) -> Self {
        let Score {
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
            title: title.map(Into::into),
            artist: artist.map(Into::into),
            version: version.map(Into::into),
            difficulty: difficulty.map(Into::into),
            level: level.map(Into::into),
            score: score.map(Into::into),
            dj_level: dj_level.map(Into::into),
            lamp: lamp.map(Into::into),
            date: date.map(Into::into),
        }
    }
}

/// Parses the id of a score from a path segment
pub fn parse_entity_id(raw: &str) -> Result<EntityId> {
    raw.parse()
        .map_err(|err| Error::BadRequest(anyhow::anyhow!("invalid id {raw:?}: {err}")))
}
