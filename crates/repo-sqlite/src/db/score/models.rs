// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::anyhow;
use iidx_score_core::{
    Difficulty, DjLevel, EntityId, ExScore, Lamp, Level, Score, ScoreEntity, Version,
    util::clock::parse_iso_date, vocabulary::Term,
};

use super::{schema::*, *};

#[derive(Debug, Queryable, Identifiable)]
#[diesel(table_name = scores)]
pub(crate) struct QueryableRecord {
    pub(crate) id: RowId,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) version: String,
    pub(crate) difficulty: String,
    pub(crate) level: i16,
    pub(crate) score: i32,
    pub(crate) dj_level: String,
    pub(crate) lamp: String,
    pub(crate) date: String,
}

pub(crate) fn entity_id_from_sql(row_id: RowId) -> anyhow::Result<EntityId> {
    u64::try_from(row_id)
        .map(EntityId::new)
        .map_err(|_| anyhow!("invalid row id {row_id}"))
}

/// Returns `None` for ids that cannot be stored.
pub(crate) fn entity_id_to_sql(id: EntityId) -> Option<RowId> {
    RowId::try_from(id.to_inner()).ok()
}

fn term_from_sql<T: Term>(column: &str, value: &str) -> anyhow::Result<T> {
    T::lookup(value).ok_or_else(|| anyhow!("invalid {column} value: {value}"))
}

impl TryFrom<QueryableRecord> for ScoreEntity {
    type Error = anyhow::Error;

    fn try_from(from: QueryableRecord) -> anyhow::Result<Self> {
        let QueryableRecord {
            id,
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
        let level = u8::try_from(level)
            .map(Level::new)
            .map_err(|_| anyhow!("invalid level value: {level}"))?;
        let ex_score = u16::try_from(score)
            .map(ExScore::new)
            .map_err(|_| anyhow!("invalid score value: {score}"))?;
        let body = Score {
            title,
            artist,
            version: term_from_sql::<Version>("version", &version)?,
            difficulty: term_from_sql::<Difficulty>("difficulty", &difficulty)?,
            level,
            ex_score,
            dj_level: term_from_sql::<DjLevel>("dj_level", &dj_level)?,
            lamp: term_from_sql::<Lamp>("lamp", &lamp)?,
            date: parse_iso_date(&date).map_err(|err| anyhow!("invalid date value {date}: {err}"))?,
        };
        debug_assert!(body.is_valid());
        Ok(Self::new(entity_id_from_sql(id)?, body))
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = scores)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) title: &'a str,
    pub(crate) artist: &'a str,
    pub(crate) version: &'static str,
    pub(crate) difficulty: &'static str,
    pub(crate) level: i16,
    pub(crate) score: i32,
    pub(crate) dj_level: &'static str,
    pub(crate) lamp: &'static str,
    pub(crate) date: String,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(score: &'a Score) -> Self {
        let Score {
            title,
            artist,
            version,
            difficulty,
            level,
            ex_score,
            dj_level,
            lamp,
            date,
        } = score;
        Self {
            title,
            artist,
            version: version.as_str(),
            difficulty: difficulty.as_str(),
            level: level.value().into(),
            score: ex_score.value().into(),
            dj_level: dj_level.as_str(),
            lamp: lamp.as_str(),
            date: date.to_string(),
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = scores)]
pub(crate) struct UpdatableRecord<'a> {
    pub(crate) title: &'a str,
    pub(crate) artist: &'a str,
    pub(crate) version: &'static str,
    pub(crate) difficulty: &'static str,
    pub(crate) level: i16,
    pub(crate) score: i32,
    pub(crate) dj_level: &'static str,
    pub(crate) lamp: &'static str,
    pub(crate) date: String,
}

impl<'a> UpdatableRecord<'a> {
    pub(crate) fn bind(score: &'a Score) -> Self {
        let InsertableRecord {
            title,
            artist,
            version,
            difficulty,
            level,
            score,
            dj_level,
            lamp,
            date,
        } = InsertableRecord::bind(score);
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
