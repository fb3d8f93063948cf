// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

use iidx_score_core::{Score, ScoreEntity, prelude::*};
use strum::{EnumIter, IntoEnumIterator as _, IntoStaticStr};

use crate::{filtering::SearchText, sorting::SortDirection};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    Id,
    Title,
    Artist,
    Version,
    Difficulty,
    Level,
    #[default]
    Score,
    DjLevel,
    Lamp,
    Date,
}

impl SortField {
    /// Unknown field names fall back to the default field.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|raw| Self::iter().find(|field| field.as_str() == raw))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Ascending comparison of this field
    ///
    /// Text fields including the enumerated ones are compared by their
    /// case-folded canonical spelling, not by their rank.
    #[must_use]
    pub fn compare(self, lhs: &ScoreEntity, rhs: &ScoreEntity) -> Ordering {
        let (lhs_score, rhs_score) = (&lhs.body, &rhs.body);
        match self {
            Self::Id => lhs.id.cmp(&rhs.id),
            Self::Title => cmp_folded(&lhs_score.title, &rhs_score.title),
            Self::Artist => cmp_folded(&lhs_score.artist, &rhs_score.artist),
            Self::Version => cmp_folded(lhs_score.version.as_str(), rhs_score.version.as_str()),
            Self::Difficulty => cmp_folded(
                lhs_score.difficulty.as_str(),
                rhs_score.difficulty.as_str(),
            ),
            Self::Level => lhs_score.level.cmp(&rhs_score.level),
            Self::Score => lhs_score.ex_score.cmp(&rhs_score.ex_score),
            Self::DjLevel => cmp_folded(lhs_score.dj_level.as_str(), rhs_score.dj_level.as_str()),
            Self::Lamp => cmp_folded(lhs_score.lamp.as_str(), rhs_score.lamp.as_str()),
            Self::Date => lhs_score.date.cmp(&rhs_score.date),
        }
    }
}

fn cmp_folded(lhs: &str, rhs: &str) -> Ordering {
    lhs.to_lowercase().cmp(&rhs.to_lowercase())
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    #[must_use]
    pub fn compare(self, lhs: &ScoreEntity, rhs: &ScoreEntity) -> Ordering {
        let Self { field, direction } = self;
        direction.apply(field.compare(lhs, rhs))
    }
}

/// Searches in title, artist, version, difficulty, and lamp
#[must_use]
pub fn matches(search_text: &SearchText, score: &Score) -> bool {
    let Score {
        title,
        artist,
        version,
        difficulty,
        lamp,
        ..
    } = score;
    [
        title.as_str(),
        artist.as_str(),
        version.as_str(),
        difficulty.as_str(),
        lamp.as_str(),
    ]
    .into_iter()
    .any(|value| search_text.matches(value))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    /// Matches all scores if `None`.
    pub search_text: Option<SearchText>,

    pub ordering: SortOrder,
}

impl Params {
    /// Lenient parsing of raw query parameters
    ///
    /// Never fails. Blank search text disables filtering and unknown
    /// values fall back to their defaults.
    #[must_use]
    pub fn from_raw(q: Option<&str>, sort: Option<&str>, order: Option<&str>) -> Self {
        Self {
            search_text: q.and_then(SearchText::new),
            ordering: SortOrder {
                field: SortField::parse_or_default(sort),
                direction: SortDirection::parse_or_default(order),
            },
        }
    }
}

/// Filters and sorts a snapshot of all scores
///
/// The sort is stable. Scores that compare equal keep their relative
/// order regardless of the direction.
#[must_use]
pub fn query(mut entities: Vec<ScoreEntity>, params: &Params) -> Vec<ScoreEntity> {
    let Params {
        search_text,
        ordering,
    } = params;
    if let Some(search_text) = search_text {
        entities.retain(|entity| matches(search_text, &entity.body));
    }
    entities.sort_by(|lhs, rhs| ordering.compare(lhs, rhs));
    entities
}
