// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Raw, untyped input for creating or replacing a score
//!
//! All fields are parsed and checked independently. Either every
//! field is valid and a typed [`Score`] results, or the complete
//! list of invalidities is returned.

use std::fmt;

use jiff::civil::Date;

use crate::{
    prelude::*,
    util::{
        clock::{ParseIsoDateError, parse_iso_date},
        trimmed_non_empty,
    },
    vocabulary::Term,
};

use super::{Difficulty, DjLevel, ExScore, ExScoreValue, Lamp, Level, LevelValue, Score, Version};

pub const DEFAULT_MAX_EX_SCORE: ExScoreValue = 4000;

/// Deployment specific bounds
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputParams {
    /// Inclusive upper bound of the EX score
    pub max_ex_score: ExScoreValue,
}

impl Default for InputParams {
    fn default() -> Self {
        Self {
            max_ex_score: DEFAULT_MAX_EX_SCORE,
        }
    }
}

/// Form or request fields as submitted
///
/// Absent and blank fields are treated the same.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreInput {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub version: Option<String>,
    pub difficulty: Option<String>,
    pub level: Option<String>,
    pub score: Option<String>,
    pub dj_level: Option<String>,
    pub lamp: Option<String>,
    pub date: Option<String>,
}

impl From<&Score> for ScoreInput {
    fn from(from: &Score) -> Self {
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
        } = from;
        Self {
            title: Some(title.clone()),
            artist: Some(artist.clone()),
            version: Some(version.as_str().to_owned()),
            difficulty: Some(difficulty.as_str().to_owned()),
            level: Some(level.to_string()),
            score: Some(ex_score.to_string()),
            dj_level: Some(dj_level.as_str().to_owned()),
            lamp: Some(lamp.as_str().to_owned()),
            date: Some(date.to_string()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumberInvalidity {
    /// Missing or not an integer
    NotANumber,

    OutOfRange,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoreInputInvalidity {
    TitleRequired,
    ArtistRequired,
    Version,
    Difficulty,
    Level(NumberInvalidity),
    ExScore {
        invalidity: NumberInvalidity,
        max: ExScoreValue,
    },
    DjLevel,
    Lamp,
    Date(ParseIsoDateError),
}

impl ScoreInputInvalidity {
    /// Name of the offending input field
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::TitleRequired => "title",
            Self::ArtistRequired => "artist",
            Self::Version => "version",
            Self::Difficulty => "difficulty",
            Self::Level(_) => "level",
            Self::ExScore { .. } => "score",
            Self::DjLevel => "djLevel",
            Self::Lamp => "lamp",
            Self::Date(_) => "date",
        }
    }
}

impl fmt::Display for ScoreInputInvalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleRequired => f.write_str("title is required"),
            Self::ArtistRequired => f.write_str("artist is required"),
            Self::Version => f.write_str("version must be selected from the list"),
            Self::Difficulty => f.write_str("difficulty must be selected from the list"),
            Self::Level(NumberInvalidity::NotANumber) => f.write_str("level must be an integer"),
            Self::Level(NumberInvalidity::OutOfRange) => write!(
                f,
                "level must be between {min} and {max}",
                min = Level::MIN,
                max = Level::MAX
            ),
            Self::ExScore {
                invalidity: NumberInvalidity::NotANumber,
                max: _,
            } => f.write_str("score must be an integer"),
            Self::ExScore {
                invalidity: NumberInvalidity::OutOfRange,
                max,
            } => write!(f, "score must be between 0 and {max}"),
            Self::DjLevel => f.write_str("DJ level must be selected from the list"),
            Self::Lamp => f.write_str("lamp must be selected from the list"),
            Self::Date(err) => fmt::Display::fmt(err, f),
        }
    }
}

/// All invalidities of a rejected input, in field order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputErrors(Vec<ScoreInputInvalidity>);

impl InputErrors {
    #[must_use]
    pub fn invalidities(&self) -> &[ScoreInputInvalidity] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable messages, one per invalidity
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<ValidationContext<ScoreInputInvalidity>> for InputErrors {
    fn from(from: ValidationContext<ScoreInputInvalidity>) -> Self {
        Self(from.into_iter().collect())
    }
}

impl FromIterator<ScoreInputInvalidity> for InputErrors {
    fn from_iter<I: IntoIterator<Item = ScoreInputInvalidity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for InputErrors {
    type Item = ScoreInputInvalidity;
    type IntoIter = std::vec::IntoIter<ScoreInputInvalidity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for InputErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut invalidities = self.0.iter();
        let Some(first) = invalidities.next() else {
            return f.write_str("no errors");
        };
        fmt::Display::fmt(first, f)?;
        for invalidity in invalidities {
            write!(f, "; {invalidity}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InputErrors {}

/// Parses a decimal integer, optionally signed
///
/// Only surrounding whitespace is tolerated. Anything else that is
/// not a digit makes the whole input invalid instead of parsing a
/// prefix.
fn parse_strict_integer(raw: Option<&str>) -> Result<i64, NumberInvalidity> {
    let Some(trimmed) = raw.and_then(trimmed_non_empty) else {
        return Err(NumberInvalidity::NotANumber);
    };
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberInvalidity::NotANumber);
    }
    // Only overflow may fail here
    trimmed
        .parse::<i64>()
        .map_err(|_| NumberInvalidity::OutOfRange)
}

fn parse_bounded<T>(raw: Option<&str>, min: T, max: T) -> Result<T, NumberInvalidity>
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    let value = parse_strict_integer(raw)?;
    if value < min.into() || value > max.into() {
        return Err(NumberInvalidity::OutOfRange);
    }
    T::try_from(value).map_err(|_| NumberInvalidity::OutOfRange)
}

fn parse_text(raw: Option<&str>) -> Option<String> {
    raw.and_then(trimmed_non_empty).map(ToOwned::to_owned)
}

fn lookup_term<T: Term>(raw: Option<&str>) -> Option<T> {
    raw.and_then(T::lookup)
}

type FieldResult<T> = Result<T, ScoreInputInvalidity>;

struct ParsedInput {
    title: FieldResult<String>,
    artist: FieldResult<String>,
    version: FieldResult<Version>,
    difficulty: FieldResult<Difficulty>,
    level: FieldResult<Level>,
    ex_score: FieldResult<ExScore>,
    dj_level: FieldResult<DjLevel>,
    lamp: FieldResult<Lamp>,
    date: FieldResult<Option<Date>>,
}

impl ParsedInput {
    fn parse(input: &ScoreInput, params: &InputParams) -> Self {
        let ScoreInput {
            title,
            artist,
            version,
            difficulty,
            level,
            score,
            dj_level,
            lamp,
            date,
        } = input;
        let InputParams { max_ex_score } = *params;
        Self {
            title: parse_text(title.as_deref()).ok_or(ScoreInputInvalidity::TitleRequired),
            artist: parse_text(artist.as_deref()).ok_or(ScoreInputInvalidity::ArtistRequired),
            version: lookup_term(version.as_deref()).ok_or(ScoreInputInvalidity::Version),
            difficulty: lookup_term(difficulty.as_deref()).ok_or(ScoreInputInvalidity::Difficulty),
            level: parse_bounded::<LevelValue>(
                level.as_deref(),
                Level::MIN.value(),
                Level::MAX.value(),
            )
            .map(Level::new)
            .map_err(ScoreInputInvalidity::Level),
            ex_score: parse_bounded::<ExScoreValue>(score.as_deref(), 0, max_ex_score)
                .map(ExScore::new)
                .map_err(|invalidity| ScoreInputInvalidity::ExScore {
                    invalidity,
                    max: max_ex_score,
                }),
            dj_level: lookup_term(dj_level.as_deref()).ok_or(ScoreInputInvalidity::DjLevel),
            lamp: lookup_term(lamp.as_deref()).ok_or(ScoreInputInvalidity::Lamp),
            date: date
                .as_deref()
                .and_then(trimmed_non_empty)
                .map(parse_iso_date)
                .transpose()
                .map_err(ScoreInputInvalidity::Date),
        }
    }

    fn into_score(
        self,
        default_date: Date,
    ) -> Result<Score, ValidationContext<ScoreInputInvalidity>> {
        let Self {
            title,
            artist,
            version,
            difficulty,
            level,
            ex_score,
            dj_level,
            lamp,
            date,
        } = self;
        match (
            title, artist, version, difficulty, level, ex_score, dj_level, lamp, date,
        ) {
            (
                Ok(title),
                Ok(artist),
                Ok(version),
                Ok(difficulty),
                Ok(level),
                Ok(ex_score),
                Ok(dj_level),
                Ok(lamp),
                Ok(date),
            ) => Ok(Score {
                title,
                artist,
                version,
                difficulty,
                level,
                ex_score,
                dj_level,
                lamp,
                date: date.unwrap_or(default_date),
            }),
            (title, artist, version, difficulty, level, ex_score, dj_level, lamp, date) => Err([
                title.err(),
                artist.err(),
                version.err(),
                difficulty.err(),
                level.err(),
                ex_score.err(),
                dj_level.err(),
                lamp.err(),
                date.err(),
            ]
            .into_iter()
            .flatten()
            .fold(ValidationContext::new(), |context, invalidity| {
                context.invalidate(invalidity)
            })),
        }
    }
}

impl ScoreInput {
    /// Checks all fields without producing a [`Score`].
    pub fn validate(&self, params: &InputParams) -> ValidationResult<ScoreInputInvalidity> {
        ParsedInput::parse(self, params)
            .into_score(Date::MIN)
            .map(drop)
    }

    /// Parses and checks all fields
    ///
    /// Enumerated fields are resolved to their canonical terms and text
    /// fields are trimmed. A missing date is replaced by `default_date`.
    pub fn normalize(&self, params: &InputParams, default_date: Date) -> Result<Score, InputErrors> {
        let score = ParsedInput::parse(self, params)
            .into_score(default_date)
            .map_err(InputErrors::from)?;
        debug_assert!(score.is_valid());
        Ok(score)
    }
}

#[cfg(test)]
mod tests;
