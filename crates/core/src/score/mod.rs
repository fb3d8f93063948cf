// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use jiff::civil::Date;
use strum::{EnumIter, IntoStaticStr};

use crate::{prelude::*, vocabulary::impl_term};

pub mod input;

///////////////////////////////////////////////////////////////////////
// Version
///////////////////////////////////////////////////////////////////////

/// Game version that introduced a song, in release order
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
pub enum Version {
    #[strum(serialize = "1st style")]
    FirstStyle,
    #[strum(serialize = "substream")]
    Substream,
    #[strum(serialize = "2nd style")]
    SecondStyle,
    #[strum(serialize = "3rd style")]
    ThirdStyle,
    #[strum(serialize = "4th style")]
    FourthStyle,
    #[strum(serialize = "5th style")]
    FifthStyle,
    #[strum(serialize = "6th style")]
    SixthStyle,
    #[strum(serialize = "7th style")]
    SeventhStyle,
    #[strum(serialize = "8th style")]
    EighthStyle,
    #[strum(serialize = "9th style")]
    NinthStyle,
    #[strum(serialize = "10th style")]
    TenthStyle,
    #[strum(serialize = "IIDX RED")]
    IidxRed,
    #[strum(serialize = "HAPPY SKY")]
    HappySky,
    #[strum(serialize = "DistorteD")]
    Distorted,
    #[strum(serialize = "GOLD")]
    Gold,
    #[strum(serialize = "DJ TROOPERS")]
    DjTroopers,
    #[strum(serialize = "EMPRESS")]
    Empress,
    #[strum(serialize = "SIRIUS")]
    Sirius,
    #[strum(serialize = "Resort Anthem")]
    ResortAnthem,
    #[strum(serialize = "Lincle")]
    Lincle,
    #[strum(serialize = "tricoro")]
    Tricoro,
    #[strum(serialize = "SPADA")]
    Spada,
    #[strum(serialize = "PENDUAL")]
    Pendual,
    #[strum(serialize = "copula")]
    Copula,
    #[strum(serialize = "SINOBUZ")]
    Sinobuz,
    #[strum(serialize = "CANNON BALLERS")]
    CannonBallers,
    #[strum(serialize = "Rootage")]
    Rootage,
    #[strum(serialize = "HEROIC VERSE")]
    HeroicVerse,
    #[strum(serialize = "BISTROVER")]
    Bistrover,
    #[strum(serialize = "CastHour")]
    CastHour,
    #[strum(serialize = "RESIDENT")]
    Resident,
    #[strum(serialize = "EPOLIS")]
    Epolis,
    #[strum(serialize = "Pinky Crush")]
    PinkyCrush,
    #[strum(serialize = "Sparkle Shower")]
    SparkleShower,
}

impl_term!(Version);

///////////////////////////////////////////////////////////////////////
// Difficulty
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Normal,
    Hyper,
    Another,
    Leggendaria,
}

impl_term!(Difficulty);

///////////////////////////////////////////////////////////////////////
// DjLevel
///////////////////////////////////////////////////////////////////////

/// Letter grade, from worst to best
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DjLevel {
    F,
    E,
    D,
    C,
    B,
    A,
    Aa,
    Aaa,
}

impl_term!(DjLevel);

///////////////////////////////////////////////////////////////////////
// Lamp
///////////////////////////////////////////////////////////////////////

/// Clear status of a play, from worst to best
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
pub enum Lamp {
    #[strum(serialize = "FAILED")]
    Failed,
    #[strum(serialize = "ASSIST EASY")]
    AssistEasy,
    #[strum(serialize = "EASY CLEAR")]
    EasyClear,
    #[strum(serialize = "CLEAR")]
    Clear,
    #[strum(serialize = "HARD CLEAR")]
    HardClear,
    #[strum(serialize = "EX-HARD CLEAR")]
    ExHardClear,
    #[strum(serialize = "FULL COMBO")]
    FullCombo,
}

impl_term!(Lamp);

///////////////////////////////////////////////////////////////////////
// Level
///////////////////////////////////////////////////////////////////////

pub type LevelValue = u8;

/// Chart level
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(LevelValue);

impl Level {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(12);

    #[must_use]
    pub const fn new(value: LevelValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> LevelValue {
        let Self(value) = self;
        value
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LevelInvalidity {
    OutOfRange,
}

impl Validate for Level {
    type Invalidity = LevelInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                *self < Self::MIN || *self > Self::MAX,
                LevelInvalidity::OutOfRange,
            )
            .into()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

///////////////////////////////////////////////////////////////////////
// ExScore
///////////////////////////////////////////////////////////////////////

pub type ExScoreValue = u16;

/// EX score of a play
///
/// The upper bound depends on the chart and is not checked here,
/// see [`input::InputParams`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExScore(ExScoreValue);

impl ExScore {
    #[must_use]
    pub const fn new(value: ExScoreValue) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> ExScoreValue {
        let Self(value) = self;
        value
    }
}

impl fmt::Display for ExScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

///////////////////////////////////////////////////////////////////////
// Score
///////////////////////////////////////////////////////////////////////

/// A recorded play result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub title: String,

    pub artist: String,

    pub version: Version,

    pub difficulty: Difficulty,

    pub level: Level,

    pub ex_score: ExScore,

    pub dj_level: DjLevel,

    pub lamp: Lamp,

    /// Calendar date of the play
    pub date: Date,
}

/// Text is required to be non-empty and trimmed.
#[must_use]
pub fn is_valid_text(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed == text
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoreInvalidity {
    Title,
    Artist,
    Level(LevelInvalidity),
}

impl Validate for Score {
    type Invalidity = ScoreInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            title,
            artist,
            level,
            version: _,
            difficulty: _,
            ex_score: _,
            dj_level: _,
            lamp: _,
            date: _,
        } = self;
        ValidationContext::new()
            .invalidate_if(!is_valid_text(title), Self::Invalidity::Title)
            .invalidate_if(!is_valid_text(artist), Self::Invalidity::Artist)
            .validate_with(level, Self::Invalidity::Level)
            .into()
    }
}

#[cfg(test)]
mod tests;
