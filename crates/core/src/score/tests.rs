// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::civil::date;

use super::*;

fn blue_rain() -> Score {
    Score {
        title: "Blue Rain".to_owned(),
        artist: "dj TAKA VS. Ryu☆".to_owned(),
        version: Version::Distorted,
        difficulty: Difficulty::Another,
        level: Level::new(12),
        ex_score: ExScore::new(2850),
        dj_level: DjLevel::Aa,
        lamp: Lamp::HardClear,
        date: date(2024, 5, 1),
    }
}

#[test]
fn valid_score() {
    assert!(blue_rain().is_valid());
}

#[test]
fn level_bounds() {
    assert!(Level::new(0).validate().is_err());
    assert!(Level::MIN.validate().is_ok());
    assert!(Level::MAX.validate().is_ok());
    assert!(Level::new(13).validate().is_err());
}

#[test]
fn untrimmed_or_empty_text_is_invalid() {
    let mut score = blue_rain();
    score.title = " Blue Rain".to_owned();
    assert!(!score.is_valid());

    let mut score = blue_rain();
    score.artist = String::new();
    let invalidities = score.validate().unwrap_err().into_iter().collect::<Vec<_>>();
    assert_eq!(vec![ScoreInvalidity::Artist], invalidities);
}

#[test]
fn all_invalidities_are_reported() {
    let score = Score {
        title: "  ".to_owned(),
        artist: String::new(),
        level: Level::new(99),
        ..blue_rain()
    };
    let invalidities = score.validate().unwrap_err().into_iter().collect::<Vec<_>>();
    assert_eq!(
        vec![
            ScoreInvalidity::Title,
            ScoreInvalidity::Artist,
            ScoreInvalidity::Level(LevelInvalidity::OutOfRange),
        ],
        invalidities
    );
}

#[test]
fn ordered_vocabularies() {
    assert!(DjLevel::F < DjLevel::Aaa);
    assert!(DjLevel::A < DjLevel::Aa);
    assert!(Lamp::Failed < Lamp::FullCombo);
    assert!(Version::FirstStyle < Version::Substream);
    assert!(Version::Substream < Version::SecondStyle);
}
