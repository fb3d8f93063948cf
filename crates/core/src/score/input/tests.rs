// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::civil::date;

use super::*;

fn some(value: &str) -> Option<String> {
    Some(value.to_owned())
}

fn v_another() -> ScoreInput {
    ScoreInput {
        title: some("V"),
        artist: some("TAKA"),
        version: some("3rd style"),
        difficulty: some("ANOTHER"),
        level: some("12"),
        score: some("1890"),
        dj_level: some("AA"),
        lamp: some("CLEAR"),
        date: None,
    }
}

fn invalidities(input: &ScoreInput, params: &InputParams) -> Vec<ScoreInputInvalidity> {
    input
        .validate(params)
        .err()
        .map(|context| context.into_iter().collect())
        .unwrap_or_default()
}

#[test]
fn normalize_valid_input_with_default_date() {
    let today = date(2026, 10, 19);
    let score = v_another()
        .normalize(&InputParams::default(), today)
        .unwrap();
    assert_eq!(
        Score {
            title: "V".to_owned(),
            artist: "TAKA".to_owned(),
            version: Version::ThirdStyle,
            difficulty: Difficulty::Another,
            level: Level::new(12),
            ex_score: ExScore::new(1890),
            dj_level: DjLevel::Aa,
            lamp: Lamp::Clear,
            date: today,
        },
        score
    );
}

#[test]
fn normalize_canonicalizes_enumerated_fields_and_trims_text() {
    let input = ScoreInput {
        title: some("  Blue Rain "),
        version: some("distorted"),
        difficulty: some("another"),
        dj_level: some(" aaa"),
        lamp: some("ex-hard clear"),
        date: some("2024-05-01"),
        ..v_another()
    };
    let score = input
        .normalize(&InputParams::default(), date(2026, 10, 19))
        .unwrap();
    assert_eq!("Blue Rain", score.title);
    assert_eq!("DistorteD", score.version.as_str());
    assert_eq!(Difficulty::Another, score.difficulty);
    assert_eq!(DjLevel::Aaa, score.dj_level);
    assert_eq!(Lamp::ExHardClear, score.lamp);
    assert_eq!(date(2024, 5, 1), score.date);
}

#[test]
fn blank_date_is_defaulted() {
    let input = ScoreInput {
        date: some("  "),
        ..v_another()
    };
    let score = input
        .normalize(&InputParams::default(), date(2026, 1, 2))
        .unwrap();
    assert_eq!(date(2026, 1, 2), score.date);
}

#[test]
fn valid_input_has_no_invalidities() {
    assert!(v_another().validate(&InputParams::default()).is_ok());
}

#[test]
fn empty_title_is_required() {
    let input = ScoreInput {
        title: some(""),
        ..v_another()
    };
    let errors = input
        .normalize(&InputParams::default(), date(2026, 10, 19))
        .unwrap_err();
    assert_eq!(
        &[ScoreInputInvalidity::TitleRequired],
        errors.invalidities()
    );
    assert_eq!(vec!["title is required".to_owned()], errors.messages());
}

#[test]
fn all_invalid_fields_are_reported_in_field_order() {
    let input = ScoreInput {
        date: some("yesterday"),
        ..ScoreInput::default()
    };
    assert_eq!(
        vec![
            ScoreInputInvalidity::TitleRequired,
            ScoreInputInvalidity::ArtistRequired,
            ScoreInputInvalidity::Version,
            ScoreInputInvalidity::Difficulty,
            ScoreInputInvalidity::Level(NumberInvalidity::NotANumber),
            ScoreInputInvalidity::ExScore {
                invalidity: NumberInvalidity::NotANumber,
                max: DEFAULT_MAX_EX_SCORE,
            },
            ScoreInputInvalidity::DjLevel,
            ScoreInputInvalidity::Lamp,
            ScoreInputInvalidity::Date(ParseIsoDateError::Format),
        ],
        invalidities(&input, &InputParams::default())
    );
}

#[test]
fn unknown_enumerated_terms_are_rejected() {
    let input = ScoreInput {
        version: some("4th"),
        difficulty: some("EXTRA"),
        dj_level: some("S"),
        lamp: some("HARD"),
        ..v_another()
    };
    assert_eq!(
        vec![
            ScoreInputInvalidity::Version,
            ScoreInputInvalidity::Difficulty,
            ScoreInputInvalidity::DjLevel,
            ScoreInputInvalidity::Lamp,
        ],
        invalidities(&input, &InputParams::default())
    );
}

#[test]
fn level_is_parsed_strictly() {
    let params = InputParams::default();
    for (raw, expected) in [
        ("abc", Some(NumberInvalidity::NotANumber)),
        ("12abc", Some(NumberInvalidity::NotANumber)),
        ("1.5", Some(NumberInvalidity::NotANumber)),
        ("-", Some(NumberInvalidity::NotANumber)),
        ("+5", Some(NumberInvalidity::NotANumber)),
        ("0", Some(NumberInvalidity::OutOfRange)),
        ("-1", Some(NumberInvalidity::OutOfRange)),
        ("13", Some(NumberInvalidity::OutOfRange)),
        ("99999999999999999999", Some(NumberInvalidity::OutOfRange)),
        ("1", None),
        (" 12 ", None),
    ] {
        let input = ScoreInput {
            level: some(raw),
            ..v_another()
        };
        assert_eq!(
            expected
                .map(ScoreInputInvalidity::Level)
                .into_iter()
                .collect::<Vec<_>>(),
            invalidities(&input, &params),
            "level = {raw:?}"
        );
    }
}

#[test]
fn score_bound_is_configurable() {
    let input = ScoreInput {
        score: some("4001"),
        ..v_another()
    };
    let errors = input
        .normalize(&InputParams::default(), date(2026, 10, 19))
        .unwrap_err();
    assert_eq!(
        vec!["score must be between 0 and 4000".to_owned()],
        errors.messages()
    );

    let params = InputParams {
        max_ex_score: 10_000,
    };
    assert!(input.validate(&params).is_ok());
    let input = ScoreInput {
        score: some("10001"),
        ..v_another()
    };
    assert_eq!(
        vec![ScoreInputInvalidity::ExScore {
            invalidity: NumberInvalidity::OutOfRange,
            max: 10_000,
        }],
        invalidities(&input, &params)
    );
}

#[test]
fn zero_score_is_valid() {
    let input = ScoreInput {
        score: some("0"),
        ..v_another()
    };
    let score = input
        .normalize(&InputParams::default(), date(2026, 10, 19))
        .unwrap();
    assert_eq!(ExScore::new(0), score.ex_score);
}

#[test]
fn nonexistent_date_is_rejected() {
    let input = ScoreInput {
        date: some("2023-02-29"),
        ..v_another()
    };
    assert_eq!(
        vec![ScoreInputInvalidity::Date(ParseIsoDateError::Range)],
        invalidities(&input, &InputParams::default())
    );
}

#[test]
fn input_from_score_normalizes_to_the_same_score() {
    let score = v_another()
        .normalize(&InputParams::default(), date(2025, 12, 24))
        .unwrap();
    let input = ScoreInput::from(&score);
    assert_eq!(some("2025-12-24"), input.date);
    assert_eq!(
        score,
        input
            .normalize(&InputParams::default(), date(2026, 10, 19))
            .unwrap()
    );
}

#[test]
fn display_input_errors() {
    let input = ScoreInput {
        title: None,
        level: some("0"),
        ..v_another()
    };
    let errors = input
        .normalize(&InputParams::default(), date(2026, 10, 19))
        .unwrap_err();
    assert_eq!(
        "title is required; level must be between 1 and 12",
        errors.to_string()
    );
    assert_eq!(
        vec!["title", "level"],
        errors
            .invalidities()
            .iter()
            .map(ScoreInputInvalidity::field)
            .collect::<Vec<_>>()
    );
}
