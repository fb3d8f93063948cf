// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use test_log::test;

use iidx_score_usecases::score::DuplicateKeyPolicy;

use super::*;
use crate::tests::establish_connection;

fn blue_rain_input() -> ScoreInput {
    ScoreInput {
        title: Some(" Blue Rain ".to_owned()),
        artist: Some("dj TAKA VS Ryu☆".to_owned()),
        version: Some("distorted".to_owned()),
        difficulty: Some("another".to_owned()),
        level: Some("12".to_owned()),
        score: Some("2850".to_owned()),
        dj_level: Some("aa".to_owned()),
        lamp: Some("hard clear".to_owned()),
        date: Some("2024-05-01".to_owned()),
    }
}

#[test]
fn create_normalizes_and_stores() -> anyhow::Result<()> {
    let mut connection = establish_connection()?;
    let created = create(&mut connection, &Params::default(), &blue_rain_input())?;
    assert_eq!("Blue Rain", created.body.title);
    assert_eq!("DistorteD", created.body.version.to_string());
    assert_eq!("HARD CLEAR", created.body.lamp.to_string());
    assert_eq!(created, load_one(&mut connection, created.id)?);
    Ok(())
}

#[test]
fn invalid_input_is_not_stored() -> anyhow::Result<()> {
    let mut connection = establish_connection()?;
    let input = ScoreInput {
        score: Some("4001".to_owned()),
        ..blue_rain_input()
    };
    assert!(matches!(
        create(&mut connection, &Params::default(), &input),
        Err(Error::Input(_))
    ));
    assert!(load_all(&mut connection)?.is_empty());
    Ok(())
}

#[test]
fn duplicate_chart_rolls_back() -> anyhow::Result<()> {
    let mut connection = establish_connection()?;
    let params = Params {
        duplicate_key_policy: DuplicateKeyPolicy::RejectSameChart,
        ..Default::default()
    };
    create(&mut connection, &params, &blue_rain_input())?;
    assert!(matches!(
        create(&mut connection, &params, &blue_rain_input()),
        Err(Error::Repository(RepoError::Conflict))
    ));
    assert_eq!(1, load_all(&mut connection)?.len());
    Ok(())
}

#[test]
fn update_and_purge() -> anyhow::Result<()> {
    let mut connection = establish_connection()?;
    let created = create(&mut connection, &Params::default(), &blue_rain_input())?;
    let input = ScoreInput {
        lamp: Some("FULL COMBO".to_owned()),
        date: None,
        ..blue_rain_input()
    };
    let updated = update(&mut connection, &Params::default(), created.id, &input)?;
    assert_eq!(created.body.date, updated.body.date);
    assert_eq!(updated, load_one(&mut connection, created.id)?);
    purge(&mut connection, created.id)?;
    assert!(matches!(
        purge(&mut connection, created.id),
        Err(Error::Repository(RepoError::NotFound))
    ));
    assert!(matches!(
        update(&mut connection, &Params::default(), created.id, &input),
        Err(Error::Repository(RepoError::NotFound))
    ));
    Ok(())
}

#[test]
fn seed_and_query() -> anyhow::Result<()> {
    let mut connection = establish_connection()?;
    assert_eq!(3, seed_if_empty(&mut connection)?);
    assert_eq!(0, seed_if_empty(&mut connection)?);
    let params = QueryParams::from_raw(Some("BLUE"), None, None);
    let found = query(&mut connection, &params)?;
    assert_eq!(1, found.len());
    assert_eq!("Blue Rain", found[0].body.title);
    let by_score = query(&mut connection, &QueryParams::from_raw(None, Some("score"), None))?
        .into_iter()
        .map(|entity| entity.body.ex_score.value())
        .collect::<Vec<_>>();
    assert_eq!(vec![1890, 1820, 1750], by_score);
    Ok(())
}
