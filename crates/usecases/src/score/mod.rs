// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_core::{
    Difficulty, DjLevel, EntityId, ExScore, InputParams, Lamp, Level, Score, ScoreEntity,
    ScoreInput, Version, prelude::*, util::clock::today_utc,
};
use iidx_score_core_api::score::{Params as QueryParams, query as filter_and_sort};
use iidx_score_repo::score::EntityRepo;
use jiff::civil::{Date, date};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;

/// How to treat multiple scores for the same chart
///
/// A chart is identified by its title (case-insensitive) and difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicateKeyPolicy {
    #[default]
    Allow,
    RejectSameChart,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Params {
    pub input: InputParams,
    pub duplicate_key_policy: DuplicateKeyPolicy,
}

#[derive(Debug)]
pub struct ValidatedInput(Score);

impl ValidatedInput {
    #[must_use]
    pub fn into_inner(self) -> Score {
        let Self(score) = self;
        score
    }
}

pub fn validate_input(
    params: &InputParams,
    input: &ScoreInput,
    default_date: Date,
) -> Result<ValidatedInput> {
    let score = input.normalize(params, default_date)?;
    if let Err(err) = score.validate() {
        return Err(anyhow::anyhow!("Invalid score: {err:?}").into());
    }
    Ok(ValidatedInput(score))
}

fn check_duplicate_key(
    repo: &mut impl EntityRepo,
    policy: DuplicateKeyPolicy,
    score: &Score,
    ignored_id: Option<EntityId>,
) -> Result<()> {
    match policy {
        DuplicateKeyPolicy::Allow => Ok(()),
        DuplicateKeyPolicy::RejectSameChart => {
            let ids = repo.find_score_ids_by_chart(&score.title, score.difficulty)?;
            if ids.into_iter().any(|id| Some(id) != ignored_id) {
                log::info!(
                    "Rejecting duplicate score for chart {title} [{difficulty}]",
                    title = score.title,
                    difficulty = score.difficulty,
                );
                return Err(RepoError::Conflict.into());
            }
            Ok(())
        }
    }
}

/// Stores a new score
///
/// The date defaults to the current date.
pub fn create(
    repo: &mut impl EntityRepo,
    params: &Params,
    input: &ScoreInput,
) -> Result<ScoreEntity> {
    let score = validate_input(&params.input, input, today_utc())?.into_inner();
    check_duplicate_key(repo, params.duplicate_key_policy, &score, None)?;
    let id = repo.insert_score_entity(&score)?;
    log::info!("Created score {id}");
    repo.load_score_entity(id).map_err(Into::into)
}

/// Replaces all fields of an existing score
///
/// The date of the existing score is kept if none is given.
pub fn update(
    repo: &mut impl EntityRepo,
    params: &Params,
    id: EntityId,
    input: &ScoreInput,
) -> Result<ScoreEntity> {
    let existing = repo.load_score_entity(id)?;
    let score = validate_input(&params.input, input, existing.body.date)?.into_inner();
    check_duplicate_key(repo, params.duplicate_key_policy, &score, Some(id))?;
    repo.update_score_entity(id, &score)?;
    log::info!("Updated score {id}");
    Ok(ScoreEntity::new(id, score))
}

pub fn purge(repo: &mut impl EntityRepo, id: EntityId) -> Result<()> {
    repo.delete_score_entity(id)?;
    log::info!("Deleted score {id}");
    Ok(())
}

pub fn load_one(repo: &mut impl EntityRepo, id: EntityId) -> Result<ScoreEntity> {
    repo.load_score_entity(id).map_err(Into::into)
}

/// Loads all scores ordered by id.
pub fn load_all(repo: &mut impl EntityRepo) -> Result<Vec<ScoreEntity>> {
    repo.load_all_score_entities().map_err(Into::into)
}

pub fn query(repo: &mut impl EntityRepo, params: &QueryParams) -> Result<Vec<ScoreEntity>> {
    let entities = repo.load_all_score_entities()?;
    Ok(filter_and_sort(entities, params))
}

/// Demo scores for an empty store
#[must_use]
pub fn initial_scores() -> Vec<Score> {
    vec![
        Score {
            title: "Blue Rain".to_owned(),
            artist: "dj TAKA VS Ryu☆".to_owned(),
            version: Version::Bistrover,
            difficulty: Difficulty::Hyper,
            level: Level::new(10),
            ex_score: ExScore::new(1820),
            dj_level: DjLevel::Aa,
            lamp: Lamp::HardClear,
            date: date(2025, 11, 14),
        },
        Score {
            title: "V".to_owned(),
            artist: "TAKA respect for J.S.B.".to_owned(),
            version: Version::ThirdStyle,
            difficulty: Difficulty::Another,
            level: Level::new(12),
            ex_score: ExScore::new(1890),
            dj_level: DjLevel::Aa,
            lamp: Lamp::Clear,
            date: date(2025, 11, 12),
        },
        Score {
            title: "Sparkle Shower".to_owned(),
            artist: "SYUNN".to_owned(),
            version: Version::Sinobuz,
            difficulty: Difficulty::Another,
            level: Level::new(11),
            ex_score: ExScore::new(1750),
            dj_level: DjLevel::A,
            lamp: Lamp::Clear,
            date: date(2025, 11, 10),
        },
    ]
}

/// Inserts the [`initial_scores`] if the store is empty
///
/// Returns the number of inserted scores.
pub fn seed_if_empty(repo: &mut impl EntityRepo) -> Result<usize> {
    if repo.count_score_entities()? > 0 {
        return Ok(0);
    }
    let scores = initial_scores();
    for score in &scores {
        debug_assert!(score.is_valid());
        repo.insert_score_entity(score)?;
    }
    log::info!("Seeded empty store with {count} score(s)", count = scores.len());
    Ok(scores.len())
}
