// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_core::{Difficulty, EntityId, Score, ScoreEntity};

use crate::prelude::*;

/// Storage of scores with store-assigned ids
///
/// Ids are assigned in increasing order and never reused, even
/// after the most recent entity has been deleted.
pub trait EntityRepo {
    fn insert_score_entity(&mut self, score: &Score) -> RepoResult<EntityId>;

    /// Replaces all fields of an existing entity.
    fn update_score_entity(&mut self, id: EntityId, score: &Score) -> RepoResult<()>;

    fn delete_score_entity(&mut self, id: EntityId) -> RepoResult<()>;

    fn load_score_entity(&mut self, id: EntityId) -> RepoResult<ScoreEntity>;

    /// Loads all entities ordered by id.
    fn load_score_entities(
        &mut self,
        collector: &mut dyn ReservableRecordCollector<Header = EntityId, Record = Score>,
    ) -> RepoResult<()>;

    fn count_score_entities(&mut self) -> RepoResult<u64>;

    /// Finds all entities that refer to the same chart.
    ///
    /// Titles are compared case-insensitively.
    fn find_score_ids_by_chart(
        &mut self,
        title: &str,
        difficulty: Difficulty,
    ) -> RepoResult<Vec<EntityId>>;

    fn load_all_score_entities(&mut self) -> RepoResult<Vec<ScoreEntity>> {
        let mut collector = Vec::<ScoreEntity>::new();
        self.load_score_entities(&mut collector)?;
        Ok(collector)
    }
}

/// Case-insensitive comparison of chart titles
#[must_use]
pub fn is_same_title(lhs: &str, rhs: &str) -> bool {
    lhs.to_lowercase() == rhs.to_lowercase()
}
