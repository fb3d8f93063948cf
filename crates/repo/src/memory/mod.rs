// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Memory-resident storage

use anyhow::anyhow;
use iidx_score_core::{Difficulty, EntityId, Score, ScoreEntity};

use crate::{
    prelude::*,
    score::{EntityRepo, is_same_title},
};

/// An owned, ordered list of scores
///
/// Entities are kept in ascending id order.
#[derive(Debug, Clone)]
pub struct ScoreList {
    entities: Vec<ScoreEntity>,
    next_id: Option<EntityId>,
}

impl ScoreList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: Some(EntityId::MIN),
        }
    }

    #[must_use]
    pub fn entities(&self) -> &[ScoreEntity] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn position(&self, id: EntityId) -> RepoResult<usize> {
        self.entities
            .binary_search_by_key(&id, |entity| entity.id)
            .map_err(|_| RepoError::NotFound)
    }
}

impl Default for ScoreList {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRepo for ScoreList {
    fn insert_score_entity(&mut self, score: &Score) -> RepoResult<EntityId> {
        let id = self
            .next_id
            .ok_or_else(|| anyhow!("no more ids available"))?;
        self.next_id = id.next();
        self.entities.push(ScoreEntity::new(id, score.clone()));
        log::debug!("Inserted score {id}");
        Ok(id)
    }

    fn update_score_entity(&mut self, id: EntityId, score: &Score) -> RepoResult<()> {
        let pos = self.position(id)?;
        self.entities[pos].body = score.clone();
        Ok(())
    }

    fn delete_score_entity(&mut self, id: EntityId) -> RepoResult<()> {
        let pos = self.position(id)?;
        self.entities.remove(pos);
        log::debug!("Deleted score {id}");
        Ok(())
    }

    fn load_score_entity(&mut self, id: EntityId) -> RepoResult<ScoreEntity> {
        let pos = self.position(id)?;
        Ok(self.entities[pos].clone())
    }

    fn load_score_entities(
        &mut self,
        collector: &mut dyn ReservableRecordCollector<Header = EntityId, Record = Score>,
    ) -> RepoResult<()> {
        collector.reserve(self.entities.len());
        for entity in &self.entities {
            collector.collect(entity.id, entity.body.clone());
        }
        Ok(())
    }

    fn count_score_entities(&mut self) -> RepoResult<u64> {
        Ok(self.entities.len() as u64)
    }

    fn find_score_ids_by_chart(
        &mut self,
        title: &str,
        difficulty: Difficulty,
    ) -> RepoResult<Vec<EntityId>> {
        let ids = self
            .entities
            .iter()
            .filter(|entity| {
                entity.body.difficulty == difficulty && is_same_title(&entity.body.title, title)
            })
            .map(|entity| entity.id)
            .collect();
        Ok(ids)
    }
}
