// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_core::{Difficulty, EntityId, Score, ScoreEntity};
use iidx_score_repo::score::{EntityRepo, is_same_title};

use crate::{
    db::score::{models::*, schema::*},
    prelude::*,
};

impl EntityRepo for crate::Connection<'_> {
    fn insert_score_entity(&mut self, score: &Score) -> RepoResult<EntityId> {
        let insertable = InsertableRecord::bind(score);
        let row_id = diesel::insert_into(scores::table)
            .values(&insertable)
            .returning(scores::id)
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)?;
        let id = entity_id_from_sql(row_id)?;
        log::debug!("Inserted score {id}");
        Ok(id)
    }

    fn update_score_entity(&mut self, id: EntityId, score: &Score) -> RepoResult<()> {
        let row_id = entity_id_to_sql(id).ok_or(RepoError::NotFound)?;
        let updatable = UpdatableRecord::bind(score);
        let target = scores::table.filter(scores::id.eq(row_id));
        let rows_affected = diesel::update(target)
            .set(&updatable)
            .execute(self.as_mut())
            .map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn delete_score_entity(&mut self, id: EntityId) -> RepoResult<()> {
        let row_id = entity_id_to_sql(id).ok_or(RepoError::NotFound)?;
        let target = scores::table.filter(scores::id.eq(row_id));
        let rows_affected = diesel::delete(target)
            .execute(self.as_mut())
            .map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        log::debug!("Deleted score {id}");
        Ok(())
    }

    fn load_score_entity(&mut self, id: EntityId) -> RepoResult<ScoreEntity> {
        let row_id = entity_id_to_sql(id).ok_or(RepoError::NotFound)?;
        scores::table
            .filter(scores::id.eq(row_id))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .and_then(|record| record.try_into().map_err(Into::into))
    }

    fn load_score_entities(
        &mut self,
        collector: &mut dyn ReservableRecordCollector<Header = EntityId, Record = Score>,
    ) -> RepoResult<()> {
        let records = scores::table
            .order_by(scores::id)
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        collector.reserve(records.len());
        for record in records {
            let ScoreEntity { id, body } = record.try_into()?;
            collector.collect(id, body);
        }
        Ok(())
    }

    fn count_score_entities(&mut self) -> RepoResult<u64> {
        scores::table
            .count()
            .get_result::<i64>(self.as_mut())
            .map_err(repo_error)
            .map(|count| count.max(0) as u64)
    }

    fn find_score_ids_by_chart(
        &mut self,
        title: &str,
        difficulty: Difficulty,
    ) -> RepoResult<Vec<EntityId>> {
        // SQLite only folds the case of ASCII characters. Titles are
        // compared after loading all candidates with the same difficulty.
        let candidates = scores::table
            .select((scores::id, scores::title))
            .filter(scores::difficulty.eq(difficulty.as_str()))
            .order_by(scores::id)
            .load::<(RowId, String)>(self.as_mut())
            .map_err(repo_error)?;
        candidates
            .into_iter()
            .filter(|(_, candidate)| is_same_title(candidate, title))
            .map(|(row_id, _)| entity_id_from_sql(row_id).map_err(Into::into))
            .collect()
    }
}
