// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use iidx_score_repo_sqlite::{initialize_database, run_migrations};

use super::*;

pub fn initialize(connection: &mut DbConnection) -> Result<()> {
    log::info!("Initializing database");
    initialize_database(connection).map_err(StorageError::Database)?;
    Ok(())
}

pub fn migrate_schema(connection: &mut DbConnection) -> Result<()> {
    for migration_version in run_migrations(connection)
        .map_err(|err| anyhow::anyhow!(err))
        .map_err(Error::DatabaseMigration)?
    {
        log::info!("Applied migration '{migration_version}'");
    }
    Ok(())
}
