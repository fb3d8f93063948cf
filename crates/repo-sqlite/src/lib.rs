// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::{
    QueryResult,
    connection::SimpleConnection as _,
    migration::{MigrationVersion, Result as MigrationResult},
};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness as _, embed_migrations};

pub type DbBackend = diesel::sqlite::Sqlite;
pub type DbConnection = diesel::sqlite::SqliteConnection;

pub mod prelude {
    use std::ops::{Deref, DerefMut};

    pub(crate) use diesel::{prelude::*, result::Error as DieselError};
    pub(crate) use iidx_score_core::prelude::*;
    pub(crate) use iidx_score_repo::prelude::*;

    pub use crate::{DbBackend, DbConnection};

    #[expect(missing_debug_implementations)]
    pub struct Connection<'db>(&'db mut DbConnection);

    impl<'db> Connection<'db> {
        pub const fn new(inner: &'db mut DbConnection) -> Self {
            Self(inner)
        }
    }

    impl<'db> From<&'db mut DbConnection> for Connection<'db> {
        fn from(inner: &'db mut DbConnection) -> Self {
            Self::new(inner)
        }
    }

    impl AsRef<DbConnection> for Connection<'_> {
        fn as_ref(&self) -> &DbConnection {
            self.0
        }
    }

    impl AsMut<DbConnection> for Connection<'_> {
        fn as_mut(&mut self) -> &mut DbConnection {
            self.0
        }
    }

    impl Deref for Connection<'_> {
        type Target = DbConnection;

        fn deref(&self) -> &Self::Target {
            self.as_ref()
        }
    }

    impl DerefMut for Connection<'_> {
        fn deref_mut(&mut self) -> &mut Self::Target {
            self.as_mut()
        }
    }

    pub(crate) fn repo_error(err: DieselError) -> RepoError {
        match err {
            DieselError::NotFound => RepoError::NotFound,
            err => anyhow::Error::from(err).into(),
        }
    }

    pub(crate) use iidx_score_repo::RecordId as RowId;
}

pub mod repo;

mod db;

pub use prelude::Connection;

/// Configure the database engine
///
/// Some values like the text encoding can only be changed once after the
/// database has initially been created.
pub fn initialize_database(connection: &mut DbConnection) -> QueryResult<()> {
    connection.batch_execute(
        r"
PRAGMA journal_mode = WAL;        -- better write-concurrency
PRAGMA synchronous = NORMAL;      -- fsync only in critical moments, safe for journal_mode = WAL
PRAGMA wal_autocheckpoint = 1000; -- write WAL changes back every 1000 pages (default)
PRAGMA wal_checkpoint(TRUNCATE);  -- free some space by truncating possibly massive WAL files from the last run
PRAGMA secure_delete = 0;         -- avoid some disk I/O
PRAGMA automatic_index = 1;       -- detect and log missing indexes
PRAGMA encoding = 'UTF-8';
",
    )
}

const EMBEDDED_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn run_migrations(
    connection: &mut DbConnection,
) -> MigrationResult<Vec<MigrationVersion<'_>>> {
    connection.run_pending_migrations(EMBEDDED_MIGRATIONS)
}
