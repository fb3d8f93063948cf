// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{borrow::Cow, path::PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod pool;

const IN_MEMORY_DATABASE_URL: &str = ":memory:";

/// Location of the `SQLite` database
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Storage {
    /// Volatile database that lives as long as its connection pool
    #[default]
    InMemory,
    File {
        path: PathBuf,
    },
}

impl Storage {
    /// Interpret a database URL
    ///
    /// `:memory:` (surrounding whitespace ignored) selects the volatile
    /// in-memory database. Everything else is a file path, optionally
    /// prefixed with `sqlite://`.
    #[must_use]
    pub fn from_database_url(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() || url == IN_MEMORY_DATABASE_URL {
            return Self::InMemory;
        }
        let path = url.strip_prefix("sqlite://").unwrap_or(url);
        Self::File { path: path.into() }
    }

    #[must_use]
    pub const fn is_in_memory(&self) -> bool {
        matches!(self, Self::InMemory)
    }

    /// The database URL passed to the connection manager
    #[must_use]
    pub fn database_url(&self) -> Cow<'_, str> {
        match self {
            Self::InMemory => Cow::Borrowed(IN_MEMORY_DATABASE_URL),
            Self::File { path } => path.to_string_lossy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub storage: Storage,
    pub pool: pool::Config,
}

#[cfg(test)]
mod tests;
