// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    num::NonZeroU64,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{sync::RwLock, task::spawn_blocking, time::sleep};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

use super::{ConnectionPool, PooledConnection, get_pooled_connection};

/// Manage database connections for asynchronous tasks
///
/// Only a single writer is allowed to access the `SQLite` database
/// at any given time while readers share access. Connections are
/// obtained and used on a blocking thread.
#[expect(missing_debug_implementations)]
pub struct Gatekeeper {
    connection_pool: RwLock<ConnectionPool>,
    acquire_read_timeout: Duration,
    acquire_write_timeout: Duration,
    request_counter_state: Arc<RequestCounterState>,
    decommissioned: AtomicBool,
}

#[derive(Debug, Default)]
struct RequestCounterState {
    read_count: AtomicUsize,
    write_count: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestCounterMode {
    Read,
    Write,
}

impl RequestCounterMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

struct RequestCounterScope {
    shared_state: Arc<RequestCounterState>,
    mode: RequestCounterMode,
}

impl RequestCounterState {
    fn counter(&self, mode: RequestCounterMode) -> &AtomicUsize {
        match mode {
            RequestCounterMode::Read => &self.read_count,
            RequestCounterMode::Write => &self.write_count,
        }
    }
}

impl RequestCounterScope {
    fn new(shared_state: Arc<RequestCounterState>, mode: RequestCounterMode) -> Self {
        let pending_before = shared_state.counter(mode).fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "Starting {mode} request: {pending} pending {mode} request(s)",
            mode = mode.as_str(),
            pending = pending_before + 1,
        );
        Self { shared_state, mode }
    }
}

impl Drop for RequestCounterScope {
    fn drop(&mut self) {
        let pending_before = self
            .shared_state
            .counter(self.mode)
            .fetch_sub(1, Ordering::Relaxed);
        debug_assert!(pending_before > 0);
        log::debug!(
            "Finished {mode} request: {pending} pending {mode} request(s)",
            mode = self.mode.as_str(),
            pending = pending_before - 1,
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTasks {
    pub read: usize,
    pub write: usize,
}

impl Gatekeeper {
    #[must_use]
    pub fn new(connection_pool: ConnectionPool, config: Config) -> Self {
        let Config {
            acquire_read_timeout_millis,
            acquire_write_timeout_millis,
        } = config;
        Self {
            connection_pool: RwLock::new(connection_pool),
            acquire_read_timeout: Duration::from_millis(acquire_read_timeout_millis.get()),
            acquire_write_timeout: Duration::from_millis(acquire_write_timeout_millis.get()),
            request_counter_state: Default::default(),
            decommissioned: AtomicBool::new(false),
        }
    }

    /// Reject all subsequent tasks
    pub fn decommission(&self) {
        self.decommissioned.store(true, Ordering::Release);
    }

    fn check_not_decommissioned(&self) -> Result<()> {
        if self.decommissioned.load(Ordering::Acquire) {
            return Err(Error::ServiceUnavailable);
        }
        Ok(())
    }

    async fn spawn_blocking_task<H, R>(
        &self,
        mode: RequestCounterMode,
        connection_handler: H,
    ) -> Result<R>
    where
        H: FnOnce(PooledConnection) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.check_not_decommissioned()?;
        let _request_counter_scope =
            RequestCounterScope::new(Arc::clone(&self.request_counter_state), mode);
        let acquire_timeout = match mode {
            RequestCounterMode::Read => self.acquire_read_timeout,
            RequestCounterMode::Write => self.acquire_write_timeout,
        };
        let timeout = sleep(acquire_timeout);
        tokio::pin!(timeout);
        let pool = tokio::select! {
            () = &mut timeout => {
                return Err(Error::TaskTimeout {
                    reason: "database is locked".to_owned(),
                });
            }
            guard = self.connection_pool.read(), if mode == RequestCounterMode::Read => {
                PoolGuard::Read(guard)
            }
            guard = self.connection_pool.write(), if mode == RequestCounterMode::Write => {
                PoolGuard::Write(guard)
            }
        };
        self.check_not_decommissioned()?;
        let connection_pool = pool.connection_pool().clone();
        let result = spawn_blocking(move || {
            let connection = get_pooled_connection(&connection_pool)?;
            Ok(connection_handler(connection))
        })
        .await
        .map_err(Error::TaskScheduling)?;
        // The lock is released only after the task has finished
        drop(pool);
        result
    }

    pub async fn spawn_blocking_read_task<H, R>(&self, connection_handler: H) -> Result<R>
    where
        H: FnOnce(PooledConnection) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.spawn_blocking_task(RequestCounterMode::Read, connection_handler)
            .await
    }

    pub async fn spawn_blocking_write_task<H, R>(&self, connection_handler: H) -> Result<R>
    where
        H: FnOnce(PooledConnection) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.spawn_blocking_task(RequestCounterMode::Write, connection_handler)
            .await
    }

    #[must_use]
    pub fn pending_tasks(&self) -> PendingTasks {
        PendingTasks {
            read: self
                .request_counter_state
                .read_count
                .load(Ordering::Relaxed),
            write: self
                .request_counter_state
                .write_count
                .load(Ordering::Relaxed),
        }
    }
}

enum PoolGuard<'a> {
    Read(tokio::sync::RwLockReadGuard<'a, ConnectionPool>),
    Write(tokio::sync::RwLockWriteGuard<'a, ConnectionPool>),
}

impl PoolGuard<'_> {
    fn connection_pool(&self) -> &ConnectionPool {
        match self {
            Self::Read(guard) => guard,
            Self::Write(guard) => guard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub acquire_read_timeout_millis: NonZeroU64,
    pub acquire_write_timeout_millis: NonZeroU64,
}

#[cfg(test)]
mod tests;
