// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::NonZeroU32;

use diesel::connection::SimpleConnection as _;

use super::*;
use crate::connection::{Storage, pool::create_connection_pool};

const fn config() -> Config {
    Config {
        acquire_read_timeout_millis: NonZeroU64::new(1_000).unwrap(),
        acquire_write_timeout_millis: NonZeroU64::new(1_000).unwrap(),
    }
}

fn in_memory_gatekeeper() -> anyhow::Result<Gatekeeper> {
    let pool = create_connection_pool(&Storage::InMemory, NonZeroU32::MIN)?;
    Ok(Gatekeeper::new(pool, config()))
}

#[tokio::test]
async fn write_then_read() -> anyhow::Result<()> {
    let gatekeeper = in_memory_gatekeeper()?;
    gatekeeper
        .spawn_blocking_write_task(|mut connection| {
            connection.batch_execute(
                "CREATE TABLE plays (id INTEGER PRIMARY KEY); INSERT INTO plays (id) VALUES (1), (2);",
            )
        })
        .await??;
    let count = gatekeeper
        .spawn_blocking_read_task(|mut connection| {
            crate::connection::pool::tests::count_rows(&mut connection)
        })
        .await??;
    assert_eq!(2, count);
    assert_eq!(PendingTasks { read: 0, write: 0 }, gatekeeper.pending_tasks());
    Ok(())
}

#[tokio::test]
async fn decommissioned_rejects_tasks() -> anyhow::Result<()> {
    let gatekeeper = in_memory_gatekeeper()?;
    gatekeeper.decommission();
    let result = gatekeeper.spawn_blocking_read_task(|_connection| ()).await;
    assert!(matches!(result, Err(Error::ServiceUnavailable)));
    let result = gatekeeper.spawn_blocking_write_task(|_connection| ()).await;
    assert!(matches!(result, Err(Error::ServiceUnavailable)));
    Ok(())
}

#[tokio::test]
async fn write_task_times_out_while_locked() -> anyhow::Result<()> {
    let pool = create_connection_pool(&Storage::InMemory, NonZeroU32::MIN)?;
    let gatekeeper = Gatekeeper::new(
        pool,
        Config {
            acquire_read_timeout_millis: NonZeroU64::MIN,
            acquire_write_timeout_millis: NonZeroU64::MIN,
        },
    );
    let _read_guard = gatekeeper.connection_pool.read().await;
    let result = gatekeeper.spawn_blocking_write_task(|_connection| ()).await;
    assert!(matches!(result, Err(Error::TaskTimeout { .. })));
    Ok(())
}
