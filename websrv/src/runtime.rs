// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{future::Future, sync::Arc};

use warp::Filter as _;

use iidx_score_storage_sqlite::connection::pool::{
    create_connection_pool, gatekeeper::Gatekeeper as DatabaseConnectionGatekeeper,
    get_pooled_connection,
};
use iidx_score_usecases_sqlite as uc;
use iidx_score_websrv_warp_sqlite::handle_rejection;

use crate::{
    config::{Config, DatabaseConfig},
    routing,
};

pub(crate) fn provision_database(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnectionGatekeeper> {
    log::info!(
        "Commissioning SQLite database: {storage}",
        storage = config.connection.storage.database_url(),
    );

    // The maximum size of the pool defines the maximum number of
    // allowed readers while writers require exclusive access.
    let pool_max_size = config.connection.pool.max_size;
    log::info!("Creating connection pool of max. size {pool_max_size}");
    let connection_pool = create_connection_pool(&config.connection.storage, pool_max_size)?;

    {
        let mut connection = get_pooled_connection(&connection_pool)?;
        uc::database::initialize(&mut connection)?;
        if config.migrate_schema_on_startup {
            log::info!("Migrating database schema");
            uc::database::migrate_schema(&mut connection)?;
        }
        if config.seed_if_empty {
            uc::score::seed_if_empty(&mut connection)?;
        }
    }

    Ok(DatabaseConnectionGatekeeper::new(
        connection_pool,
        config.connection.pool.gatekeeper,
    ))
}

pub(crate) async fn run(
    config: Config,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    log::info!("Launching");

    let shared_connection_gatekeeper = Arc::new(provision_database(&config.database)?);
    let score_params = config.scores.params();

    log::info!("Creating service routes");

    let all_filters =
        routing::create_filters(Arc::clone(&shared_connection_gatekeeper), score_params)
            .recover(handle_rejection)
            .with(warp::log(concat!(env!("CARGO_CRATE_NAME"), "::requests")));

    log::info!("Starting");

    let (socket_addr, server_listener) = warp::serve(all_filters)
        .try_bind_with_graceful_shutdown(config.network.endpoint.socket_addr(), shutdown_signal)?;

    log::info!("Listening on {socket_addr}");
    // Publish socket address on stdout
    println!("{socket_addr}");

    server_listener.await;

    log::info!("Stopping");

    shared_connection_gatekeeper.decommission();

    log::info!("Terminating");

    Ok(())
}
