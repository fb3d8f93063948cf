// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, fmt, net::IpAddr, num::NonZeroU32, str::FromStr};

use tracing::{Subscriber, subscriber::set_global_default};
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

use iidx_score_storage_sqlite::connection::Storage;
use iidx_score_usecases::score::DuplicateKeyPolicy;

use crate::config::Config;

pub(crate) fn init_environment() {
    if let Ok(path) = dotenvy::dotenv() {
        // Print to stderr because logging has not been initialized yet
        eprintln!("Loaded environment from dotenv file {}", path.display());
    }
}

const TRACING_SUBSCRIBER_ENV_FILTER_DEFAULT: &str = "info";

fn create_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|err| {
        if let Some(rust_log_from_env) = env::var("RUST_LOG").ok().filter(|var| !var.is_empty()) {
            eprintln!("Failed to parse RUST_LOG environment variable '{rust_log_from_env}': {err}");
        }
        EnvFilter::new(TRACING_SUBSCRIBER_ENV_FILTER_DEFAULT)
    })
}

fn create_tracing_subscriber() -> impl Subscriber {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter())
        .with_writer(std::io::stderr)
        .finish()
}

pub(crate) fn init_tracing_and_logging() -> anyhow::Result<()> {
    // Capture and redirect all log messages as tracing events
    LogTracer::init()?;

    set_global_default(create_tracing_subscriber())?;

    Ok(())
}

const DEFAULT_CONFIG_ENV: &str = "DEFAULT_CONFIG";

const ENDPOINT_IP_ENV: &str = "ENDPOINT_IP";

const ENDPOINT_PORT_ENV: &str = "ENDPOINT_PORT";

/// Fallback for hosting platforms that assign the port
const PORT_ENV: &str = "PORT";

const DATABASE_URL_ENV: &str = "DATABASE_URL";

const DATABASE_CONNECTION_POOL_SIZE_ENV: &str = "DATABASE_CONNECTION_POOL_SIZE";

const DATABASE_MIGRATE_SCHEMA_ON_STARTUP_ENV: &str = "DATABASE_MIGRATE_SCHEMA_ON_STARTUP";

const DATABASE_SEED_IF_EMPTY_ENV: &str = "DATABASE_SEED_IF_EMPTY";

const SCORE_MAX_ENV: &str = "SCORE_MAX";

const SCORE_DUPLICATE_KEY_POLICY_ENV: &str = "SCORE_DUPLICATE_KEY_POLICY";

fn parse_bool_var(var: &str) -> Option<bool> {
    match var.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_duplicate_key_policy(var: &str) -> Option<DuplicateKeyPolicy> {
    match var.trim().to_lowercase().as_str() {
        "allow" => Some(DuplicateKeyPolicy::Allow),
        "reject-same-chart" => Some(DuplicateKeyPolicy::RejectSameChart),
        _ => None,
    }
}

/// Reads and parses a variable, ignoring blank values
fn parse_var<T, E>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Option<T>
where
    E: fmt::Display,
{
    let var = lookup(name)?;
    tracing::debug!("{name} = {var}");
    if var.trim().is_empty() {
        return None;
    }
    parse(var.trim())
        .map_err(|err| {
            tracing::warn!("Failed to parse {name} = {var}: {err}");
        })
        .ok()
}

fn parse_from_str<T>(var: &str) -> Result<T, <T as FromStr>::Err>
where
    T: FromStr,
{
    var.parse()
}

fn parse_with<T>(parse: fn(&str) -> Option<T>) -> impl FnOnce(&str) -> Result<T, &'static str> {
    move |var| parse(var).ok_or("unsupported value")
}

pub(crate) fn parse_default_config() -> bool {
    parse_var(&env_var, DEFAULT_CONFIG_ENV, parse_with(parse_bool_var)).unwrap_or(false)
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Overrides configuration values with environment variables
pub(crate) fn parse_config_into(config: &mut Config) {
    patch_config(config, &env_var);
}

fn patch_config(config: &mut Config, lookup: &impl Fn(&str) -> Option<String>) {
    let endpoint = &mut config.network.endpoint;
    if let Some(ip_addr) = parse_var(lookup, ENDPOINT_IP_ENV, parse_from_str::<IpAddr>) {
        endpoint.ip_addr = ip_addr;
    }
    if let Some(port) = parse_var(lookup, ENDPOINT_PORT_ENV, parse_from_str::<u16>)
        .or_else(|| parse_var(lookup, PORT_ENV, parse_from_str::<u16>))
    {
        endpoint.port = port;
    }

    let database = &mut config.database;
    if let Some(url) = lookup(DATABASE_URL_ENV) {
        tracing::debug!("{DATABASE_URL_ENV} = {url}");
        database.connection.storage = Storage::from_database_url(&url);
    }
    if let Some(max_size) =
        parse_var(lookup, DATABASE_CONNECTION_POOL_SIZE_ENV, parse_from_str::<NonZeroU32>)
    {
        database.connection.pool.max_size = max_size;
    }
    if let Some(migrate_schema_on_startup) = parse_var(
        lookup,
        DATABASE_MIGRATE_SCHEMA_ON_STARTUP_ENV,
        parse_with(parse_bool_var),
    ) {
        database.migrate_schema_on_startup = migrate_schema_on_startup;
    }
    if let Some(seed_if_empty) =
        parse_var(lookup, DATABASE_SEED_IF_EMPTY_ENV, parse_with(parse_bool_var))
    {
        database.seed_if_empty = seed_if_empty;
    }

    let scores = &mut config.scores;
    if let Some(max_ex_score) = parse_var(lookup, SCORE_MAX_ENV, parse_from_str::<u16>) {
        scores.max_ex_score = max_ex_score;
    }
    if let Some(duplicate_key_policy) = parse_var(
        lookup,
        SCORE_DUPLICATE_KEY_POLICY_ENV,
        parse_with(parse_duplicate_key_policy),
    ) {
        scores.duplicate_key_policy = duplicate_key_policy;
    }
}
