// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    net::{IpAddr, Ipv6Addr, SocketAddr},
    num::{NonZeroU32, NonZeroU64},
};

use serde::{Deserialize, Serialize};

use iidx_score_core::{InputParams, score::input::DEFAULT_MAX_EX_SCORE};
use iidx_score_storage_sqlite::connection::{
    Config as DatabaseConnectionConfig, Storage,
    pool::{
        Config as DatabaseConnectionPoolConfig,
        gatekeeper::Config as DatabaseConnectionGatekeeperConfig,
    },
};
use iidx_score_usecases::score::{DuplicateKeyPolicy, Params as ScoreParams};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Config {
    pub(crate) network: NetworkConfig,
    pub(crate) database: DatabaseConfig,
    #[serde(default)]
    pub(crate) scores: ScoresConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NetworkConfig {
    pub(crate) endpoint: EndpointConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EndpointConfig {
    pub(crate) ip_addr: IpAddr,
    pub(crate) port: u16,
}

pub(crate) const DEFAULT_ENDPOINT_PORT: u16 = 8080;

impl EndpointConfig {
    pub(crate) const fn socket_addr(self) -> SocketAddr {
        let Self { ip_addr, port } = self;
        SocketAddr::new(ip_addr, port)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            ip_addr: IpAddr::V6(Ipv6Addr::UNSPECIFIED),
            port: DEFAULT_ENDPOINT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DatabaseConfig {
    pub(crate) connection: DatabaseConnectionConfig,
    pub(crate) migrate_schema_on_startup: bool,
    /// Insert demo scores into an empty database on startup
    #[serde(default)]
    pub(crate) seed_if_empty: bool,
}

const DEFAULT_DATABASE_CONNECTION_POOL_SIZE: NonZeroU32 = NonZeroU32::new(8).unwrap();

const DEFAULT_DATABASE_CONNECTION_TIMEOUT_ACQUIRE_READ_MILLIS: NonZeroU64 =
    NonZeroU64::new(10_000).unwrap();

const DEFAULT_DATABASE_CONNECTION_TIMEOUT_ACQUIRE_WRITE_MILLIS: NonZeroU64 =
    NonZeroU64::new(30_000).unwrap();

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection: DatabaseConnectionConfig {
                storage: Storage::InMemory,
                pool: DatabaseConnectionPoolConfig {
                    max_size: DEFAULT_DATABASE_CONNECTION_POOL_SIZE,
                    gatekeeper: DatabaseConnectionGatekeeperConfig {
                        acquire_read_timeout_millis:
                            DEFAULT_DATABASE_CONNECTION_TIMEOUT_ACQUIRE_READ_MILLIS,
                        acquire_write_timeout_millis:
                            DEFAULT_DATABASE_CONNECTION_TIMEOUT_ACQUIRE_WRITE_MILLIS,
                    },
                },
            },
            migrate_schema_on_startup: true,
            seed_if_empty: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ScoresConfig {
    /// Inclusive upper bound of accepted EX scores
    pub(crate) max_ex_score: u16,
    pub(crate) duplicate_key_policy: DuplicateKeyPolicy,
}

impl ScoresConfig {
    pub(crate) const fn params(self) -> ScoreParams {
        let Self {
            max_ex_score,
            duplicate_key_policy,
        } = self;
        ScoreParams {
            input: InputParams { max_ex_score },
            duplicate_key_policy,
        }
    }
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            max_ex_score: DEFAULT_MAX_EX_SCORE,
            duplicate_key_policy: DuplicateKeyPolicy::Allow,
        }
    }
}
