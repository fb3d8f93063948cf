// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Score tracker for beatmania IIDX play results
//!
//! Re-exports the workspace crates selected by features.

pub use iidx_score_core::*;

#[cfg(feature = "api")]
pub mod api {
    pub use iidx_score_core_api::*;
}

#[cfg(feature = "repo")]
pub mod repo {
    pub use iidx_score_repo::*;
}

#[cfg(feature = "usecases")]
pub mod usecases {
    pub use iidx_score_usecases::*;
}

#[cfg(feature = "sqlite")]
pub mod repo_sqlite {
    pub use iidx_score_repo_sqlite::*;
}

#[cfg(feature = "sqlite")]
pub mod storage_sqlite {
    pub use iidx_score_storage_sqlite::*;
}

#[cfg(feature = "sqlite")]
pub mod usecases_sqlite {
    pub use iidx_score_usecases_sqlite::*;
}
