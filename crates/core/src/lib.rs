// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod score;
pub mod util;
pub mod vocabulary;

mod entity;
pub use self::entity::*;

pub use self::score::{
    Difficulty, DjLevel, ExScore, Lamp, Level, Score, Version,
    input::{InputErrors, InputParams, ScoreInput, ScoreInputInvalidity},
};

pub type ScoreEntity = Entity<Score>;

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IsValid as _, Validate as _};

    pub use crate::vocabulary::Term as _;

    pub(crate) use semval::prelude::*;
}
