// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
pub enum SortDirection {
    #[strum(serialize = "asc")]
    Ascending,

    #[default]
    #[strum(serialize = "desc")]
    Descending,
}

impl SortDirection {
    /// Only `asc` selects ascending order.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => Self::Ascending,
            _ => Self::Descending,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Orients the result of an ascending comparison
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}
