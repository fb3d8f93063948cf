// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Case-insensitive substring search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    /// Returns `None` if nothing remains after trimming.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let folded = raw.trim().to_lowercase();
        (!folded.is_empty()).then_some(Self(folded))
    }

    /// The trimmed, case-folded text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.0)
    }
}
