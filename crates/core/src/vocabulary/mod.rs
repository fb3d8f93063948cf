// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Closed sets of valid values for enumerated fields

use std::fmt;

use hashbrown::HashMap;
use strum::IntoEnumIterator;

/// A member of a closed vocabulary with a canonical spelling
pub trait Term: Copy + Eq + IntoEnumIterator + Into<&'static str> + 'static {
    /// The lookup table of all terms
    ///
    /// Built once on first access and shared afterwards.
    fn vocabulary() -> &'static Vocabulary<Self>;

    /// The canonical spelling
    fn as_str(self) -> &'static str {
        self.into()
    }

    /// Case-insensitive lookup of the canonical term
    fn lookup(raw: &str) -> Option<Self> {
        Self::vocabulary().lookup(raw)
    }
}

/// Lookup table from case-folded spellings to terms
pub struct Vocabulary<T> {
    terms: Vec<T>,
    folded: HashMap<String, T>,
}

impl<T> Vocabulary<T>
where
    T: Term,
{
    #[must_use]
    pub fn new() -> Self {
        let terms = T::iter().collect::<Vec<_>>();
        let folded = terms
            .iter()
            .map(|term| (term.as_str().to_lowercase(), *term))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(terms.len(), folded.len(), "ambiguous spellings");
        Self { terms, folded }
    }

    /// All terms in canonical order
    #[must_use]
    pub fn terms(&self) -> &[T] {
        &self.terms
    }

    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<T> {
        self.folded.get(&raw.trim().to_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<T> Default for Vocabulary<T>
where
    T: Term,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Vocabulary<T>
where
    T: Term,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.terms.iter().map(|term| term.as_str()))
            .finish()
    }
}

/// Implements [`Term`] with a lazily built, process-wide vocabulary.
macro_rules! impl_term {
    ($type_name:ident) => {
        impl $crate::vocabulary::Term for $type_name {
            fn vocabulary() -> &'static $crate::vocabulary::Vocabulary<Self> {
                static VOCABULARY: std::sync::LazyLock<$crate::vocabulary::Vocabulary<$type_name>> =
                    std::sync::LazyLock::new($crate::vocabulary::Vocabulary::new);
                &VOCABULARY
            }
        }

        impl std::fmt::Display for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::vocabulary::Term::as_str(*self))
            }
        }
    };
}

pub(crate) use impl_term;

#[cfg(test)]
mod tests;
