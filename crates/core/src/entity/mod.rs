// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use crate::prelude::*;

///////////////////////////////////////////////////////////////////////
// EntityId
///////////////////////////////////////////////////////////////////////

pub type EntityIdNumber = u64;

/// A 1-based, store-assigned identifier
///
/// Identifiers are handed out in monotone increasing order and
/// never reused after the corresponding entity has been deleted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(EntityIdNumber);

impl EntityId {
    pub const MIN: Self = Self(1);

    #[must_use]
    pub const fn new(inner: EntityIdNumber) -> Self {
        Self(inner)
    }

    #[must_use]
    pub const fn to_inner(self) -> EntityIdNumber {
        let Self(inner) = self;
        inner
    }

    /// The successor of this id.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        let Self(inner) = self;
        inner.checked_add(1).map(Self)
    }
}

impl From<EntityIdNumber> for EntityId {
    fn from(from: EntityIdNumber) -> Self {
        Self::new(from)
    }
}

impl From<EntityId> for EntityIdNumber {
    fn from(from: EntityId) -> Self {
        from.to_inner()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityIdInvalidity {
    Zero,
}

impl Validate for EntityId {
    type Invalidity = EntityIdInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self < Self::MIN, EntityIdInvalidity::Zero)
            .into()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(inner) = self;
        fmt::Display::fmt(inner, f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum ParseEntityIdError {
    #[display("id must be a positive integer")]
    Invalid,
}

impl std::error::Error for ParseEntityIdError {}

impl FromStr for EntityId {
    type Err = ParseEntityIdError;

    /// Strictly parses a decimal id
    ///
    /// Signs, whitespace, and trailing garbage are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseEntityIdError::Invalid);
        }
        let id = s
            .parse::<EntityIdNumber>()
            .map(Self::new)
            .map_err(|_| ParseEntityIdError::Invalid)?;
        if !id.is_valid() {
            return Err(ParseEntityIdError::Invalid);
        }
        Ok(id)
    }
}

///////////////////////////////////////////////////////////////////////
// Entity
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity<B> {
    pub id: EntityId,
    pub body: B,
}

impl<B> Entity<B> {
    pub const fn new(id: EntityId, body: B) -> Self {
        Self { id, body }
    }
}

impl<B> From<Entity<B>> for (EntityId, B) {
    fn from(from: Entity<B>) -> Self {
        let Entity { id, body } = from;
        (id, body)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityInvalidity<B> {
    Id(EntityIdInvalidity),
    Body(B),
}

impl<B> Validate for Entity<B>
where
    B: Validate,
{
    type Invalidity = EntityInvalidity<B::Invalidity>;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self { id, body } = self;
        ValidationContext::new()
            .validate_with(id, EntityInvalidity::Id)
            .validate_with(body, EntityInvalidity::Body)
            .into()
    }
}
