// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;
use crate::{Difficulty, DjLevel, Lamp, Version};

#[test]
fn vocabulary_sizes() {
    assert_eq!(34, Version::vocabulary().len());
    assert_eq!(5, Difficulty::vocabulary().len());
    assert_eq!(8, DjLevel::vocabulary().len());
    assert_eq!(7, Lamp::vocabulary().len());
}

#[test]
fn lookup_ignores_case_and_returns_canonical_spelling() {
    assert_eq!(Some(Version::HeroicVerse), Version::lookup("Heroic Verse"));
    assert_eq!(Some(Version::HeroicVerse), Version::lookup("HEROIC VERSE"));
    assert_eq!("HEROIC VERSE", Version::lookup("heroic verse").unwrap().as_str());
    assert_eq!("DistorteD", Version::lookup("DISTORTED").unwrap().as_str());
    assert_eq!(Some(Difficulty::Leggendaria), Difficulty::lookup("leggendaria"));
    assert_eq!(Some(Lamp::ExHardClear), Lamp::lookup("ex-hard clear"));
    assert_eq!(Some(DjLevel::Aaa), DjLevel::lookup("aaa"));
}

#[test]
fn lookup_ignores_surrounding_whitespace() {
    assert_eq!(Some(Lamp::FullCombo), Lamp::lookup("  full combo "));
}

#[test]
fn lookup_rejects_partial_and_unknown_terms() {
    assert_eq!(None, Version::lookup(""));
    assert_eq!(None, Version::lookup("3rd"));
    assert_eq!(None, Difficulty::lookup("EXTRA"));
    assert_eq!(None, Lamp::lookup("HARD"));
    assert_eq!(None, DjLevel::lookup("AAAA"));
    // Inner whitespace is significant
    assert_eq!(None, Lamp::lookup("FULL  COMBO"));
}

#[test]
fn terms_are_listed_in_canonical_order() {
    let dj_levels = DjLevel::vocabulary()
        .terms()
        .iter()
        .map(|term| term.as_str())
        .collect::<Vec<_>>();
    assert_eq!(vec!["F", "E", "D", "C", "B", "A", "AA", "AAA"], dj_levels);
    assert_eq!(
        Some(&Version::FirstStyle),
        Version::vocabulary().terms().first()
    );
    assert_eq!(
        Some(&Version::SparkleShower),
        Version::vocabulary().terms().last()
    );
}

#[test]
fn display_canonical_spelling() {
    assert_eq!("EX-HARD CLEAR", Lamp::ExHardClear.to_string());
    assert_eq!("3rd style", Version::ThirdStyle.to_string());
}
