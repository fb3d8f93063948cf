// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use super::*;

#[test]
fn in_memory_database_url() {
    assert_eq!(Storage::InMemory, Storage::from_database_url(":memory:"));
    assert_eq!(Storage::InMemory, Storage::from_database_url(" :memory: "));
    assert_eq!(Storage::InMemory, Storage::from_database_url(""));
    assert_eq!(":memory:", Storage::InMemory.database_url());
    assert!(Storage::default().is_in_memory());
}

#[test]
fn file_database_url() {
    let storage = Storage::from_database_url("/var/lib/iidx-score/scores.sqlite");
    assert_eq!(
        Storage::File {
            path: Path::new("/var/lib/iidx-score/scores.sqlite").to_path_buf()
        },
        storage
    );
    assert!(!storage.is_in_memory());
    assert_eq!("/var/lib/iidx-score/scores.sqlite", storage.database_url());
}

#[test]
fn file_database_url_with_scheme() {
    assert_eq!(
        Storage::File {
            path: "scores.sqlite".into()
        },
        Storage::from_database_url("sqlite://scores.sqlite")
    );
}
