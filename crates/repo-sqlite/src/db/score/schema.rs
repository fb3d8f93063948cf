// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

diesel::table! {
    scores (id) {
        id -> BigInt,
        title -> Text,
        artist -> Text,
        version -> Text,
        difficulty -> Text,
        level -> SmallInt,
        score -> Integer,
        dj_level -> Text,
        lamp -> Text,
        date -> Text,
    }
}
