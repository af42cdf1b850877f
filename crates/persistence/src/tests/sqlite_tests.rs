// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::date;

use crate::Persistence;
use crate::store::CalendarStore;
use crate::tests::{october_2017_batch, record, rf};

#[test]
fn commit_then_lookup_round_trips() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let batch = october_2017_batch();

    let counts = persistence.commit_batch(&batch).unwrap();
    assert_eq!(counts.inserted, 3);
    assert_eq!(counts.updated, 0);

    let found = persistence
        .lookup_day(&rf(), date!(2017 - 10 - 05))
        .unwrap()
        .unwrap();
    assert_eq!(found.day_type, "Holiday");
    assert_eq!(found.year, 2017);
    assert_eq!(found.swap_date, None);

    let swapped = persistence
        .lookup_day(&rf(), date!(2017 - 10 - 01))
        .unwrap()
        .unwrap();
    assert_eq!(swapped.day_type, "Workday");
    assert_eq!(swapped.swap_date, Some(date!(2017 - 10 - 06)));
}

#[test]
fn lookup_misses_return_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.commit_batch(&october_2017_batch()).unwrap();

    assert!(
        persistence
            .lookup_day(&rf(), date!(2017 - 10 - 02))
            .unwrap()
            .is_none()
    );
}

#[test]
fn recommit_updates_existing_keys() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.commit_batch(&october_2017_batch()).unwrap();

    let revised = vec![
        record(date!(2017 - 10 - 05), "Workday"),
        record(date!(2017 - 10 - 09), "Holiday"),
    ];
    let counts = persistence.commit_batch(&revised).unwrap();
    assert_eq!(counts.inserted, 1);
    assert_eq!(counts.updated, 1);

    let found = persistence
        .lookup_day(&rf(), date!(2017 - 10 - 05))
        .unwrap()
        .unwrap();
    assert_eq!(found.day_type, "Workday");
}

#[test]
fn range_lookup_is_inclusive_and_ordered() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.commit_batch(&october_2017_batch()).unwrap();

    let days = persistence
        .lookup_range(&rf(), date!(2017 - 10 - 01), date!(2017 - 10 - 05))
        .unwrap();

    let dates: Vec<_> = days.keys().copied().collect();
    assert_eq!(
        dates,
        vec![
            date!(2017 - 10 - 01),
            date!(2017 - 10 - 04),
            date!(2017 - 10 - 05)
        ]
    );
}

#[test]
fn range_lookup_excludes_outside_bounds() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.commit_batch(&october_2017_batch()).unwrap();

    let days = persistence
        .lookup_range(&rf(), date!(2017 - 10 - 02), date!(2017 - 10 - 04))
        .unwrap();
    assert_eq!(days.len(), 1);
    assert!(days.contains_key(&date!(2017 - 10 - 04)));
}

#[test]
fn empty_commit_is_a_no_op() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let counts = persistence.commit_batch(&[]).unwrap();
    assert_eq!(counts.inserted, 0);
    assert_eq!(counts.updated, 0);
}

#[test]
fn store_dispatches_to_sqlite_backing() {
    let mut store = CalendarStore::in_memory().unwrap();
    let counts = store.commit(&october_2017_batch()).unwrap();
    assert_eq!(counts.inserted, 3);

    let found = store
        .lookup_day(&rf(), date!(2017 - 10 - 04))
        .unwrap()
        .unwrap();
    assert_eq!(found.day_type, "PreHoliday");
}

#[test]
fn file_backed_database_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("calendar.db");

    {
        let mut persistence = Persistence::new_with_file(&db_path).unwrap();
        persistence.commit_batch(&october_2017_batch()).unwrap();
    }

    let mut reopened = Persistence::new_with_file(&db_path).unwrap();
    let found = reopened
        .lookup_day(&rf(), date!(2017 - 10 - 05))
        .unwrap()
        .unwrap();
    assert_eq!(found.day_type, "Holiday");
}
