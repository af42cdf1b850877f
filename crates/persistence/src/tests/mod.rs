// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod sqlite_tests;

use prodcal_domain::{CalendarCode, CalendarDay};
use time::Date;
use time::macros::date;

pub fn rf() -> CalendarCode {
    CalendarCode::home()
}

pub fn record(date: Date, day_type: &str) -> CalendarDay {
    CalendarDay {
        calendar: rf(),
        year: date.year(),
        date,
        day_type: day_type.to_string(),
        swap_date: None,
    }
}

pub fn october_2017_batch() -> Vec<CalendarDay> {
    vec![
        record(date!(2017 - 10 - 04), "PreHoliday"),
        record(date!(2017 - 10 - 05), "Holiday"),
        CalendarDay {
            swap_date: Some(date!(2017 - 10 - 06)),
            ..record(date!(2017 - 10 - 01), "Workday")
        },
    ]
}
