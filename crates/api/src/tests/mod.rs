// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use prodcal_domain::{CalendarCode, CalendarDay};
use time::Date;

pub fn record(date: Date, day_type: &str) -> CalendarDay {
    CalendarDay {
        calendar: CalendarCode::home(),
        year: date.year(),
        date,
        day_type: day_type.to_string(),
        swap_date: None,
    }
}
