// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prodcal_domain::{CalendarCode, CalendarDay, parse_compact_date};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::BTreeMap;
use time::Date;

/// The outcome of parsing one import payload.
///
/// Invariant: `errors` non-empty ⇔ the batch must not be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBatch {
    /// Count of `<Item>` elements seen, including invalid ones.
    pub total_items: usize,
    /// Records whose every field validated.
    pub items: Vec<CalendarDay>,
    /// Ordered validation failures, one or more per invalid item.
    pub errors: Vec<String>,
}

impl ImportBatch {
    /// Returns whether the batch carries validation errors and must
    /// therefore not be committed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Collapses duplicate (calendar, date) keys, later item wins.
    ///
    /// The store expects at most one record per key; within one
    /// document the item later in the payload overrides the earlier.
    #[must_use]
    pub fn unique_items(self) -> Vec<CalendarDay> {
        let mut by_key: BTreeMap<(CalendarCode, Date), CalendarDay> = BTreeMap::new();
        for item in self.items {
            by_key.insert((item.calendar.clone(), item.date), item);
        }
        by_key.into_values().collect()
    }
}

/// Raw attribute values of one `<Item>` element, pre-validation.
#[derive(Debug, Default)]
struct RawItem {
    calendar: Option<String>,
    year: Option<String>,
    day_type: Option<String>,
    date: Option<String>,
    swap_date: Option<String>,
}

/// Parses an XML import payload into an [`ImportBatch`].
///
/// The document is expected to be a container element (`<Items>`)
/// whose children are `<Item>` elements carrying the attributes
/// `Calendar`, `Year`, `DayType`, `Date` and `SwapDate`. Items are
/// recognized by local name at any depth. A prolog-declared encoding
/// (e.g. `windows-1251`) is honored.
///
/// Malformed *data* never fails the call; it accumulates in
/// `errors`. A structurally unparsable byte stream yields a batch
/// with `total_items = 0` and a single error.
#[must_use]
pub fn parse(raw: &[u8]) -> ImportBatch {
    let mut reader = Reader::from_reader(raw);

    let mut raw_items: Vec<RawItem> = Vec::new();
    let mut root_is_items = false;
    let mut seen_root = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                if !seen_root {
                    seen_root = true;
                    root_is_items = e.local_name().as_ref() == b"Items";
                }
                if e.local_name().as_ref() == b"Item" {
                    match read_item_attributes(&e, &reader) {
                        Ok(item) => raw_items.push(item),
                        Err(message) => return structural_failure(&message),
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return structural_failure(&err.to_string()),
        }
        buf.clear();
    }

    // A payload with no items at all and no recognizable container is
    // indistinguishable from the wrong document; reject it outright.
    if raw_items.is_empty() && !root_is_items {
        return structural_failure("container element 'Items' not found");
    }

    validate_items(raw_items)
}

fn structural_failure(message: &str) -> ImportBatch {
    ImportBatch {
        total_items: 0,
        items: Vec::new(),
        errors: vec![format!("XML parse error: {message}")],
    }
}

/// Collects the known attributes of one item element.
///
/// Attribute-level decode failures are structural: they mean the byte
/// stream itself is broken, not that a field value is invalid.
fn read_item_attributes(
    element: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<RawItem, String> {
    let mut item = RawItem::default();

    for attr in element.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|e| e.to_string())?
            .into_owned();

        match attr.key.local_name().as_ref() {
            b"Calendar" => item.calendar = Some(value),
            b"Year" => item.year = Some(value),
            b"DayType" => item.day_type = Some(value),
            b"Date" => item.date = Some(value),
            b"SwapDate" => item.swap_date = Some(value),
            _ => {}
        }
    }

    Ok(item)
}

/// Validates every raw item independently, accumulating all errors.
///
/// An item contributes a record only when every one of its fields
/// passed; the batch's error list governs whether the caller may
/// commit at all.
fn validate_items(raw_items: Vec<RawItem>) -> ImportBatch {
    let total = raw_items.len();
    let mut items: Vec<CalendarDay> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for (zero_idx, raw) in raw_items.into_iter().enumerate() {
        let idx = zero_idx + 1;

        let calendar = CalendarCode::new(raw.calendar.as_deref().unwrap_or("")).ok();
        if calendar.is_none() {
            errors.push(format!("Item #{idx}: Calendar is required"));
        }

        let year_raw = raw.year.as_deref().unwrap_or("");
        let year: Option<i32> = year_raw.trim().parse().ok();
        if year.is_none() {
            errors.push(format!(
                "Item #{idx}: invalid Year='{year_raw}' (expected int)"
            ));
        }

        let day_type = raw
            .day_type
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if day_type.is_none() {
            errors.push(format!("Item #{idx}: DayType is required"));
        }

        let date_raw = raw.date.as_deref().unwrap_or("");
        let date: Option<Date> = parse_compact_date(date_raw).ok();
        if date.is_none() {
            errors.push(format!(
                "Item #{idx}: invalid Date='{date_raw}' (expected yyyyMMdd)"
            ));
        }

        let swap_raw = raw.swap_date.as_deref().unwrap_or("").trim();
        let mut swap_valid = true;
        let mut swap_date: Option<Date> = None;
        if !swap_raw.is_empty() {
            match parse_compact_date(swap_raw) {
                Ok(parsed) => swap_date = Some(parsed),
                Err(_) => {
                    swap_valid = false;
                    errors.push(format!(
                        "Item #{idx}: invalid SwapDate='{swap_raw}' (expected yyyyMMdd or empty)"
                    ));
                }
            }
        }

        let (Some(calendar), Some(year), Some(day_type), Some(date)) =
            (calendar, year, day_type, date)
        else {
            continue;
        };
        if !swap_valid {
            continue;
        }

        if date.year() != year {
            errors.push(format!(
                "Item #{idx}: Year='{year}' does not match Date='{}'",
                compact(date)
            ));
            continue;
        }

        items.push(CalendarDay {
            calendar,
            year,
            date,
            day_type: day_type.to_string(),
            swap_date,
        });
    }

    ImportBatch {
        total_items: total,
        items,
        errors,
    }
}

fn compact(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
