// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode as HttpStatusCode},
};
use tower::ServiceExt;

/// October 2017 fixture: a swapped working Sunday, a pre-holiday
/// Wednesday, and a Thursday holiday.
const OCTOBER_2017: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Items>
    <Item Calendar="RF" Year="2017" DayType="Workday" Date="20171001" SwapDate="20171006"/>
    <Item Calendar="RF" Year="2017" DayType="PreHoliday" Date="20171004"/>
    <Item Calendar="RF" Year="2017" DayType="Holiday" Date="20171005"/>
</Items>"#;

/// Helper to create test app state with an in-memory store and an
/// empty cache for the home calendar.
fn create_test_app_state() -> AppState {
    let store: CalendarStore =
        CalendarStore::in_memory().expect("Failed to create in-memory store");
    AppState {
        store: Arc::new(Mutex::new(store)),
        cache: Arc::new(HotYearCache::new(CalendarCode::home())),
    }
}

async fn post_import(app_state: &AppState, payload: &str) -> (HttpStatusCode, ImportCalendarResult) {
    let response = build_router(app_state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/production-calendar/import")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: ImportCalendarResult = serde_json::from_slice(&body_bytes).unwrap();
    (status, result)
}

async fn get_day(app_state: &AppState, query: &str) -> (HttpStatusCode, Vec<u8>) {
    let response = build_router(app_state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/api/production-calendar/day?{query}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body_bytes.to_vec())
}

async fn get_resolved_day(app_state: &AppState, query: &str) -> ResolvedDayResponse {
    let (status, body) = get_day(app_state, query).await;
    assert_eq!(status, HttpStatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

async fn get_period(app_state: &AppState, query: &str) -> (HttpStatusCode, Vec<u8>) {
    let response = build_router(app_state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/api/production-calendar/period?{query}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body_bytes.to_vec())
}

#[tokio::test]
async fn import_valid_payload_reports_counts() {
    let app_state = create_test_app_state();
    let (status, result) = post_import(&app_state, OCTOBER_2017).await;

    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(result.total_items, 3);
    assert_eq!(result.inserted, 3);
    assert_eq!(result.updated, 0);
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn reimport_reports_updates() {
    let app_state = create_test_app_state();
    post_import(&app_state, OCTOBER_2017).await;
    let (status, result) = post_import(&app_state, OCTOBER_2017).await;

    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(result.inserted, 0);
    assert_eq!(result.updated, 3);
}

#[tokio::test]
async fn import_with_invalid_item_commits_nothing() {
    let app_state = create_test_app_state();
    let payload = r#"<Items>
        <Item Calendar="RF" Year="2017" DayType="Holiday" Date="20171005"/>
        <Item Calendar="RF" Year="2017" DayType="Holiday" Date="bogus"/>
    </Items>"#;

    let (status, result) = post_import(&app_state, payload).await;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(result.total_items, 2);
    assert_eq!(result.inserted, 0);
    assert_eq!(result.updated, 0);
    assert_eq!(
        result.errors,
        vec!["Item #2: invalid Date='bogus' (expected yyyyMMdd)".to_string()]
    );

    // The valid sibling must not have been committed.
    let resolved = get_resolved_day(&app_state, "date=2017-10-05").await;
    assert_eq!(resolved.day_type, "Ordinary");
}

#[tokio::test]
async fn malformed_xml_is_rejected() {
    let app_state = create_test_app_state();
    let (status, result) = post_import(&app_state, "<Items><Item").await;

    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(result.total_items, 0);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("XML parse error:"));
}

#[tokio::test]
async fn day_resolves_imported_holiday() {
    let app_state = create_test_app_state();
    post_import(&app_state, OCTOBER_2017).await;

    let resolved = get_resolved_day(&app_state, "date=2017-10-05").await;
    assert_eq!(resolved.day_type, "Holiday");
    assert_eq!(resolved.day_name, "Четверг");
    assert_eq!(resolved.from_time, "00:00");
    assert_eq!(resolved.to_time, "00:00");
}

#[tokio::test]
async fn day_resolves_swapped_working_sunday() {
    let app_state = create_test_app_state();
    post_import(&app_state, OCTOBER_2017).await;

    let resolved = get_resolved_day(&app_state, "date=20171001").await;
    assert_eq!(resolved.day_type, "Workday");
    assert_eq!(resolved.day_name, "Воскресенье");
    assert_eq!(resolved.from_time, "09:00");
    assert_eq!(resolved.to_time, "18:00");
}

#[tokio::test]
async fn day_resolves_pre_holiday_with_shortened_end() {
    let app_state = create_test_app_state();
    post_import(&app_state, OCTOBER_2017).await;

    let resolved = get_resolved_day(&app_state, "date=2017-10-04").await;
    assert_eq!(resolved.day_type, "PreHoliday");
    assert_eq!(resolved.from_time, "09:00");
    assert_eq!(resolved.to_time, "17:00");
}

#[tokio::test]
async fn bare_friday_ends_an_hour_early() {
    let app_state = create_test_app_state();

    let resolved = get_resolved_day(&app_state, "date=2017-10-06").await;
    assert_eq!(resolved.day_type, "Ordinary");
    assert_eq!(resolved.to_time, "17:00");
}

#[tokio::test]
async fn day_honors_explicit_time_window() {
    let app_state = create_test_app_state();

    let resolved =
        get_resolved_day(&app_state, "date=2017-10-04&starttime=8:30&endtime=16:00").await;
    assert_eq!(resolved.from_time, "08:30");
    assert_eq!(resolved.to_time, "16:00");
    assert_eq!(resolved.from_hour, 8);
    assert_eq!(resolved.to_hour, 16);
}

#[tokio::test]
async fn day_rejects_invalid_date() {
    let app_state = create_test_app_state();

    let (status, body) = get_day(&app_state, "date=not-a-date").await;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        error.error,
        "Invalid 'date'. Supported formats: yyyy-MM-dd or yyyyMMdd."
    );
}

#[tokio::test]
async fn day_rejects_inverted_time_window() {
    let app_state = create_test_app_state();

    let (status, body) = get_day(&app_state, "date=2017-10-04&starttime=18:00&endtime=09:00").await;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "'endtime' must be greater than 'starttime'.");
}

#[tokio::test]
async fn period_resolves_every_date_in_order() {
    let app_state = create_test_app_state();
    post_import(&app_state, OCTOBER_2017).await;

    let (status, body) = get_period(&app_state, "from=2017-10-01&to=2017-10-07").await;
    assert_eq!(status, HttpStatusCode::OK);
    let days: Vec<ResolvedDayResponse> = serde_json::from_slice(&body).unwrap();

    assert_eq!(days.len(), 7);
    let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(
        dates,
        vec![
            "2017-10-01",
            "2017-10-02",
            "2017-10-03",
            "2017-10-04",
            "2017-10-05",
            "2017-10-06",
            "2017-10-07"
        ]
    );

    assert_eq!(days[0].day_type, "Workday");
    assert_eq!(days[1].day_type, "Ordinary");
    assert_eq!(days[3].day_type, "PreHoliday");
    assert_eq!(days[4].day_type, "Holiday");
    // Bare Friday, then bare Saturday.
    assert_eq!(days[5].to_time, "17:00");
    assert_eq!(days[6].from_time, "00:00");
    assert_eq!(days[6].to_time, "00:00");
}

#[tokio::test]
async fn period_rejects_reversed_range() {
    let app_state = create_test_app_state();

    let (status, body) = get_period(&app_state, "from=2017-10-07&to=2017-10-01").await;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "'to' must be greater than or equal to 'from'.");
}

#[tokio::test]
async fn unknown_calendar_resolves_by_weekday_rules() {
    let app_state = create_test_app_state();
    post_import(&app_state, OCTOBER_2017).await;

    // The holiday exists only in the home calendar.
    let resolved = get_resolved_day(&app_state, "calendar=US&date=2017-10-05").await;
    assert_eq!(resolved.day_type, "Ordinary");
    assert_eq!(resolved.from_time, "09:00");
}
