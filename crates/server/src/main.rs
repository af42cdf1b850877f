// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use prodcal_api::{
    ApiError, ErrorBody, HotYearCache, ImportCalendarResult, ResolvedDayResponse, resolve_day,
    validate_day_query, validate_period_query,
};
use prodcal_domain::{CalendarCode, CalendarDay};
use prodcal_persistence::{CalendarStore, PersistenceError};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use time::{Date, Month, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Production calendar server - working-day resolution over HTTP.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Path to an XML snapshot file to use instead of `SQLite`.
    #[arg(short, long, conflicts_with = "database")]
    snapshot: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Calendar code served by the fast-path cache.
    #[arg(short, long, default_value = "RF")]
    calendar: String,
}

/// Application state shared across handlers.
///
/// The store sits behind a Mutex so imports serialize against
/// lookups; the cache synchronizes internally.
#[derive(Clone)]
struct AppState {
    /// The dataset store, SQLite- or snapshot-backed.
    store: Arc<Mutex<CalendarStore>>,
    /// Fast-path cache for the hot (calendar, year) scope.
    cache: Arc<HotYearCache>,
}

/// Query parameters for the single-day endpoint.
#[derive(Debug, Deserialize)]
struct DayParams {
    calendar: Option<String>,
    date: Option<String>,
    starttime: Option<String>,
    endtime: Option<String>,
}

/// Query parameters for the period endpoint.
#[derive(Debug, Deserialize)]
struct PeriodParams {
    calendar: Option<String>,
    from: Option<String>,
    to: Option<String>,
    starttime: Option<String>,
    endtime: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorBody> = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.client_message().to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.client_message().to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Inclusive date bounds of one calendar year.
fn year_bounds(year: i32) -> Option<(Date, Date)> {
    let first = Date::from_calendar_date(year, Month::January, 1).ok()?;
    let last = Date::from_calendar_date(year, Month::December, 31).ok()?;
    Some((first, last))
}

/// Re-reads the hot year from the store and swaps it into the cache.
///
/// Imports are partial upserts, so the refresh reads the store rather
/// than the incoming batch. A failed refresh clears the cached scope:
/// the stale scope would otherwise keep answering authoritatively, so
/// lookups must fall through to the store instead.
async fn refresh_cache(state: &AppState, year: i32) {
    let Some((first, last)) = year_bounds(year) else {
        state.cache.clear();
        return;
    };

    let mut store = state.store.lock().await;
    match store.lookup_range(state.cache.calendar(), first, last) {
        Ok(days) => {
            let days: HashMap<Date, CalendarDay> = days.into_iter().collect();
            state.cache.replace(year, days);
        }
        Err(err) => {
            state.cache.clear();
            warn!(error = %err, year, "Cache refresh failed, serving from store");
        }
    }
}

/// Handler for POST `/api/production-calendar/import`.
///
/// Parses and validates the raw XML body; any per-item error rejects
/// the whole payload with 400 and commits nothing.
async fn handle_import(
    AxumState(state): AxumState<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ImportCalendarResult>), HttpError> {
    let batch = prodcal_import::parse(&body);

    if batch.has_errors() {
        info!(
            total_items = batch.total_items,
            errors = batch.errors.len(),
            "Import rejected"
        );
        let result = ImportCalendarResult::rejected(batch.total_items, batch.errors);
        return Ok((StatusCode::BAD_REQUEST, Json(result)));
    }

    let total_items = batch.total_items;
    let items = batch.unique_items();

    let counts = {
        let mut store = state.store.lock().await;
        store.commit(&items)?
    };

    refresh_cache(&state, current_year()).await;

    info!(
        total_items,
        inserted = counts.inserted,
        updated = counts.updated,
        "Import committed"
    );

    Ok((
        StatusCode::OK,
        Json(ImportCalendarResult {
            total_items,
            inserted: counts.inserted,
            updated: counts.updated,
            errors: Vec::new(),
        }),
    ))
}

/// Handler for GET `/api/production-calendar/day`.
async fn handle_day(
    AxumState(state): AxumState<AppState>,
    Query(params): Query<DayParams>,
) -> Result<Json<ResolvedDayResponse>, HttpError> {
    let query = validate_day_query(
        params.calendar.as_deref(),
        params.date.as_deref(),
        params.starttime.as_deref(),
        params.endtime.as_deref(),
    )?;

    let record = lookup_with_cache(&state, &query.calendar, query.date).await?;

    Ok(Json(resolve_day(
        query.date,
        record.as_ref(),
        query.start,
        query.end,
    )))
}

/// Handler for GET `/api/production-calendar/period`.
async fn handle_period(
    AxumState(state): AxumState<AppState>,
    Query(params): Query<PeriodParams>,
) -> Result<Json<Vec<ResolvedDayResponse>>, HttpError> {
    let query = validate_period_query(
        params.calendar.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
        params.starttime.as_deref(),
        params.endtime.as_deref(),
    )?;

    let records = {
        let mut store = state.store.lock().await;
        store.lookup_range(&query.calendar, query.from, query.to)?
    };

    let mut days: Vec<ResolvedDayResponse> = Vec::new();
    let mut date = query.from;
    loop {
        days.push(resolve_day(
            date,
            records.get(&date),
            query.start,
            query.end,
        ));
        if date >= query.to {
            break;
        }
        match date.next_day() {
            Some(next) => date = next,
            None => break,
        }
    }

    Ok(Json(days))
}

/// Point lookup, cache first.
///
/// A cache hit is authoritative inside its (calendar, year) scope,
/// including "no record"; everything else falls through to the store.
async fn lookup_with_cache(
    state: &AppState,
    calendar: &CalendarCode,
    date: Date,
) -> Result<Option<CalendarDay>, HttpError> {
    if let Some(answer) = state.cache.get(calendar, date) {
        return Ok(answer);
    }

    let mut store = state.store.lock().await;
    Ok(store.lookup_day(calendar, date)?)
}

fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/production-calendar/import", post(handle_import))
        .route("/api/production-calendar/day", get(handle_day))
        .route("/api/production-calendar/period", get(handle_period))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing production calendar server");

    let store: CalendarStore = if let Some(snapshot_path) = &args.snapshot {
        info!("Using snapshot file at: {}", snapshot_path);
        CalendarStore::snapshot_file(snapshot_path)
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        CalendarStore::sqlite_file(db_path)?
    } else {
        info!("Using in-memory database");
        CalendarStore::in_memory()?
    };

    let calendar = CalendarCode::new(&args.calendar)?;
    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        cache: Arc::new(HotYearCache::new(calendar)),
    };

    // Warm the cache with the current year before accepting traffic
    refresh_cache(&app_state, current_year()).await;

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
