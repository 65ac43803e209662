// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod state;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use award_finder::Catalog;
use award_finder_api::{
    AirportSearchRequest, AirportSearchResultInfo, ApiError, AwardResultInfo,
    CreditCardProgramInfo, ProgramDetailResponse, ProgramSummaryInfo, ResolveRequest,
    ResolveResponse, SearchRequest, get_program, list_credit_card_programs, list_programs,
    resolve_airport, search_airports, search_awards,
};
use award_finder_persistence::{Persistence, PersistenceError};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::state::{AppState, SharedSource, refresh_loop};

/// Award Finder Server - HTTP server for award chart searches
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the seeded `SQLite` database file. If not provided, uses an
    /// empty in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Reload reference data from the database every N seconds
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Worker threads for per-program search evaluation
    #[arg(long)]
    search_threads: Option<usize>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
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
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<tokio::task::JoinError> for HttpError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!(error = %err, "Search task failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Search failed"),
        }
    }
}

/// Handler for GET `/api/search` endpoint.
///
/// Per-program evaluation runs on the rayon pool, off the async runtime.
async fn handle_search(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<SearchRequest>,
) -> Result<Json<Vec<AwardResultInfo>>, HttpError> {
    info!(
        origin = ?request.origin,
        destination = ?request.destination,
        cabin = ?request.cabin,
        "Handling search request"
    );

    let catalog: Arc<Catalog> = app_state.catalog();
    let today: Date = OffsetDateTime::now_utc().date();
    let results: Vec<AwardResultInfo> =
        tokio::task::spawn_blocking(move || search_awards(&catalog, &request, today)).await??;

    Ok(Json(results))
}

/// Handler for GET `/api/airports` endpoint.
async fn handle_search_airports(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<AirportSearchRequest>,
) -> Json<Vec<AirportSearchResultInfo>> {
    info!(q = ?request.q, "Handling airport search request");
    Json(search_airports(&app_state.catalog(), &request))
}

/// Handler for GET `/api/airports/resolve` endpoint.
async fn handle_resolve_airport(
    AxumState(app_state): AxumState<AppState>,
    Query(request): Query<ResolveRequest>,
) -> Result<Json<ResolveResponse>, HttpError> {
    info!(code = ?request.code, "Handling resolve request");
    Ok(Json(resolve_airport(&app_state.catalog(), &request)?))
}

/// Handler for GET `/api/programs` endpoint.
async fn handle_list_programs(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<ProgramSummaryInfo>> {
    info!("Handling list_programs request");
    Json(list_programs(&app_state.catalog()))
}

/// Handler for GET `/api/programs/{code}` endpoint.
async fn handle_get_program(
    AxumState(app_state): AxumState<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ProgramDetailResponse>, HttpError> {
    info!(code = %code, "Handling get_program request");
    Ok(Json(get_program(&app_state.catalog(), &code)?))
}

/// Handler for GET `/api/credit-cards` endpoint.
async fn handle_list_credit_cards(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<CreditCardProgramInfo>> {
    info!("Handling list_credit_cards request");
    Json(list_credit_card_programs(&app_state.catalog()))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(handle_search))
        .route("/api/airports", get(handle_search_airports))
        .route("/api/airports/resolve", get(handle_resolve_airport))
        .route("/api/programs", get(handle_list_programs))
        .route("/api/programs/{code}", get(handle_get_program))
        .route("/api/credit-cards", get(handle_list_credit_cards))
        .with_state(app_state)
}

/// Logs the journal mode and reference table row counts of a freshly
/// opened database.
///
/// # Returns
///
/// The total number of reference rows.
///
/// # Errors
///
/// Returns an error if a PRAGMA or count query fails.
fn log_database_summary(persistence: &mut Persistence) -> Result<i64, PersistenceError> {
    let journal_mode: String = persistence.journal_mode()?;
    let counts: Vec<(&'static str, i64)> = persistence.table_counts()?;

    for (table, rows) in &counts {
        info!(table, rows, "Reference table");
    }

    let total_rows: i64 = counts.iter().map(|(_, rows)| rows).sum();
    info!(journal_mode, total_rows, "Reference database opened");
    if total_rows == 0 {
        warn!("Reference database is empty, searches will return no results");
    }

    Ok(total_rows)
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

    info!("Initializing Award Finder Server");

    if let Some(threads) = args.search_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        info!(threads, "Configured search thread pool");
    }

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using empty in-memory database");
        Persistence::new_in_memory()?
    };
    log_database_summary(&mut persistence)?;

    let source: SharedSource = Arc::new(Mutex::new(persistence));
    let app_state: AppState = AppState::load(source).await?;

    if let Some(secs) = args.refresh_secs.filter(|&s| s > 0) {
        info!(secs, "Scheduling periodic catalog refresh");
        tokio::spawn(refresh_loop(app_state.clone(), Duration::from_secs(secs)));
    }

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
