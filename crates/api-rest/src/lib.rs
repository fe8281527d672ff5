//! # API REST
//!
//! REST API implementation for the saga site.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for wire types and `saga-core` for every catalog operation. The site
//! state is owned by the process and shared between handlers behind a lock; each handler holds
//! it for one request only.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::{Arc, PoisonError, RwLock};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    ChapterRes, ChapterSummary, HealthRes, HealthService, HeroRes, ListChaptersReq,
    ListChaptersRes, NewChapterReq, ReadChapterRes, SetHeroReq, SiteInfoRes,
};
use saga_core::{ChapterId, SiteState, EMPTY_RESULTS_MESSAGE};

type ApiError = (StatusCode, &'static str);

/// Application state for the REST API server
///
/// Holds the single in-memory site (catalog + hero cover) shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    site: Arc<RwLock<SiteState>>,
}

impl AppState {
    pub fn new(site: SiteState) -> Self {
        Self {
            site: Arc::new(RwLock::new(site)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        site_info,
        list_chapters,
        create_chapter,
        read_chapter,
        set_hero,
        reset_hero,
    ),
    components(schemas(
        HealthRes,
        SiteInfoRes,
        ChapterSummary,
        ListChaptersRes,
        NewChapterReq,
        ChapterRes,
        ReadChapterRes,
        SetHeroReq,
        HeroRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with OpenAPI docs and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/site", get(site_info))
        .route("/chapters", get(list_chapters).post(create_chapter))
        .route("/chapters/:id", get(read_chapter))
        .route("/hero", axum::routing::put(set_hero).delete(reset_hero))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves the router until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Starting saga REST API on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn lock_poisoned<T>(_err: PoisonError<T>) -> ApiError {
    tracing::error!("site state lock poisoned");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/site",
    responses(
        (status = 200, description = "Site details and current hero image", body = SiteInfoRes),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn site_info(State(state): State<AppState>) -> Result<Json<SiteInfoRes>, ApiError> {
    let site = state.site.read().map_err(lock_poisoned)?;
    Ok(Json(site.site_info().into()))
}

#[utoipa::path(
    get,
    path = "/chapters",
    params(ListChaptersReq),
    responses(
        (status = 200, description = "Matching chapters ordered by number", body = ListChaptersRes),
        (status = 500, description = "Internal server error")
    )
)]
/// List chapters matching a query
///
/// Stores the query as the site's current query, then returns the chapters whose title,
/// teaser, content or tags contain it (case-insensitive), ascending by chapter number.
/// `empty_message` is set when nothing matches.
#[axum::debug_handler]
async fn list_chapters(
    State(state): State<AppState>,
    Query(req): Query<ListChaptersReq>,
) -> Result<Json<ListChaptersRes>, ApiError> {
    let query = req.q.unwrap_or_default();
    let mut site = state.site.write().map_err(lock_poisoned)?;
    let chapters: Vec<ChapterSummary> = site
        .search(&query)
        .into_iter()
        .map(ChapterSummary::from)
        .collect();
    let empty_message = chapters
        .is_empty()
        .then(|| EMPTY_RESULTS_MESSAGE.to_string());

    Ok(Json(ListChaptersRes {
        chapters,
        query,
        empty_message,
    }))
}

#[utoipa::path(
    post,
    path = "/chapters",
    request_body = NewChapterReq,
    responses(
        (status = 201, description = "Chapter created", body = ChapterRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Add a chapter
///
/// Every field is optional. Missing, `null`, mistyped or malformed values fall back to
/// defaults; only a body that is not valid JSON for a request object is rejected.
#[axum::debug_handler]
async fn create_chapter(
    State(state): State<AppState>,
    Json(req): Json<NewChapterReq>,
) -> Result<(StatusCode, Json<ChapterRes>), ApiError> {
    let mut site = state.site.write().map_err(lock_poisoned)?;
    let chapter = site.add_chapter(req.into());
    Ok((StatusCode::CREATED, Json(chapter.into())))
}

#[utoipa::path(
    get,
    path = "/chapters/{id}",
    params(("id" = String, Path, description = "Chapter id")),
    responses(
        (status = 200, description = "Chapter reading view", body = ReadChapterRes),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Chapter not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn read_chapter(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ReadChapterRes>, ApiError> {
    let id = match ChapterId::parse(&id) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Invalid chapter id: {:?}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid chapter id"));
        }
    };

    let site = state.site.read().map_err(lock_poisoned)?;
    match site.read(&id) {
        Some(view) => Ok(Json(view.into())),
        None => Err((StatusCode::NOT_FOUND, "Chapter not found")),
    }
}

#[utoipa::path(
    put,
    path = "/hero",
    request_body = SetHeroReq,
    responses(
        (status = 200, description = "Hero image updated", body = HeroRes),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn set_hero(
    State(state): State<AppState>,
    Json(req): Json<SetHeroReq>,
) -> Result<Json<HeroRes>, ApiError> {
    let mut site = state.site.write().map_err(lock_poisoned)?;
    site.hero_mut().set(req.url);
    Ok(Json(HeroRes::from(site.hero())))
}

#[utoipa::path(
    delete,
    path = "/hero",
    responses(
        (status = 200, description = "Hero image reset to default", body = HeroRes),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn reset_hero(State(state): State<AppState>) -> Result<Json<HeroRes>, ApiError> {
    let mut site = state.site.write().map_err(lock_poisoned)?;
    site.hero_mut().reset();
    Ok(Json(HeroRes::from(site.hero())))
}
