//! Web API module for CoreBoard.
//!
//! This module provides a REST API over board generation so a frontend can
//! request core boards and topic suggestions.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/categories` - List the core board categories
//! - `GET /api/allocations?buttons=N` - Slot allocation for a button count
//! - `POST /api/boards/core` - Generate a core board
//! - `POST /api/suggestions` - Suggest words and pictograms for a topic

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::constants::{APP_NAME, DEFAULT_MAX_SUGGESTIONS};
use crate::error::BoardError;
use crate::models::{BoardDocument, CategorySummary, CORE_CATEGORIES};
use crate::pictograms::{resolver_from_config, NoopResolver, PictogramResolver};
use crate::services::{
    allocate, CategorySlotAllocation, CoreBoardRequest, CoreBoardService, GenerationSettings,
    Suggestion, SuggestionService,
};
use crate::words::{OpenAiWordGenerator, WordGenerator};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Core board generation
    boards: CoreBoardService,
    /// Topic suggestions
    suggestions: SuggestionService,
}

impl AppState {
    /// Creates a state backed by the configured word service and symbol set.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let generator: Arc<dyn WordGenerator> =
            Arc::new(OpenAiWordGenerator::from_config(&config.llm)?);
        let resolver: Arc<dyn PictogramResolver> = if config.board.fetch_images {
            resolver_from_config(&config.symbols)?
        } else {
            Arc::new(NoopResolver)
        };
        Ok(Self::with_collaborators(config, generator, resolver))
    }

    /// Creates a state with explicit collaborators.
    pub fn with_collaborators(
        config: Config,
        generator: Arc<dyn WordGenerator>,
        resolver: Arc<dyn PictogramResolver>,
    ) -> Self {
        let boards = CoreBoardService::new(
            GenerationSettings::from_config(&config),
            Arc::clone(&generator),
            Arc::clone(&resolver),
        );
        let suggestions = SuggestionService::new(generator, resolver);
        Self {
            config: Arc::new(config),
            boards,
            suggestions,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Category list response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// Categories in canonical order.
    pub categories: Vec<CategorySummary>,
}

/// Query parameters for slot allocation.
#[derive(Debug, Deserialize)]
pub struct AllocationQuery {
    /// Requested button count; defaults to the configured count.
    pub buttons: Option<usize>,
}

/// Slot allocation response.
#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    /// Requested button count.
    pub total_buttons: usize,
    /// Sum of allotted slots.
    pub allocated: usize,
    /// One entry per category.
    pub allocations: Vec<CategorySlotAllocation>,
}

/// Core board request body.
#[derive(Debug, Deserialize)]
pub struct CoreBoardBody {
    /// Board topic.
    pub topic: String,
    /// Requested button count; defaults to the configured count.
    pub total_buttons: Option<usize>,
}

/// Suggestion request body.
#[derive(Debug, Deserialize)]
pub struct SuggestionBody {
    /// Topic to suggest words for.
    pub topic: String,
    /// Maximum number of suggestions.
    pub max: Option<usize>,
    /// Language for words and pictograms.
    pub language: Option<String>,
}

/// Suggestion list response.
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    /// Suggested words.
    pub suggestions: Vec<Suggestion>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn board_error_response(err: BoardError) -> (StatusCode, Json<ApiError>) {
    match err {
        BoardError::InvalidInput(message) => {
            (StatusCode::BAD_REQUEST, Json(ApiError::new(message)))
        }
        BoardError::UpstreamGeneration { category, message } => {
            warn!(%category, %message, "word generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiError::with_details(
                    format!("Word generation failed for {category}"),
                    message,
                )),
            )
        }
        other => {
            error!("request failed: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details("Internal error", other.to_string())),
            )
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/categories - List the core board categories.
async fn list_categories() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: CORE_CATEGORIES.iter().map(CategorySummary::from).collect(),
    })
}

/// GET /api/allocations - Slot allocation for a button count.
async fn get_allocations(
    State(state): State<AppState>,
    Query(query): Query<AllocationQuery>,
) -> ApiResult<AllocationResponse> {
    let total_buttons = query
        .buttons
        .unwrap_or(state.config.board.default_total_buttons);
    let allocations = allocate(total_buttons, &CORE_CATEGORIES).map_err(board_error_response)?;

    Ok(Json(AllocationResponse {
        total_buttons,
        allocated: allocations.total(),
        allocations: allocations.iter().copied().collect(),
    }))
}

/// POST /api/boards/core - Generate a core board.
async fn generate_core_board(
    State(state): State<AppState>,
    Json(body): Json<CoreBoardBody>,
) -> ApiResult<BoardDocument> {
    let total_buttons = body
        .total_buttons
        .unwrap_or(state.config.board.default_total_buttons);
    let request = CoreBoardRequest::new(body.topic, total_buttons);

    let board = state
        .boards
        .generate(&request)
        .await
        .map_err(board_error_response)?;

    Ok(Json(board.document))
}

/// POST /api/suggestions - Suggest words and pictograms for a topic.
async fn suggest_words(
    State(state): State<AppState>,
    Json(body): Json<SuggestionBody>,
) -> ApiResult<SuggestionResponse> {
    let max = body.max.unwrap_or(DEFAULT_MAX_SUGGESTIONS);
    let language = body
        .language
        .unwrap_or_else(|| state.config.symbols.language.clone());

    let suggestions = state
        .suggestions
        .suggest(&body.topic, max, &language)
        .await
        .map_err(board_error_response)?;

    Ok(Json(SuggestionResponse { suggestions }))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS; the server is meant to run beside a local frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/categories", get(list_categories))
        .route("/api/allocations", get(get_allocations))
        .route("/api/boards/core", post(generate_core_board))
        .route("/api/suggestions", post(suggest_words))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the word service client cannot be built or the
/// server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting {APP_NAME} web server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let (status, body) = board_error_response(BoardError::invalid_input("topic"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "topic");

        let (status, body) = board_error_response(BoardError::upstream("Actions", "timeout"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.details.as_deref(), Some("timeout"));

        let (status, _) = board_error_response(BoardError::Config("client".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
