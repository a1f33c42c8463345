use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use boolsearch_core::convert::{read_jsonl, terms_from_value};
use boolsearch_core::{process_document, process_query, BooleanIndex, DocId, IndexConfig, IndexData, ProcessedText};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Largest page a single search request may return.
pub const MAX_LIMIT: usize = 1000;

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}
fn default_limit() -> usize { 100 }

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub terms: Vec<String>,
    pub total_hits: usize,
    pub doc_ids: Vec<DocId>,
    pub took_s: f64,
}

#[derive(Serialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Serialize)]
pub struct TermsResponse {
    pub terms: Vec<String>,
}

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// The index is shared by every request: many readers or one writer.
pub type SharedIndex = Arc<RwLock<BooleanIndex>>;

#[derive(Clone)]
pub struct AppState {
    pub index: SharedIndex,
    /// When set, mutating routes require a matching `X-ADMIN-TOKEN` header.
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(index: BooleanIndex, admin_token: Option<String>) -> Self {
        Self { index: Arc::new(RwLock::new(index)), admin_token }
    }
}

pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<boolsearch_core::Error> for ApiError {
    fn from(err: boolsearch_core::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Builds an index from a JSONL file of `{"id", "terms" | "text"}` records.
pub fn load_documents(path: &str, config: IndexConfig) -> Result<BooleanIndex> {
    let f = File::open(path).with_context(|| format!("opening {path}"))?;
    let records = read_jsonl(BufReader::new(f)).with_context(|| format!("reading {path}"))?;
    let mut index = BooleanIndex::with_config(config);
    for (n, record) in records.iter().enumerate() {
        index.add_document(record.id, &record.terms);
        if (n + 1) % 1000 == 0 {
            tracing::info!(loaded = n + 1, "loading documents");
        }
    }
    tracing::info!(num_docs = index.document_count(), num_terms = index.term_count(), "index loaded");
    Ok(index)
}

pub fn build_app(index: BooleanIndex) -> Router {
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    if admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; document mutations are open to every client");
    }
    build_app_with_state(AppState::new(index, admin_token))
}

pub fn build_app_with_state(app_state: AppState) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/documents/count", get(documents_count))
        .route("/terms/count", get(terms_count))
        .route("/document/:doc_id/terms", get(document_terms))
        .route("/document/:doc_id/terms/", get(document_terms))
        .route("/document/:doc_id", post(add_document).delete(remove_document))
        .route("/documents", delete(clear_documents))
        .route("/index", get(index_data))
        .route("/text/document", post(text_document))
        .route("/text/query", post(text_query))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let terms = process_query(&params.query).terms;
    let hits = state.index.read().search(&terms);
    let total_hits = hits.len();
    let limit = params.limit.clamp(1, MAX_LIMIT);
    let doc_ids = hits.into_iter().skip(params.offset).take(limit).collect();
    let elapsed = start.elapsed();
    Json(SearchResponse { query: params.query, terms, total_hits, doc_ids, took_s: elapsed.as_secs_f64() })
}

pub async fn documents_count(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse { count: state.index.read().document_count() })
}

pub async fn terms_count(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse { count: state.index.read().term_count() })
}

pub async fn document_terms(State(state): State<AppState>, Path(doc_id): Path<DocId>) -> Json<TermsResponse> {
    Json(TermsResponse { terms: state.index.read().document_terms(doc_id) })
}

pub async fn index_data(State(state): State<AppState>) -> Json<IndexData> {
    Json(state.index.read().index_data())
}

pub async fn text_document(Json(req): Json<TextRequest>) -> Json<ProcessedText> {
    Json(process_document(&req.text))
}

pub async fn text_query(Json(req): Json<TextRequest>) -> Json<ProcessedText> {
    Json(process_query(&req.text))
}

// --- Mutating endpoints ---
async fn add_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(doc_id): Path<DocId>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&state, &headers)?;
    let terms = terms_from_value(&body)?;
    state.index.write().add_document(doc_id, &terms);
    Ok(Json(serde_json::json!({ "index": "ok" })))
}

async fn remove_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(doc_id): Path<DocId>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&state, &headers)?;
    let terms = terms_from_value(&body)?;
    state.index.write().remove_document(doc_id, &terms);
    Ok(Json(serde_json::json!({ "index": "ok" })))
}

async fn clear_documents(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&state, &headers)?;
    state.index.write().clear();
    Ok(Json(serde_json::json!({ "index": "ok" })))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(required) = &state.admin_token else {
        return Ok(());
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err(ApiError::Unauthorized("invalid admin token".into()))
    }
}
