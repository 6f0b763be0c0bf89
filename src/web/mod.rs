pub mod api;
pub mod images;
pub mod page;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::{error, info};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

use crate::config::Config;
use crate::quiz::{self, Catalog, QuizError, Round};

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub assets_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Catalog, assets_dir: PathBuf) -> Self {
        Self {
            catalog: Arc::new(catalog),
            assets_dir: Arc::new(assets_dir),
        }
    }

    pub fn next_round(&self) -> Result<Round, QuizError> {
        let round = quiz::generate_round(self.catalog.entries(), &mut rand::thread_rng())?;
        log::debug!(
            "Generated round: answer {:?}, options {:?}",
            round.correct.name,
            round.options
        );
        Ok(round)
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
            WebError::Quiz(err) => {
                error!("Failed to generate a round: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to generate a quiz round").into_response()
            }
        }
    }
}

// Characters that cannot appear raw in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub fn image_url(image: &str) -> String {
    format!("/images/{}", utf8_percent_encode(image, PATH_SEGMENT))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::render_index))
        .route("/api/round", get(api::round_json))
        .route("/images/:file", get(images::serve_image))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}

pub async fn serve(config: Config) -> std::io::Result<()> {
    let state = AppState::new(config.catalog, config.assets_dir);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, routes(state)).await
}
