use axum::extract::State;
use axum::Json;

use crate::web::{image_url, AppState, WebError};

/// JSON shape of a round for script clients.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RoundResponse {
    pub image_url: String,
    pub answer: String,
    pub options: Vec<String>,
}

pub async fn round_json(State(state): State<AppState>) -> Result<Json<RoundResponse>, WebError> {
    let round = state.next_round()?;
    Ok(Json(RoundResponse {
        image_url: image_url(&round.correct.image),
        answer: round.correct.name,
        options: round.options,
    }))
}
