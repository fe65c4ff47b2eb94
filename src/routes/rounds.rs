use crate::{
    game::{Round, SubmitOutcome, WordError},
    models::RoundSnapshot,
    AppState, GameSession,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct RoundResponse {
    pub round_id: Uuid,
    pub round: RoundSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct SubmitWordRequest {
    pub word: String,
}

/// Outcome of a submission together with the round as it now stands
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitWordResponse {
    Accepted {
        word: String,
        points: u32,
        score: u32,
        round: RoundSnapshot,
    },
    Empty {
        round: RoundSnapshot,
    },
    Rejected {
        kind: String,
        title: String,
        message: String,
        round: RoundSnapshot,
    },
}

impl SubmitWordResponse {
    fn new(result: Result<SubmitOutcome, WordError>, round: RoundSnapshot) -> Self {
        match result {
            Ok(SubmitOutcome::Accepted { word, points, score }) => Self::Accepted {
                word,
                points,
                score,
                round,
            },
            Ok(SubmitOutcome::Empty) => Self::Empty { round },
            Err(e) => Self::Rejected {
                kind: e.kind().to_string(),
                title: e.title().to_string(),
                message: e.message(),
                round,
            },
        }
    }
}

/// Snapshot of the session's round. Sessions are only stored after their
/// first round has started, so a missing round is a server fault.
fn current_snapshot(session: &GameSession, round_id: Uuid) -> Result<RoundSnapshot, StatusCode> {
    session.engine.round().map(Round::snapshot).ok_or_else(|| {
        tracing::error!("Round {} has no active round", round_id);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Start a new round with a random root word
pub async fn create_round(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<RoundResponse>) {
    let round_id = Uuid::new_v4();
    let mut session = GameSession::new(state.round_rules());
    let round = session.engine.start_round_from(&state.word_list).snapshot();

    tracing::info!("Created round {} with root word '{}'", round_id, round.root_word);
    state.rounds.insert(round_id, session);

    (StatusCode::CREATED, Json(RoundResponse { round_id, round }))
}

/// Current state of a round. Viewing counts as activity.
pub async fn get_round(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<RoundResponse>, StatusCode> {
    let mut session = state.rounds.get_mut(&round_id).ok_or(StatusCode::NOT_FOUND)?;
    session.touch();
    let round = current_snapshot(&session, round_id)?;

    Ok(Json(RoundResponse { round_id, round }))
}

/// Throw away the round's words and score and pick a new root word
pub async fn reset_round(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<RoundResponse>, StatusCode> {
    let mut session = state.rounds.get_mut(&round_id).ok_or(StatusCode::NOT_FOUND)?;
    session.touch();
    let round = session.engine.start_round_from(&state.word_list).snapshot();

    tracing::info!("Reset round {} with root word '{}'", round_id, round.root_word);

    Ok(Json(RoundResponse { round_id, round }))
}

/// Submit a word. Rejections are a normal outcome and come back as 200.
pub async fn submit_word(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<Uuid>,
    Json(payload): Json<SubmitWordRequest>,
) -> Result<Json<SubmitWordResponse>, StatusCode> {
    // The entry guard is held for the whole submission, serializing access
    let mut session = state.rounds.get_mut(&round_id).ok_or(StatusCode::NOT_FOUND)?;
    session.touch();

    let result = session.engine.submit(&payload.word, &state.dictionary);
    let round = current_snapshot(&session, round_id)?;

    Ok(Json(SubmitWordResponse::new(result, round)))
}
