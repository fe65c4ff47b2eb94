use crate::{
    game::{RoundEngine, RoundPhase, SubmitOutcome},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection.
///
/// The connection's round is owned by its receive task, so submissions on
/// one socket are processed strictly one at a time.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    tracing::info!("WebSocket connection established");

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        let mut engine = RoundEngine::new(state_for_recv.round_rules());

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        if let Err(e) =
                            handle_client_message(client_msg, &mut engine, &state_for_recv, &tx)
                                .await
                        {
                            tracing::error!("Error handling message: {}", e);
                            let error_msg = ServerMessage::Error {
                                message: e.to_string(),
                            };
                            let _ = tx.send(error_msg).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client disconnected");
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    tracing::info!("WebSocket connection closed");
}

/// Handle individual client messages
async fn handle_client_message<R: rand::Rng>(
    msg: ClientMessage,
    engine: &mut RoundEngine<R>,
    state: &AppState,
    tx: &mpsc::Sender<ServerMessage>,
) -> anyhow::Result<()> {
    match msg {
        ClientMessage::StartRound => {
            if engine.phase() == RoundPhase::Active {
                tracing::debug!("Discarding the connection's current round");
            }
            let round = engine.start_round_from(&state.word_list).snapshot();
            tx.send(ServerMessage::RoundState { round }).await?;
        }
        ClientMessage::SubmitWord { word } => {
            match engine.submit(&word, &state.dictionary) {
                Ok(SubmitOutcome::Accepted { word, points, score }) => {
                    tx.send(ServerMessage::WordAccepted { word, points, score })
                        .await?;
                    if let Some(round) = engine.round() {
                        tx.send(ServerMessage::RoundState {
                            round: round.snapshot(),
                        })
                        .await?;
                    }
                }
                Ok(SubmitOutcome::Empty) => {}
                Err(e) => {
                    tx.send(ServerMessage::WordRejected {
                        kind: e.kind().to_string(),
                        title: e.title().to_string(),
                        message: e.message(),
                    })
                    .await?;
                }
            }
        }
    }

    Ok(())
}
