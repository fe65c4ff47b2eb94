mod config;
mod dictionary;
mod game;
mod models;
mod routes;
mod utils;
mod websocket;
mod words;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Result;
use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use dictionary::Dictionary;
use game::{RoundEngine, RoundRules};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use words::WordList;

/// How often idle rounds are swept
pub const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Dictionary,
    pub word_list: WordList,
    /// Rounds played over the REST API, keyed by round id
    pub rounds: DashMap<Uuid, GameSession>,
}

impl AppState {
    pub fn new(config: Config, dictionary: Dictionary, word_list: WordList) -> Self {
        Self {
            config,
            dictionary,
            word_list,
            rounds: DashMap::new(),
        }
    }

    pub fn round_rules(&self) -> RoundRules {
        self.config.round_rules()
    }
}

/// A REST round and when it was last touched
pub struct GameSession {
    pub engine: RoundEngine,
    pub last_active: Instant,
}

impl GameSession {
    pub fn new(rules: RoundRules) -> Self {
        Self {
            engine: RoundEngine::new(rules),
            last_active: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub fn is_idle(&self, now: Instant, timeout: Duration) -> bool {
        now.duration_since(self.last_active) > timeout
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Scramble server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load root word candidates
    let word_list = match WordList::from_file(&config.game.word_list_path).await {
        Ok(list) if list.is_empty() => {
            tracing::warn!(
                "Word list {} is empty. Every round will start with '{}'.",
                config.game.word_list_path,
                config.round_rules().fallback_root_word()
            );
            list
        }
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(
                "Failed to load word list: {:#}. Every round will start with '{}'.",
                e,
                config.round_rules().fallback_root_word()
            );
            WordList::empty()
        }
    };

    // Load dictionary
    let dictionary = match Dictionary::load(
        &config.game.dictionary_path,
        &config.game.dictionary_language,
    )
    .await
    {
        Ok(dict) if dict.is_empty() => {
            tracing::warn!(
                "Dictionary {} has no words; only the root word will be recognised",
                config.game.dictionary_path
            );
            dict
        }
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {:#}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty(&config.game.dictionary_language)
        }
    };

    let state = Arc::new(AppState::new(config.clone(), dictionary, word_list));

    // Spawn background task to evict idle rounds
    let cleanup_state = state.clone();
    tokio::spawn(async move {
        session_cleanup_task(cleanup_state).await;
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Background task that periodically removes rounds nobody has touched
async fn session_cleanup_task(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
    let timeout = state.config.session_idle_timeout();

    loop {
        interval.tick().await;
        let removed = evict_idle_rounds(&state, Instant::now(), timeout);
        if removed > 0 {
            tracing::info!("Removed {} idle round(s)", removed);
        }
    }
}

/// Drop rounds idle longer than `timeout`. Returns how many were removed.
fn evict_idle_rounds(state: &AppState, now: Instant, timeout: Duration) -> usize {
    let before = state.rounds.len();
    state
        .rounds
        .retain(|_, session| !session.is_idle(now, timeout));
    before.saturating_sub(state.rounds.len())
}
