use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, time::Duration};

use crate::game::{
    rules::{DEFAULT_LANGUAGE, DEFAULT_MIN_WORD_LENGTH, DEFAULT_ROOT_WORD},
    RoundRules,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub word_list_path: String,
    pub dictionary_path: String,
    pub dictionary_language: String,
    pub default_root_word: String,
    pub min_word_length: usize,
    /// Seconds a REST round may sit unused before it is evicted
    pub session_idle_timeout: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let game = GameConfig {
            word_list_path: env::var("WORD_LIST_PATH")
                .unwrap_or_else(|_| "./start.txt".to_string()),
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            dictionary_language: env::var("DICTIONARY_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
            default_root_word: env::var("DEFAULT_ROOT_WORD")
                .unwrap_or_else(|_| DEFAULT_ROOT_WORD.to_string()),
            min_word_length: env::var("MIN_WORD_LENGTH")
                .unwrap_or_else(|_| DEFAULT_MIN_WORD_LENGTH.to_string())
                .parse()
                .unwrap_or(DEFAULT_MIN_WORD_LENGTH),
            session_idle_timeout: env::var("SESSION_IDLE_TIMEOUT")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()
                .unwrap_or(1800),
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.game.session_idle_timeout)
    }

    /// Round rules derived from the game section
    pub fn round_rules(&self) -> RoundRules {
        RoundRules {
            min_word_length: self.game.min_word_length,
            language: self.game.dictionary_language.clone(),
            default_root_word: self.game.default_root_word.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            game: GameConfig {
                word_list_path: "./start.txt".to_string(),
                dictionary_path: "./dictionary.txt".to_string(),
                dictionary_language: DEFAULT_LANGUAGE.to_string(),
                default_root_word: DEFAULT_ROOT_WORD.to_string(),
                min_word_length: DEFAULT_MIN_WORD_LENGTH,
                session_idle_timeout: 1800,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_rules() {
        let config = Config::default();
        assert_eq!(config.round_rules(), RoundRules::default());
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.session_idle_timeout(), Duration::from_secs(1800));
    }
}
