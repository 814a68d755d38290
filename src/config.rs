use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::content::ApiEndpoints;
use crate::services::reminder::DEFAULT_REMINDER_SCHEDULE;
use crate::utils::validation::parse_chat_id_list;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/reminders.db";
/// `DATABASE_URL` value selecting the volatile in-memory registration store.
pub const MEMORY_DATABASE_URL: &str = "memory";
pub const DEFAULT_DEVELOPER_CONTACT: &str = "@islamic_companion_dev";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub reminder_schedule: String,
    pub assets_dir: PathBuf,
    pub developer_contact: String,
    pub admin_chat_ids: Vec<i64>,
    pub http_timeout: Duration,
    pub endpoints: ApiEndpoints,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let http_port = var_or("HTTP_PORT", "3000")
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let timeout_secs: u64 = var_or("HTTP_TIMEOUT_SECS", "15")
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_TIMEOUT_SECS"))?;
        if timeout_secs == 0 {
            return Err(anyhow!("HTTP_TIMEOUT_SECS must be greater than zero"));
        }

        let admin_chat_ids = parse_chat_id_list(&var_or("ADMIN_CHAT_IDS", ""))
            .map_err(|e| anyhow!("Invalid ADMIN_CHAT_IDS: {}", e))?;

        let defaults = ApiEndpoints::default();
        let endpoints = ApiEndpoints {
            prayer: var_or("PRAYER_API_URL", &defaults.prayer),
            azkar: var_or("AZKAR_API_URL", &defaults.azkar),
            radio: var_or("RADIO_API_URL", &defaults.radio),
            quran: var_or("QURAN_API_URL", &defaults.quran),
        };

        Ok(Config {
            telegram_bot_token: token.trim().to_string(),
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            http_port,
            reminder_schedule: var_or("REMINDER_SCHEDULE", DEFAULT_REMINDER_SCHEDULE),
            assets_dir: PathBuf::from(var_or("ASSETS_DIR", "./assets")),
            developer_contact: var_or("DEVELOPER_CONTACT", DEFAULT_DEVELOPER_CONTACT),
            admin_chat_ids,
            http_timeout: Duration::from_secs(timeout_secs),
            endpoints,
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url.eq_ignore_ascii_case(MEMORY_DATABASE_URL)
    }
}

/// Reads a variable, treating unset and blank the same.
fn var_or(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
