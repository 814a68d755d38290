use tracing::{debug, error, info, warn};

/// Logs the start of a user action with consistent format
pub fn log_action_start(action: &str, user: &str, user_id: u64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "ACTION_START: {} by {}({}) in chat {} - {}",
            action, user, user_id, chat_id, d
        ),
        None => info!(
            "ACTION_START: {} by {}({}) in chat {}",
            action, user, user_id, chat_id
        ),
    }
}

/// Logs completion of a user action with consistent format
pub fn log_action_success(action: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("ACTION_SUCCESS: {} in chat {} - {}", action, chat_id, d),
        None => info!("ACTION_SUCCESS: {} in chat {}", action, chat_id),
    }
}

/// Logs a failed user action with consistent format
pub fn log_action_error(action: &str, chat_id: i64, error: &str) {
    error!("ACTION_ERROR: {} in chat {} - {}", action, chat_id, error);
}

/// Logs rejected input with consistent format
pub fn log_validation_error(action: &str, value: &str, error: &str, chat_id: i64) {
    warn!(
        "VALIDATION_ERROR: {} - value '{}' invalid: {} - chat {}",
        action, value, error, chat_id
    );
}

/// Logs an upstream content fetch failure
pub fn log_fetch_error(feature: &str, target: &str, error: &str) {
    error!("FETCH_ERROR: {} for {} failed: {}", feature, target, error);
}

/// Logs database operations with consistent format
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs database errors with consistent format
pub fn log_database_error(operation: &str, table: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("DB_ERROR: {} on {} failed: {} - {}", operation, table, error, d),
        None => error!("DB_ERROR: {} on {} failed: {}", operation, table, error),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
