//! # Islamic Companion Bot
//!
//! A Telegram bot that relays Islamic religious content from public APIs
//! behind a menu-driven chat interface.
//!
//! ## Features
//! - Prayer times for Makkah, Madinah, Jeddah and Riyadh
//! - Random azkar, optionally by supplication category
//! - Quran radio station directory and surah text by number
//! - Scheduled prayer-time reminders per chat, persisted in SQLite

/// Bot command handlers and update routing
pub mod bot;
/// Fixed menu enumerations: cities and supplication categories
pub mod catalog;
/// Configuration management and environment variables
pub mod config;
/// Database connection, models, and the registration store
pub mod database;
/// Content clients, reminders, and the health endpoint
pub mod services;
/// Utility functions for formatting, validation, and logging
pub mod utils;
