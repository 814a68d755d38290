//! Content proxies: one upstream fetch per request, rendered for chat.
//!
//! Every upstream failure is logged and collapsed into the feature's generic
//! error text; callers always get something they can send.

use rand::seq::SliceRandom;

use crate::catalog::{City, DuaTag};
use crate::services::content::{ContentSource, Zikr};
use crate::utils::format::{
    format_prayer_times, format_radio_stations, format_surah, format_zikr, AZKAR_ERROR,
    PRAYER_TIMES_ERROR, RADIO_ERROR, SURAH_ERROR,
};
use crate::utils::logging::log_fetch_error;
use crate::utils::validation::validate_surah_number;

/// On failure the error carries the plain-text message to send instead.
pub async fn prayer_times_message(content: &dyn ContentSource, city: City) -> Result<String, &'static str> {
    match content.prayer_times(city).await {
        Ok(times) => Ok(format_prayer_times(city, &times)),
        Err(e) => {
            log_fetch_error("prayer_times", city.key(), &e.to_string());
            Err(PRAYER_TIMES_ERROR)
        }
    }
}

pub async fn random_zikr_message(content: &dyn ContentSource) -> String {
    match content.azkar().await {
        Ok(azkar) => match pick_random(&azkar, None) {
            Some(zikr) => format_zikr(zikr),
            None => AZKAR_ERROR.to_string(),
        },
        Err(e) => {
            log_fetch_error("azkar", "random", &e.to_string());
            AZKAR_ERROR.to_string()
        }
    }
}

/// Random zikr from one supplication category.
pub async fn zikr_message_for(content: &dyn ContentSource, dua: DuaTag) -> String {
    match content.azkar().await {
        Ok(azkar) => match pick_random(&azkar, Some(dua)) {
            Some(zikr) => format_zikr(zikr),
            None => {
                log_fetch_error("azkar", dua.tag(), "no entries in category");
                AZKAR_ERROR.to_string()
            }
        },
        Err(e) => {
            log_fetch_error("azkar", dua.tag(), &e.to_string());
            AZKAR_ERROR.to_string()
        }
    }
}

pub async fn radio_message(content: &dyn ContentSource) -> String {
    match content.radio_stations().await {
        Ok(stations) => format_radio_stations(&stations),
        Err(e) => {
            log_fetch_error("radio", "directory", &e.to_string());
            RADIO_ERROR.to_string()
        }
    }
}

/// Returns `None` without touching the network when `number` is not a
/// surah number (1-114).
pub async fn surah_message(content: &dyn ContentSource, number: i64) -> Option<String> {
    let number = match validate_surah_number(number) {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!("Ignoring surah request: {}", e);
            return None;
        }
    };

    let message = match content.surah(number).await {
        Ok(surah) => format_surah(&surah),
        Err(e) => {
            log_fetch_error("surah", &number.to_string(), &e.to_string());
            SURAH_ERROR.to_string()
        }
    };
    Some(message)
}

fn pick_random(azkar: &[Zikr], dua: Option<DuaTag>) -> Option<&Zikr> {
    let candidates: Vec<&Zikr> = match dua {
        Some(dua) => azkar
            .iter()
            .filter(|z| z.category.trim() == dua.category() || z.category.contains(dua.category()))
            .collect(),
        None => azkar.iter().filter(|z| !z.text.trim().is_empty()).collect(),
    };
    candidates.choose(&mut rand::thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zikr(category: &str, text: &str) -> Zikr {
        Zikr {
            category: category.to_string(),
            text: text.to_string(),
            description: None,
            reference: None,
        }
    }

    #[test]
    fn test_pick_random_filters_by_category() {
        let azkar = vec![
            zikr("أذكار الصباح", "morning"),
            zikr("أذكار النوم", "sleep"),
        ];
        for _ in 0..10 {
            let picked = pick_random(&azkar, Some(DuaTag::Sleep)).unwrap();
            assert_eq!(picked.text, "sleep");
        }
        assert!(pick_random(&azkar, Some(DuaTag::Prophets)).is_none());
    }

    #[test]
    fn test_pick_random_skips_blank_entries() {
        let azkar = vec![zikr("x", "  "), zikr("y", "text")];
        for _ in 0..10 {
            assert_eq!(pick_random(&azkar, None).unwrap().text, "text");
        }
        assert!(pick_random(&[], None).is_none());
    }
}
