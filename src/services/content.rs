//! Clients for the public APIs the bot relays: prayer time tables, the
//! azkar corpus, the Quran radio directory and the Quran text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::City;

pub const DEFAULT_PRAYER_API_URL: &str = "https://api.aladhan.com/v1/timingsByCity";
pub const DEFAULT_AZKAR_API_URL: &str = "https://raw.githubusercontent.com/nawafalqari/azkar-api/56df51279ab6eb86dc2f6202c7de26c8948331c1/azkar.json";
pub const DEFAULT_RADIO_API_URL: &str = "https://data-rosy.vercel.app/radio.json";
pub const DEFAULT_QURAN_API_URL: &str = "https://api.alquran.cloud/v1/surah";

/// Country passed to the prayer-time API alongside the city name.
const PRAYER_COUNTRY: &str = "SA";
/// Umm al-Qura calculation method.
const PRAYER_METHOD: &str = "4";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("{0} returned no entries")]
    Empty(&'static str),
}

/// Base URLs of the upstream APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub prayer: String,
    pub azkar: String,
    pub radio: String,
    pub quran: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            prayer: DEFAULT_PRAYER_API_URL.to_string(),
            azkar: DEFAULT_AZKAR_API_URL.to_string(),
            radio: DEFAULT_RADIO_API_URL.to_string(),
            quran: DEFAULT_QURAN_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise", default)]
    pub sunrise: Option<String>,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimes {
    pub timings: Timings,
    /// Human readable Gregorian date reported by the API.
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zikr {
    #[serde(default)]
    pub category: String,
    #[serde(rename = "zekr", alias = "text", alias = "content")]
    pub text: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioStation {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    pub number_in_surah: u16,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    #[serde(default)]
    pub revelation_type: String,
    pub ayahs: Vec<Ayah>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct PrayerData {
    timings: Timings,
    #[serde(default)]
    date: Option<PrayerDate>,
}

#[derive(Deserialize)]
struct PrayerDate {
    readable: String,
}

/// Flattens the azkar corpus into entries. The corpus has shipped both as a
/// flat list and grouped by category, and some categories nest arrays.
/// Entries that do not decode are skipped so one bad item cannot hide the rest.
fn azkar_entries(payload: Value) -> Vec<Zikr> {
    let mut entries = Vec::new();
    match payload {
        Value::Object(groups) => {
            for (category, items) in groups {
                collect_azkar(items, &category, &mut entries);
            }
        }
        other => collect_azkar(other, "", &mut entries),
    }
    entries
}

fn collect_azkar(value: Value, category: &str, entries: &mut Vec<Zikr>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_azkar(item, category, entries);
            }
        }
        Value::Object(_) => match serde_json::from_value::<Zikr>(value) {
            Ok(mut zikr) => {
                if zikr.category.is_empty() {
                    zikr.category = category.to_string();
                }
                entries.push(zikr);
            }
            Err(e) => tracing::warn!("Skipping azkar entry in '{}': {}", category, e),
        },
        other => tracing::warn!("Skipping azkar entry in '{}': unexpected {}", category, other),
    }
}

#[derive(Deserialize)]
struct RadioPayload {
    radios: Vec<RadioStation>,
}

/// Source of the religious content the bot relays.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn prayer_times(&self, city: City) -> Result<PrayerTimes, ContentError>;
    async fn azkar(&self) -> Result<Vec<Zikr>, ContentError>;
    async fn radio_stations(&self) -> Result<Vec<RadioStation>, ContentError>;
    async fn surah(&self, number: u16) -> Result<Surah, ContentError>;
}

/// [`ContentSource`] backed by the public HTTP APIs.
pub struct HttpContentClient {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl HttpContentClient {
    pub fn new(endpoints: ApiEndpoints, timeout: Duration) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ContentError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ContentSource for HttpContentClient {
    async fn prayer_times(&self, city: City) -> Result<PrayerTimes, ContentError> {
        tracing::debug!("Fetching prayer times for {}", city.api_name());
        let request = self.client.get(&self.endpoints.prayer).query(&[
            ("city", city.api_name()),
            ("country", PRAYER_COUNTRY),
            ("method", PRAYER_METHOD),
        ]);

        let envelope: Envelope<PrayerData> = self.get_json(request).await?;
        Ok(PrayerTimes {
            timings: envelope.data.timings,
            date: envelope.data.date.map(|d| d.readable),
        })
    }

    async fn azkar(&self) -> Result<Vec<Zikr>, ContentError> {
        tracing::debug!("Fetching azkar corpus");
        let payload: Value = self.get_json(self.client.get(&self.endpoints.azkar)).await?;
        let entries = azkar_entries(payload);
        if entries.is_empty() {
            return Err(ContentError::Empty("azkar corpus"));
        }
        Ok(entries)
    }

    async fn radio_stations(&self) -> Result<Vec<RadioStation>, ContentError> {
        tracing::debug!("Fetching radio station directory");
        let payload: RadioPayload = self.get_json(self.client.get(&self.endpoints.radio)).await?;
        if payload.radios.is_empty() {
            return Err(ContentError::Empty("radio directory"));
        }
        Ok(payload.radios)
    }

    async fn surah(&self, number: u16) -> Result<Surah, ContentError> {
        tracing::debug!("Fetching surah {}", number);
        let url = format!("{}/{}", self.endpoints.quran.trim_end_matches('/'), number);
        let envelope: Envelope<Surah> = self.get_json(self.client.get(url)).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_azkar_payload() {
        let json = r#"[
            {"category": "أذكار الصباح", "zekr": "سبحان الله", "description": "", "count": "3"},
            {"category": "أذكار النوم", "text": "باسمك اللهم"}
        ]"#;
        let entries = azkar_entries(serde_json::from_str(json).unwrap());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "سبحان الله");
        assert_eq!(entries[1].text, "باسمك اللهم");
        assert_eq!(entries[1].description, None);
    }

    #[test]
    fn test_grouped_azkar_payload_fills_category() {
        let json = r#"{
            "أذكار المساء": [{"content": "أمسينا وأمسى الملك لله"}]
        }"#;
        let entries = azkar_entries(serde_json::from_str(json).unwrap());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, "أذكار المساء");
        assert_eq!(entries[0].text, "أمسينا وأمسى الملك لله");
    }

    #[test]
    fn test_azkar_skips_bad_entries_and_flattens_nested_arrays() {
        let json = r#"{
            "أذكار الصباح": [{"content": "أصبحنا وأصبح الملك لله"}],
            "تسابيح": [
                [{"content": "سبحان الله"}, {"content": "الحمد لله"}],
                {"count": "33"},
                "stray"
            ]
        }"#;
        let entries = azkar_entries(serde_json::from_str(json).unwrap());

        let texts: Vec<&str> = entries.iter().map(|z| z.text.as_str()).collect();
        assert_eq!(texts, vec!["أصبحنا وأصبح الملك لله", "سبحان الله", "الحمد لله"]);
        assert_eq!(entries[1].category, "تسابيح");
    }

    #[test]
    fn test_azkar_unexpected_shape_yields_nothing() {
        assert!(azkar_entries(serde_json::json!("not a corpus")).is_empty());
    }

    #[test]
    fn test_prayer_payload_without_sunrise() {
        let json = r#"{"data": {"timings": {
            "Fajr": "04:10", "Dhuhr": "12:20", "Asr": "15:45", "Maghrib": "18:30", "Isha": "20:00"
        }}}"#;
        let envelope: Envelope<PrayerData> = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.data.timings.fajr, "04:10");
        assert_eq!(envelope.data.timings.sunrise, None);
        assert!(envelope.data.date.is_none());
    }

    #[test]
    fn test_surah_payload() {
        let json = r#"{"code": 200, "data": {
            "number": 112, "name": "سُورَةُ الإِخۡلَاصِ", "englishName": "Al-Ikhlaas",
            "englishNameTranslation": "Sincerity", "revelationType": "Meccan",
            "ayahs": [{"number": 6222, "numberInSurah": 1, "text": "قُلۡ هُوَ ٱللَّهُ أَحَدٌ"}]
        }}"#;
        let envelope: Envelope<Surah> = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.data.english_name, "Al-Ikhlaas");
        assert_eq!(envelope.data.ayahs.len(), 1);
        assert_eq!(envelope.data.ayahs[0].number_in_surah, 1);
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = ApiEndpoints::default();
        assert_eq!(endpoints.prayer, DEFAULT_PRAYER_API_URL);
        assert!(endpoints.quran.ends_with("/surah"));
    }
}
