//! Test doubles shared by the integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use islamic_companion_bot::catalog::City;
use islamic_companion_bot::services::content::{
    Ayah, ContentError, ContentSource, PrayerTimes, RadioStation, Surah, Timings, Zikr,
};
use islamic_companion_bot::services::reminder::Notifier;

pub fn sample_times() -> PrayerTimes {
    PrayerTimes {
        timings: Timings {
            fajr: "04:12".to_string(),
            sunrise: Some("05:35".to_string()),
            dhuhr: "12:19".to_string(),
            asr: "15:42".to_string(),
            maghrib: "18:28".to_string(),
            isha: "19:58".to_string(),
        },
        date: Some("18 Oct 2026".to_string()),
    }
}

pub fn sample_surah(number: u16) -> Surah {
    Surah {
        number,
        name: "سُورَةُ ٱلْفَاتِحَةِ".to_string(),
        english_name: "Al-Faatiha".to_string(),
        english_name_translation: "The Opening".to_string(),
        revelation_type: "Meccan".to_string(),
        ayahs: vec![
            Ayah { number_in_surah: 1, text: "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ".to_string() },
            Ayah { number_in_surah: 2, text: "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ".to_string() },
        ],
    }
}

/// Canned content with per-call counters. Cities listed in `failing_cities`
/// fail, and `fail_all` makes every call fail.
#[derive(Default)]
pub struct FakeContent {
    pub prayer_calls: AtomicUsize,
    pub azkar_calls: AtomicUsize,
    pub radio_calls: AtomicUsize,
    pub surah_calls: AtomicUsize,
    pub failing_cities: HashSet<City>,
    pub fail_all: bool,
}

impl FakeContent {
    pub fn failing() -> Self {
        Self { fail_all: true, ..Self::default() }
    }

    pub fn failing_for(city: City) -> Self {
        Self { failing_cities: HashSet::from([city]), ..Self::default() }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn check(&self, what: &'static str) -> Result<(), ContentError> {
        if self.fail_all {
            return Err(ContentError::Empty(what));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSource for FakeContent {
    async fn prayer_times(&self, city: City) -> Result<PrayerTimes, ContentError> {
        self.prayer_calls.fetch_add(1, Ordering::SeqCst);
        self.check("prayer times")?;
        if self.failing_cities.contains(&city) {
            return Err(ContentError::Empty("prayer times"));
        }
        Ok(sample_times())
    }

    async fn azkar(&self) -> Result<Vec<Zikr>, ContentError> {
        self.azkar_calls.fetch_add(1, Ordering::SeqCst);
        self.check("azkar corpus")?;
        Ok(vec![
            Zikr {
                category: "أذكار الصباح".to_string(),
                text: "أصبحنا وأصبح الملك لله".to_string(),
                description: None,
                reference: None,
            },
            Zikr {
                category: "أذكار النوم".to_string(),
                text: "باسمك اللهم أموت وأحيا".to_string(),
                description: Some("عند النوم".to_string()),
                reference: None,
            },
        ])
    }

    async fn radio_stations(&self) -> Result<Vec<RadioStation>, ContentError> {
        self.radio_calls.fetch_add(1, Ordering::SeqCst);
        self.check("radio directory")?;
        Ok(vec![RadioStation {
            name: "إذاعة القرآن الكريم".to_string(),
            url: "https://example.com/live.mp3".to_string(),
        }])
    }

    async fn surah(&self, number: u16) -> Result<Surah, ContentError> {
        self.surah_calls.fetch_add(1, Ordering::SeqCst);
        self.check("surah")?;
        Ok(sample_surah(number))
    }
}

/// Records every notification; chats in `failing_chats` get an error.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(i64, String)>>,
    pub failing_chats: HashSet<i64>,
}

impl RecordingNotifier {
    pub fn sent_to(&self) -> Vec<i64> {
        self.sent.lock().unwrap().iter().map(|(chat_id, _)| *chat_id).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(
        &self,
        chat_id: i64,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.failing_chats.contains(&chat_id) {
            return Err("chat not found".into());
        }
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}
