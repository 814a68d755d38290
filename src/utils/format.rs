//! MarkdownV2 renderings of the content the bot relays.

use crate::catalog::City;
use crate::services::content::{PrayerTimes, RadioStation, Surah, Zikr};
use crate::utils::markdown::{bold, escape_markdown};

pub const PRAYER_TIMES_ERROR: &str = "❌ حدث خطأ أثناء جلب مواقيت الصلاة";
pub const AZKAR_ERROR: &str = "❌ حدث خطأ أثناء جلب الأذكار";
pub const RADIO_ERROR: &str = "❌ حدث خطأ أثناء جلب إذاعات القرآن";
pub const SURAH_ERROR: &str = "❌ حدث خطأ أثناء جلب السورة";

pub fn format_prayer_times(city: City, times: &PrayerTimes) -> String {
    let t = &times.timings;
    let mut message = format!(
        "📍 {}\n",
        bold(&escape_markdown(&format!("{} ({})", city.display_name(), city.key().to_uppercase())))
    );

    if let Some(date) = &times.date {
        message.push_str(&format!("📅 {}\n", escape_markdown(date)));
    }

    message.push('\n');
    message.push_str(&prayer_line("الفجر", &t.fajr));
    if let Some(sunrise) = &t.sunrise {
        message.push_str(&prayer_line("الشروق", sunrise));
    }
    message.push_str(&prayer_line("الظهر", &t.dhuhr));
    message.push_str(&prayer_line("العصر", &t.asr));
    message.push_str(&prayer_line("المغرب", &t.maghrib));
    message.push_str(&prayer_line("العشاء", &t.isha));
    message
}

fn prayer_line(name: &str, time: &str) -> String {
    format!("{} {}: {}\n", escape_markdown("-"), name, escape_markdown(time))
}

pub fn format_reminder(city: City, times: &PrayerTimes) -> String {
    format!(
        "🔔 {}\n\n{}",
        bold(&escape_markdown("تذكير بمواقيت الصلاة")),
        format_prayer_times(city, times)
    )
}

pub fn format_zikr(zikr: &Zikr) -> String {
    let mut message = format!(
        "📿 {}\n\n{}",
        bold(&escape_markdown(zikr.category.trim())),
        escape_markdown(zikr.text.trim())
    );

    if let Some(description) = zikr.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        message.push_str(&format!("\n\n🤲 {}", escape_markdown(description)));
    }
    if let Some(reference) = zikr.reference.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        message.push_str(&format!("\n\n📚 {}", escape_markdown(reference)));
    }
    message
}

pub fn format_radio_stations(stations: &[RadioStation]) -> String {
    let mut message = format!("📻 {}\n\n", bold(&escape_markdown("إذاعات القرآن الكريم:")));
    for station in stations {
        message.push_str(&format!(
            "🎙 {}\n🔊 {}\n\n",
            bold(&escape_markdown(&station.name)),
            escape_markdown(&station.url)
        ));
    }
    message.trim_end().to_string()
}

pub fn format_surah(surah: &Surah) -> String {
    let mut message = format!(
        "📖 {}\n\n",
        bold(&escape_markdown(&format!("{} - {}", surah.english_name, surah.name)))
    );
    for ayah in &surah.ayahs {
        message.push_str(&escape_markdown(&format!("({}) {}", ayah.number_in_surah, ayah.text)));
        message.push_str("\n\n");
    }
    message.trim_end().to_string()
}
