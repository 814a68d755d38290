//! Fixed enumerations the bot offers in its menus: supported prayer-time
//! cities and supplication categories.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};

/// A supported prayer-time location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Makkah,
    Madinah,
    Jeddah,
    Riyadh,
}

impl City {
    /// Menu order.
    pub const ALL: [City; 4] = [City::Makkah, City::Madinah, City::Jeddah, City::Riyadh];

    /// Stable key used in storage and callback data.
    pub fn key(&self) -> &'static str {
        match self {
            City::Makkah => "makkah",
            City::Madinah => "madinah",
            City::Jeddah => "jeddah",
            City::Riyadh => "riyadh",
        }
    }

    /// City name understood by the prayer-time API.
    pub fn api_name(&self) -> &'static str {
        match self {
            City::Makkah => "Mecca",
            City::Madinah => "Medina",
            City::Jeddah => "Jeddah",
            City::Riyadh => "Riyadh",
        }
    }

    /// Reply keyboard label.
    pub fn label(&self) -> &'static str {
        match self {
            City::Makkah => "🕋 مكة",
            City::Madinah => "🏙 المدينة",
            City::Jeddah => "🌊 جدة",
            City::Riyadh => "🏢 الرياض",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Makkah => "مكة المكرمة",
            City::Madinah => "المدينة المنورة",
            City::Jeddah => "جدة",
            City::Riyadh => "الرياض",
        }
    }

    /// File name of the city picture under `<assets>/cities/`.
    pub fn image_file(&self) -> String {
        format!("{}.jpg", self.key())
    }

    pub fn from_label(label: &str) -> Option<City> {
        let label = label.trim();
        City::ALL.into_iter().find(|city| city.label() == label)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.key() == key)
            .ok_or_else(|| anyhow!("Unknown city '{}'", s.trim()))
    }
}

/// Supplication categories offered under the azkar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuaTag {
    Morning,
    Evening,
    AfterPrayer,
    Sleep,
    Waking,
    Quranic,
    Prophets,
}

impl DuaTag {
    pub const ALL: [DuaTag; 7] = [
        DuaTag::Morning,
        DuaTag::Evening,
        DuaTag::AfterPrayer,
        DuaTag::Sleep,
        DuaTag::Waking,
        DuaTag::Quranic,
        DuaTag::Prophets,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DuaTag::Morning => "morning",
            DuaTag::Evening => "evening",
            DuaTag::AfterPrayer => "after_prayer",
            DuaTag::Sleep => "sleep",
            DuaTag::Waking => "waking",
            DuaTag::Quranic => "quranic",
            DuaTag::Prophets => "prophets",
        }
    }

    /// Category name as it appears in the azkar corpus.
    pub fn category(&self) -> &'static str {
        match self {
            DuaTag::Morning => "أذكار الصباح",
            DuaTag::Evening => "أذكار المساء",
            DuaTag::AfterPrayer => "أذكار بعد السلام من الصلاة المفروضة",
            DuaTag::Sleep => "أذكار النوم",
            DuaTag::Waking => "أذكار الاستيقاظ",
            DuaTag::Quranic => "أدعية قرآنية",
            DuaTag::Prophets => "أدعية الأنبياء",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DuaTag::Morning => "🌅 الصباح",
            DuaTag::Evening => "🌇 المساء",
            DuaTag::AfterPrayer => "🕌 بعد الصلاة",
            DuaTag::Sleep => "🌙 النوم",
            DuaTag::Waking => "☀️ الاستيقاظ",
            DuaTag::Quranic => "📖 أدعية قرآنية",
            DuaTag::Prophets => "🤲 أدعية الأنبياء",
        }
    }

    pub fn from_tag(tag: &str) -> Option<DuaTag> {
        DuaTag::ALL.into_iter().find(|dua| dua.tag() == tag)
    }
}
