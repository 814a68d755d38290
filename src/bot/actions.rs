//! Decoding of inbound button presses into typed actions.
//!
//! Reply keyboard buttons arrive as plain message text and inline buttons as
//! callback data; both are turned into enums here so handlers never compare
//! raw strings.

use crate::catalog::{City, DuaTag};

pub const PRAYER_TIMES_LABEL: &str = "🕌 مواقيت الصلاة";
pub const AZKAR_LABEL: &str = "📿 أذكار";
pub const RADIO_LABEL: &str = "📻 إذاعات القرآن";
pub const SURAH_LABEL: &str = "📖 سورة من القرآن";
pub const NOTIFICATIONS_LABEL: &str = "🔔 التنبيهات";
pub const HISN_LABEL: &str = "📚 حصن المسلم";
pub const CONTACT_LABEL: &str = "📞 تواصل مع المطور";
pub const BACK_LABEL: &str = "🔙 رجوع";

/// A reply keyboard button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    PrayerTimes,
    Azkar,
    Radio,
    Surah,
    Notifications,
    HisnAlMuslim,
    ContactDeveloper,
    Back,
    City(City),
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::PrayerTimes => PRAYER_TIMES_LABEL,
            MenuAction::Azkar => AZKAR_LABEL,
            MenuAction::Radio => RADIO_LABEL,
            MenuAction::Surah => SURAH_LABEL,
            MenuAction::Notifications => NOTIFICATIONS_LABEL,
            MenuAction::HisnAlMuslim => HISN_LABEL,
            MenuAction::ContactDeveloper => CONTACT_LABEL,
            MenuAction::Back => BACK_LABEL,
            MenuAction::City(city) => city.label(),
        }
    }

    pub fn from_text(text: &str) -> Option<MenuAction> {
        let text = text.trim();
        let action = match text {
            PRAYER_TIMES_LABEL => MenuAction::PrayerTimes,
            AZKAR_LABEL => MenuAction::Azkar,
            RADIO_LABEL => MenuAction::Radio,
            SURAH_LABEL => MenuAction::Surah,
            NOTIFICATIONS_LABEL => MenuAction::Notifications,
            HISN_LABEL => MenuAction::HisnAlMuslim,
            CONTACT_LABEL => MenuAction::ContactDeveloper,
            BACK_LABEL => MenuAction::Back,
            other => MenuAction::City(City::from_label(other)?),
        };
        Some(action)
    }

    /// Short name for logs.
    pub fn name(&self) -> String {
        match self {
            MenuAction::PrayerTimes => "menu_prayer_times".to_string(),
            MenuAction::Azkar => "menu_azkar".to_string(),
            MenuAction::Radio => "menu_radio".to_string(),
            MenuAction::Surah => "menu_surah".to_string(),
            MenuAction::Notifications => "menu_notifications".to_string(),
            MenuAction::HisnAlMuslim => "menu_hisn".to_string(),
            MenuAction::ContactDeveloper => "menu_contact".to_string(),
            MenuAction::Back => "menu_back".to_string(),
            MenuAction::City(city) => format!("menu_city:{city}"),
        }
    }
}

const PRAYER_PREFIX: &str = "prayer:";
const NOTIFY_PREFIX: &str = "notify:";
const DUA_PREFIX: &str = "dua:";
const NOTIFY_OFF: &str = "notify:off";
const CONTACT: &str = "contact";

/// An inline keyboard button, carried in callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    PrayerTimes(City),
    EnableNotifications(City),
    DisableNotifications,
    Dua(DuaTag),
    ContactDeveloper,
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<CallbackAction> {
        let data = data.trim();
        if data == NOTIFY_OFF {
            return Some(CallbackAction::DisableNotifications);
        }
        if data == CONTACT {
            return Some(CallbackAction::ContactDeveloper);
        }
        if let Some(key) = data.strip_prefix(PRAYER_PREFIX) {
            return key.parse().ok().map(CallbackAction::PrayerTimes);
        }
        if let Some(key) = data.strip_prefix(NOTIFY_PREFIX) {
            return key.parse().ok().map(CallbackAction::EnableNotifications);
        }
        if let Some(tag) = data.strip_prefix(DUA_PREFIX) {
            return DuaTag::from_tag(tag).map(CallbackAction::Dua);
        }
        None
    }

    pub fn to_data(&self) -> String {
        match self {
            CallbackAction::PrayerTimes(city) => format!("{PRAYER_PREFIX}{}", city.key()),
            CallbackAction::EnableNotifications(city) => format!("{NOTIFY_PREFIX}{}", city.key()),
            CallbackAction::DisableNotifications => NOTIFY_OFF.to_string(),
            CallbackAction::Dua(dua) => format!("{DUA_PREFIX}{}", dua.tag()),
            CallbackAction::ContactDeveloper => CONTACT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_decode_to_their_action() {
        let actions = [
            MenuAction::PrayerTimes,
            MenuAction::Azkar,
            MenuAction::Radio,
            MenuAction::Surah,
            MenuAction::Notifications,
            MenuAction::HisnAlMuslim,
            MenuAction::ContactDeveloper,
            MenuAction::Back,
            MenuAction::City(City::Madinah),
        ];
        for action in actions {
            assert_eq!(MenuAction::from_text(action.label()), Some(action));
        }
    }

    #[test]
    fn test_menu_ignores_free_text() {
        assert_eq!(MenuAction::from_text("السلام عليكم"), None);
        assert_eq!(MenuAction::from_text("12"), None);
        assert_eq!(MenuAction::from_text(""), None);
    }

    #[test]
    fn test_callback_data_decoding() {
        assert_eq!(
            CallbackAction::parse("notify:riyadh"),
            Some(CallbackAction::EnableNotifications(City::Riyadh))
        );
        assert_eq!(CallbackAction::parse("notify:off"), Some(CallbackAction::DisableNotifications));
        assert_eq!(
            CallbackAction::parse("prayer:makkah"),
            Some(CallbackAction::PrayerTimes(City::Makkah))
        );
        assert_eq!(CallbackAction::parse("dua:sleep"), Some(CallbackAction::Dua(DuaTag::Sleep)));
        assert_eq!(CallbackAction::parse("contact"), Some(CallbackAction::ContactDeveloper));
    }

    #[test]
    fn test_callback_data_rejects_unknown_values() {
        assert_eq!(CallbackAction::parse("notify:cairo"), None);
        assert_eq!(CallbackAction::parse("dua:"), None);
        assert_eq!(CallbackAction::parse("session:1:yes"), None);
        assert_eq!(CallbackAction::parse(""), None);
    }

    #[test]
    fn test_callback_data_fits_telegram_limit() {
        let mut actions = vec![CallbackAction::DisableNotifications, CallbackAction::ContactDeveloper];
        for city in City::ALL {
            actions.push(CallbackAction::PrayerTimes(city));
            actions.push(CallbackAction::EnableNotifications(city));
        }
        for dua in DuaTag::ALL {
            actions.push(CallbackAction::Dua(dua));
        }
        for action in actions {
            let data = action.to_data();
            assert!(data.len() <= 64, "{data} exceeds 64 bytes");
            assert_eq!(CallbackAction::parse(&data), Some(action));
        }
    }
}
