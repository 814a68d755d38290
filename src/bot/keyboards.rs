use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::bot::actions::{CallbackAction, MenuAction};
use crate::catalog::{City, DuaTag};

fn reply_row(actions: &[MenuAction]) -> Vec<KeyboardButton> {
    actions.iter().map(|a| KeyboardButton::new(a.label())).collect()
}

fn callback_button(text: impl Into<String>, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.to_data())
}

pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        reply_row(&[MenuAction::PrayerTimes, MenuAction::Azkar]),
        reply_row(&[MenuAction::Radio, MenuAction::Surah]),
        reply_row(&[MenuAction::Notifications, MenuAction::HisnAlMuslim]),
        reply_row(&[MenuAction::ContactDeveloper]),
    ])
    .resize_keyboard(true)
}

pub fn city_menu() -> KeyboardMarkup {
    let cities: Vec<MenuAction> = City::ALL.into_iter().map(MenuAction::City).collect();
    let mut rows: Vec<Vec<KeyboardButton>> = cities.chunks(2).map(reply_row).collect();
    rows.push(reply_row(&[MenuAction::Back]));
    KeyboardMarkup::new(rows).resize_keyboard(true)
}

/// Shown under a prayer-time reply.
pub fn prayer_times_actions(city: City) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![callback_button(
        "🔔 تفعيل التنبيهات",
        CallbackAction::EnableNotifications(city),
    )]])
}

/// City picker for reminders; the current city, if any, is ticked.
pub fn notification_menu(current: Option<City>) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = City::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|city| {
                    let text = if current == Some(*city) {
                        format!("✅ {}", city.label())
                    } else {
                        city.label().to_string()
                    };
                    callback_button(text, CallbackAction::EnableNotifications(*city))
                })
                .collect()
        })
        .collect();

    rows.push(vec![callback_button("🔕 إيقاف التنبيهات", CallbackAction::DisableNotifications)]);
    InlineKeyboardMarkup::new(rows)
}

pub fn dua_menu() -> InlineKeyboardMarkup {
    let rows = DuaTag::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|dua| callback_button(dua.label(), CallbackAction::Dua(*dua)))
                .collect()
        })
        .collect::<Vec<Vec<_>>>();
    InlineKeyboardMarkup::new(rows)
}

pub fn contact_button() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![callback_button(
        "📞 تواصل مع المطور",
        CallbackAction::ContactDeveloper,
    )]])
}
