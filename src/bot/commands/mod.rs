pub mod azkar;
pub mod menu;
pub mod notifications;
pub mod prayer;
pub mod radio;
pub mod reminders;
pub mod resources;
pub mod surah;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "الأوامر المتاحة:")]
pub enum Command {
    #[command(description = "عرض هذه الرسالة")]
    Help,
    #[command(description = "عرض القائمة الرئيسية")]
    Start,
    #[command(description = "مواقيت الصلاة، مثال: /prayer riyadh")]
    Prayer { city: String },
    #[command(description = "ذكر عشوائي")]
    Azkar,
    #[command(description = "إذاعات القرآن الكريم")]
    Radio,
    #[command(description = "سورة من القرآن، مثال: /surah 1")]
    Surah { number: String },
    #[command(description = "إدارة تنبيهات مواقيت الصلاة")]
    Notify,
    #[command(description = "إيقاف التنبيهات")]
    Stop,
    #[command(description = "off")]
    RemindNow,
}
