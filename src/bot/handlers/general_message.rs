use teloxide::prelude::*;

use crate::bot::actions::MenuAction;
use crate::bot::commands::{azkar, menu, notifications, prayer, radio, resources, surah};
use crate::bot::context::BotContext;
use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_action_start;
use crate::utils::validation::parse_surah_number;

/// Handles non-command text: reply keyboard buttons and surah numbers.
pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
    ctx: BotContext,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;
    let (user, user_id) = msg
        .from()
        .map(|u| (u.username.clone().unwrap_or_else(|| u.first_name.clone()), u.id.0))
        .unwrap_or_else(|| ("unknown".to_string(), 0));

    if let Some(action) = MenuAction::from_text(text) {
        log_action_start(&action.name(), &user, user_id, chat_id.0, None);
        handle_menu_action(&bot, chat_id, action, &ctx).await?;
        return Ok(());
    }

    if let Some(number) = parse_surah_number(text) {
        log_action_start("surah", &user, user_id, chat_id.0, Some(&number.to_string()));
        surah::handle_surah(&bot, chat_id, number, &ctx).await?;
        return Ok(());
    }

    if text.starts_with('/') {
        let command = text.split_whitespace().next().unwrap_or(text);
        CommandFeedback::new(bot.clone(), chat_id)
            .info(&format!("أمر غير معروف: {command}\nاستخدم /help لعرض الأوامر المتاحة"))
            .await?;
    }
    // Anything else gets no reply.

    Ok(())
}

pub async fn handle_menu_action(
    bot: &Bot,
    chat_id: ChatId,
    action: MenuAction,
    ctx: &BotContext,
) -> ResponseResult<()> {
    match action {
        MenuAction::PrayerTimes => prayer::handle_city_menu(bot, chat_id).await,
        MenuAction::City(city) => prayer::handle_prayer_times(bot, chat_id, city, ctx).await,
        MenuAction::Azkar => azkar::handle_random_zikr(bot, chat_id, ctx).await,
        MenuAction::Radio => radio::handle_radio(bot, chat_id, ctx).await,
        MenuAction::Surah => surah::handle_surah_prompt(bot, chat_id).await,
        MenuAction::Notifications => notifications::handle_notification_menu(bot, chat_id, ctx).await,
        MenuAction::HisnAlMuslim => resources::handle_hisn_pdf(bot, chat_id, ctx).await,
        MenuAction::ContactDeveloper => resources::handle_contact(bot, chat_id, ctx).await,
        MenuAction::Back => menu::handle_back(bot, chat_id).await,
    }
}
