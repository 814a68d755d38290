use teloxide::prelude::*;

use crate::bot::commands::{
    azkar, menu, notifications, prayer, radio, reminders, surah, Command,
};
use crate::bot::context::BotContext;
use crate::bot::handlers::HandlerResult;
use crate::utils::logging::log_action_start;

fn command_name(cmd: &Command) -> &'static str {
    match cmd {
        Command::Help => "help",
        Command::Start => "start",
        Command::Prayer { .. } => "prayer",
        Command::Azkar => "azkar",
        Command::Radio => "radio",
        Command::Surah { .. } => "surah",
        Command::Notify => "notify",
        Command::Stop => "stop",
        Command::RemindNow => "remindnow",
    }
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: BotContext,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let (user, user_id) = msg
        .from()
        .map(|u| (u.username.clone().unwrap_or_else(|| u.first_name.clone()), u.id.0))
        .unwrap_or_else(|| ("unknown".to_string(), 0));
    log_action_start(command_name(&cmd), &user, user_id, chat_id.0, None);

    match cmd {
        Command::Help => menu::handle_help(&bot, chat_id).await?,
        Command::Start => menu::handle_start(&bot, chat_id).await?,
        Command::Prayer { city } => prayer::handle_prayer_command(&bot, chat_id, &city, &ctx).await?,
        Command::Azkar => azkar::handle_random_zikr(&bot, chat_id, &ctx).await?,
        Command::Radio => radio::handle_radio(&bot, chat_id, &ctx).await?,
        Command::Surah { number } => surah::handle_surah_command(&bot, chat_id, &number, &ctx).await?,
        Command::Notify => notifications::handle_notification_menu(&bot, chat_id, &ctx).await?,
        Command::Stop => notifications::handle_disable(&bot, chat_id, &ctx).await?,
        Command::RemindNow => reminders::handle_remind_now(&bot, chat_id, &ctx).await?,
    }
    Ok(())
}
