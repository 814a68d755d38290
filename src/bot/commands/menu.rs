use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::bot::keyboards::{contact_button, main_menu};

pub const WELCOME_TEXT: &str = "👋 أهلاً بك في البوت! اختر من الأزرار التالية:";
pub const BACK_TEXT: &str = "🔙 رجعتك للقائمة الرئيسية:";

pub async fn handle_start(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, WELCOME_TEXT)
        .reply_markup(main_menu())
        .await?;
    Ok(())
}

pub async fn handle_back(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, BACK_TEXT)
        .reply_markup(main_menu())
        .await?;
    Ok(())
}

pub async fn handle_help(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, Command::descriptions().to_string())
        .reply_markup(contact_button())
        .await?;
    Ok(())
}
