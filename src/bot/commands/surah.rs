use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::context::BotContext;
use crate::services::proxy::surah_message;
use crate::utils::markdown::{split_message, MESSAGE_LIMIT};
use crate::utils::validation::parse_surah_number;

pub const SURAH_PROMPT: &str = "🔢 أدخل رقم السورة التي تريد قراءتها (مثلاً: 1 للفاتحة، 114 للناس)";

pub async fn handle_surah_prompt(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, SURAH_PROMPT).await?;
    Ok(())
}

/// `/surah <n>`: a missing or non-numeric argument re-prompts.
pub async fn handle_surah_command(
    bot: &Bot,
    chat_id: ChatId,
    argument: &str,
    ctx: &BotContext,
) -> ResponseResult<()> {
    match parse_surah_number(argument) {
        Some(number) => handle_surah(bot, chat_id, number, ctx).await,
        None => handle_surah_prompt(bot, chat_id).await,
    }
}

/// Out-of-range numbers get no reply.
pub async fn handle_surah(bot: &Bot, chat_id: ChatId, number: i64, ctx: &BotContext) -> ResponseResult<()> {
    let Some(text) = surah_message(ctx.content.as_ref(), number).await else {
        return Ok(());
    };

    for chunk in split_message(&text, MESSAGE_LIMIT) {
        bot.send_message(chat_id, chunk)
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
    }
    Ok(())
}
