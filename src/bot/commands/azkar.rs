use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::context::BotContext;
use crate::bot::keyboards::dua_menu;
use crate::catalog::DuaTag;
use crate::services::proxy::{random_zikr_message, zikr_message_for};

/// Random zikr, followed by the supplication category picker.
pub async fn handle_random_zikr(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let text = random_zikr_message(ctx.content.as_ref()).await;
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(dua_menu())
        .await?;
    Ok(())
}

pub async fn handle_dua(bot: &Bot, chat_id: ChatId, dua: DuaTag, ctx: &BotContext) -> ResponseResult<()> {
    let text = zikr_message_for(ctx.content.as_ref(), dua).await;
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;
    Ok(())
}
