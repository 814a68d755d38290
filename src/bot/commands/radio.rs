use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::context::BotContext;
use crate::services::proxy::radio_message;
use crate::utils::markdown::{split_message, MESSAGE_LIMIT};

pub async fn handle_radio(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let text = radio_message(ctx.content.as_ref()).await;
    // The directory lists well over a hundred stations.
    for chunk in split_message(&text, MESSAGE_LIMIT) {
        bot.send_message(chat_id, chunk)
            .parse_mode(ParseMode::MarkdownV2)
            .disable_web_page_preview(true)
            .await?;
    }
    Ok(())
}
