use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};

use crate::bot::context::BotContext;
use crate::bot::keyboards::{city_menu, prayer_times_actions};
use crate::catalog::City;
use crate::services::proxy::prayer_times_message;
use crate::utils::feedback::CommandFeedback;

/// Telegram's caption limit for photos.
const CAPTION_LIMIT: usize = 1024;

pub async fn handle_city_menu(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, "📍 اختر المدينة:")
        .reply_markup(city_menu())
        .await?;
    Ok(())
}

/// `/prayer <city>`: an empty argument opens the city menu.
pub async fn handle_prayer_command(
    bot: &Bot,
    chat_id: ChatId,
    city: &str,
    ctx: &BotContext,
) -> ResponseResult<()> {
    if city.trim().is_empty() {
        return handle_city_menu(bot, chat_id).await;
    }

    match city.parse::<City>() {
        Ok(city) => handle_prayer_times(bot, chat_id, city, ctx).await,
        Err(_) => {
            let known: Vec<&str> = City::ALL.iter().map(|c| c.key()).collect();
            CommandFeedback::new(bot.clone(), chat_id)
                .warning(&format!("مدينة غير معروفة. المدن المتاحة: {}", known.join(", ")))
                .await?;
            Ok(())
        }
    }
}

/// Sends the city's prayer times, over the city picture when one is bundled.
pub async fn handle_prayer_times(
    bot: &Bot,
    chat_id: ChatId,
    city: City,
    ctx: &BotContext,
) -> ResponseResult<()> {
    let text = match prayer_times_message(ctx.content.as_ref(), city).await {
        Ok(text) => text,
        Err(error_text) => {
            bot.send_message(chat_id, error_text).await?;
            return Ok(());
        }
    };

    let image = ctx.city_image(city);
    if image.is_file() && text.chars().count() <= CAPTION_LIMIT {
        bot.send_photo(chat_id, InputFile::file(image))
            .caption(text)
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(prayer_times_actions(city))
            .await?;
    } else {
        bot.send_message(chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .reply_markup(prayer_times_actions(city))
            .await?;
    }
    Ok(())
}
