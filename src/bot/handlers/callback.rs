use teloxide::prelude::*;

use crate::bot::actions::CallbackAction;
use crate::bot::commands::{azkar, notifications, prayer, resources};
use crate::bot::context::BotContext;
use crate::bot::handlers::HandlerResult;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    ctx: BotContext,
) -> HandlerResult {
    let username = q.from.username.as_deref().unwrap_or("unknown");
    // Private chats share the user's id, so fall back to it for inline messages.
    let chat_id = q
        .message
        .as_ref()
        .map(|m| m.chat.id)
        .unwrap_or(ChatId(q.from.id.0 as i64));

    let Some(action) = q.data.as_deref().and_then(CallbackAction::parse) else {
        tracing::warn!(
            "Unrecognised callback data {:?} from {} ({}) in chat {}",
            q.data, username, q.from.id.0, chat_id.0
        );
        bot.answer_callback_query(q.id).text("❌ خيار غير معروف").await?;
        return Ok(());
    };

    tracing::info!(
        "Callback received: {:?} from user {} ({}) in chat {}",
        action, username, q.from.id.0, chat_id.0
    );

    let ack = match action {
        CallbackAction::EnableNotifications(_) => "🔔",
        CallbackAction::DisableNotifications => "🔕",
        _ => "⏳",
    };
    bot.answer_callback_query(q.id.clone()).text(ack).await?;

    match action {
        CallbackAction::PrayerTimes(city) => prayer::handle_prayer_times(&bot, chat_id, city, &ctx).await?,
        CallbackAction::EnableNotifications(city) => notifications::handle_enable(&bot, chat_id, city, &ctx).await?,
        CallbackAction::DisableNotifications => notifications::handle_disable(&bot, chat_id, &ctx).await?,
        CallbackAction::Dua(dua) => azkar::handle_dua(&bot, chat_id, dua, &ctx).await?,
        CallbackAction::ContactDeveloper => resources::handle_contact(&bot, chat_id, &ctx).await?,
    }

    Ok(())
}
