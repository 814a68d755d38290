use teloxide::prelude::*;

use crate::bot::context::BotContext;
use crate::bot::keyboards::notification_menu;
use crate::catalog::City;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{log_action_error, log_action_success, log_validation_error};
use crate::utils::validation::validate_telegram_chat_id;

const STORE_ERROR: &str = "حدث خطأ أثناء حفظ الإعدادات، حاول مرة أخرى لاحقاً";

/// Shows the reminder city picker along with the chat's current choice.
pub async fn handle_notification_menu(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let current = match ctx.store.get(chat_id.0).await {
        Ok(current) => current,
        Err(e) => {
            log_action_error("notification_menu", chat_id.0, &e.to_string());
            None
        }
    };

    let text = match current {
        Some(city) => format!(
            "🔔 التنبيهات مفعلة لمدينة {}.\nاختر مدينة أخرى أو أوقف التنبيهات:",
            city.display_name()
        ),
        None => "🔔 اختر المدينة لتصلك مواقيت الصلاة كل ساعة:".to_string(),
    };

    bot.send_message(chat_id, text)
        .reply_markup(notification_menu(current))
        .await?;
    Ok(())
}

/// Registers the chat for reminders, replacing any earlier city.
pub async fn handle_enable(bot: &Bot, chat_id: ChatId, city: City, ctx: &BotContext) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot.clone(), chat_id);

    if let Err(e) = validate_telegram_chat_id(chat_id.0) {
        log_validation_error("enable_notifications", &chat_id.0.to_string(), &e.to_string(), chat_id.0);
        feedback.error(STORE_ERROR).await?;
        return Ok(());
    }

    match ctx.store.set(chat_id.0, city).await {
        Ok(()) => {
            log_action_success("enable_notifications", chat_id.0, Some(city.key()));
            feedback
                .success(&format!("تم تفعيل تنبيهات مواقيت الصلاة لمدينة {}", city.display_name()))
                .await?;
        }
        Err(e) => {
            log_action_error("enable_notifications", chat_id.0, &e.to_string());
            feedback.error(STORE_ERROR).await?;
        }
    }
    Ok(())
}

/// Removes the chat's registration; confirming either way.
pub async fn handle_disable(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot.clone(), chat_id);

    match ctx.store.delete(chat_id.0).await {
        Ok(removed) => {
            log_action_success("disable_notifications", chat_id.0, Some(if removed { "removed" } else { "none" }));
            if removed {
                feedback.success("تم إيقاف التنبيهات").await?;
            } else {
                feedback.info("التنبيهات غير مفعلة لهذه المحادثة").await?;
            }
        }
        Err(e) => {
            log_action_error("disable_notifications", chat_id.0, &e.to_string());
            feedback.error(STORE_ERROR).await?;
        }
    }
    Ok(())
}
