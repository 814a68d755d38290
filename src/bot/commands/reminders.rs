use teloxide::prelude::*;

use crate::bot::context::BotContext;
use crate::services::reminder::DispatchReport;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::log_validation_error;

/// `/remindnow`: runs one reminder tick on demand. Admin chats only.
pub async fn handle_remind_now(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let feedback = CommandFeedback::new(bot.clone(), chat_id);

    if !ctx.is_admin(chat_id.0) {
        log_validation_error("remind_now", &chat_id.0.to_string(), "not an admin chat", chat_id.0);
        feedback.warning("هذا الأمر متاح للمشرفين فقط").await?;
        return Ok(());
    }

    match ctx.dispatcher.dispatch().await {
        Ok(report) => {
            feedback.success(&remind_now_summary(&report)).await?;
        }
        Err(e) => {
            tracing::error!("Manual reminder dispatch failed: {}", e);
            feedback.error("تعذر إرسال التذكيرات، راجع السجلات").await?;
        }
    }
    Ok(())
}

fn remind_now_summary(report: &DispatchReport) -> String {
    format!(
        "تم إرسال التذكيرات: {} محاولة، {} وصلت، {} فشلت",
        report.attempted, report.delivered, report.failed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remind_now_summary_is_arabic() {
        let report = DispatchReport { attempted: 3, delivered: 2, failed: 1 };
        let text = remind_now_summary(&report);

        assert!(text.starts_with("تم إرسال التذكيرات"));
        assert!(text.contains("3 محاولة"));
        assert!(text.contains("2 وصلت"));
        assert!(text.contains("1 فشلت"));
        assert!(!text.is_ascii());
    }
}
