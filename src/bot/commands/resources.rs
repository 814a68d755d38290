use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::bot::context::BotContext;
use crate::utils::feedback::CommandFeedback;

pub async fn handle_hisn_pdf(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let path = ctx.hisn_pdf();
    if !path.is_file() {
        tracing::warn!("Hisn al-Muslim document missing at {}", path.display());
        CommandFeedback::new(bot.clone(), chat_id)
            .info("كتاب حصن المسلم غير متوفر حالياً")
            .await?;
        return Ok(());
    }

    bot.send_document(chat_id, InputFile::file(path))
        .caption("📚 حصن المسلم من أذكار الكتاب والسنة")
        .await?;
    Ok(())
}

pub async fn handle_contact(bot: &Bot, chat_id: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    bot.send_message(
        chat_id,
        format!("📞 للتواصل مع المطور: {}", ctx.developer_contact),
    )
    .await?;
    Ok(())
}
