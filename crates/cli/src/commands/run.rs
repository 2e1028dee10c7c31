use anyhow::Result;
use localbot_core::{Bot, Logger};

pub async fn execute(bot: &Bot) -> Result<()> {
    // Task failures are already logged and absorbed; only a broken stdout ends up here
    bot.run(&Logger::stdout())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run bot: {}", e))?;

    Ok(())
}
