use anyhow::Result;
use colored::*;
use localbot_core::Bot;

pub fn execute(bot: &Bot) -> Result<()> {
    println!("{}:", "Execution order".bold());
    for (i, task_name) in bot.plan().iter().enumerate() {
        println!("  {}. {}", i + 1, task_name.cyan());
    }

    Ok(())
}
