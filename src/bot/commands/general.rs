//! General Discord commands - ping and help.
//! These commands don't touch the inventory backend.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = "**Godown Buddy Help**\n\
        Here is a summary of all available commands.\n\n\
        **Browsing**\n\
        • `/products [search] [category] [color] [size] [stock]` - Lists products with optional filters.\n\
        • `/godowns [search]` - Lists godowns.\n\
        • `/godown <id> [search] [category] [stock]` - Lists the products in one godown.\n\
        • `/transactions <product>` - Shows a product's stock movements.\n\
        • `/summary` - Shows stock totals and a category breakdown.\n\n\
        **Stock**\n\
        • `/stock add <product> <quantity>` - Receives stock.\n\
        • `/stock subtract <product> <quantity>` - Issues stock.\n\
        • `/stock recent` - Movements made since the bot started.\n\n\
        **Management**\n\
        • `/godown_add <name> [address]` - Creates a godown.\n\
        • `/product_add <godown> <name> <category> [size] [color] [quantity]` - Adds a product.\n\
        • `/product_edit <product> [name] [category] [size] [color]` - Edits a product.\n\
        • `/product_delete <product> <confirm>` - Deletes a product.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
