//! Stock Discord commands - receiving and issuing stock, the session log, and the summary.
//!
//! Quantities are taken as text and validated before anything is sent, so a bad value
//! such as "-3" or "2.5" is rejected with a message instead of a Discord parameter error.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, format, handlers::autocomplete},
        core::{ProductScope, ProductView, StockOperation, product, summarize},
        errors::Result,
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Parent command for stock movements.
    #[poise::command(
        slash_command,
        subcommands("stock_add", "stock_subtract", "stock_recent")
    )]
    pub async fn stock(ctx: Context<'_>) -> Result<()> {
        let help_text = "Stock command. Available subcommands:\n\
            `/stock add` - Receive stock for a product\n\
            `/stock subtract` - Issue stock from a product\n\
            `/stock recent` - Show movements made since the bot started";

        ctx.say(help_text).await?;
        Ok(())
    }

    async fn apply(
        ctx: Context<'_>,
        product: &str,
        quantity: &str,
        operation: StockOperation,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let mut view =
            ProductView::load(data.api(), ProductScope::AllProducts, data.low_threshold()).await?;
        let target = product::resolve_product(view.products(), product)?;
        let (id, name) = (target.id.clone(), target.name.clone());

        let adjustment = view
            .adjust_stock(data.api(), &id, quantity, operation)
            .await?;
        data.recent.write().await.record(&name, &adjustment);
        info!(
            "{} {} x {} by {}",
            adjustment.movement,
            adjustment.value,
            name,
            ctx.author().name
        );

        let verb = match operation {
            StockOperation::Add => "Added",
            StockOperation::Subtract => "Removed",
        };
        let mut reply = format!("✅ {verb} **{}** units of **{name}**.", adjustment.value);
        if view.is_stale() {
            reply.push('\n');
            reply.push_str(format::STALE_NOTICE);
        } else if let Some(current) = product::find_product(view.products(), &id) {
            reply.push_str(&format!(" Quantity is now **{}**.", current.quantity));
        }
        ctx.say(reply).await?;
        Ok(())
    }

    /// Receives stock for a product.
    #[poise::command(slash_command, rename = "add")]
    pub async fn stock_add(
        ctx: Context<'_>,
        #[description = "Product"]
        #[autocomplete = "autocomplete::autocomplete_product"]
        product: String,
        #[description = "Units to add (whole number greater than 0)"] quantity: String,
    ) -> Result<()> {
        apply(ctx, &product, &quantity, StockOperation::Add).await
    }

    /// Issues stock from a product. Cannot take more than is on hand.
    #[poise::command(slash_command, rename = "subtract")]
    pub async fn stock_subtract(
        ctx: Context<'_>,
        #[description = "Product"]
        #[autocomplete = "autocomplete::autocomplete_product"]
        product: String,
        #[description = "Units to remove (whole number greater than 0)"] quantity: String,
    ) -> Result<()> {
        apply(ctx, &product, &quantity, StockOperation::Subtract).await
    }

    /// Shows stock movements made through the bot since it started, newest first.
    #[poise::command(slash_command, rename = "recent")]
    pub async fn stock_recent(ctx: Context<'_>) -> Result<()> {
        let lines: Vec<String> = ctx
            .data()
            .recent
            .read()
            .await
            .iter()
            .map(format::recent_line)
            .collect();

        if lines.is_empty() {
            ctx.say("No stock movements recorded yet.").await?;
            return Ok(());
        }

        let embed = serenity::CreateEmbed::default()
            .title("🕒 Recent Stock Movements")
            .description(lines.join("\n"))
            .color(format::LIST_COLOR);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows totals, stock buckets and a per-category breakdown of all products.
    #[poise::command(slash_command)]
    pub async fn summary(ctx: Context<'_>) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let products = product::list_products(data.api()).await?;
        let summary = summarize(&products, data.low_threshold());

        let embed = serenity::CreateEmbed::default()
            .title("📊 Inventory Summary")
            .description(format::summary_lines(&summary).join("\n"))
            .color(format::LIST_COLOR)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "Low stock means {} units or fewer",
                data.low_threshold()
            )));
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
