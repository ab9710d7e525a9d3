//! Godown Discord commands - listing godowns, opening one, and creating new ones.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            Context,
            commands::product::{StockChoice, criteria_from_options},
            format::{self, MAX_EMBED_FIELDS},
            handlers::autocomplete,
        },
        core::{ProductScope, ProductView, filter_godowns, godown},
        errors::Result,
    };
    use poise::serenity_prelude as serenity;

    /// Lists godowns, optionally searching by name or address.
    #[poise::command(slash_command)]
    pub async fn godowns(
        ctx: Context<'_>,
        #[description = "Search by name or address"] search: Option<String>,
    ) -> Result<()> {
        ctx.defer().await?;
        let all = godown::list_godowns(ctx.data().api()).await?;
        let matching = filter_godowns(&all, search.as_deref().unwrap_or_default());

        let fields: Vec<(String, String, bool)> = matching
            .iter()
            .take(MAX_EMBED_FIELDS)
            .map(|g| {
                let (name, value) = format::godown_field(g);
                (name, value, true)
            })
            .collect();

        let mut embed = serenity::CreateEmbed::default()
            .title("🏭 Godowns")
            .color(format::LIST_COLOR)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} of {} godowns",
                matching.len(),
                all.len()
            )));
        if fields.is_empty() {
            embed = embed.description("No godowns found.");
        } else {
            embed = embed.fields(fields);
        }

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Opens one godown and lists its products, optionally filtered.
    #[poise::command(slash_command)]
    pub async fn godown(
        ctx: Context<'_>,
        #[description = "Godown"]
        #[autocomplete = "autocomplete::autocomplete_godown"]
        id: String,
        #[description = "Search by name or category"] search: Option<String>,
        #[description = "Only this category"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "Stock status"] stock: Option<StockChoice>,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let mut view =
            ProductView::load(data.api(), ProductScope::Godown(id), data.low_threshold()).await?;
        view.set_criteria(criteria_from_options(
            search,
            category.as_deref(),
            None,
            None,
            stock,
        ));

        let title = match view.godown() {
            Some(g) => match &g.address {
                Some(address) => format!("🏭 {} - {address}", g.name),
                None => format!("🏭 {}", g.name),
            },
            None => "🏭 Godown".to_string(),
        };
        let embed = format::product_list_embed(&title, &view);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Creates a new godown.
    #[poise::command(slash_command)]
    pub async fn godown_add(
        ctx: Context<'_>,
        #[description = "Godown name"] name: String,
        #[description = "Address"] address: Option<String>,
    ) -> Result<()> {
        let created = godown::create_godown(ctx.data().api(), &name, address.as_deref()).await?;
        ctx.say(format!("✅ Godown **{}** created.", created.name))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
