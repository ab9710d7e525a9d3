//! Product Discord commands - listing, adding, editing, deleting, and transaction history.
//!
//! Every command loads a fresh product view, works on it, and lets the view reload after
//! a mutation so the reply shows the backend's current state.

use crate::core::{FilterCriteria, Selection, StockFilter};

/// Stock status choices offered by listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum StockChoice {
    /// Every product
    #[name = "All"]
    All,
    /// Above the low-stock threshold
    #[name = "In Stock"]
    In,
    /// At or below the threshold, but not empty
    #[name = "Low Stock"]
    Low,
    /// Zero quantity
    #[name = "Out of Stock"]
    Out,
}

impl From<StockChoice> for StockFilter {
    fn from(choice: StockChoice) -> Self {
        match choice {
            StockChoice::All => Self::All,
            StockChoice::In => Self::In,
            StockChoice::Low => Self::Low,
            StockChoice::Out => Self::Out,
        }
    }
}

/// Builds filter criteria from optional command parameters.
#[must_use]
pub fn criteria_from_options(
    search: Option<String>,
    category: Option<&str>,
    color: Option<&str>,
    size: Option<&str>,
    stock: Option<StockChoice>,
) -> FilterCriteria {
    FilterCriteria {
        search_text: search.unwrap_or_default(),
        category: Selection::parse(category),
        color: Selection::parse(color),
        size: Selection::parse(size),
        stock_status: stock.map_or(StockFilter::All, StockFilter::from),
    }
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{StockChoice, criteria_from_options};
    use crate::{
        bot::{
            Context,
            format::{self, MAX_EMBED_FIELDS},
            handlers::autocomplete,
        },
        core::{ProductScope, ProductView, product},
        entities::{NewProduct, ProductDetails},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    /// Lists every product, optionally filtered.
    ///
    /// Search matches product name or category. Category, color and size must match exactly;
    /// leave them empty (or enter "all") to include everything.
    #[poise::command(slash_command)]
    pub async fn products(
        ctx: Context<'_>,
        #[description = "Search by name or category"] search: Option<String>,
        #[description = "Only this category"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "Only this color"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
        #[description = "Only this size"]
        #[autocomplete = "autocomplete::autocomplete_size"]
        size: Option<String>,
        #[description = "Stock status"] stock: Option<StockChoice>,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let mut view =
            ProductView::load(data.api(), ProductScope::AllProducts, data.low_threshold()).await?;
        view.set_criteria(criteria_from_options(
            search,
            category.as_deref(),
            color.as_deref(),
            size.as_deref(),
            stock,
        ));

        let embed = format::product_list_embed("📦 Products", &view);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows a product's stock movements, newest first.
    #[poise::command(slash_command)]
    pub async fn transactions(
        ctx: Context<'_>,
        #[description = "Product"]
        #[autocomplete = "autocomplete::autocomplete_product"]
        product: String,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let products = product::list_products(data.api()).await?;
        let target = product::resolve_product(&products, &product)?;

        let lines: Vec<String> = target
            .transactions
            .iter()
            .rev()
            .take(MAX_EMBED_FIELDS)
            .map(format::transaction_line)
            .collect();
        let description = if lines.is_empty() {
            "No transactions recorded yet.".to_string()
        } else {
            lines.join("\n")
        };

        let embed = serenity::CreateEmbed::default()
            .title(format!("🧾 Transactions: {}", target.name))
            .description(description)
            .color(format::LIST_COLOR)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "Current quantity: {}",
                target.quantity
            )));
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Adds a new product to a godown.
    ///
    /// Name and category are required. Quantity defaults to 0.
    #[poise::command(slash_command)]
    pub async fn product_add(
        ctx: Context<'_>,
        #[description = "Godown to store the product in"]
        #[autocomplete = "autocomplete::autocomplete_godown"]
        godown: String,
        #[description = "Product name"] name: String,
        #[description = "Category (e.g., Tank, Sink, PVC Pipe)"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: String,
        #[description = "Size (e.g., 1 inch)"] size: Option<String>,
        #[description = "Color"] color: Option<String>,
        #[description = "Opening quantity. Defaults to 0."] quantity: Option<u64>,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let mut view = ProductView::new(ProductScope::Godown(godown.clone()), data.low_threshold());
        let created = view
            .add_product(
                data.api(),
                NewProduct {
                    name,
                    category,
                    size: size.unwrap_or_default(),
                    color: color.unwrap_or_default(),
                    quantity: quantity.unwrap_or(0),
                    godown_id: godown,
                },
            )
            .await?;

        let godown_name = view.godown().map_or("the godown", |g| g.name.as_str());
        let mut reply = format!(
            "✅ Added **{}** ({}) to {godown_name} with quantity **{}**.",
            created.name, created.category, created.quantity
        );
        if view.is_stale() {
            reply.push('\n');
            reply.push_str(format::STALE_NOTICE);
        } else {
            reply.push_str(&format!(
                " The godown now holds {} products.",
                view.products().len()
            ));
        }
        ctx.say(reply).await?;
        Ok(())
    }

    /// Edits a product's name, category, size or color.
    ///
    /// Fields left empty keep their current value.
    #[poise::command(slash_command)]
    pub async fn product_edit(
        ctx: Context<'_>,
        #[description = "Product to edit"]
        #[autocomplete = "autocomplete::autocomplete_product"]
        product: String,
        #[description = "New name"] name: Option<String>,
        #[description = "New category"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "New size"] size: Option<String>,
        #[description = "New color"] color: Option<String>,
    ) -> Result<()> {
        if name.is_none() && category.is_none() && size.is_none() && color.is_none() {
            return Err(Error::validation(
                "Nothing to change. Provide a name, category, size or color.",
            ));
        }

        ctx.defer().await?;
        let data = ctx.data();

        let mut view =
            ProductView::load(data.api(), ProductScope::AllProducts, data.low_threshold()).await?;
        let current = product::resolve_product(view.products(), &product)?;
        let mut details = ProductDetails::from_product(current);
        if let Some(name) = name {
            details.name = name;
        }
        if let Some(category) = category {
            details.category = category;
        }
        if let Some(size) = size {
            details.size = size;
        }
        if let Some(color) = color {
            details.color = color;
        }

        let updated = view.update_details(data.api(), details).await?;
        let mut reply = format!("✅ Product **{}** updated.", updated.name);
        if view.is_stale() {
            reply.push('\n');
            reply.push_str(format::STALE_NOTICE);
        }
        ctx.say(reply).await?;
        Ok(())
    }

    /// Deletes a product. Requires `confirm: True`.
    #[poise::command(slash_command)]
    pub async fn product_delete(
        ctx: Context<'_>,
        #[description = "Product to delete"]
        #[autocomplete = "autocomplete::autocomplete_product"]
        product: String,
        #[description = "Confirm deletion - this cannot be undone"] confirm: bool,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let mut view =
            ProductView::load(data.api(), ProductScope::AllProducts, data.low_threshold()).await?;
        let target = product::resolve_product(view.products(), &product)?;
        let (id, name) = (target.id.clone(), target.name.clone());

        if !confirm {
            ctx.say(format!(
                "⚠️ Are you sure you want to delete **{name}**? Run the command again with `confirm: True`."
            ))
            .await?;
            return Ok(());
        }

        view.delete_product(data.api(), &id).await?;
        let mut reply = format!("🗑️ Product **{name}** deleted.");
        if view.is_stale() {
            reply.push('\n');
            reply.push_str(format::STALE_NOTICE);
        } else {
            reply.push_str(&format!(" {} products remain.", view.products().len()));
        }
        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_from_options() {
        let criteria = criteria_from_options(
            Some("tap".to_string()),
            Some("all"),
            Some("White"),
            None,
            Some(StockChoice::Low),
        );
        assert_eq!(criteria.search_text, "tap");
        assert_eq!(criteria.category, Selection::All);
        assert_eq!(criteria.color, Selection::Only("White".to_string()));
        assert_eq!(criteria.size, Selection::All);
        assert_eq!(criteria.stock_status, StockFilter::Low);
    }

    #[test]
    fn test_no_options_is_default_criteria() {
        assert!(criteria_from_options(None, None, None, None, None).is_default());
    }
}
