//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions are drawn from the backend on every keystroke, so they always reflect the
//! current inventory. A failed request is logged and yields no suggestions.

use crate::{
    bot::{BotData, format},
    core::{filter, product},
    entities::Product,
    errors::Error,
};
use poise::serenity_prelude as serenity;
use tracing::warn;

/// Discord autocomplete limit.
const MAX_SUGGESTIONS: usize = 25;

fn matches_partial(value: &str, partial: &str) -> bool {
    value.to_lowercase().contains(&partial.trim().to_lowercase())
}

fn narrow(values: Vec<String>, partial: &str) -> Vec<String> {
    values
        .into_iter()
        .filter(|value| matches_partial(value, partial))
        .take(MAX_SUGGESTIONS)
        .collect()
}

async fn load_products(ctx: poise::Context<'_, BotData, Error>) -> Option<Vec<Product>> {
    product::list_products(ctx.data().api())
        .await
        .inspect_err(|e| warn!("Autocomplete could not load products: {}", e))
        .ok()
}

/// Suggests products by name, size or color. The submitted value is the product id.
pub async fn autocomplete_product(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    let Some(products) = load_products(ctx).await else {
        return Vec::new();
    };

    products
        .iter()
        .filter(|p| {
            matches_partial(&p.name, partial)
                || p.size.as_deref().is_some_and(|s| matches_partial(s, partial))
                || p.color.as_deref().is_some_and(|c| matches_partial(c, partial))
        })
        .take(MAX_SUGGESTIONS)
        .map(|p| serenity::AutocompleteChoice::new(format::product_choice_label(p), p.id.clone()))
        .collect()
}

/// Suggests godowns by name or address. The submitted value is the godown id.
pub async fn autocomplete_godown(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    let godowns = match ctx.data().api().list_godowns().await {
        Ok(godowns) => godowns,
        Err(e) => {
            warn!("Autocomplete could not load godowns: {}", e);
            return Vec::new();
        }
    };

    filter::filter_godowns(&godowns, partial)
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|g| {
            let label = match &g.address {
                Some(address) => format!("{} ({address})", g.name),
                None => g.name.clone(),
            };
            serenity::AutocompleteChoice::new(format::truncate(&label, format::MAX_CHOICE_LABEL), g.id)
        })
        .collect()
}

/// Suggests categories: the configured catalog first, then any others already in use.
pub async fn autocomplete_category(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let mut categories = ctx.data().settings.catalog.categories.clone();
    if let Some(products) = load_products(ctx).await {
        for category in filter::categories(&products) {
            if !categories.iter().any(|c| c.eq_ignore_ascii_case(&category)) {
                categories.push(category);
            }
        }
    }
    narrow(categories, partial)
}

/// Suggests colors already in use.
pub async fn autocomplete_color(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    load_products(ctx)
        .await
        .map(|products| narrow(filter::colors(&products), partial))
        .unwrap_or_default()
}

/// Suggests sizes already in use.
pub async fn autocomplete_size(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    load_products(ctx)
        .await
        .map(|products| narrow(filter::sizes(&products), partial))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_is_case_insensitive_and_capped() {
        let values = vec!["PVC Pipe".to_string(), "Tank".to_string(), "pipe fitting".to_string()];
        assert_eq!(narrow(values, "PIPE"), vec!["PVC Pipe", "pipe fitting"]);

        let many: Vec<String> = (0..40).map(|i| format!("Item {i}")).collect();
        assert_eq!(narrow(many, "").len(), MAX_SUGGESTIONS);
    }
}
