//! Text formatting for bot replies.
//!
//! Discord limits embeds to 25 fields and choice labels to 100 characters, so listings are
//! capped here and labels are shortened before they are sent.

use crate::{
    core::{FilterCriteria, ProductView, RecentMovement, Selection, StockFilter, StockStatus, report},
    entities::{Godown, Movement, Product, Transaction},
};
use poise::serenity_prelude as serenity;

/// Accent color of listing embeds.
pub const LIST_COLOR: u32 = 0x0058_65F2;

/// Maximum number of fields in one embed.
pub const MAX_EMBED_FIELDS: usize = 25;

/// Maximum length of an autocomplete choice label.
pub const MAX_CHOICE_LABEL: usize = 100;

/// Maximum length of an embed field name.
pub const MAX_FIELD_NAME: usize = 256;

/// Appended to a success reply when the change was saved but the reload after it failed.
pub const STALE_NOTICE: &str =
    "⚠️ The change was saved, but the latest inventory could not be loaded. Check the list before retrying.";

/// Shortens `text` to at most `max` characters, marking the cut with an ellipsis.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Autocomplete label for a product: name, size and color, then quantity.
#[must_use]
pub fn product_choice_label(product: &Product) -> String {
    let mut label = product.name.clone();
    for part in [&product.size, &product.color].into_iter().flatten() {
        label.push_str(" — ");
        label.push_str(part);
    }
    label.push_str(&format!(" ({} in stock)", product.quantity));
    truncate(&label, MAX_CHOICE_LABEL)
}

/// Embed field (title, body) describing one product.
#[must_use]
pub fn product_field(product: &Product, low_threshold: u64) -> (String, String) {
    let status = StockStatus::classify(product.quantity, low_threshold);
    let title = truncate(
        &format!("{} {}", status.marker(), product.name),
        MAX_FIELD_NAME,
    );
    let body = format!(
        "{} • {}\nColor: {}\nQty **{}** ({}) • `{}`",
        product.category.as_deref().unwrap_or("-"),
        product.size.as_deref().unwrap_or("-"),
        product.color.as_deref().unwrap_or("-"),
        product.quantity,
        status.label(),
        product.id
    );
    (title, body)
}

/// Embed field (title, body) describing one godown.
#[must_use]
pub fn godown_field(godown: &Godown) -> (String, String) {
    let address = godown.address.as_deref().unwrap_or("No address");
    (
        truncate(&format!("🏭 {}", godown.name), MAX_FIELD_NAME),
        format!("{address}\n`{}`", godown.id),
    )
}

fn describe_selection(label: &str, selection: &Selection, parts: &mut Vec<String>) {
    if let Selection::Only(value) = selection {
        parts.push(format!("{label}: {value}"));
    }
}

/// One-line description of the active criteria, or `None` when nothing is filtered.
#[must_use]
pub fn describe_criteria(criteria: &FilterCriteria) -> Option<String> {
    let mut parts = Vec::new();
    let search = criteria.search_text.trim();
    if !search.is_empty() {
        parts.push(format!("search: \"{search}\""));
    }
    describe_selection("category", &criteria.category, &mut parts);
    describe_selection("color", &criteria.color, &mut parts);
    describe_selection("size", &criteria.size, &mut parts);
    match criteria.stock_status {
        StockFilter::All => {}
        StockFilter::In => parts.push("stock: in".to_string()),
        StockFilter::Low => parts.push("stock: low".to_string()),
        StockFilter::Out => parts.push("stock: out".to_string()),
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

/// Footer for a filtered listing: how many are shown out of how many loaded.
#[must_use]
pub fn listing_footer(shown: usize, matched: usize, loaded: usize) -> String {
    if shown < matched {
        format!("Showing {shown} of {matched} matching ({loaded} loaded)")
    } else {
        format!("{matched} of {loaded} products")
    }
}

const fn movement_heading(movement: Movement) -> &'static str {
    match movement {
        Movement::Added => "📥 Stock In",
        Movement::Subtracted => "📤 Stock Out",
    }
}

/// One line of a product's transaction log.
#[must_use]
pub fn transaction_line(transaction: &Transaction) -> String {
    let when = transaction.timestamp.map_or_else(
        || "unknown time".to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    format!(
        "{} **{}** — {}",
        movement_heading(transaction.movement),
        transaction.quantity,
        when
    )
}

/// One line of the session stock log.
#[must_use]
pub fn recent_line(movement: &RecentMovement) -> String {
    format!(
        "{} **{}** × {} — {}",
        movement_heading(movement.movement),
        movement.value,
        movement.product_name,
        movement.at.format("%Y-%m-%d %H:%M UTC")
    )
}

/// Lines of the summary embed.
#[must_use]
pub fn summary_lines(summary: &report::InventorySummary) -> Vec<String> {
    let mut lines = vec![
        format!("**Products:** {}", summary.total_products),
        format!("**Units on hand:** {}", summary.total_units),
        format!(
            "🟢 {} in stock • 🟡 {} low • 🔴 {} out",
            summary.in_stock, summary.low_stock, summary.out_of_stock
        ),
    ];
    if !summary.categories.is_empty() {
        lines.push(String::new());
        lines.extend(
            summary
                .categories
                .iter()
                .map(|c| format!("• {}: {} products, {} units", c.category, c.products, c.units)),
        );
    }
    lines
}

/// Embed listing the visible products of a view, capped at [`MAX_EMBED_FIELDS`].
#[must_use]
pub fn product_list_embed(title: &str, view: &ProductView) -> serenity::CreateEmbed {
    let visible = view.visible();
    let fields: Vec<(String, String, bool)> = visible
        .iter()
        .take(MAX_EMBED_FIELDS)
        .map(|product| {
            let (name, value) = product_field(product, view.low_threshold());
            (name, value, true)
        })
        .collect();

    let mut description = Vec::new();
    if let Some(active) = describe_criteria(view.criteria()) {
        description.push(format!("Filters: {active}"));
    }
    if visible.is_empty() {
        description.push("No products found.".to_string());
    }

    let footer = listing_footer(fields.len(), visible.len(), view.products().len());
    let mut embed = serenity::CreateEmbed::default()
        .title(title)
        .color(LIST_COLOR)
        .fields(fields)
        .footer(serenity::CreateEmbedFooter::new(footer));
    if !description.is_empty() {
        embed = embed.description(description.join("\n"));
    }
    embed
}
