//! Product filter engine - Computes the visible subset of a product list.
//!
//! Everything here is pure: the caller passes the loaded records, the current criteria and
//! the low-stock threshold, and gets back a new vector in the original order. Nothing reads
//! or writes shared state, so filtering can run on every interaction.

use crate::{
    core::stock::StockStatus,
    entities::{Godown, Product},
};
use std::collections::HashSet;
use std::fmt;

/// Sentinel accepted from user input meaning "do not filter on this field".
pub const ALL: &str = "all";

/// Either every value of an attribute, or one exact value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// No restriction
    #[default]
    All,
    /// Exact, case-sensitive match
    Only(String),
}

impl Selection {
    /// Parses user input. `None`, blank and `"all"` (any case) mean [`Selection::All`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value.eq_ignore_ascii_case(ALL) => Self::All,
            Some(value) => Self::Only(value.to_string()),
        }
    }

    /// Whether a record's attribute passes this selection. Absent attributes only pass `All`.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    /// True when this selection restricts nothing.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => f.write_str(value),
        }
    }
}

/// Stock-status restriction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StockFilter {
    /// Any quantity
    #[default]
    All,
    /// Above the low-stock threshold
    In,
    /// Between one and the threshold, inclusive
    Low,
    /// Exactly zero
    Out,
}

impl StockFilter {
    /// Parses `all`, `in`, `low` or `out` (any case). Anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | ALL => Some(Self::All),
            "in" => Some(Self::In),
            "low" => Some(Self::Low),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    /// Whether a product with the given status passes.
    #[must_use]
    pub const fn matches(self, status: StockStatus) -> bool {
        matches!(
            (self, status),
            (Self::All, _)
                | (Self::In, StockStatus::In)
                | (Self::Low, StockStatus::Low)
                | (Self::Out, StockStatus::Out)
        )
    }
}

/// The complete filter state for a product list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name or category; empty matches all
    pub search_text: String,
    /// Category restriction
    pub category: Selection,
    /// Color restriction
    pub color: Selection,
    /// Size restriction
    pub size: Selection,
    /// Stock-status restriction
    pub stock_status: StockFilter,
}

impl FilterCriteria {
    /// Criteria that let everything through.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// True when no criterion is active.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.category.is_all()
            && self.color.is_all()
            && self.size.is_all()
            && self.stock_status == StockFilter::All
    }

    /// Whether a single product passes every active criterion.
    #[must_use]
    pub fn matches(&self, product: &Product, low_threshold: u64) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        let text_match = needle.is_empty()
            || product.name.to_lowercase().contains(&needle)
            || product
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle));

        text_match
            && self.category.matches(product.category.as_deref())
            && self.color.matches(product.color.as_deref())
            && self.size.matches(product.size.as_deref())
            && self
                .stock_status
                .matches(StockStatus::classify(product.quantity, low_threshold))
    }
}

/// Returns the products passing every active criterion, in their original order.
#[must_use]
pub fn filter_products(
    records: &[Product],
    criteria: &FilterCriteria,
    low_threshold: u64,
) -> Vec<Product> {
    records
        .iter()
        .filter(|product| criteria.matches(product, low_threshold))
        .cloned()
        .collect()
}

/// Returns godowns whose name or address contains `query`, ignoring case.
#[must_use]
pub fn filter_godowns(godowns: &[Godown], query: &str) -> Vec<Godown> {
    let needle = query.trim().to_lowercase();
    godowns
        .iter()
        .filter(|godown| {
            needle.is_empty()
                || godown.name.to_lowercase().contains(&needle)
                || godown
                    .address
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .flatten()
        .filter(|value| !value.trim().is_empty() && seen.insert(*value))
        .map(ToString::to_string)
        .collect()
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.category.as_deref()))
}

/// Distinct colors in first-seen order.
#[must_use]
pub fn colors(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.color.as_deref()))
}

/// Distinct sizes in first-seen order.
#[must_use]
pub fn sizes(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.size.as_deref()))
}
