//! Product view - the fetch, store, filter lifecycle behind a product listing.
//!
//! A [`ProductView`] owns the last collection loaded for its scope and the current filter
//! criteria. Mutations go through the view so that each one is followed by a full reload
//! before the list is filtered again. A change the backend accepted is never reported as a
//! failure because the reload after it failed; the view is marked stale instead.

use crate::{
    client::InventoryApi,
    core::{
        filter::{self, FilterCriteria},
        godown, product,
        stock::{self, StockOperation},
    },
    entities::{Godown, NewProduct, Product, ProductDetails, StockAdjustment},
    errors::Result,
};
use tracing::{debug, warn};

/// Which collection a view shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProductScope {
    /// Every product, from `GET /product`
    AllProducts,
    /// The products embedded in one godown, from `GET /godown/{id}`
    Godown(String),
}

/// Loaded products plus the criteria used to display them.
#[derive(Clone, Debug)]
pub struct ProductView {
    scope: ProductScope,
    low_threshold: u64,
    products: Vec<Product>,
    godown: Option<Godown>,
    criteria: FilterCriteria,
    stale: bool,
}

impl ProductView {
    /// Creates an empty view. Call [`ProductView::reload`] to populate it.
    #[must_use]
    pub fn new(scope: ProductScope, low_threshold: u64) -> Self {
        Self {
            scope,
            low_threshold,
            products: Vec::new(),
            godown: None,
            criteria: FilterCriteria::default(),
            stale: false,
        }
    }

    /// Creates a view and loads it.
    pub async fn load(
        api: &dyn InventoryApi,
        scope: ProductScope,
        low_threshold: u64,
    ) -> Result<Self> {
        let mut view = Self::new(scope, low_threshold);
        view.reload(api).await?;
        Ok(view)
    }

    /// Replaces the stored collection with the backend's current state.
    pub async fn reload(&mut self, api: &dyn InventoryApi) -> Result<()> {
        match &self.scope {
            ProductScope::AllProducts => {
                self.products = product::list_products(api).await?;
                self.godown = None;
            }
            ProductScope::Godown(id) => {
                let mut loaded = godown::get_godown(api, id).await?;
                self.products = std::mem::take(&mut loaded.products);
                self.godown = Some(loaded);
            }
        }
        self.stale = false;
        debug!(
            "Reloaded {:?}: {} products",
            self.scope,
            self.products.len()
        );
        Ok(())
    }

    /// Scope this view was created for.
    #[must_use]
    pub const fn scope(&self) -> &ProductScope {
        &self.scope
    }

    /// The godown being shown, without its products, for godown-scoped views.
    #[must_use]
    pub const fn godown(&self) -> Option<&Godown> {
        self.godown.as_ref()
    }

    /// Every loaded product, unfiltered.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// True when the last change was applied but the reload after it failed, so the
    /// loaded products predate that change.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    async fn refresh_after_change(&mut self, api: &dyn InventoryApi) {
        if let Err(e) = self.reload(api).await {
            warn!("Change applied but reloading {:?} failed: {}", self.scope, e);
            self.stale = true;
        }
    }

    /// Low-stock threshold used for classification.
    #[must_use]
    pub const fn low_threshold(&self) -> u64 {
        self.low_threshold
    }

    /// Replaces the criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Clears every criterion.
    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::reset();
    }

    /// Products passing the current criteria, in load order.
    #[must_use]
    pub fn visible(&self) -> Vec<Product> {
        filter::filter_products(&self.products, &self.criteria, self.low_threshold)
    }

    /// Distinct categories of the loaded products, for the filter choices.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.products)
    }

    /// Distinct colors of the loaded products.
    #[must_use]
    pub fn colors(&self) -> Vec<String> {
        filter::colors(&self.products)
    }

    /// Distinct sizes of the loaded products.
    #[must_use]
    pub fn sizes(&self) -> Vec<String> {
        filter::sizes(&self.products)
    }

    /// Adds a product, then reloads. See [`ProductView::is_stale`] for reload failures.
    pub async fn add_product(
        &mut self,
        api: &dyn InventoryApi,
        new_product: NewProduct,
    ) -> Result<NewProduct> {
        let created = product::create_product(api, new_product).await?;
        self.refresh_after_change(api).await;
        Ok(created)
    }

    /// Edits a product's details, then reloads.
    pub async fn update_details(
        &mut self,
        api: &dyn InventoryApi,
        details: ProductDetails,
    ) -> Result<ProductDetails> {
        let updated = product::update_product_details(api, details).await?;
        self.refresh_after_change(api).await;
        Ok(updated)
    }

    /// Validates and applies a stock change to a loaded product, then reloads.
    ///
    /// The product must be in the current collection; its loaded quantity is what the
    /// subtraction is checked against.
    pub async fn adjust_stock(
        &mut self,
        api: &dyn InventoryApi,
        product_id: &str,
        raw_delta: &str,
        operation: StockOperation,
    ) -> Result<StockAdjustment> {
        let target = product::require_product(&self.products, product_id)?;
        let adjustment = stock::adjust_stock(api, target, raw_delta, operation).await?;
        self.refresh_after_change(api).await;
        Ok(adjustment)
    }

    /// Deletes a product, then reloads.
    pub async fn delete_product(&mut self, api: &dyn InventoryApi, product_id: &str) -> Result<()> {
        product::delete_product(api, product_id).await?;
        self.refresh_after_change(api).await;
        Ok(())
    }
}
