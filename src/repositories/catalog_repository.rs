use std::sync::Arc;
use tracing::{debug, instrument};

use crate::models::{Catalog, DrinkItem, FoodItem, ItemFilter};

/// Read access to the food and drink collections
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// Foods matching the filter, in collection order
    fn find_foods(&self, filter: &ItemFilter) -> Vec<FoodItem>;

    /// Drinks matching the filter, in collection order
    fn find_drinks(&self, filter: &ItemFilter) -> Vec<DrinkItem>;
}

/// Repository over the immutable in-process catalog
pub struct InMemoryCatalogRepository {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalogRepository {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    #[instrument(skip(self), fields(collection = "foods"))]
    fn find_foods(&self, filter: &ItemFilter) -> Vec<FoodItem> {
        let foods = filter.apply(self.catalog.foods());
        debug!(
            scanned = self.catalog.foods().len(),
            matched = foods.len(),
            "Scanned food collection"
        );
        foods
    }

    #[instrument(skip(self), fields(collection = "drinks"))]
    fn find_drinks(&self, filter: &ItemFilter) -> Vec<DrinkItem> {
        let drinks = filter.apply(self.catalog.drinks());
        debug!(
            scanned = self.catalog.drinks().len(),
            matched = drinks.len(),
            "Scanned drink collection"
        );
        drinks
    }
}
