use std::sync::Arc;
use tracing::instrument;

use crate::models::{DrinkItem, FoodItem, ItemFilter};
use crate::observability::Metrics;
use crate::repositories::CatalogRepository;

/// Read-only queries over the food and drink menus
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    metrics: Option<Arc<Metrics>>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            repository,
            metrics: None,
        }
    }

    /// Create a CatalogService that records a query counter per call
    pub fn new_with_metrics(repository: Arc<dyn CatalogRepository>, metrics: Arc<Metrics>) -> Self {
        Self {
            repository,
            metrics: Some(metrics),
        }
    }

    /// Foods whose identifier matches the filter, or the whole menu when unfiltered
    #[instrument(skip_all, fields(filter_id = ?filter.id))]
    pub fn list_foods(&self, filter: &ItemFilter) -> Vec<FoodItem> {
        let foods = self.repository.find_foods(filter);
        self.record("foods", filter, foods.len());
        foods
    }

    /// Drinks whose identifier matches the filter, or the whole menu when unfiltered
    #[instrument(skip_all, fields(filter_id = ?filter.id))]
    pub fn list_drinks(&self, filter: &ItemFilter) -> Vec<DrinkItem> {
        let drinks = self.repository.find_drinks(filter);
        self.record("drinks", filter, drinks.len());
        drinks
    }

    fn record(&self, collection: &str, filter: &ItemFilter, returned: usize) {
        if let Some(metrics) = &self.metrics {
            metrics.record_catalog_query(collection, filter.is_filtered(), returned);
        }

        if filter.is_filtered() && returned == 0 {
            crate::warn_with_trace!(collection, "No {} matched the requested ID", collection);
        } else {
            crate::info_with_trace!(collection, returned, "Listed {} {}", returned, collection);
        }
    }
}
