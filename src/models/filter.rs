use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Query parameter carrying the identifier filter
pub const ID_QUERY_PARAM: &str = "ID";

/// Optional exact-match filter on an item's identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub id: Option<String>,
}

impl ItemFilter {
    /// Filter that lets every item through
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self::from_id(Some(id.into()))
    }

    /// An empty identifier means "no filter"
    pub fn from_id(id: Option<String>) -> Self {
        Self {
            id: id.filter(|id| !id.is_empty()),
        }
    }

    /// Build a filter from raw query pairs. The first `ID` pair wins and
    /// every other key is ignored.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let id = pairs
            .iter()
            .find(|(key, _)| key == ID_QUERY_PARAM)
            .map(|(_, value)| value.clone());
        Self::from_id(id)
    }

    pub fn is_filtered(&self) -> bool {
        self.id.is_some()
    }

    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        match &self.id {
            Some(id) => item.id() == id,
            None => true,
        }
    }

    /// Matching items in collection order
    pub fn apply<T: CatalogItem + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }
}
