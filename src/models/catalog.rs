use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A dish on the food menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: u32,
}

/// A drink on the drinks menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkItem {
    pub id: String,
    pub name: String,
    pub price: u32,
}

/// Anything that can be looked up by its string identifier
pub trait CatalogItem {
    fn id(&self) -> &str;
}

impl CatalogItem for FoodItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogItem for DrinkItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FoodItem {
    pub fn new(id: &str, name: &str, category: &str, price: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
        }
    }
}

impl DrinkItem {
    pub fn new(id: &str, name: &str, price: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// Both menus, built once at startup and shared read-only for the life of the process.
///
/// There is no mutating API: once wrapped in an `Arc` the collections can be read
/// from any number of request tasks without locking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    drinks: Vec<DrinkItem>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodItem>, drinks: Vec<DrinkItem>) -> Self {
        Self { foods, drinks }
    }

    /// The menu served in production
    pub fn seed() -> Self {
        Self::new(
            vec![
                FoodItem::new("1", "Pork Steak", "Steak", 60),
                FoodItem::new("2", "Caesar Salad", "Salad", 80),
                FoodItem::new("3", "Salmon Steak", "Steak", 150),
            ],
            vec![
                DrinkItem::new("1", "Cola", 20),
                DrinkItem::new("2", "Green Tea", 25),
                DrinkItem::new("3", "Orange Juice", 20),
            ],
        )
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn drinks(&self) -> &[DrinkItem] {
        &self.drinks
    }

    /// Identifiers that occur more than once, as `(collection, id)` pairs in first-repeat order
    pub fn duplicate_ids(&self) -> Vec<(&'static str, String)> {
        let mut duplicates = Vec::new();
        for id in repeated_ids(&self.foods) {
            duplicates.push(("foods", id));
        }
        for id in repeated_ids(&self.drinks) {
            duplicates.push(("drinks", id));
        }
        duplicates
    }
}

fn repeated_ids<T: CatalogItem>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut repeated = Vec::new();
    for item in items {
        let id = item.id();
        if !seen.insert(id) && reported.insert(id) {
            repeated.push(id.to_string());
        }
    }
    repeated
}
