//! # Catalog
//!
//! Logic behind dishes.
//!
//! Every operation goes through the same cycle: load the full catalog
//! from storage, work on it in memory, and (for mutations) write the full
//! catalog back. Nothing is cached between calls.
//!
//! ## Id assignment
//!
//! A new dish gets `last.id + 1`, or `1` when the catalog is empty. This
//! is intentionally not max-based: deleting the tail dish frees its id
//! for the next create. After out-of-order deletions this can hand out an
//! id an earlier dish still holds; the rule is kept as-is for fidelity
//! with the stored data this service inherits.
use serde::{Deserialize, Serialize};

use crate::{error::AppError, storage::Storage};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Persisted container. The file holds exactly one of these.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub dishes: Vec<Dish>,
}

impl Catalog {
    fn next_id(&self) -> u32 {
        match self.dishes.last() {
            Some(dish) => dish.id + 1,
            None => 1,
        }
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.dishes.iter().position(|dish| dish.id == id)
    }
}

/// Creation payload. Missing body fields fall back to their empty
/// defaults and are then rejected by the presence check in [`create`],
/// so callers get the validation body rather than a decoder rejection.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct NewDish {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Partial update. A field is applied only when its key was present in
/// the request body; omitted (or null) keys leave the stored value alone.
#[derive(Deserialize, Debug, Default)]
pub struct DishPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl DishPatch {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category.is_none()
    }
}

pub fn create(storage: &dyn Storage, new_dish: NewDish) -> Result<Dish, AppError> {
    if new_dish.name.is_empty() || new_dish.category.is_empty() || new_dish.price == 0.0 {
        return Err(AppError::Validation(
            "Name, price and category are required".into(),
        ));
    }

    let mut catalog = storage.load()?;

    let dish = Dish {
        id: catalog.next_id(),
        name: new_dish.name,
        price: new_dish.price,
        category: new_dish.category,
    };

    catalog.dishes.push(dish.clone());
    storage.save(&catalog)?;

    Ok(dish)
}

pub fn list(storage: &dyn Storage) -> Result<Vec<Dish>, AppError> {
    Ok(storage.load()?.dishes)
}

pub fn get_by_id(storage: &dyn Storage, id: u32) -> Result<Dish, AppError> {
    let catalog = storage.load()?;

    catalog
        .dishes
        .into_iter()
        .find(|dish| dish.id == id)
        .ok_or(AppError::NotFound)
}

pub fn update(storage: &dyn Storage, id: u32, patch: DishPatch) -> Result<Dish, AppError> {
    if patch.is_empty() {
        return Err(AppError::Validation(
            "At least one field (name, price or category) is required to update".into(),
        ));
    }

    let mut catalog = storage.load()?;
    let index = catalog.position(id).ok_or(AppError::NotFound)?;

    let dish = &mut catalog.dishes[index];

    if let Some(name) = patch.name {
        dish.name = name;
    }
    if let Some(price) = patch.price {
        dish.price = price;
    }
    if let Some(category) = patch.category {
        dish.category = category;
    }

    let updated = dish.clone();
    storage.save(&catalog)?;

    Ok(updated)
}

pub fn delete(storage: &dyn Storage, id: u32) -> Result<u32, AppError> {
    let mut catalog = storage.load()?;
    let index = catalog.position(id).ok_or(AppError::NotFound)?;

    catalog.dishes.remove(index);
    storage.save(&catalog)?;

    Ok(id)
}

pub fn search_by_name(storage: &dyn Storage, query: &str) -> Result<Vec<Dish>, AppError> {
    if query.is_empty() {
        return Err(AppError::Validation(
            "Query parameter 'name' is required".into(),
        ));
    }

    let catalog = storage.load()?;
    let query = query.to_lowercase();

    let matches: Vec<Dish> = catalog
        .dishes
        .into_iter()
        .filter(|dish| dish.name.to_lowercase().contains(&query))
        .collect();

    if matches.is_empty() {
        return Err(AppError::EmptySearch);
    }

    Ok(matches)
}
