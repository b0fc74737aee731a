// ABOUTME: In-memory personal food database with CRUD and ranked search
// ABOUTME: Prefix matches rank above substring matches; brand names count too
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 macrolog contributors

//! Personal food catalog.
//!
//! Holds the user's food database in memory and answers ranked,
//! case-insensitive search queries. Persistence is a collaborator's concern;
//! this type only owns the filtering and mutation logic.

use crate::errors::{AppError, AppResult};
use crate::models::Food;
use tracing::debug;
use uuid::Uuid;

/// How well a food matched a search query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    /// Query is a prefix of the food name
    NamePrefix,
    /// Query appears inside the food name
    NameSubstring,
    /// Query matched the brand only
    Brand,
}

/// In-memory personal food database
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<Food>,
}

impl FoodCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of foods in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Add a food to the catalog
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceAlreadyExists` if a food with the same id
    /// is already present.
    pub fn add(&mut self, food: Food) -> AppResult<()> {
        if self.foods.iter().any(|f| f.id == food.id) {
            return Err(AppError::already_exists(format!(
                "food {} already exists",
                food.id
            )));
        }
        debug!(food_id = %food.id, name = %food.name, "adding food to catalog");
        self.foods.push(food);
        Ok(())
    }

    /// Look up a food by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Replace an existing food, matched by id
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if no food with that id exists.
    pub fn update(&mut self, food: Food) -> AppResult<()> {
        let Some(slot) = self.foods.iter_mut().find(|f| f.id == food.id) else {
            return Err(AppError::not_found(format!("food {} not found", food.id)));
        };
        debug!(food_id = %food.id, "updating catalog food");
        *slot = food;
        Ok(())
    }

    /// Remove a food by id, returning it
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if no food with that id exists.
    pub fn remove(&mut self, id: Uuid) -> AppResult<Food> {
        let Some(index) = self.foods.iter().position(|f| f.id == id) else {
            return Err(AppError::not_found(format!("food {id} not found")));
        };
        debug!(food_id = %id, "removing food from catalog");
        Ok(self.foods.remove(index))
    }

    /// All foods, alphabetical by name
    #[must_use]
    pub fn list(&self) -> Vec<&Food> {
        let mut foods: Vec<&Food> = self.foods.iter().collect();
        foods.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        foods
    }

    /// Ranked, case-insensitive search over names and brands.
    ///
    /// Name-prefix matches rank above name-substring matches, which rank
    /// above brand-only matches; ties break alphabetically. An empty or
    /// whitespace query returns the whole catalog alphabetically.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Food> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list();
        }

        let mut matches: Vec<(MatchRank, &Food)> = self
            .foods
            .iter()
            .filter_map(|food| Self::rank(food, &query).map(|rank| (rank, food)))
            .collect();
        matches.sort_by(|(rank_a, a), (rank_b, b)| {
            rank_a
                .cmp(rank_b)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        matches.into_iter().map(|(_, food)| food).collect()
    }

    fn rank(food: &Food, query: &str) -> Option<MatchRank> {
        let name = food.name.to_lowercase();
        if name.starts_with(query) {
            return Some(MatchRank::NamePrefix);
        }
        if name.contains(query) {
            return Some(MatchRank::NameSubstring);
        }
        if food
            .brand
            .as_ref()
            .is_some_and(|b| b.to_lowercase().contains(query))
        {
            return Some(MatchRank::Brand);
        }
        None
    }
}
