// ABOUTME: Data models for pregnancy-nutrition recipes consumed by the recommendation engine
// ABOUTME: Defines Recipe and MacroProfile plus caller-facing shape validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BumpBite Nutrition

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Per-serving macronutrient profile for a recipe
///
/// All fields are non-negative by caller contract. Missing fields
/// deserialize to zero rather than failing, so a recipe with partial
/// nutrition data still scores (it simply earns the calorie-fit bonus
/// trivially).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    /// Energy per serving in kcal
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams per serving
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates in grams per serving
    #[serde(default)]
    pub carbs: f64,
    /// Fat in grams per serving
    #[serde(default)]
    pub fat: f64,
}

impl MacroProfile {
    /// Create a profile from the four macro values
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// A recipe as supplied by the storage collaborator
///
/// The engine never creates, mutates, or persists recipes; it only reads
/// them. Tags are free text ("Iron Rich", "Nausea Relief", ...) matched by
/// case-insensitive substring containment, so no canonical vocabulary is
/// enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque unique identifier, exact-matched against exclusion sets
    pub id: String,
    /// Free-text display name
    pub title: String,
    /// Per-serving macros; absent in the source data means all-zero
    #[serde(default)]
    pub macros: MacroProfile,
    /// Ordered free-text pregnancy tags; may be empty
    #[serde(default)]
    pub pregnancy_tags: Vec<String>,
}

impl Recipe {
    /// Create a recipe from its parts
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        macros: MacroProfile,
        pregnancy_tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            macros,
            pregnancy_tags,
        }
    }

    /// Check that this recipe has a usable shape
    ///
    /// The scoring engine itself is total and never calls this; it exists
    /// for callers ingesting recipes from untrusted sources who want an
    /// explicit error instead of zero-normalized scoring.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the id is empty or any
    /// macro field is negative or non-finite.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::invalid_input("recipe id must not be empty"));
        }

        let fields = [
            ("calories", self.macros.calories),
            ("protein", self.macros.protein),
            ("carbs", self.macros.carbs),
            ("fat", self.macros.fat),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::invalid_input(format!(
                    "macro field '{name}' must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
