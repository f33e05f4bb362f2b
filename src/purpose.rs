// ABOUTME: Meal purpose detection inferring coarse nutritional intent from recipe text
// ABOUTME: Defines the MealPurpose enum and its tag/title substring rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BumpBite Nutrition

use crate::models::Recipe;
use serde::{Deserialize, Serialize};

/// Coarse nutritional intent inferred from a recipe's tags and title
///
/// Purposes are derived on the fly during scoring and never persisted.
/// Detection is fuzzy by design: tags are free text, so each rule is a
/// case-insensitive substring test rather than an exact vocabulary match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPurpose {
    /// Settles morning sickness (ginger, bland foods)
    NauseaRelief,
    /// Sustained energy from protein or complex carbs
    Energy,
    /// Dense in pregnancy-critical micronutrients (iron, folate, calcium)
    NutrientDense,
    /// High fluid content (soups, smoothies)
    Hydrating,
}

impl MealPurpose {
    /// Detect all purposes a recipe serves
    ///
    /// Rules are evaluated independently, so a recipe can carry several
    /// purposes. A recipe matching no rule defaults to [`Self::Energy`];
    /// the result is never empty.
    #[must_use]
    pub fn detect(recipe: &Recipe) -> Vec<Self> {
        let title = recipe.title.to_lowercase();
        let tags: Vec<String> = recipe
            .pregnancy_tags
            .iter()
            .map(|tag| tag.to_lowercase())
            .collect();
        let any_tag_contains = |needle: &str| tags.iter().any(|tag| tag.contains(needle));

        let mut purposes = Vec::new();

        if any_tag_contains("nausea") || title.contains("ginger") || title.contains("bland") {
            purposes.push(Self::NauseaRelief);
        }
        if any_tag_contains("energy") || any_tag_contains("protein") {
            purposes.push(Self::Energy);
        }
        if ["iron", "folic", "calcium"]
            .iter()
            .any(|needle| any_tag_contains(needle))
        {
            purposes.push(Self::NutrientDense);
        }
        if any_tag_contains("hydrat") || title.contains("soup") || title.contains("smoothie") {
            purposes.push(Self::Hydrating);
        }

        // Fallback keeps the set non-empty for recipes with no signal
        if purposes.is_empty() {
            purposes.push(Self::Energy);
        }

        purposes
    }
}
