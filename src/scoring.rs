// ABOUTME: Fitness scoring and ranking of recipes against a target eating context
// ABOUTME: Implements the additive keyword/calorie/purpose scoring model and stable ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BumpBite Nutrition

use crate::context::{context_info, ContextSlotInfo, EatingContext};
use crate::models::{MacroProfile, Recipe};
use crate::purpose::MealPurpose;
use std::collections::HashSet;

// Scoring constants carried over verbatim from the production scoring
// model; they are contractual, not tuning parameters.
const TITLE_KEYWORD_BONUS: i32 = 15;
const TAG_KEYWORD_BONUS: i32 = 10;
const CALORIE_FIT_BONUS: i32 = 10;
const CALORIE_OVERSHOOT_PENALTY: i32 = 15;
const CALORIE_OVERSHOOT_FACTOR: f64 = 1.5;
const PURPOSE_ALIGNMENT_BONUS: i32 = 20;
const FIRST_THING_SETTLER_BONUS: i32 = 30;
const FIRST_THING_HEAVY_PENALTY: i32 = 25;
const FIRST_THING_FAT_LIMIT_G: f64 = 15.0;
const FIRST_THING_CALORIE_LIMIT: f64 = 300.0;
const WIND_DOWN_DAIRY_BONUS: i32 = 20;

/// Score a recipe's fitness for an eating context
///
/// The score is an unbounded integer (negative scores are legal) formed by
/// summing independent contributions:
///
/// - +15 per context keyword contained in the lowercased title
/// - +10 per (tag, keyword) containment pair, combinatorial
/// - +10 when calories fit the context ceiling, -15 past 1.5x the ceiling
/// - +20 per detected purpose present in the context's priority set
/// - context-specific overrides for [`EatingContext::FirstThing`] and
///   [`EatingContext::WindDown`]
///
/// Higher is better; the value is meaningful only relative to other
/// recipes scored against the same context.
#[must_use]
pub fn score_recipe_for_context(recipe: &Recipe, context: EatingContext) -> i32 {
    let config = context.config();
    let title = recipe.title.to_lowercase();
    let tags: Vec<String> = recipe
        .pregnancy_tags
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect();

    let mut score = 0;

    for keyword in config.keywords {
        if title.contains(keyword) {
            score += TITLE_KEYWORD_BONUS;
        }
    }

    for tag in &tags {
        for keyword in config.keywords {
            if tag.contains(keyword) {
                score += TAG_KEYWORD_BONUS;
            }
        }
    }

    let ceiling = f64::from(config.max_calories);
    if recipe.macros.calories <= ceiling {
        score += CALORIE_FIT_BONUS;
    } else if recipe.macros.calories > ceiling * CALORIE_OVERSHOOT_FACTOR {
        score -= CALORIE_OVERSHOOT_PENALTY;
    }

    for purpose in MealPurpose::detect(recipe) {
        if config.priority_purposes.contains(&purpose) {
            score += PURPOSE_ALIGNMENT_BONUS;
        }
    }

    score + context_adjustment(&title, recipe.macros, context)
}

/// Context-specific bonus/penalty overrides
///
/// Only the first and last slots of the day carry overrides; both the
/// bonus and the penalty can apply to the same recipe.
fn context_adjustment(title: &str, macros: MacroProfile, context: EatingContext) -> i32 {
    match context {
        EatingContext::FirstThing => {
            let mut adjustment = 0;
            if title.contains("ginger") || title.contains("cracker") {
                adjustment += FIRST_THING_SETTLER_BONUS;
            }
            if macros.fat > FIRST_THING_FAT_LIMIT_G || macros.calories > FIRST_THING_CALORIE_LIMIT {
                adjustment -= FIRST_THING_HEAVY_PENALTY;
            }
            adjustment
        }
        EatingContext::WindDown => {
            if ["milk", "yogurt", "cheese"]
                .iter()
                .any(|word| title.contains(word))
            {
                WIND_DOWN_DAIRY_BONUS
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Rank a recipe pool for a daily meal slot
///
/// Resolves the slot's eating context, drops recipes whose id appears in
/// `exclude_ids`, scores the survivors, and returns them sorted by score
/// descending. The sort is stable, so equal-score recipes keep their
/// relative order from the input pool. Empty pools and fully-excluded
/// pools yield an empty ranking, not an error.
#[must_use]
pub fn rank_for_meal(
    recipes: &[Recipe],
    meal_number: i32,
    exclude_ids: &HashSet<String>,
) -> Vec<Recipe> {
    let context = EatingContext::for_meal_number(meal_number);
    tracing::debug!(
        meal_number,
        ?context,
        pool_size = recipes.len(),
        excluded = exclude_ids.len(),
        "ranking recipe pool"
    );

    let mut scored: Vec<(i32, &Recipe)> = recipes
        .iter()
        .filter(|recipe| !exclude_ids.contains(&recipe.id))
        .map(|recipe| {
            let score = score_recipe_for_context(recipe, context);
            tracing::trace!(recipe_id = %recipe.id, score, "scored recipe");
            (score, recipe)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().map(|(_, recipe)| recipe.clone()).collect()
}

/// Stateless facade exposing the two calls the rest of the system needs
///
/// Mirrors the shape the UI collaborator consumes: one call to rank the
/// pool for the current slot, one call to render the slot's label and
/// description.
#[derive(Debug, Clone, Copy, Default)]
pub struct MealRecommendationEngine;

impl MealRecommendationEngine {
    /// Create the engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Rank a recipe pool for a meal slot; see [`rank_for_meal`]
    #[must_use]
    pub fn rank_for_meal(
        self,
        recipes: &[Recipe],
        meal_number: i32,
        exclude_ids: &HashSet<String>,
    ) -> Vec<Recipe> {
        rank_for_meal(recipes, meal_number, exclude_ids)
    }

    /// Resolve slot display info; see [`context_info`]
    #[must_use]
    pub fn context_info(self, meal_number: i32) -> ContextSlotInfo {
        context_info(meal_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str, tags: &[&str], macros: MacroProfile) -> Recipe {
        Recipe::new(
            id,
            title,
            macros,
            tags.iter().map(|t| (*t).to_owned()).collect(),
        )
    }

    #[test]
    fn test_ginger_tea_scores_high_for_first_thing() {
        let ginger_tea = recipe(
            "r1",
            "Ginger Tea",
            &["Nausea Relief"],
            MacroProfile::new(50.0, 1.0, 10.0, 0.0),
        );

        let score = score_recipe_for_context(&ginger_tea, EatingContext::FirstThing);

        // title "ginger" +15, tag "nausea" +10, calorie fit +10,
        // purpose alignment +20, settler override +30
        assert_eq!(score, 85);
        assert!(score > 60);
    }

    #[test]
    fn test_heavy_dinner_scores_negative_for_first_thing() {
        let salmon = recipe(
            "r2",
            "Grilled Salmon Steak",
            &["Omega-3"],
            MacroProfile::new(650.0, 40.0, 5.0, 30.0),
        );

        let score = score_recipe_for_context(&salmon, EatingContext::FirstThing);

        // overshoot -15, heavy override -25, nothing earned
        assert_eq!(score, -40);
    }

    #[test]
    fn test_first_thing_bonus_and_penalty_can_coexist() {
        let rich_ginger_cake = recipe(
            "r3",
            "Ginger Butter Cake",
            &[],
            MacroProfile::new(420.0, 4.0, 50.0, 22.0),
        );

        let plain_cake = recipe(
            "r4",
            "Butter Cake",
            &[],
            MacroProfile::new(420.0, 4.0, 50.0, 22.0),
        );

        let with_ginger = score_recipe_for_context(&rich_ginger_cake, EatingContext::FirstThing);
        let without = score_recipe_for_context(&plain_cake, EatingContext::FirstThing);

        // both recipes take the -25 heavy penalty; ginger still adds its
        // +30 override, +15 title keyword, and +20 nausea-relief alignment
        assert_eq!(with_ginger - without, 65);
    }

    #[test]
    fn test_wind_down_dairy_override() {
        let warm_milk = recipe("r5", "Warm Milk", &[], MacroProfile::new(120.0, 8.0, 12.0, 5.0));
        let warm_broth = recipe("r6", "Warm Broth", &[], MacroProfile::new(120.0, 8.0, 12.0, 5.0));

        let milk_score = score_recipe_for_context(&warm_milk, EatingContext::WindDown);
        let broth_score = score_recipe_for_context(&warm_broth, EatingContext::WindDown);

        assert_eq!(milk_score - broth_score, TITLE_KEYWORD_BONUS + WIND_DOWN_DAIRY_BONUS);
    }

    #[test]
    fn test_calorie_midband_gets_neither_bonus_nor_penalty() {
        // QuickBite ceiling is 300; 400 sits between 300 and 450
        let base = recipe("r7", "Trail Mix", &[], MacroProfile::new(400.0, 10.0, 30.0, 20.0));
        let fitting = recipe("r8", "Trail Mix", &[], MacroProfile::new(250.0, 10.0, 30.0, 20.0));
        let overshooting = recipe("r9", "Trail Mix", &[], MacroProfile::new(500.0, 10.0, 30.0, 20.0));

        let mid = score_recipe_for_context(&base, EatingContext::QuickBite);
        let fit = score_recipe_for_context(&fitting, EatingContext::QuickBite);
        let over = score_recipe_for_context(&overshooting, EatingContext::QuickBite);

        assert_eq!(fit - mid, CALORIE_FIT_BONUS);
        assert_eq!(mid - over, CALORIE_OVERSHOOT_PENALTY);
    }

    #[test]
    fn test_tag_keyword_matches_are_combinatorial() {
        // one tag containing two MorningFuel keywords counts twice
        let double = recipe(
            "r10",
            "Breakfast Bowl",
            &["protein oat blend"],
            MacroProfile::new(400.0, 20.0, 50.0, 10.0),
        );
        let single = recipe(
            "r11",
            "Breakfast Bowl",
            &["oat blend"],
            MacroProfile::new(400.0, 20.0, 50.0, 10.0),
        );

        let two_hits = score_recipe_for_context(&double, EatingContext::MorningFuel);
        let one_hit = score_recipe_for_context(&single, EatingContext::MorningFuel);

        // both recipes align on Energy (the "protein" tag for one, the
        // detection fallback for the other), so only the tag hit differs
        assert_eq!(two_hits - one_hit, TAG_KEYWORD_BONUS);
    }

    // Each context currently carries a single priority purpose, so the
    // uncapped alignment loop can only fire once per context. If a second
    // priority purpose is ever added this assertion will flag the latent
    // multi-match question.
    #[test]
    fn test_priority_purpose_sets_are_currently_singletons() {
        for context in EatingContext::all() {
            assert_eq!(context.config().priority_purposes.len(), 1, "{context:?}");
        }
    }

    #[test]
    fn test_rank_excludes_consumed_recipes() {
        let pool = vec![
            recipe("a", "Ginger Tea", &[], MacroProfile::new(50.0, 1.0, 10.0, 0.0)),
            recipe("b", "Plain Crackers", &[], MacroProfile::new(120.0, 2.0, 20.0, 3.0)),
        ];
        let excluded: HashSet<String> = ["a".to_owned()].into();

        let ranked = rank_for_meal(&pool, 1, &excluded);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "b");
    }

    #[test]
    fn test_rank_of_empty_pool_is_empty() {
        assert!(rank_for_meal(&[], 1, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_rank_is_stable_for_tied_scores() {
        // identical recipes under different ids score identically
        let macros = MacroProfile::new(200.0, 5.0, 30.0, 4.0);
        let pool = vec![
            recipe("a", "Oat Bar", &[], macros),
            recipe("b", "Oat Bar", &[], macros),
            recipe("c", "Oat Bar", &[], macros),
        ];

        let ranked = rank_for_meal(&pool, 4, &HashSet::new());

        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
