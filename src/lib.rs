// ABOUTME: Main library entry point for the BumpBite meal-context recommendation engine
// ABOUTME: Ranks pregnancy-nutrition recipes against six daily micro-meal eating contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BumpBite Nutrition

#![deny(unsafe_code)]

//! # BumpBite Intelligence
//!
//! Pure, stateless recommendation core for a pregnancy-nutrition recipe
//! app. Given a pool of recipes and a daily meal-slot ordinal, it resolves
//! the slot to one of six eating contexts and ranks the pool by fitness
//! for that context, honoring a set of already-consumed recipe ids.
//!
//! ## Features
//!
//! - **Six micro-meal contexts**: first thing, morning fuel, midday
//!   sustain, quick bite, substantial, wind down — replacing the
//!   conventional breakfast/lunch/dinner split
//! - **Fuzzy purpose detection**: nausea relief, energy, nutrient density,
//!   and hydration inferred from free-text tags and titles
//! - **Additive fitness scoring**: keyword, calorie-fit, and
//!   purpose-alignment contributions with per-slot overrides
//! - **Total by design**: out-of-range meal numbers, empty pools, and
//!   missing macros all resolve to well-defined results, never errors
//!
//! Everything here is synchronous and side-effect free; the surrounding
//! app owns persistence, AI chat, and presentation.
//!
//! ## Example Usage
//!
//! ```rust
//! use bumpbite_intelligence::{rank_for_meal, MacroProfile, Recipe};
//! use std::collections::HashSet;
//!
//! let pool = vec![Recipe::new(
//!     "ginger-tea",
//!     "Ginger Tea",
//!     MacroProfile::new(50.0, 1.0, 10.0, 0.0),
//!     vec!["Nausea Relief".to_owned()],
//! )];
//!
//! let ranked = rank_for_meal(&pool, 1, &HashSet::new());
//! assert_eq!(ranked[0].id, "ginger-tea");
//! ```

/// Eating-context enumeration, static config table, and slot resolution
pub mod context;
/// Engine error types for the opt-in validation surface
pub mod errors;
/// Recipe and macro data models
pub mod models;
/// Meal-purpose detection from recipe text
pub mod purpose;
/// Fitness scoring and pool ranking
pub mod scoring;

pub use context::{context_info, ContextConfig, ContextSlotInfo, EatingContext};
pub use errors::{EngineError, EngineResult};
pub use models::{MacroProfile, Recipe};
pub use purpose::MealPurpose;
pub use scoring::{rank_for_meal, score_recipe_for_context, MealRecommendationEngine};
