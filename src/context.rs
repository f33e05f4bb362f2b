// ABOUTME: Eating-context definitions and meal-slot resolution for the daily micro-meal schedule
// ABOUTME: Holds the static six-entry ContextConfig table and the slot-to-context mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BumpBite Nutrition

use crate::purpose::MealPurpose;
use serde::{Deserialize, Serialize};

/// One of the six recurring daily micro-meal occasions
///
/// Pregnancy nutrition favors six smaller meals over the conventional
/// breakfast/lunch/dinner split; each slot carries its own keyword set,
/// calorie ceiling, and priority purpose for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EatingContext {
    /// Before getting out of bed; gentle on a queasy stomach
    FirstThing,
    /// Proper morning meal to power the first half of the day
    MorningFuel,
    /// Steady midday plate with micronutrients on board
    MiddaySustain,
    /// Small afternoon bite to keep blood sugar level
    QuickBite,
    /// The day's biggest plate, protein and nutrient dense
    Substantial,
    /// Calming evening snack that won't disturb sleep
    WindDown,
}

/// Static scoring configuration for one eating context
///
/// Built once as const data and never mutated; [`EatingContext::config`]
/// is the only way in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContextConfig {
    /// Display name for the slot
    pub label: &'static str,
    /// One-line description shown alongside the slot
    pub description: &'static str,
    /// Lowercase substrings matched fuzzily against titles and tags
    pub keywords: &'static [&'static str],
    /// Soft calorie ceiling for an appropriate serving in this slot
    pub max_calories: u32,
    /// Purposes whose presence strongly indicates fit for this slot
    pub priority_purposes: &'static [MealPurpose],
}

static FIRST_THING: ContextConfig = ContextConfig {
    label: "First Thing",
    description: "Gentle bites before getting out of bed, easy on a queasy stomach",
    keywords: &["ginger", "cracker", "bland", "toast", "nausea", "plain"],
    max_calories: 250,
    priority_purposes: &[MealPurpose::NauseaRelief],
};

static MORNING_FUEL: ContextConfig = ContextConfig {
    label: "Morning Fuel",
    description: "A proper morning meal to power the first half of the day",
    keywords: &["oat", "egg", "yogurt", "smoothie", "granola", "protein"],
    max_calories: 450,
    priority_purposes: &[MealPurpose::Energy],
};

static MIDDAY_SUSTAIN: ContextConfig = ContextConfig {
    label: "Midday Sustain",
    description: "A steady midday plate with iron and folate on board",
    keywords: &["salad", "bowl", "wrap", "sandwich", "grain", "iron"],
    max_calories: 650,
    priority_purposes: &[MealPurpose::NutrientDense],
};

static QUICK_BITE: ContextConfig = ContextConfig {
    label: "Quick Bite",
    description: "A small afternoon bite to keep blood sugar level",
    keywords: &["snack", "nut", "hummus", "fruit", "bar", "bite"],
    max_calories: 300,
    priority_purposes: &[MealPurpose::Energy],
};

static SUBSTANTIAL: ContextConfig = ContextConfig {
    label: "Substantial",
    description: "The day's biggest plate, protein and nutrient dense",
    keywords: &["salmon", "chicken", "lentil", "curry", "stew", "hearty"],
    max_calories: 750,
    priority_purposes: &[MealPurpose::NutrientDense],
};

static WIND_DOWN: ContextConfig = ContextConfig {
    label: "Wind Down",
    description: "A calming evening snack that won't disturb sleep",
    keywords: &["milk", "chamomile", "banana", "warm", "soothing", "calm"],
    max_calories: 350,
    priority_purposes: &[MealPurpose::Hydrating],
};

impl EatingContext {
    /// Resolve a daily meal-slot ordinal to its eating context
    ///
    /// Total over all integers: slots 1 through 5 map to their fixed
    /// contexts and everything else (zero, negatives, six and beyond)
    /// falls through to [`Self::WindDown`]. The fallthrough is a
    /// deliberate simplification, not rejected input.
    #[must_use]
    pub const fn for_meal_number(meal_number: i32) -> Self {
        match meal_number {
            1 => Self::FirstThing,
            2 => Self::MorningFuel,
            3 => Self::MiddaySustain,
            4 => Self::QuickBite,
            5 => Self::Substantial,
            _ => Self::WindDown,
        }
    }

    /// Static scoring configuration for this context
    #[must_use]
    pub const fn config(self) -> &'static ContextConfig {
        match self {
            Self::FirstThing => &FIRST_THING,
            Self::MorningFuel => &MORNING_FUEL,
            Self::MiddaySustain => &MIDDAY_SUSTAIN,
            Self::QuickBite => &QUICK_BITE,
            Self::Substantial => &SUBSTANTIAL,
            Self::WindDown => &WIND_DOWN,
        }
    }

    /// All six contexts in daily order
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::FirstThing,
            Self::MorningFuel,
            Self::MiddaySustain,
            Self::QuickBite,
            Self::Substantial,
            Self::WindDown,
        ]
    }
}

/// Resolved slot information for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextSlotInfo {
    /// The resolved eating context
    pub context: EatingContext,
    /// Display name from the static table
    pub label: &'static str,
    /// Slot description from the static table
    pub description: &'static str,
}

/// Resolve a meal number to its context plus display strings
///
/// Pure composition of [`EatingContext::for_meal_number`] with the static
/// config table.
#[must_use]
pub fn context_info(meal_number: i32) -> ContextSlotInfo {
    let context = EatingContext::for_meal_number(meal_number);
    let config = context.config();
    ContextSlotInfo {
        context,
        label: config.label,
        description: config.description,
    }
}
