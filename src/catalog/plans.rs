// ABOUTME: Pre-authored daily meal plan templates in three calorie tiers
// ABOUTME: Fixed 4-slot plans (breakfast, lunch, snack, dinner) per calorie band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Daily plan templates.
//!
//! Each template is a fixed sequence of exactly four slots in canonical order:
//! Breakfast, Lunch, Snack, Dinner. Totals are never stored; they are always
//! recomputed from the four entries (see [`crate::selector::DailyPlan`]).

use serde::{Deserialize, Serialize};

/// Slot within a daily plan, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    /// First slot
    Breakfast,
    /// Second slot
    Lunch,
    /// Third slot
    Snack,
    /// Fourth slot
    Dinner,
}

impl MealSlot {
    /// The canonical slot order of every plan
    pub const ORDER: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }
}

/// One slot of a daily plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanEntry {
    /// Which slot this entry fills
    pub slot: MealSlot,
    /// Food description
    pub food: &'static str,
    /// Energy (kcal)
    pub calories: i32,
    /// Protein (g)
    pub protein_g: i32,
}

/// A pre-authored 4-slot daily plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyPlanTemplate {
    /// Short name for the plan
    pub name: &'static str,
    /// The four slots, always in canonical order
    pub entries: [PlanEntry; 4],
}

/// Plans for the standard calorie band
pub const STANDARD_PLANS: &[DailyPlanTemplate] = &[
    DailyPlanTemplate {
        name: "Balanced Day",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Greek Yogurt with Berries", calories: 320, protein_g: 22 },
            PlanEntry { slot: MealSlot::Lunch, food: "Grilled Chicken Salad", calories: 450, protein_g: 35 },
            PlanEntry { slot: MealSlot::Snack, food: "Protein Shake with Almonds", calories: 250, protein_g: 20 },
            PlanEntry { slot: MealSlot::Dinner, food: "Salmon with Roasted Vegetables", calories: 520, protein_g: 30 },
        ],
    },
    DailyPlanTemplate {
        name: "Hearty Classics",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Veggie Omelette with Toast", calories: 380, protein_g: 26 },
            PlanEntry { slot: MealSlot::Lunch, food: "Tuna Rice Bowl", calories: 470, protein_g: 34 },
            PlanEntry { slot: MealSlot::Snack, food: "Apple with Almond Butter", calories: 260, protein_g: 6 },
            PlanEntry { slot: MealSlot::Dinner, food: "Turkey Meatballs with Pasta", calories: 540, protein_g: 38 },
        ],
    },
    DailyPlanTemplate {
        name: "Plant Forward",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Overnight Oats with Chia", calories: 350, protein_g: 14 },
            PlanEntry { slot: MealSlot::Lunch, food: "Mediterranean Bowl", calories: 480, protein_g: 18 },
            PlanEntry { slot: MealSlot::Snack, food: "Hummus with Veggie Sticks", calories: 180, protein_g: 7 },
            PlanEntry { slot: MealSlot::Dinner, food: "Lentil Curry with Rice", calories: 520, protein_g: 21 },
        ],
    },
];

/// Plans for the high-calorie band (target above the high threshold)
pub const HIGH_CALORIE_PLANS: &[DailyPlanTemplate] = &[
    DailyPlanTemplate {
        name: "Builder's Day",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Peanut Butter Oat Shake", calories: 650, protein_g: 28 },
            PlanEntry { slot: MealSlot::Lunch, food: "Chicken Alfredo Pasta", calories: 720, protein_g: 44 },
            PlanEntry { slot: MealSlot::Snack, food: "Trail Mix with Dark Chocolate", calories: 420, protein_g: 12 },
            PlanEntry { slot: MealSlot::Dinner, food: "Steak and Potato Plate", calories: 780, protein_g: 48 },
        ],
    },
    DailyPlanTemplate {
        name: "Mass Fuel",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Bagel with Eggs and Avocado", calories: 580, protein_g: 25 },
            PlanEntry { slot: MealSlot::Lunch, food: "Burrito Bowl with Extra Rice", calories: 820, protein_g: 42 },
            PlanEntry { slot: MealSlot::Snack, food: "Greek Yogurt with Granola", calories: 380, protein_g: 20 },
            PlanEntry { slot: MealSlot::Dinner, food: "Salmon with Quinoa and Butter Greens", calories: 700, protein_g: 40 },
        ],
    },
    DailyPlanTemplate {
        name: "Surplus Simple",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Pancakes with Whey and Banana", calories: 620, protein_g: 32 },
            PlanEntry { slot: MealSlot::Lunch, food: "Double Chicken Rice Plate", calories: 750, protein_g: 52 },
            PlanEntry { slot: MealSlot::Snack, food: "Peanut Butter Sandwich", calories: 430, protein_g: 15 },
            PlanEntry { slot: MealSlot::Dinner, food: "Beef Stir-Fry with Noodles", calories: 740, protein_g: 42 },
        ],
    },
];

/// Plans for the low-calorie band (target below the low threshold)
pub const LOW_CALORIE_PLANS: &[DailyPlanTemplate] = &[
    DailyPlanTemplate {
        name: "Light and Lean",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Egg White Scramble", calories: 180, protein_g: 22 },
            PlanEntry { slot: MealSlot::Lunch, food: "Shrimp and Greens Salad", calories: 240, protein_g: 26 },
            PlanEntry { slot: MealSlot::Snack, food: "Cucumber Hummus Bites", calories: 120, protein_g: 4 },
            PlanEntry { slot: MealSlot::Dinner, food: "Zucchini Noodles with Chicken", calories: 320, protein_g: 30 },
        ],
    },
    DailyPlanTemplate {
        name: "Deficit Comfort",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Berry Protein Smoothie", calories: 220, protein_g: 24 },
            PlanEntry { slot: MealSlot::Lunch, food: "Miso Vegetable Soup with Tofu", calories: 250, protein_g: 16 },
            PlanEntry { slot: MealSlot::Snack, food: "Cottage Cheese with Pineapple", calories: 220, protein_g: 24 },
            PlanEntry { slot: MealSlot::Dinner, food: "Baked Cod with Asparagus", calories: 310, protein_g: 34 },
        ],
    },
    DailyPlanTemplate {
        name: "Fresh Reset",
        entries: [
            PlanEntry { slot: MealSlot::Breakfast, food: "Chia Pudding with Kiwi", calories: 240, protein_g: 9 },
            PlanEntry { slot: MealSlot::Lunch, food: "Turkey Lettuce Wraps", calories: 360, protein_g: 32 },
            PlanEntry { slot: MealSlot::Snack, food: "Carrot Sticks with Tzatziki", calories: 110, protein_g: 4 },
            PlanEntry { slot: MealSlot::Dinner, food: "Grilled Chicken with Slaw", calories: 340, protein_g: 36 },
        ],
    },
];
