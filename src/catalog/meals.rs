// ABOUTME: Static meal catalog data in three calorie tiers
// ABOUTME: Standard, high-calorie, and low-calorie meal entries with macros and micronutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Meal catalog data.
//!
//! Read-only at runtime. The standard tier is always shown; the high- and
//! low-calorie tiers are appended when the user's calorie target falls in the
//! matching band (see [`crate::catalog::CalorieBand`]).

use serde::Serialize;

/// A single micronutrient line on a meal card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Micronutrient {
    /// Nutrient name, e.g. "Iron"
    pub name: &'static str,
    /// Amount per serving
    pub amount: f64,
    /// Unit for the amount, e.g. "mg"
    pub unit: &'static str,
}

/// Category a meal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal food
    Snack,
}

impl MealType {
    /// All meal types in canonical slot order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

/// A meal suggestion card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealEntry {
    /// Display title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Energy per serving (kcal)
    pub calories: i32,
    /// Protein per serving (g)
    pub protein_g: i32,
    /// Carbohydrates per serving (g)
    pub carbs_g: i32,
    /// Fat per serving (g)
    pub fat_g: i32,
    /// Fiber per serving (g)
    pub fiber_g: i32,
    /// Preparation time (minutes)
    pub prep_time_minutes: i32,
    /// Display tags, also used by the plant-based filter
    pub tags: &'static [&'static str],
    /// Meal category
    pub meal_type: MealType,
    /// Notable micronutrients, in display order
    pub micronutrients: &'static [Micronutrient],
}

/// Standard meal tier, shown for every calorie target
pub const STANDARD_MEALS: &[MealEntry] = &[
    MealEntry {
        title: "Grilled Chicken Bowl",
        description: "Lean protein with quinoa, avocado, and mixed vegetables",
        calories: 450,
        protein_g: 35,
        carbs_g: 38,
        fat_g: 16,
        fiber_g: 8,
        prep_time_minutes: 20,
        tags: &["High Protein", "Low Carb"],
        meal_type: MealType::Lunch,
        micronutrients: &[
            Micronutrient { name: "Iron", amount: 3.2, unit: "mg" },
            Micronutrient { name: "Potassium", amount: 820.0, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Salmon with Sweet Potato",
        description: "Omega-3 rich salmon with roasted sweet potato and greens",
        calories: 520,
        protein_g: 28,
        carbs_g: 42,
        fat_g: 22,
        fiber_g: 6,
        prep_time_minutes: 25,
        tags: &["Omega-3", "Nutrient Dense"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Vitamin D", amount: 14.0, unit: "mcg" },
            Micronutrient { name: "Vitamin A", amount: 960.0, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Mediterranean Bowl",
        description: "Falafel, hummus, vegetables and whole grain pita",
        calories: 480,
        protein_g: 18,
        carbs_g: 58,
        fat_g: 19,
        fiber_g: 11,
        prep_time_minutes: 15,
        tags: &["Plant-Based", "Fiber Rich"],
        meal_type: MealType::Lunch,
        micronutrients: &[
            Micronutrient { name: "Folate", amount: 180.0, unit: "mcg" },
            Micronutrient { name: "Magnesium", amount: 95.0, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Protein Smoothie Bowl",
        description: "Whey protein, banana, berries, and granola topping",
        calories: 390,
        protein_g: 30,
        carbs_g: 45,
        fat_g: 9,
        fiber_g: 7,
        prep_time_minutes: 5,
        tags: &["Quick Prep", "Post-Workout"],
        meal_type: MealType::Breakfast,
        micronutrients: &[
            Micronutrient { name: "Calcium", amount: 320.0, unit: "mg" },
            Micronutrient { name: "Vitamin C", amount: 48.0, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Greek Yogurt with Berries",
        description: "Thick strained yogurt with fresh berries and honey",
        calories: 320,
        protein_g: 22,
        carbs_g: 34,
        fat_g: 8,
        fiber_g: 4,
        prep_time_minutes: 5,
        tags: &["High Protein", "Quick Prep"],
        meal_type: MealType::Breakfast,
        micronutrients: &[
            Micronutrient { name: "Calcium", amount: 280.0, unit: "mg" },
            Micronutrient { name: "Vitamin B12", amount: 1.1, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Veggie Omelette",
        description: "Three-egg omelette with spinach, peppers, and feta",
        calories: 340,
        protein_g: 24,
        carbs_g: 8,
        fat_g: 23,
        fiber_g: 2,
        prep_time_minutes: 10,
        tags: &["Low Carb", "Vegetarian"],
        meal_type: MealType::Breakfast,
        micronutrients: &[
            Micronutrient { name: "Choline", amount: 420.0, unit: "mg" },
            Micronutrient { name: "Vitamin K", amount: 110.0, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Turkey Lettuce Wraps",
        description: "Seasoned ground turkey in crisp lettuce cups with slaw",
        calories: 360,
        protein_g: 32,
        carbs_g: 14,
        fat_g: 18,
        fiber_g: 4,
        prep_time_minutes: 15,
        tags: &["High Protein", "Low Carb"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Zinc", amount: 4.1, unit: "mg" },
            Micronutrient { name: "Selenium", amount: 32.0, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Lentil Curry",
        description: "Red lentils simmered in coconut milk with warming spices",
        calories: 440,
        protein_g: 19,
        carbs_g: 55,
        fat_g: 14,
        fiber_g: 13,
        prep_time_minutes: 30,
        tags: &["Vegan", "Fiber Rich"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Iron", amount: 6.4, unit: "mg" },
            Micronutrient { name: "Folate", amount: 220.0, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Tuna Rice Bowl",
        description: "Seared tuna over brown rice with edamame and sesame",
        calories: 470,
        protein_g: 34,
        carbs_g: 48,
        fat_g: 12,
        fiber_g: 5,
        prep_time_minutes: 20,
        tags: &["High Protein", "Omega-3"],
        meal_type: MealType::Lunch,
        micronutrients: &[
            Micronutrient { name: "Selenium", amount: 68.0, unit: "mcg" },
            Micronutrient { name: "Vitamin B6", amount: 0.9, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Apple with Almond Butter",
        description: "Sliced apple with a generous spread of almond butter",
        calories: 260,
        protein_g: 6,
        carbs_g: 30,
        fat_g: 14,
        fiber_g: 6,
        prep_time_minutes: 2,
        tags: &["Vegan", "Quick Prep"],
        meal_type: MealType::Snack,
        micronutrients: &[
            Micronutrient { name: "Vitamin E", amount: 6.8, unit: "mg" },
            Micronutrient { name: "Magnesium", amount: 76.0, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Cottage Cheese with Pineapple",
        description: "Creamy cottage cheese topped with fresh pineapple chunks",
        calories: 220,
        protein_g: 24,
        carbs_g: 20,
        fat_g: 5,
        fiber_g: 1,
        prep_time_minutes: 3,
        tags: &["High Protein", "Quick Prep"],
        meal_type: MealType::Snack,
        micronutrients: &[
            Micronutrient { name: "Calcium", amount: 140.0, unit: "mg" },
            Micronutrient { name: "Vitamin C", amount: 36.0, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Tofu Stir-Fry",
        description: "Crispy tofu with broccoli, carrots, and ginger-soy glaze",
        calories: 410,
        protein_g: 22,
        carbs_g: 36,
        fat_g: 19,
        fiber_g: 8,
        prep_time_minutes: 18,
        tags: &["Vegan", "Plant-Based"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Calcium", amount: 350.0, unit: "mg" },
            Micronutrient { name: "Vitamin C", amount: 82.0, unit: "mg" },
        ],
    },
];

/// High-calorie tier, appended when the target exceeds the high threshold
pub const HIGH_CALORIE_MEALS: &[MealEntry] = &[
    MealEntry {
        title: "Steak and Potato Plate",
        description: "Grilled sirloin with roasted potatoes and garlic butter",
        calories: 780,
        protein_g: 48,
        carbs_g: 52,
        fat_g: 38,
        fiber_g: 6,
        prep_time_minutes: 35,
        tags: &["High Protein", "Bulking"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Iron", amount: 5.6, unit: "mg" },
            Micronutrient { name: "Vitamin B12", amount: 2.8, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Peanut Butter Oat Shake",
        description: "Oats, peanut butter, whole milk, and banana blended thick",
        calories: 650,
        protein_g: 28,
        carbs_g: 72,
        fat_g: 28,
        fiber_g: 8,
        prep_time_minutes: 5,
        tags: &["Bulking", "Quick Prep"],
        meal_type: MealType::Breakfast,
        micronutrients: &[
            Micronutrient { name: "Potassium", amount: 900.0, unit: "mg" },
            Micronutrient { name: "Magnesium", amount: 150.0, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Chicken Alfredo Pasta",
        description: "Whole wheat pasta with grilled chicken in a cream sauce",
        calories: 720,
        protein_g: 44,
        carbs_g: 68,
        fat_g: 28,
        fiber_g: 7,
        prep_time_minutes: 25,
        tags: &["High Protein", "Bulking"],
        meal_type: MealType::Lunch,
        micronutrients: &[
            Micronutrient { name: "Calcium", amount: 290.0, unit: "mg" },
            Micronutrient { name: "Niacin", amount: 14.0, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Trail Mix with Dark Chocolate",
        description: "Nuts, seeds, dried fruit, and dark chocolate pieces",
        calories: 420,
        protein_g: 12,
        carbs_g: 38,
        fat_g: 26,
        fiber_g: 6,
        prep_time_minutes: 1,
        tags: &["Vegan", "Quick Prep"],
        meal_type: MealType::Snack,
        micronutrients: &[
            Micronutrient { name: "Vitamin E", amount: 7.2, unit: "mg" },
            Micronutrient { name: "Copper", amount: 0.6, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Burrito Bowl with Extra Rice",
        description: "Beef, beans, rice, cheese, guacamole, and salsa",
        calories: 820,
        protein_g: 42,
        carbs_g: 86,
        fat_g: 34,
        fiber_g: 14,
        prep_time_minutes: 20,
        tags: &["High Protein", "Bulking"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Iron", amount: 6.1, unit: "mg" },
            Micronutrient { name: "Folate", amount: 190.0, unit: "mcg" },
        ],
    },
];

/// Low-calorie tier, appended when the target is below the low threshold
pub const LOW_CALORIE_MEALS: &[MealEntry] = &[
    MealEntry {
        title: "Zucchini Noodle Bowl",
        description: "Spiralized zucchini with cherry tomatoes and pesto",
        calories: 210,
        protein_g: 8,
        carbs_g: 16,
        fat_g: 13,
        fiber_g: 5,
        prep_time_minutes: 12,
        tags: &["Vegetarian", "Low Carb"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Vitamin C", amount: 52.0, unit: "mg" },
            Micronutrient { name: "Lutein", amount: 2.1, unit: "mg" },
        ],
    },
    MealEntry {
        title: "Egg White Scramble",
        description: "Fluffy egg whites with mushrooms and chives",
        calories: 180,
        protein_g: 22,
        carbs_g: 6,
        fat_g: 7,
        fiber_g: 1,
        prep_time_minutes: 8,
        tags: &["High Protein", "Low Carb"],
        meal_type: MealType::Breakfast,
        micronutrients: &[
            Micronutrient { name: "Riboflavin", amount: 0.8, unit: "mg" },
            Micronutrient { name: "Selenium", amount: 24.0, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Shrimp and Greens Salad",
        description: "Poached shrimp over baby greens with citrus dressing",
        calories: 240,
        protein_g: 26,
        carbs_g: 12,
        fat_g: 10,
        fiber_g: 4,
        prep_time_minutes: 15,
        tags: &["High Protein", "Low Carb"],
        meal_type: MealType::Lunch,
        micronutrients: &[
            Micronutrient { name: "Iodine", amount: 35.0, unit: "mcg" },
            Micronutrient { name: "Vitamin A", amount: 480.0, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Miso Vegetable Soup",
        description: "Light miso broth with tofu, seaweed, and scallions",
        calories: 150,
        protein_g: 9,
        carbs_g: 14,
        fat_g: 6,
        fiber_g: 3,
        prep_time_minutes: 10,
        tags: &["Vegan", "Plant-Based"],
        meal_type: MealType::Dinner,
        micronutrients: &[
            Micronutrient { name: "Iodine", amount: 42.0, unit: "mcg" },
            Micronutrient { name: "Vitamin K", amount: 28.0, unit: "mcg" },
        ],
    },
    MealEntry {
        title: "Cucumber Hummus Bites",
        description: "Cucumber rounds topped with lemon hummus and paprika",
        calories: 120,
        protein_g: 4,
        carbs_g: 12,
        fat_g: 7,
        fiber_g: 3,
        prep_time_minutes: 5,
        tags: &["Vegan", "Quick Prep"],
        meal_type: MealType::Snack,
        micronutrients: &[
            Micronutrient { name: "Vitamin K", amount: 18.0, unit: "mcg" },
            Micronutrient { name: "Folate", amount: 46.0, unit: "mcg" },
        ],
    },
];
