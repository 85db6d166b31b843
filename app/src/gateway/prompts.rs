//! Prompt text sent to the model

use nutrition_planner_shared::Profile;

/// Substituted for blank free-text profile fields
pub const NONE_SENTINEL: &str = "none";

fn or_none(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NONE_SENTINEL
    } else {
        trimmed
    }
}

pub fn analysis_prompt(description: &str) -> String {
    format!(
        "Analyze the following food input and provide its nutritional information. Input: \"{}\"",
        description.trim()
    )
}

/// Description used when the custom planner analyzes a weighed food
pub fn custom_food_description(grams: f64, food: &str) -> String {
    format!("{}g of {}", grams, food.trim())
}

pub fn meal_plan_prompt(profile: &Profile) -> String {
    format!(
        "Create a one-day meal plan for the following user profile:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Sex: {sex}\n\
         - Height: {height} cm\n\
         - Weight: {weight} kg\n\
         - Activity level: {activity}\n\
         - Goal: {goal}\n\
         - Meals per day: {num_meals}\n\
         - Dietary restrictions: {restrictions}\n\
         - Intolerances: {intolerances}\n\
         - Favorite foods: {favorites}\n\
         - Foods to exclude: {disliked}\n\
         \n\
         The plan must contain exactly {num_meals} meals spread across the day.\n\
         Distribute calories and macronutrients evenly between meals to reach the user's goal in a healthy way.\n\
         Base the recipes on the foods the user likes and strictly avoid the ones they do not want.\n\
         Respect the intolerances and restrictions.\n\
         Offer varied, healthy recipes with ingredients and preparation steps.\n\
         Return the answer as JSON.",
        name = profile.name.trim(),
        age = profile.age,
        sex = profile.sex.label(),
        height = profile.height,
        weight = profile.weight,
        activity = profile.activity_level.label(),
        goal = profile.goal.label(),
        num_meals = profile.num_meals,
        restrictions = or_none(&profile.dietary_restrictions),
        intolerances = or_none(&profile.intolerances),
        favorites = or_none(&profile.favorite_foods),
        disliked = or_none(&profile.disliked_foods),
    )
}
