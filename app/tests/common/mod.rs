//! Common test utilities for integration tests
//!
//! Stub gateway and store implementations plus session builders.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use nutrition_planner_app::{
    config::AppConfig,
    gateway::NutritionGateway,
    session::Session,
    state::AppState,
    storage::{KeyValueStore, MemoryStore, StorageError},
};
use nutrition_planner_shared::{
    ActivityLevel, BiologicalSex, GatewayError, Goal, MealPlan, NutritionEstimate, PlannedMeal,
    Profile,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Gateway returning canned answers and recording what it was asked
#[derive(Default)]
pub struct StubGateway {
    pub estimate: Option<NutritionEstimate>,
    pub plan: Option<MealPlan>,
    pub descriptions: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl StubGateway {
    pub fn with_estimate(estimate: NutritionEstimate) -> Self {
        Self {
            estimate: Some(estimate),
            ..Self::default()
        }
    }

    pub fn with_plan(plan: MealPlan) -> Self {
        Self {
            plan: Some(plan),
            ..Self::default()
        }
    }

    /// Every call fails
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.descriptions.lock().unwrap().clone()
    }
}

#[async_trait]
impl NutritionGateway for StubGateway {
    async fn analyze_food(&self, description: &str) -> Result<NutritionEstimate, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.descriptions.lock().unwrap().push(description.to_string());
        self.estimate
            .clone()
            .ok_or_else(|| GatewayError::Analysis("stub has no estimate".to_string()))
    }

    async fn generate_meal_plan(&self, _profile: &Profile) -> Result<MealPlan, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.plan
            .clone()
            .ok_or_else(|| GatewayError::PlanGeneration("stub has no plan".to_string()))
    }
}

/// Store whose writes always fail; reads return nothing
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only store",
        )))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Male, 25 years, 175 cm, 70 kg, light activity, maintain, 3 meals
pub fn reference_profile() -> Profile {
    Profile {
        name: "Alex".to_string(),
        age: 25,
        sex: BiologicalSex::Male,
        height: 175.0,
        weight: 70.0,
        activity_level: ActivityLevel::Light,
        goal: Goal::Maintain,
        dietary_restrictions: String::new(),
        num_meals: 3,
        intolerances: String::new(),
        favorite_foods: String::new(),
        disliked_foods: String::new(),
    }
}

pub fn estimate(name: &str, calories: f64) -> NutritionEstimate {
    NutritionEstimate {
        item_name: name.to_string(),
        calories,
        protein: 10.0,
        carbohydrates: 20.0,
        fat: 5.0,
        serving_size: "1 serving".to_string(),
    }
}

pub fn plan_with(meals: usize) -> MealPlan {
    MealPlan {
        daily_calorie_goal: 2301.0,
        meals: (0..meals)
            .map(|i| PlannedMeal {
                meal_type: format!("Meal {}", i + 1),
                description: "Balanced plate".to_string(),
                recipes: Vec::new(),
                calories: 767.0,
                protein: 57.0,
                carbohydrates: 77.0,
                fat: 25.0,
            })
            .collect(),
    }
}

pub fn state_with(store: Arc<dyn KeyValueStore>, gateway: Arc<StubGateway>) -> AppState {
    AppState::new(store, gateway, AppConfig::default())
}

/// Fresh session over an in-memory store
pub fn session_with(gateway: Arc<StubGateway>) -> Session {
    Session::new(state_with(Arc::new(MemoryStore::new()), gateway))
}
