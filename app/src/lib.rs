//! No Limits Nutrition application layer
//!
//! Wires the pure engine in `nutrition-planner-shared` to local storage and
//! the AI gateway.
//!
//! ## Architecture
//!
//! - Services: one per user action, operating on a [`session::Session`]
//! - Repositories: typed access to the three persisted keys
//! - Storage: JSON key-value store (file-backed or in-memory)
//! - Gateway: Gemini adapter behind the `NutritionGateway` port

pub mod config;
pub mod error;
pub mod gateway;
pub mod repositories;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
