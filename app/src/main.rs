//! No Limits Nutrition command-line front-end
//!
//! Runs one action against the local session and prints the result as
//! pretty JSON:
//!
//! ```text
//! nutrition-planner [dashboard]
//! nutrition-planner onboard <profile.json>
//! nutrition-planner profile <profile.json>
//! nutrition-planner log <food description>
//! nutrition-planner plan
//! nutrition-planner custom <grams> <food>
//! nutrition-planner weight <kg>
//! ```
//!
//! Profile files hold a camelCase profile document, the same shape stored
//! under the `profile` key. Failures print a `{code, message, retryable}`
//! document and exit with status 1.

use anyhow::Result;
use chrono::Utc;
use nutrition_planner_app::{
    config::AppConfig,
    error::{AppError, AppResult},
    gateway::{gemini::MISSING_API_KEY, GeminiGateway},
    services::{
        CustomPlannerService, DashboardService, LoggerService, OnboardingService, PlannerService,
        ProfileService,
    },
    session::Session,
    state::AppState,
    storage::JsonFileStore,
};
use nutrition_planner_shared::Profile;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One action per invocation
#[derive(Debug, PartialEq)]
enum Command {
    Dashboard,
    Onboard(PathBuf),
    Profile(PathBuf),
    Log(String),
    Plan,
    Custom { grams: f64, food: String },
    Weight(f64),
}

impl Command {
    fn parse(args: &[String]) -> AppResult<Self> {
        let Some((cmd, rest)) = args.split_first() else {
            return Ok(Command::Dashboard);
        };
        match cmd.as_str() {
            "dashboard" => Ok(Command::Dashboard),
            "onboard" => Self::path_arg(rest, "onboard").map(Command::Onboard),
            "profile" => Self::path_arg(rest, "profile").map(Command::Profile),
            "log" => Ok(Command::Log(rest.join(" "))),
            "plan" => Ok(Command::Plan),
            "custom" => match rest.split_first() {
                Some((grams, food)) if !food.is_empty() => grams
                    .parse()
                    .map(|grams| Command::Custom { grams, food: food.join(" ") })
                    .map_err(|_| AppError::Validation("Usage: custom <grams> <food>".to_string())),
                _ => Err(AppError::Validation("Usage: custom <grams> <food>".to_string())),
            },
            "weight" => rest
                .first()
                .and_then(|w| w.parse().ok())
                .map(Command::Weight)
                .ok_or_else(|| AppError::Validation("Usage: weight <kg>".to_string())),
            other => Err(AppError::Validation(format!("Unknown command: {}", other))),
        }
    }

    fn path_arg(rest: &[String], cmd: &str) -> AppResult<PathBuf> {
        rest.first()
            .map(PathBuf::from)
            .ok_or_else(|| AppError::Validation(format!("Usage: {} <profile.json>", cmd)))
    }

    /// Whether the command calls the AI gateway
    fn needs_gateway(&self) -> bool {
        matches!(self, Command::Log(_) | Command::Plan | Command::Custom { .. })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match execute(&args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!(code = e.code(), error = %e, "Command failed");
            println!("{}", serde_json::to_string_pretty(&e.detail())?);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Parse, load configuration, restore the session and run one command
async fn execute(args: &[String]) -> AppResult<String> {
    let command = Command::parse(args)?;
    let config = AppConfig::load().map_err(|e| AppError::Config(e.to_string()))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting No Limits Nutrition"
    );

    let gateway = GeminiGateway::from_config(&config.ai)?;
    check_gateway(&command, &gateway)?;

    let store = JsonFileStore::open(config.storage.data_dir()).await?;
    let state = AppState::new(Arc::new(store), Arc::new(gateway), config);
    let mut session = Session::restore(state).await;

    run(&mut session, command).await
}

/// Fail fast when an AI command runs without an API key
fn check_gateway(command: &Command, gateway: &GeminiGateway) -> AppResult<()> {
    if command.needs_gateway() && !gateway.has_api_key() {
        return Err(AppError::Config(MISSING_API_KEY.to_string()));
    }
    Ok(())
}

async fn run(session: &mut Session, command: Command) -> AppResult<String> {
    let today = Utc::now().date_naive();
    match command {
        Command::Dashboard => to_json(&DashboardService::view(session, today)?),
        Command::Onboard(path) => {
            let profile = read_profile(&path).await?;
            OnboardingService::complete(session, profile, today).await?;
            to_json(&DashboardService::view(session, today)?)
        }
        Command::Profile(path) => {
            let profile = read_profile(&path).await?;
            ProfileService::update(session, profile, today).await?;
            to_json(&session.profile())
        }
        Command::Log(text) => to_json(&LoggerService::log_food(session, &text, Utc::now()).await?),
        Command::Plan => to_json(&PlannerService::generate(session).await?),
        Command::Custom { grams, food } => {
            CustomPlannerService::add_food(session, 0, &food, grams).await?;
            to_json(&json!({
                "plan": CustomPlannerService::plan(session),
                "totals": CustomPlannerService::totals(session),
            }))
        }
        Command::Weight(kg) => {
            ProfileService::record_weight(session, kg, today).await?;
            to_json(&session.weight_history())
        }
    }
}

async fn read_profile(path: &Path) -> AppResult<Profile> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Validation(format!("Could not read {}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Validation(format!("Invalid profile in {}: {}", path.display(), e)))
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.into()))
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout carries only the command's JSON.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "nutrition_planner_app=info,nutrition_planner=info".into()
        } else {
            "nutrition_planner_app=debug,nutrition_planner=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_planner_app::config::AiConfig;
    use nutrition_planner_app::storage::MemoryStore;
    use secrecy::SecretString;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn keyless_gateway() -> GeminiGateway {
        GeminiGateway::from_config(&AiConfig::default()).unwrap()
    }

    fn scratch_profile(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("nln-cli-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(&[]).unwrap(), Command::Dashboard);
        assert_eq!(Command::parse(&args(&["plan"])).unwrap(), Command::Plan);
        assert_eq!(
            Command::parse(&args(&["log", "two", "eggs"])).unwrap(),
            Command::Log("two eggs".to_string())
        );
        assert_eq!(Command::parse(&args(&["weight", "71.5"])).unwrap(), Command::Weight(71.5));
    }

    #[test]
    fn test_parse_profile_commands() {
        assert_eq!(
            Command::parse(&args(&["onboard", "me.json"])).unwrap(),
            Command::Onboard(PathBuf::from("me.json"))
        );
        assert_eq!(
            Command::parse(&args(&["profile", "/tmp/edit.json"])).unwrap(),
            Command::Profile(PathBuf::from("/tmp/edit.json"))
        );
        assert!(matches!(Command::parse(&args(&["onboard"])), Err(AppError::Validation(_))));
        assert!(matches!(Command::parse(&args(&["profile"])), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_custom_command() {
        assert_eq!(
            Command::parse(&args(&["custom", "150", "chicken", "breast"])).unwrap(),
            Command::Custom { grams: 150.0, food: "chicken breast".to_string() }
        );
        assert!(Command::parse(&args(&["custom", "150"])).is_err());
        assert!(Command::parse(&args(&["custom", "lots", "rice"])).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse(&args(&["weight", "heavy"])).is_err());
        assert!(Command::parse(&args(&["dance"])).is_err());
    }

    #[test]
    fn test_only_ai_commands_need_a_key() {
        let gateway = keyless_gateway();
        for command in [Command::Dashboard, Command::Weight(70.0), Command::Onboard(PathBuf::from("p.json"))] {
            assert!(check_gateway(&command, &gateway).is_ok(), "{:?}", command);
        }

        let err = check_gateway(&Command::Plan, &gateway).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.detail().code, "CONFIG_ERROR");

        let config = AiConfig {
            api_key: Some(SecretString::new("k".to_string())),
            ..AiConfig::default()
        };
        let keyed = GeminiGateway::from_config(&config).unwrap();
        assert!(check_gateway(&Command::Log("rice".to_string()), &keyed).is_ok());
    }

    #[tokio::test]
    async fn test_onboard_then_dashboard_without_api_key() {
        let path = scratch_profile(
            "onboard",
            r#"{"name": "Alex", "age": 25, "sex": "male", "height": 175, "weight": 70,
                "activityLevel": "light", "goal": "maintain", "numMeals": 3}"#,
        );
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            Arc::new(keyless_gateway()),
            AppConfig::default(),
        );
        let mut session = Session::new(state);

        let onboarded = run(&mut session, Command::Onboard(path.clone())).await.unwrap();
        assert!(onboarded.contains("\"greetingName\": \"Alex\""));

        let dashboard = run(&mut session, Command::Dashboard).await.unwrap();
        assert!(dashboard.contains("\"calorieGoal\""));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_unreadable_profile_is_a_validation_error() {
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            Arc::new(keyless_gateway()),
            AppConfig::default(),
        );
        let mut session = Session::new(state);
        let path = scratch_profile("bad", "{ \"name\": 3 }");

        let err = run(&mut session, Command::Onboard(path.clone())).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!session.is_onboarded());

        let _ = std::fs::remove_file(path);
    }
}
