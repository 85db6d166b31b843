//! Gemini adapter against a mock HTTP server

use nutrition_planner_app::{
    config::AiConfig,
    gateway::{GeminiGateway, NutritionGateway},
};
use nutrition_planner_shared::{ActivityLevel, BiologicalSex, GatewayError, Goal, Profile};
use secrecy::SecretString;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn gateway_for(server: &MockServer) -> GeminiGateway {
    let config = AiConfig {
        api_key: Some(SecretString::new("test-key".to_string())),
        base_url: format!("{}/v1beta", server.uri()),
        timeout_secs: 5,
        ..AiConfig::default()
    };
    GeminiGateway::from_config(&config).unwrap()
}

/// Wrap a JSON payload the way the API returns candidate text
fn candidate(payload: Value) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": payload.to_string() }] },
            "finishReason": "STOP"
        }]
    })
}

fn profile() -> Profile {
    Profile {
        name: "Alex".to_string(),
        age: 25,
        sex: BiologicalSex::Male,
        height: 175.0,
        weight: 70.0,
        activity_level: ActivityLevel::Light,
        goal: Goal::Maintain,
        dietary_restrictions: String::new(),
        num_meals: 1,
        intolerances: String::new(),
        favorite_foods: String::new(),
        disliked_foods: String::new(),
    }
}

#[tokio::test]
async fn test_analyze_food_parses_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(json!({
            "itemName": "Banana",
            "calories": 105,
            "protein": 1.3,
            "carbohydrates": 27,
            "fat": 0.4,
            "servingSize": "1 medium"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let estimate = gateway_for(&server).analyze_food("a banana").await.unwrap();

    assert_eq!(estimate.item_name, "Banana");
    assert_eq!(estimate.calories, 105.0);
    assert_eq!(estimate.serving_size, "1 medium");
}

#[tokio::test]
async fn test_server_error_maps_to_analysis_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": { "code": 503, "message": "The model is overloaded" }
        })))
        .mount(&server)
        .await;

    let err = gateway_for(&server).analyze_food("a banana").await.unwrap_err();

    match err {
        GatewayError::Analysis(msg) => assert!(msg.contains("overloaded"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_schema_mismatch_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(json!({
            "itemName": "Banana"
        }))))
        .mount(&server)
        .await;

    let err = gateway_for(&server).analyze_food("a banana").await.unwrap_err();
    assert!(matches!(err, GatewayError::Analysis(_)));
}

#[tokio::test]
async fn test_negative_estimate_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(json!({
            "itemName": "Banana",
            "calories": -105,
            "protein": 1.3,
            "carbohydrates": 27,
            "fat": 0.4,
            "servingSize": "1 medium"
        }))))
        .mount(&server)
        .await;

    let err = gateway_for(&server).analyze_food("a banana").await.unwrap_err();
    assert!(matches!(err, GatewayError::Analysis(_)));
}

#[tokio::test]
async fn test_generate_meal_plan() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(json!({
            "dailyCalorieGoal": 2300,
            "meals": [{
                "mealType": "Lunch",
                "description": "Chicken and rice",
                "recipes": [{
                    "name": "Chicken bowl",
                    "ingredients": ["150g chicken", "100g rice"],
                    "instructions": ["Grill the chicken", "Serve over rice"]
                }],
                "calories": 2300,
                "protein": 172,
                "carbohydrates": 230,
                "fat": 77
            }]
        }))))
        .mount(&server)
        .await;

    let plan = gateway_for(&server).generate_meal_plan(&profile()).await.unwrap();

    assert_eq!(plan.daily_calorie_goal, 2300.0);
    assert_eq!(plan.meals.len(), 1);
    assert_eq!(plan.meals[0].recipes[0].ingredients.len(), 2);
}

#[tokio::test]
async fn test_empty_candidates_map_to_plan_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = gateway_for(&server).generate_meal_plan(&profile()).await.unwrap_err();
    assert!(matches!(err, GatewayError::PlanGeneration(_)));
}
