// ABOUTME: Integration tests for the HTTP recipe service adapter
// ABOUTME: Runs HttpRecipeClient against wiremock servers to check status and body mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_planner::api::{ApiError, HttpRecipeClient, RecipeApi};
use recipe_planner::config::ClientConfig;
use recipe_planner::models::RecipeDraft;
use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: &str) -> HttpRecipeClient {
    HttpRecipeClient::new(&ClientConfig::new(base_url).unwrap()).unwrap()
}

fn miso_draft() -> RecipeDraft {
    RecipeDraft::new(
        "Miso Soup",
        vec!["dashi".to_owned(), "miso".to_owned(), "tofu".to_owned()],
        "Heat dashi.\nDissolve miso.",
    )
}

#[tokio::test]
async fn test_list_recipes_preserves_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipes": [
                {"recipe_id": "recipe_020", "name": "Oyakodon", "ingredients": ["chicken", "egg"], "instructions": "Simmer.", "category": "main"},
                {"recipe_id": "recipe_019", "name": "Miso Soup", "ingredients": ["miso"], "instructions": "Stir."}
            ],
            "count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recipes = client_for(&server.uri()).list_recipes().await.unwrap();

    let ids: Vec<&str> = recipes.iter().map(|r| r.recipe_id.as_str()).collect();
    assert_eq!(ids, vec!["recipe_020", "recipe_019"]);
    assert_eq!(recipes[0].ingredients, vec!["chicken", "egg"]);
}

#[tokio::test]
async fn test_list_recipes_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
        .mount(&server)
        .await;

    assert!(client_for(&server.uri()).list_recipes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_recipes_server_error_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "table missing"})))
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).list_recipes().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Network {
            status: Some(500),
            message: "table missing".to_owned()
        }
    );
}

#[tokio::test]
async fn test_list_recipes_undecodable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).list_recipes().await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_network_failure_without_status() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&uri).list_recipes().await.unwrap_err();
    assert!(matches!(err, ApiError::Network { status: None, .. }));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prod/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&format!("{}/prod", server.uri()));
    client.list_recipes().await.unwrap();
}

#[tokio::test]
async fn test_get_recipe_returns_recipe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/recipe_019"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recipe_id": "recipe_019",
            "name": "Miso Soup",
            "ingredients": ["dashi", "miso"],
            "instructions": "Heat.\nStir."
        })))
        .mount(&server)
        .await;

    let recipe = client_for(&server.uri())
        .get_recipe("recipe_019")
        .await
        .unwrap();
    assert_eq!(recipe.name, "Miso Soup");
    assert_eq!(recipe.instructions, "Heat.\nStir.");
}

#[tokio::test]
async fn test_get_recipe_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Recipe not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).get_recipe("nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_recipe_null_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/gone"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).get_recipe("gone").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::NotFound {
            recipe_id: "gone".to_owned()
        }
    );
}

#[tokio::test]
async fn test_get_recipe_empty_id_never_hits_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).get_recipe("").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_recipe_posts_draft_and_returns_new_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .and(body_json(json!({
            "name": "Miso Soup",
            "ingredients": ["dashi", "miso", "tofu"],
            "instructions": "Heat dashi.\nDissolve miso."
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "recipe_id": "r1",
            "name": "Miso Soup",
            "ingredients": ["dashi", "miso", "tofu"],
            "instructions": "Heat dashi.\nDissolve miso."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = miso_draft();
    let created = client_for(&server.uri()).create_recipe(&draft).await.unwrap();
    assert_eq!(created, draft.into_recipe("r1"));
}

#[tokio::test]
async fn test_create_recipe_accepts_wrapped_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Recipe created successfully",
            "recipe": {
                "recipe_id": "recipe_021",
                "name": "Miso Soup",
                "ingredients": ["dashi", "miso", "tofu"],
                "instructions": "Heat dashi.\nDissolve miso."
            }
        })))
        .mount(&server)
        .await;

    let created = client_for(&server.uri())
        .create_recipe(&miso_draft())
        .await
        .unwrap();
    assert_eq!(created.recipe_id, "recipe_021");
}

#[tokio::test]
async fn test_create_recipe_rejection_is_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Missing required field: name"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .create_recipe(&miso_draft())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Validation {
            message: "Missing required field: name".to_owned()
        }
    );
}

#[tokio::test]
async fn test_create_recipe_server_error_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .create_recipe(&miso_draft())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network { status: Some(503), .. }));
}

#[tokio::test]
async fn test_create_recipe_without_id_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "recipe_id": "",
            "name": "Miso Soup",
            "ingredients": ["dashi"],
            "instructions": "Heat."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .create_recipe(&miso_draft())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_requests_carry_request_id_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client.list_recipes().await.unwrap();
    client.list_recipes().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let first = requests[0].headers.get("x-request-id").unwrap();
    let second = requests[1].headers.get("x-request-id").unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_get_recipe_dot_segments_never_hit_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    for id in [".", ".."] {
        let err = client.get_recipe(id).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound {
                recipe_id: id.to_owned()
            }
        );
    }
}
