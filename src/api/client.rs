// ABOUTME: HTTP implementation of the recipe service adapter using reqwest
// ABOUTME: Maps status codes to the ApiError taxonomy and tags each call with a request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use super::wire::{
    ensure_identified, is_absent_body, service_error_message, CreatedRecipeResponse,
    RecipeListResponse,
};
use super::{ApiError, RecipeApi};
use crate::config::environment::{parse_base_url, ClientConfig};
use crate::constants::{http, service_names};
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RecipeDraft};

/// Recipe service client over HTTP
///
/// Holds only a connection pool and the base URL; no per-call state survives
/// between requests.
#[derive(Debug, Clone)]
pub struct HttpRecipeClient {
    http: Client,
    base_url: Url,
}

impl HttpRecipeClient {
    /// Build a client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let mut builder = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .user_agent(format!(
                "{}/{}",
                service_names::RECIPE_PLANNER,
                env!("CARGO_PKG_VERSION")
            ));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            AppError::internal(format!("Failed to build HTTP client: {e}")).with_source(e)
        })?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Wrap an existing reqwest client
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `base_url` is not a usable http(s) base
    pub fn with_client(http: Client, base_url: &str) -> AppResult<Self> {
        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Normalized service base URL
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> Result<Url, ApiError> {
        self.base_url
            .join(http::RECIPES_PATH)
            .map_err(|e| ApiError::transport(format!("Invalid recipes URL: {e}")))
    }

    fn recipe_url(&self, recipe_id: &str) -> Result<Url, ApiError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| ApiError::transport("Recipe service URL cannot carry a path"))?
            .push(recipe_id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, method: &str, url: &Url) -> Result<Response, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        debug!(
            http.method = method,
            http.url = %url,
            request.id = %request_id,
            "Sending recipe service request"
        );

        let response = request
            .header(http::REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                warn!(http.method = method, http.url = %url, request.id = %request_id, error = %e, "Recipe service unreachable");
                ApiError::from(e)
            })?;

        debug!(
            http.status = response.status().as_u16(),
            request.id = %request_id,
            "Recipe service responded"
        );
        Ok(response)
    }
}

/// Drain a failed response into a message
async fn failure_message(response: Response) -> String {
    let status = response.status();
    let fallback = status.canonical_reason().unwrap_or("Request failed");
    let body = response.text().await.unwrap_or_default();
    service_error_message(&body, fallback)
}

#[async_trait]
impl RecipeApi for HttpRecipeClient {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = self.collection_url()?;
        let response = self.send(self.http.get(url.clone()), "GET", &url).await?;

        let status = response.status();
        if !status.is_success() {
            let message = failure_message(response).await;
            warn!(http.status = status.as_u16(), %message, "Listing recipes failed");
            return Err(ApiError::status(status.as_u16(), message));
        }

        let body = response.bytes().await?;
        let list: RecipeListResponse = serde_json::from_slice(&body)?;
        list.recipes.into_iter().map(ensure_identified).collect()
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, ApiError> {
        // `.` and `..` are dropped by URL path normalization and would address the collection
        if recipe_id.trim().is_empty() || matches!(recipe_id, "." | "..") {
            return Err(ApiError::not_found(recipe_id));
        }

        let url = self.recipe_url(recipe_id)?;
        let response = self.send(self.http.get(url.clone()), "GET", &url).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(recipe_id));
        }
        if !status.is_success() {
            let message = failure_message(response).await;
            warn!(http.status = status.as_u16(), recipe.id = recipe_id, %message, "Fetching recipe failed");
            return Err(ApiError::status(status.as_u16(), message));
        }

        let body = response.bytes().await?;
        if is_absent_body(&body) {
            return Err(ApiError::not_found(recipe_id));
        }
        ensure_identified(serde_json::from_slice(&body)?)
    }

    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let url = self.collection_url()?;
        let response = self
            .send(self.http.post(url.clone()).json(draft), "POST", &url)
            .await?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            let message = failure_message(response).await;
            warn!(http.status = status.as_u16(), %message, "Recipe rejected by service");
            return Err(ApiError::validation(message));
        }
        if !status.is_success() {
            let message = failure_message(response).await;
            warn!(http.status = status.as_u16(), %message, "Creating recipe failed");
            return Err(ApiError::status(status.as_u16(), message));
        }

        let body = response.bytes().await?;
        let created: CreatedRecipeResponse = serde_json::from_slice(&body)?;
        ensure_identified(created.into_recipe())
    }
}
