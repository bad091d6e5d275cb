// src/integrations/remote/client.rs
//
// HTTP implementation of the remote recipe source.
//
// ARCHITECTURE:
// - Plain JSON REST client over a recipe origin service
// - Handles transport, auth and status mapping; nothing else
// - Returns domain Recipes; NO local-store mutation

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{Recipe, RecipeCategory};
use crate::error::{AppError, AppResult};
use crate::integrations::remote::RecipeRemoteSource;

/// Response body for an upload
#[derive(Debug, Deserialize)]
struct UploadResponse {
    id: String,
}

pub struct HttpRecipeSource {
    base_url: String,
    http_client: Client,
    auth_token: Option<String>,
}

impl HttpRecipeSource {
    /// Create a client against a recipe origin service
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
            auth_token: None,
        }
    }

    /// Create client with authentication token
    pub fn with_auth(base_url: impl Into<String>, token: String) -> Self {
        let mut client = Self::new(base_url);
        client.auth_token = Some(token);
        client
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path))
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.auth_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        request
    }

    async fn fetch_list(&self, request: reqwest::RequestBuilder) -> AppResult<Vec<Recipe>> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Recipe origin request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "Recipe origin returned status: {}",
                response.status()
            )));
        }

        let recipes = response
            .json::<Vec<Recipe>>()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse origin response: {}", e)))?;
        Ok(recipes)
    }
}

#[async_trait]
impl RecipeRemoteSource for HttpRecipeSource {
    async fn fetch_all(&self) -> AppResult<Vec<Recipe>> {
        self.fetch_list(self.request(reqwest::Method::GET, "/recipes"))
            .await
    }

    async fn fetch_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        let response = self
            .request(reqwest::Method::GET, &format!("/recipes/{}", id))
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Recipe origin request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "Recipe origin returned status: {}",
                response.status()
            )));
        }

        let recipe = response
            .json::<Recipe>()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse origin response: {}", e)))?;
        Ok(Some(recipe))
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Recipe>> {
        let request = self
            .request(reqwest::Method::GET, "/recipes/search")
            .query(&[("q", query)]);
        self.fetch_list(request).await
    }

    async fn fetch_by_category(&self, category: RecipeCategory) -> AppResult<Vec<Recipe>> {
        self.fetch_list(self.request(
            reqwest::Method::GET,
            &format!("/recipes/category/{}", category),
        ))
        .await
    }

    async fn upload(&self, recipe: &Recipe) -> AppResult<String> {
        let response = self
            .request(reqwest::Method::POST, "/recipes")
            .json(recipe)
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Recipe upload failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "Recipe origin returned status: {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::Remote(format!("Failed to parse upload response: {}", e)))?;
        Ok(body.id)
    }

    async fn update(&self, recipe: &Recipe) -> AppResult<()> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/recipes/{}", recipe.id))
            .json(recipe)
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Recipe update failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "Recipe origin returned status: {}",
                response.status()
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/recipes/{}", id))
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Recipe delete failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Remote(format!(
                "Recipe origin returned status: {}",
                response.status()
            )));
        }
        Ok(())
    }
}
