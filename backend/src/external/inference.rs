//! Generative text inference client
//!
//! Client for a hosted text generation service (Hugging Face Inference API
//! contract) used to phrase short public safety alerts. Every failure mode
//! surfaces as an error; the advisory layer substitutes a templated string.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::InferenceConfig;
use crate::error::{AppError, AppResult};

/// Client for the text generation microservice
#[derive(Clone)]
pub struct InferenceClient {
    endpoint: String,
    api_token: String,
    http_client: Client,
}

/// Request to generate text from a prompt
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Debug, Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
}

/// One candidate from the generation API
#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

impl InferenceClient {
    /// Create a new inference client
    pub fn new(config: &InferenceConfig) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
            http_client,
        }
    }

    /// Create a client with custom endpoint (for testing)
    pub fn with_endpoint(config: &InferenceConfig, endpoint: String) -> Self {
        Self {
            endpoint,
            ..Self::new(config)
        }
    }

    /// Generate a short text completion for the prompt
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters { max_new_tokens: 60 },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::InferenceError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::InferenceError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let candidates: Vec<GeneratedText> = response
            .json()
            .await
            .map_err(|e| AppError::InferenceError(format!("failed to parse response: {}", e)))?;

        candidates
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .ok_or_else(|| AppError::InferenceError("empty response".to_string()))
    }
}
