use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse};
use crate::ai::ImageGenService;
use crate::models::{GenerationOptions, GroundingTool};
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [Content],
    #[serde(rename = "generationConfig")]
    generation_config: RequestGenerationConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<RequestTool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    response_modalities: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<RequestImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestImageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    aspect_ratio: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_size: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestTool {
    #[serde(skip_serializing_if = "Option::is_none")]
    google_search: Option<GoogleSearch>,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

impl RequestGenerationConfig {
    fn from_options(options: &GenerationOptions) -> Self {
        let image_config = if options.aspect_ratio.is_some() || options.image_size.is_some() {
            Some(RequestImageConfig {
                aspect_ratio: options.aspect_ratio.map(|a| a.as_str()),
                image_size: options.image_size.map(|s| s.as_str()),
            })
        } else {
            None
        };

        Self {
            response_modalities: options.modalities.iter().map(|m| m.as_str()).collect(),
            image_config,
        }
    }
}

fn request_tools(options: &GenerationOptions) -> Vec<RequestTool> {
    options
        .tools
        .iter()
        .map(|tool| match tool {
            GroundingTool::GoogleSearch => RequestTool {
                google_search: Some(GoogleSearch {}),
            },
        })
        .collect()
}

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(120),
                client,
            ),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl ImageGenService for GeminiImageClient {
    async fn generate(
        &self,
        contents: &[Content],
        options: &GenerationOptions,
    ) -> Result<GenerateContentResponse> {
        options.validate()?;

        let request = GenerateRequest {
            contents,
            generation_config: RequestGenerationConfig::from_options(options),
            tools: request_tools(options),
        };

        tracing::debug!(
            "Requesting image generation with {} turn(s) of context",
            contents.len()
        );

        self.http.generate_content(&request).await
    }
}
