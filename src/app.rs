//! Application orchestration for the generation flows.

use crate::ai::gemini::types::{Content, GenerateContentResponse};
use crate::ai::{GeminiImageClient, ImageGenService};
use crate::extract::{self, ImageOutcome};
use crate::models::{AspectRatio, Config, GenerationOptions, GroundingTool, ImageSize};
use crate::output;
use crate::session::ImageSession;
use crate::{prompts, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Coordinates prompt submission, response extraction, and local
/// persistence for the runnable flows.
pub struct App {
    service: Box<dyn ImageGenService>,
    output_dir: PathBuf,
}

impl App {
    /// Build an app from a concrete service dependency.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_service(service: Box<dyn ImageGenService>, output_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            service,
            output_dir,
        })
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;
        info!("Image provider: Gemini (model: {})", config.image_model);

        let service = Box::new(GeminiImageClient::new(
            config.gemini_api_key,
            config.image_model,
        ));

        Self::with_service(service, config.output_dir)
    }

    /// One-shot generation with the default TEXT+IMAGE modalities.
    pub async fn run_basic(&self) -> Result<()> {
        info!("Generating image...");

        let response = self.single_shot(prompts::BASIC, &GenerationOptions::new()).await?;
        self.save_outcome(&response, "coffee_shop.png")?;

        Ok(())
    }

    /// One-shot 4K generation with a cinematic 16:9 frame.
    pub async fn run_high_res(&self) -> Result<()> {
        info!("Generating 4K image (this may take a moment)...");

        let options = GenerationOptions::new()
            .with_aspect_ratio(AspectRatio::Widescreen)
            .with_image_size(ImageSize::FourK);
        let response = self.single_shot(prompts::HIGH_RES, &options).await?;
        self.save_outcome(&response, "smartwatch_4k.png")?;

        Ok(())
    }

    /// One-shot generation grounded with Google Search results.
    pub async fn run_grounded(&self) -> Result<()> {
        info!("Generating infographic with real-time data (Google Search grounding)...");

        let options = GenerationOptions::new().with_tool(GroundingTool::GoogleSearch);
        let response = self.single_shot(prompts::GROUNDED, &options).await?;

        if let Some(text) = extract::aggregated_text(&response) {
            info!("Search findings: {}", text);
        }
        self.save_outcome(&response, "weather_infographic.png")?;

        Ok(())
    }

    /// Three-turn refinement session producing v1, v2, and final images.
    pub async fn run_iterative(&self, name: &str) -> Result<()> {
        info!("Starting iterative refinement session for '{}'", name);

        let mut session = ImageSession::new(self.service.as_ref(), GenerationOptions::new())?;

        let prefix = name.to_lowercase().replace(' ', "_");
        let steps = [
            (
                prompts::render(prompts::LOGO_INITIAL, &[("name", name)]),
                format!("{}_v1.png", prefix),
            ),
            (
                prompts::LOGO_REFINE_COLORS.to_string(),
                format!("{}_v2.png", prefix),
            ),
            (
                prompts::LOGO_REFINE_TYPE.to_string(),
                format!("{}_final.png", prefix),
            ),
        ];

        for (step, (prompt, filename)) in steps.iter().enumerate() {
            info!("Step {}: sending refinement prompt", step + 1);

            let response = session.send(prompt).await?;
            if let Some(text) = extract::aggregated_text(&response) {
                info!("Response: {}", text);
            }
            self.save_outcome(&response, filename)?;
        }

        info!(
            "Iterative refinement complete ({} turns recorded)",
            session.history().len()
        );

        Ok(())
    }

    async fn single_shot(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerateContentResponse> {
        let contents = vec![Content::user_text(prompt)];
        self.service.generate(&contents, options).await
    }

    /// Persist the first extracted image, or log why none was produced.
    ///
    /// Returns whether a file was written.
    fn save_outcome(&self, response: &GenerateContentResponse, filename: &str) -> Result<bool> {
        match extract::first_image(response)? {
            ImageOutcome::Image(payload) => {
                let path = self.output_dir.join(filename);
                output::save_image(&path, &payload)?;
                Ok(true)
            }
            ImageOutcome::NoImage => {
                match extract::aggregated_text(response) {
                    Some(text) => warn!("No image produced; model said: {}", text),
                    None => warn!("No image produced and no explanation returned"),
                }
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockImageGenClient;
    use tempfile::tempdir;

    fn build_test_app(client: MockImageGenClient, output_dir: PathBuf) -> App {
        App::with_service(Box::new(client), output_dir).unwrap()
    }

    #[tokio::test]
    async fn test_run_basic_writes_one_image() {
        let dir = tempdir().unwrap();
        let client = MockImageGenClient::new();
        let app = build_test_app(client.clone(), dir.path().to_path_buf());

        app.run_basic().await.unwrap();

        assert!(dir.path().join("coffee_shop.png").exists());
        assert_eq!(client.get_call_count(), 1);
        assert_eq!(client.recorded_requests()[0].len(), 1);
    }

    #[tokio::test]
    async fn test_run_iterative_writes_three_versions_with_growing_context() {
        let dir = tempdir().unwrap();
        let client = MockImageGenClient::new();
        let app = build_test_app(client.clone(), dir.path().to_path_buf());

        app.run_iterative("CloudFlow").await.unwrap();

        assert!(dir.path().join("cloudflow_v1.png").exists());
        assert!(dir.path().join("cloudflow_v2.png").exists());
        assert!(dir.path().join("cloudflow_final.png").exists());

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].len(), 1);
        assert_eq!(requests[1].len(), 3);
        assert_eq!(requests[2].len(), 5);
    }

    #[tokio::test]
    async fn test_text_only_response_writes_nothing_and_succeeds() {
        let dir = tempdir().unwrap();
        let client = MockImageGenClient::new()
            .with_response(MockImageGenClient::text_response("cannot fulfill this"));
        let app = build_test_app(client, dir.path().to_path_buf());

        app.run_basic().await.unwrap();

        assert!(!dir.path().join("coffee_shop.png").exists());
    }

    #[tokio::test]
    async fn test_with_service_creates_output_directory() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("out");

        build_test_app(MockImageGenClient::new(), output_dir.clone());

        assert!(output_dir.exists());
    }
}
