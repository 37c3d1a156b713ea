//! AI service integration for image generation
//!
//! Provides the Gemini-backed generation client plus the service trait the
//! session manager and app are written against.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::GeminiImageClient;
pub use mock::MockImageGenClient;

use crate::ai::gemini::types::{Content, GenerateContentResponse};
use crate::models::GenerationOptions;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenService: Send + Sync {
    /// Submit ordered conversation contents and return the raw response.
    async fn generate(
        &self,
        contents: &[Content],
        options: &GenerationOptions,
    ) -> Result<GenerateContentResponse>;
}
