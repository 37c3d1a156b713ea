//! Generation options and environment configuration
//!
//! Defines the caller-facing knobs for image generation requests and the
//! environment-sourced runtime configuration.

use crate::{Error, Result};
use std::path::PathBuf;

/// Content kinds the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Text,
    Image,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "TEXT",
            Modality::Image => "IMAGE",
        }
    }
}

/// Output aspect ratios accepted by the image models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Widescreen,
    TallPortrait,
    Landscape,
    Portrait,
    Cinematic,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::TallPortrait => "9:16",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Cinematic => "21:9",
        }
    }
}

/// Output resolution tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    OneK,
    TwoK,
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

/// Server-side tools the model may call before producing a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingTool {
    GoogleSearch,
}

/// Caller-facing request configuration.
///
/// Immutable per session/request; image output is the only required
/// modality, everything else is optional.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub modalities: Vec<Modality>,
    pub aspect_ratio: Option<AspectRatio>,
    pub image_size: Option<ImageSize>,
    pub tools: Vec<GroundingTool>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            modalities: vec![Modality::Text, Modality::Image],
            aspect_ratio: None,
            image_size: None,
            tools: Vec::new(),
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modalities(mut self, modalities: Vec<Modality>) -> Self {
        self.modalities = modalities;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn with_image_size(mut self, image_size: ImageSize) -> Self {
        self.image_size = Some(image_size);
        self
    }

    pub fn with_tool(mut self, tool: GroundingTool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.modalities.contains(&Modality::Image) {
            return Err(Error::Config(
                "IMAGE response modality is required".to_string(),
            ));
        }
        Ok(())
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub image_model: String,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| Error::Config("GEMINI_API_KEY not set".to_string()))?,
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-3-pro-image-preview".to_string()),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string())
                .into(),
        })
    }
}
