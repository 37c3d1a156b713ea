//! Client-side orchestration for Gemini image generation.
//!
//! Submits text prompts (optionally across multiple refinement turns) to
//! the `generateContent` endpoint, configures output parameters, and
//! extracts the binary image payloads returned in the response.

pub mod ai;
pub mod app;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod prompts;
pub mod session;

pub use error::{Error, Result};
