//! Multi-turn refinement sessions.
//!
//! A session owns an append-only conversation history and threads the whole
//! history into every request, so each refinement prompt is interpreted in
//! the context of prior prompts and prior generated images. Turns are never
//! rewritten or removed once appended.

use crate::ai::gemini::types::{Content, GenerateContentResponse};
use crate::ai::ImageGenService;
use crate::models::GenerationOptions;
use crate::Result;

#[derive(Debug)]
pub struct ImageSession<'a, S: ?Sized> {
    service: &'a S,
    options: GenerationOptions,
    history: Vec<Content>,
}

impl<'a, S: ImageGenService + ?Sized> ImageSession<'a, S> {
    /// Start an empty session over `service`.
    ///
    /// Fails when `options` does not request image output. Credentials are
    /// validated once when the service is constructed, not per turn.
    pub fn new(service: &'a S, options: GenerationOptions) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            service,
            options,
            history: Vec::new(),
        })
    }

    /// Send one prompt with the full accumulated history as context.
    ///
    /// The user turn is appended before the request goes out. On success the
    /// first candidate's parts are appended as the model turn and the
    /// response is returned unmodified. On failure the history keeps the
    /// user turn and records no model turn, so a retried send would submit
    /// the prompt twice; deduplication is a caller concern.
    ///
    /// The `&mut self` receiver means turn n+1 cannot be issued before turn
    /// n's reply has been folded into the history.
    pub async fn send(&mut self, prompt: &str) -> Result<GenerateContentResponse> {
        self.history.push(Content::user_text(prompt));

        let response = self.service.generate(&self.history, &self.options).await?;

        // Only the first candidate is carried forward as context; alternative
        // candidates stay visible to the caller through the returned response.
        // A zero-candidate reply still appends an empty model turn.
        let parts = response
            .candidates
            .first()
            .map(|candidate| candidate.content.parts.clone())
            .unwrap_or_default();
        self.history.push(Content::model(parts));

        tracing::debug!("Session history now holds {} turn(s)", self.history.len());

        Ok(response)
    }

    /// Turns recorded so far, in send order.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }
}
