//! Deterministic extraction of image and text payloads from responses.
//!
//! Walks candidates in response order and parts in part order, so repeated
//! calls over the same response always yield the same payloads.

use crate::ai::gemini::types::{GenerateContentResponse, InlineData, Part};
use crate::{Error, Result};
use base64::Engine as _;

/// A decoded binary image pulled out of a response part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Outcome of single-image extraction.
///
/// A structurally valid response with no binary part is a legitimate
/// outcome (safety refusal, search-grounded text-only answer), not an
/// error; callers branch on it instead of unwrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Image(ImagePayload),
    NoImage,
}

fn decode(inline_data: &InlineData) -> Result<ImagePayload> {
    let data = base64::engine::general_purpose::STANDARD
        .decode(&inline_data.data)
        .map_err(|e| Error::Provider(format!("Failed to decode base64 image: {}", e)))?;

    Ok(ImagePayload {
        mime_type: inline_data.mime_type.clone(),
        data,
    })
}

/// First `inlineData` part in candidate-then-part order, or `NoImage` when
/// no candidate carries one.
pub fn first_image(response: &GenerateContentResponse) -> Result<ImageOutcome> {
    for candidate in &response.candidates {
        for part in &candidate.content.parts {
            match part {
                Part::InlineData { inline_data } => {
                    return Ok(ImageOutcome::Image(decode(inline_data)?));
                }
                Part::Text { .. } | Part::Other(_) => {}
            }
        }
    }

    Ok(ImageOutcome::NoImage)
}

/// Every `inlineData` part across all candidates, in candidate-then-part
/// order.
pub fn all_images(response: &GenerateContentResponse) -> Result<Vec<ImagePayload>> {
    let mut images = Vec::new();
    for candidate in &response.candidates {
        for part in &candidate.content.parts {
            if let Part::InlineData { inline_data } = part {
                images.push(decode(inline_data)?);
            }
        }
    }

    Ok(images)
}

/// First non-empty text part across candidates.
///
/// Used for diagnostic display (search findings, refusal explanations);
/// absence of text is not an error.
pub fn aggregated_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .iter()
        .flat_map(|candidate| candidate.content.parts.iter())
        .find_map(|part| match part {
            Part::Text { text } if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        })
}
