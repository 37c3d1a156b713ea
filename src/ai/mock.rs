use super::ImageGenService;
use crate::ai::gemini::types::{Candidate, Content, GenerateContentResponse, InlineData, Part};
use crate::models::GenerationOptions;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Tiny valid PNG returned when no canned response is queued.
const DEFAULT_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44,
    0x41, // IDAT chunk
    0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2, 0x25,
    0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[derive(Clone, Debug)]
pub struct MockImageGenClient {
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    requests: Arc<Mutex<Vec<Vec<Content>>>>,
    fail_on_call: Arc<Mutex<Option<usize>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_on_call: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Make the nth call (1-based) fail with a transport-style error.
    pub fn with_failure_on_call(self, call: usize) -> Self {
        *self.fail_on_call.lock().unwrap() = Some(call);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Full contents of every request received, in call order.
    pub fn recorded_requests(&self) -> Vec<Vec<Content>> {
        self.requests.lock().unwrap().clone()
    }

    /// A response carrying a single inline PNG candidate.
    pub fn png_response() -> GenerateContentResponse {
        use base64::Engine as _;
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content::model(vec![Part::InlineData {
                    inline_data: InlineData {
                        mime_type: "image/png".to_string(),
                        data: base64::engine::general_purpose::STANDARD.encode(DEFAULT_PNG),
                    },
                }]),
            }],
        }
    }

    /// A text-only response, as the service returns for refusals.
    pub fn text_response(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content::model(vec![Part::Text {
                    text: text.to_string(),
                }]),
            }],
        }
    }
}

impl Default for MockImageGenClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenService for MockImageGenClient {
    async fn generate(
        &self,
        contents: &[Content],
        options: &GenerationOptions,
    ) -> Result<GenerateContentResponse> {
        options.validate()?;

        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if *self.fail_on_call.lock().unwrap() == Some(*count) {
            return Err(Error::Provider("mock transport failure".to_string()));
        }

        self.requests.lock().unwrap().push(contents.to_vec());

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Self::png_response())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    #[tokio::test]
    async fn test_mock_returns_png_by_default() {
        let client = MockImageGenClient::new();

        let response = client
            .generate(&[Content::user_text("test")], &GenerationOptions::new())
            .await
            .unwrap();

        match extract::first_image(&response).unwrap() {
            extract::ImageOutcome::Image(payload) => {
                assert_eq!(payload.mime_type, "image/png");
                assert_eq!(payload.data, DEFAULT_PNG);
            }
            extract::ImageOutcome::NoImage => panic!("expected an image"),
        }
    }

    #[tokio::test]
    async fn test_mock_cycles_queued_responses() {
        let client = MockImageGenClient::new()
            .with_response(MockImageGenClient::text_response("first"))
            .with_response(MockImageGenClient::text_response("second"));

        let contents = [Content::user_text("test")];
        let options = GenerationOptions::new();

        let r1 = client.generate(&contents, &options).await.unwrap();
        let r2 = client.generate(&contents, &options).await.unwrap();
        let r3 = client.generate(&contents, &options).await.unwrap();

        assert_eq!(extract::aggregated_text(&r1), Some("first"));
        assert_eq!(extract::aggregated_text(&r2), Some("second"));
        assert_eq!(extract::aggregated_text(&r3), Some("first"));
        assert_eq!(client.get_call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_records_request_contents() {
        let client = MockImageGenClient::new();

        client
            .generate(
                &[Content::user_text("one"), Content::user_text("two")],
                &GenerationOptions::new(),
            )
            .await
            .unwrap();

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].len(), 2);
    }

    #[tokio::test]
    async fn test_mock_fails_on_configured_call() {
        let client = MockImageGenClient::new().with_failure_on_call(2);

        let contents = [Content::user_text("test")];
        let options = GenerationOptions::new();

        assert!(client.generate(&contents, &options).await.is_ok());
        let err = client.generate(&contents, &options).await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
        assert!(client.generate(&contents, &options).await.is_ok());
    }
}
