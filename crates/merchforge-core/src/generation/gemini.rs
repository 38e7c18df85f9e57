//! Gemini image generation provider.
//!
//! Sends reference images as `inlineData` parts followed by the instruction
//! text, and pulls the first `inlineData` part out of the first candidate.

use super::provider::{GenerationProvider, GenerationRequest, ImagePart};
use crate::error::UpstreamError;
use crate::handle::ImageHandle;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Gemini provider using the `generateContent` endpoint.
pub struct GeminiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(endpoint: &str, api_key: &str, model: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

// --- Request types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Part {
    #[serde(rename = "inlineData")]
    InlineData(InlineData),
    #[serde(rename = "text")]
    Text(String),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePart {
    inline_data: Option<InlineData>,
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<ImageHandle, UpstreamError> {
        let start = Instant::now();

        let mut parts: Vec<Part> = request
            .images
            .iter()
            .map(|img: &ImagePart| {
                Part::InlineData(InlineData {
                    mime_type: img.mime_type.clone(),
                    data: img.data.clone(),
                })
            })
            .collect();
        parts.push(Part::Text(request.prompt.clone()));

        let body = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| UpstreamError::Request {
                message: format!("Gemini request failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: GenerateContentResponse =
            resp.json().await.map_err(|e| UpstreamError::Request {
                message: format!("Failed to parse Gemini response: {e}"),
            })?;

        let inline = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.content)
            .filter_map(|c| c.parts)
            .flatten()
            .find_map(|p| p.inline_data)
            .ok_or(UpstreamError::NoImage)?;

        let bytes = BASE64
            .decode(&inline.data)
            .map_err(|e| UpstreamError::Request {
                message: format!("Gemini returned undecodable image payload: {e}"),
            })?;

        tracing::debug!(
            model = %self.model,
            bytes = bytes.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "generation call complete"
        );

        Ok(ImageHandle::with_mime_type(bytes, inline.mime_type))
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let provider = GeminiProvider::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "k",
            "gemini-2.5-flash-image-preview",
            Duration::from_secs(120),
        );
        assert_eq!(
            provider.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image-preview:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData(InlineData {
                        mime_type: "image/png".to_string(),
                        data: "AAAA".to_string(),
                    }),
                    Part::Text("make it pop".to_string()),
                ],
            }],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"inlineData\""));
        assert!(json.contains("\"mimeType\":\"image/png\""));
        assert!(json.contains("\"text\":\"make it pop\""));
    }

    #[test]
    fn test_response_parsing_finds_inline_data() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is your image"},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0="}}
                    ]
                }
            }]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let inline = parsed
            .candidates
            .unwrap()
            .into_iter()
            .filter_map(|c| c.content)
            .filter_map(|c| c.parts)
            .flatten()
            .find_map(|p| p.inline_data)
            .unwrap();
        assert_eq!(inline.mime_type, "image/png");
    }

    #[test]
    fn test_response_without_image_is_detectable() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "sorry"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let inline = parsed
            .candidates
            .unwrap()
            .into_iter()
            .filter_map(|c| c.content)
            .filter_map(|c| c.parts)
            .flatten()
            .find_map(|p| p.inline_data);
        assert!(inline.is_none());
    }
}
