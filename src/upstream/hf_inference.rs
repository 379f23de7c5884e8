//! Hugging Face inference client for image generation.
//!
//! An [`ImageClient`] is constructed once at startup from the loaded
//! credential and handed to the image tool; the credential is never
//! read from ambient process state at call time. Generation runs
//! FLUX.1-schnell with a fixed low step count, matching the interactive
//! latency the server targets.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::info;

use super::{USER_AGENT, UpstreamError};

const MODEL_URL: &str =
    "https://router.huggingface.co/hf-inference/models/black-forest-labs/FLUX.1-schnell";

const INFERENCE_STEPS: u32 = 5;

/// Client for the image-synthesis backend.
#[derive(Debug, Clone)]
pub struct ImageClient {
    token: Option<String>,
}

impl ImageClient {
    /// Create a client holding the (possibly absent) API token.
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Whether a credential is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Generate an image for `prompt` and return it as base64 PNG data.
    /// Blocking.
    pub fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| UpstreamError::rejected("no API token configured"))?;

        info!("Generating image ({} inference steps)", INFERENCE_STEPS);

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(MODEL_URL)
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&serde_json::json!({
                "inputs": prompt,
                "parameters": { "num_inference_steps": INFERENCE_STEPS }
            }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .unwrap_or_else(|_| "request failed".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                detail: detail.chars().take(200).collect(),
            });
        }

        let bytes = response.bytes()?;
        if bytes.is_empty() {
            return Err(UpstreamError::malformed("empty image payload"));
        }

        Ok(normalize_payload(&bytes))
    }
}

/// Normalize the backend's payload into canonical base64.
///
/// The backend may answer with raw image bytes or with an already
/// base64-encoded body. A body that is printable ASCII and decodes as
/// base64 is taken as pre-encoded; anything else is treated as raw
/// bytes and encoded.
pub fn normalize_payload(bytes: &[u8]) -> String {
    if bytes.is_ascii()
        && let Ok(text) = std::str::from_utf8(bytes)
    {
        let trimmed = text.trim();
        if !trimmed.is_empty() && BASE64.decode(trimmed).is_ok() {
            return trimmed.to_string();
        }
    }
    BASE64.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_normalize_raw_bytes_encoded() {
        let normalized = normalize_payload(PNG_MAGIC);
        assert_eq!(BASE64.decode(&normalized).unwrap(), PNG_MAGIC);
    }

    #[test]
    fn test_normalize_preencoded_passthrough() {
        let encoded = BASE64.encode(PNG_MAGIC);
        assert_eq!(normalize_payload(encoded.as_bytes()), encoded);
    }

    #[test]
    fn test_normalize_ascii_non_base64_is_encoded() {
        // Printable but not valid base64 (spaces, punctuation).
        let body = b"not a base64 payload!";
        let normalized = normalize_payload(body);
        assert_eq!(BASE64.decode(&normalized).unwrap(), body);
    }

    #[test]
    fn test_generate_without_token_fails() {
        let client = ImageClient::new(None);
        assert!(!client.has_token());
        assert!(client.generate("a cat").is_err());
    }
}
