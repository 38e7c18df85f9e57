//! High-level generation operations.
//!
//! Maps the studio's four user actions onto provider calls. Each call
//! produces a fresh `ImageHandle`; the caller replaces any previous result
//! with it (handles are never mutated in place).

use super::provider::{GenerationProvider, GenerationRequest, ImagePart};
use crate::error::UpstreamError;
use crate::handle::ImageHandle;
use crate::prompt::REMOVE_BACKGROUND_PROMPT;

/// Client over a boxed generation provider.
#[derive(Debug)]
pub struct GenerationClient {
    provider: Box<dyn GenerationProvider>,
}

impl GenerationClient {
    pub fn new(provider: Box<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// Provider name, for logging.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Text-to-image generation.
    pub async fn generate_image(&self, prompt: &str) -> Result<ImageHandle, UpstreamError> {
        tracing::info!(provider = self.provider.name(), "generating image");
        self.provider
            .generate(&GenerationRequest::from_prompt(prompt))
            .await
    }

    /// Apply an instruction to an uploaded image.
    pub async fn edit_image(
        &self,
        image: &ImageHandle,
        prompt: &str,
    ) -> Result<ImageHandle, UpstreamError> {
        tracing::info!(provider = self.provider.name(), "editing image");
        let request =
            GenerationRequest::with_images(prompt, vec![ImagePart::from_handle(image)]);
        self.provider.generate(&request).await
    }

    /// Composite a logo onto a product, optionally worn by a model.
    ///
    /// Reference order is product, logo, then model photo when present —
    /// the prompt wording refers to them in that order.
    pub async fn generate_mockup(
        &self,
        product_image: &ImageHandle,
        logo: &ImageHandle,
        prompt: &str,
        model_image: Option<&ImageHandle>,
    ) -> Result<ImageHandle, UpstreamError> {
        tracing::info!(
            provider = self.provider.name(),
            with_model = model_image.is_some(),
            "generating mockup"
        );
        let mut images = vec![
            ImagePart::from_handle(product_image),
            ImagePart::from_handle(logo),
        ];
        if let Some(model) = model_image {
            images.push(ImagePart::from_handle(model));
        }
        let request = GenerationRequest::with_images(prompt, images);
        self.provider.generate(&request).await
    }

    /// Strip the background from a logo before compositing.
    pub async fn remove_logo_background(
        &self,
        logo: &ImageHandle,
    ) -> Result<ImageHandle, UpstreamError> {
        self.edit_image(logo, REMOVE_BACKGROUND_PROMPT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type SharedRequest = Arc<Mutex<Option<GenerationRequest>>>;

    /// Records the last request and answers with a fixed handle.
    struct RecordingProvider {
        last: SharedRequest,
    }

    #[async_trait]
    impl GenerationProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<ImageHandle, UpstreamError> {
            *self.last.lock().unwrap() = Some(request.clone());
            Ok(ImageHandle::with_mime_type(vec![1, 2, 3], "image/png"))
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(1)
        }
    }

    fn client_with_recorder() -> (GenerationClient, SharedRequest) {
        let last: SharedRequest = Arc::new(Mutex::new(None));
        let provider = Box::new(RecordingProvider { last: last.clone() });
        (GenerationClient::new(provider), last)
    }

    fn last_request(last: &SharedRequest) -> GenerationRequest {
        last.lock().unwrap().clone().unwrap()
    }

    #[tokio::test]
    async fn test_generate_image_sends_no_references() {
        let (client, last) = client_with_recorder();
        client.generate_image("an astronaut").await.unwrap();
        let req = last_request(&last);
        assert_eq!(req.prompt, "an astronaut");
        assert!(req.images.is_empty());
    }

    #[tokio::test]
    async fn test_edit_image_sends_one_reference() {
        let (client, last) = client_with_recorder();
        let img = ImageHandle::with_mime_type(vec![9], "image/jpeg");
        client.edit_image(&img, "add a vintage filter").await.unwrap();
        let req = last_request(&last);
        assert_eq!(req.images.len(), 1);
        assert_eq!(req.images[0].mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_mockup_reference_order() {
        let (client, last) = client_with_recorder();
        let product = ImageHandle::with_mime_type(vec![1], "image/jpeg");
        let logo = ImageHandle::with_mime_type(vec![2], "image/png");
        let model = ImageHandle::with_mime_type(vec![3], "image/webp");

        client
            .generate_mockup(&product, &logo, "center it", Some(&model))
            .await
            .unwrap();
        let req = last_request(&last);
        let mimes: Vec<_> = req.images.iter().map(|i| i.mime_type.as_str()).collect();
        assert_eq!(mimes, vec!["image/jpeg", "image/png", "image/webp"]);
    }

    #[tokio::test]
    async fn test_mockup_without_model_sends_two_references() {
        let (client, last) = client_with_recorder();
        let product = ImageHandle::from_bytes(vec![1]);
        let logo = ImageHandle::from_bytes(vec![2]);

        client
            .generate_mockup(&product, &logo, "center it", None)
            .await
            .unwrap();
        assert_eq!(last_request(&last).images.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_background_uses_fixed_prompt() {
        let (client, last) = client_with_recorder();
        let logo = ImageHandle::from_bytes(vec![2]);
        client.remove_logo_background(&logo).await.unwrap();
        let req = last_request(&last);
        assert!(req.prompt.contains("Remove the background"));
        assert_eq!(req.images.len(), 1);
    }
}
