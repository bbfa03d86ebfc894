use std::fmt;

use reqwest::{
    header::{self, HeaderValue},
    Request, Response,
};

use crate::app::envy::Envy;

use super::{
    config::{API_URL, GENERATE_ACTION, GENERATE_IMAGE_PATH},
    enums::image_model::ImageModel,
    errors::NovelAiApiError,
    models::{
        generate_image_parameters::GenerateImageParameters,
        input_spec::{InputSpec, InputSpecParams},
    },
    util::{negative_prompt::resolve_negative_prompt, quality_prompt::compose_quality_prompt},
};

/// Client for the image generation endpoint.
///
/// The [`reqwest::Client`] is supplied by the caller so connection pooling,
/// timeouts and proxies stay under their control. The api key is read on
/// every call; changing it needs `&mut self`.
#[derive(Clone)]
pub struct NovelAiApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl fmt::Debug for NovelAiApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NovelAiApi")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl NovelAiApi {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_api_url(client, API_URL)
    }

    pub fn with_api_url(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: String::new(),
        }
    }

    pub fn from_envy(client: reqwest::Client, envy: &Envy) -> Self {
        let mut api = match &envy.novelai_api_url {
            Some(api_url) => Self::with_api_url(client, api_url.as_str()),
            None => Self::new(client),
        };
        api.set_api_key(&envy.novelai_api_key);

        api
    }

    pub fn set_api_key(&mut self, api_key: &str) {
        self.api_key = api_key.to_string();
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Builds the POST for the generate endpoint without sending it.
    pub fn build_request(
        &self,
        model: ImageModel,
        prompt: &str,
        negative_prompt: &str,
        parameters: &GenerateImageParameters,
    ) -> Result<Request, NovelAiApiError> {
        let input_spec = provide_input_spec(model, prompt, negative_prompt, parameters);
        let body = input_spec.to_json()?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        authorization.set_sensitive(true);

        let url = format!(
            "{}{}",
            self.api_url.trim_end_matches('/'),
            GENERATE_IMAGE_PATH
        );
        let request = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body)
            .build()?;

        Ok(request)
    }

    /// Sends a generation request. The response is returned untouched,
    /// including non-success statuses.
    pub async fn generate_image(
        &self,
        model: ImageModel,
        prompt: &str,
        negative_prompt: &str,
        parameters: &GenerateImageParameters,
    ) -> Result<Response, NovelAiApiError> {
        let request = self.build_request(model, prompt, negative_prompt, parameters)?;

        match self.client.execute(request).await {
            Ok(res) => {
                tracing::debug!("generate_image responded with {}", res.status());
                Ok(res)
            }
            Err(e) => {
                tracing::error!(%e);
                Err(NovelAiApiError::Request(e))
            }
        }
    }
}

pub fn provide_input_spec(
    model: ImageModel,
    prompt: &str,
    negative_prompt: &str,
    parameters: &GenerateImageParameters,
) -> InputSpec {
    let input = match parameters.add_quality_prompt {
        true => compose_quality_prompt(model, prompt),
        false => prompt.to_string(),
    };
    let negative_prompt = resolve_negative_prompt(
        model,
        prompt,
        parameters.negative_prompt_preset,
        negative_prompt,
    );

    tracing::debug!(
        "composing {} request at {}x{}",
        model.value(),
        parameters.width,
        parameters.height
    );

    InputSpec {
        input,
        model: model.value().to_string(),
        action: GENERATE_ACTION.to_string(),
        parameters: InputSpecParams::new(parameters, negative_prompt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::novelai::enums::negative_prompt_preset::NegativePromptPreset;

    #[test]
    fn quality_prompt_only_when_enabled() {
        let mut parameters = GenerateImageParameters::default();

        let plain = provide_input_spec(ImageModel::AnimeV2, "cat", "", &parameters);
        assert_eq!(plain.input, "cat");

        parameters.add_quality_prompt = true;
        let composed = provide_input_spec(ImageModel::AnimeV2, "cat", "", &parameters);
        assert_eq!(composed.input, "very aesthetic, best quality, absurdres, cat");
    }

    #[test]
    fn nsfw_guard_sees_prompt_before_quality_tags() {
        let parameters = GenerateImageParameters {
            add_quality_prompt: true,
            negative_prompt_preset: NegativePromptPreset::Light,
            ..Default::default()
        };

        let input_spec = provide_input_spec(ImageModel::AnimeV3, "nsfw", "", &parameters);

        assert_eq!(
            input_spec.input,
            "nsfw, best quality, amazing quality, very aesthetic, absurdres"
        );
        assert_eq!(
            input_spec.parameters.negative_prompt,
            "lowres, jpeg artifacts, worst quality, watermark, blurry, very displeasing"
        );
    }

    #[test]
    fn carries_model_and_action() {
        let input_spec = provide_input_spec(
            ImageModel::InpaintingFurry,
            "fox",
            "",
            &GenerateImageParameters::default(),
        );

        assert_eq!(input_spec.model, "furry-diffusion-inpainting");
        assert_eq!(input_spec.action, "generate");
        assert_eq!(input_spec.parameters.negative_prompt, "low res");
    }

    #[test]
    fn from_envy_uses_override_url() {
        let envy = Envy {
            novelai_api_key: "pst-abc".to_string(),
            novelai_api_url: Some("http://127.0.0.1:9000".to_string()),
        };

        let api = NovelAiApi::from_envy(reqwest::Client::new(), &envy);

        assert_eq!(api.api_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn new_targets_public_api() {
        let api = NovelAiApi::new(reqwest::Client::new());
        assert_eq!(api.api_url(), "https://api.novelai.net");
    }

    #[test]
    fn override_url_with_trailing_slash_joins_cleanly() {
        for api_url in ["http://127.0.0.1:9000/", "http://127.0.0.1:9000"] {
            let api = NovelAiApi::with_api_url(reqwest::Client::new(), api_url);

            let request = api
                .build_request(
                    ImageModel::AnimeV3,
                    "cat",
                    "",
                    &GenerateImageParameters::default(),
                )
                .unwrap();

            assert_eq!(
                request.url().as_str(),
                "http://127.0.0.1:9000/ai/generate-image"
            );
        }
    }

    #[test]
    fn rejects_api_key_with_newline() {
        let mut api = NovelAiApi::new(reqwest::Client::new());
        api.set_api_key("pst-abc\n");

        let result = api.build_request(
            ImageModel::AnimeV3,
            "cat",
            "",
            &GenerateImageParameters::default(),
        );

        assert!(matches!(result, Err(NovelAiApiError::InvalidApiKey(_))));
    }
}
