//! OpenAI 图片生成客户端
//!
//! 提供文生图功能：调用 OpenAI Images API，返回生成图片的 URL。

use anyhow::Result;
use async_openai::{
    types::{CreateImageRequestArgs, Image, ImageModel, ImageSize, ImageResponseFormat},
    Client,
};
use openai_client::{mask_token, OpenAIConfig, DEFAULT_BASE_URL};
use std::sync::Arc;

/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// OpenAI 图片生成客户端
#[derive(Clone)]
pub struct ImageGenerationClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    size: ImageSize,
    masked_key: String,
}

impl ImageGenerationClient {
    /// 创建新的图片生成客户端（默认 base URL）
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// 使用自定义 base URL 创建客户端（用于兼容其他 OpenAI API 服务）
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let masked_key = mask_token(&api_key);
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            size: ImageSize::S1024x1024,
            masked_key,
        }
    }

    /// 设置模型（dall-e-2 或 dall-e-3）
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// 生成图片，返回第一张图片的 URL
    #[tracing::instrument(skip(self, prompt))]
    pub async fn generate_image(&self, prompt: &str) -> Result<String> {
        tracing::info!(
            model = %self.model,
            size = ?self.size,
            prompt_preview = %prompt.chars().take(100).collect::<String>(),
            api_key = %self.masked_key,
            "OpenAI image generation request"
        );

        let request = CreateImageRequestArgs::default()
            .prompt(prompt)
            .model(ImageModel::Other(self.model.clone()))
            .size(self.size)
            .response_format(ImageResponseFormat::Url)
            .n(1)
            .build()?;

        let response = self.client.images().create(request).await?;

        let url = response.data.iter().find_map(|image| match image.as_ref() {
            Image::Url { url, .. } => Some(url.clone()),
            _ => None,
        });
        match url {
            Some(url) => {
                tracing::info!(image_url = %url, "OpenAI image generation completed");
                Ok(url)
            }
            None => anyhow::bail!("No image URL in response"),
        }
    }
}
