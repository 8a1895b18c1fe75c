use crate::config::Config;
use crate::error::Result;
use crate::script::generate_script_with;
use crate::selector::RngSelector;
use crate::thumbnail::generate_thumbnail;
use crate::types::{GeneratedScript, GeneratedThumbnail, ScriptRequest, ThumbnailRequest};
use crate::{logi, logok};
use async_trait::async_trait;
use std::time::Duration;

/// Async boundary in front of the assemblers. A model-backed implementation
/// would slot in here; the crate ships only the template one.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_script(&self, request: &ScriptRequest) -> Result<GeneratedScript>;

    async fn generate_thumbnail(&self, request: &ThumbnailRequest) -> Result<GeneratedThumbnail>;
}

/// Template assembly with the configured artificial latency in front.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    script_latency: Duration,
    thumbnail_latency: Duration,
}

impl TemplateGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            script_latency: config.script_latency(),
            thumbnail_latency: config.thumbnail_latency(),
        }
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

#[async_trait]
impl ContentGenerator for TemplateGenerator {
    async fn generate_script(&self, request: &ScriptRequest) -> Result<GeneratedScript> {
        logi(format!(
            "Generating {} {} script for: {}",
            request.length, request.content_type, request.topic
        ));
        simulate_latency(self.script_latency).await;

        let script = generate_script_with(request, &mut RngSelector::from_entropy())?;
        logok(format!("Script ready: {}", script.title));
        Ok(script)
    }

    async fn generate_thumbnail(&self, request: &ThumbnailRequest) -> Result<GeneratedThumbnail> {
        logi(format!(
            "Generating {} / {} thumbnails for: {}",
            request.mood, request.color_scheme, request.topic
        ));
        simulate_latency(self.thumbnail_latency).await;

        let thumbnail = generate_thumbnail(request)?;
        logok(format!("Thumbnails ready: {} variations", thumbnail.variations.len()));
        Ok(thumbnail)
    }
}
