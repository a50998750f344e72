pub mod ask;
pub mod doctor;
pub mod serve;

use quarry_config::AppConfig;
use quarry_core::provider::Provider;
use quarry_pipeline::ChatPipeline;
use quarry_providers::OpenAiCompatProvider;
use std::sync::Arc;

/// Build the shared provider and pipeline from validated configuration.
pub(crate) fn build_pipeline(
    config: &AppConfig,
) -> Result<ChatPipeline, Box<dyn std::error::Error>> {
    let provider: Arc<dyn Provider> = Arc::new(OpenAiCompatProvider::from_config(&config.openai));
    let pipeline = ChatPipeline::from_config(config, provider)
        .map_err(|e| format!("Failed to build pipeline: {e}"))?;
    Ok(pipeline)
}
