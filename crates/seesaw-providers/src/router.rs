//! Environment-driven provider selection.
//!
//! `SEESAW_PROVIDER` names the preferred backend; whichever backend in the
//! fallback order has credentials in the environment wins first.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use seesaw_core::GenerationCapability;

use crate::huggingface::{HuggingFaceClient, DEFAULT_MODEL as HF_DEFAULT_MODEL};
use crate::openai::OpenAiCompatibleClient;

const FALLBACK_ORDER: &[&str] = &["openai", "huggingface"];

/// Pick a generation backend from the environment.
///
/// Probes, in order: the provider named by `SEESAW_PROVIDER` (if any), then
/// `openai` (needs `OPENAI_API_KEY`; honors `OPENAI_BASE_URL` and
/// `OPENAI_MODEL`), then `huggingface` (needs `HF_API_KEY`; honors
/// `HF_MODEL`). Fails when no backend has credentials.
pub fn from_env() -> Result<Arc<dyn GenerationCapability>> {
    let preferred = std::env::var("SEESAW_PROVIDER")
        .ok()
        .map(|p| p.to_lowercase());

    let mut order: Vec<String> = Vec::new();
    if let Some(provider) = preferred {
        order.push(provider);
    }
    order.extend(FALLBACK_ORDER.iter().map(|s| s.to_string()));

    for name in &order {
        if let Some(capability) = build_provider(name) {
            info!(provider = %capability.name(), "selected generation backend");
            return Ok(capability);
        }
    }

    anyhow::bail!(
        "No generation backend configured. Set OPENAI_API_KEY or HF_API_KEY \
         (optionally SEESAW_PROVIDER to prefer one)."
    )
}

fn build_provider(name: &str) -> Option<Arc<dyn GenerationCapability>> {
    match name {
        "openai" => {
            let api_key = std::env::var("OPENAI_API_KEY").ok()?;
            let base_url = std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
            let model =
                std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
            Some(Arc::new(OpenAiCompatibleClient::new(
                "openai",
                Some(api_key),
                base_url,
                model,
            )))
        }
        "huggingface" => {
            let api_key = std::env::var("HF_API_KEY").ok()?;
            let model =
                std::env::var("HF_MODEL").unwrap_or_else(|_| HF_DEFAULT_MODEL.to_string());
            Some(Arc::new(HuggingFaceClient::new(api_key, model)))
        }
        _ => None,
    }
}
