//! Generation Capability - the consumed inference boundary
//!
//! The core never talks to a model API directly. Everything that needs raw
//! model output goes through this object-safe trait, so orchestrator and
//! validator can be driven by real HTTP providers in production and by
//! scripted capabilities in tests.

use async_trait::async_trait;

use crate::error::ServiceError;

/// A text-in / text-out inference backend.
///
/// Implementations must enforce their own timeouts: the core blocks on every
/// call and has no cancellation of its own.
#[async_trait]
pub trait GenerationCapability: Send + Sync {
    /// Send a prompt and return the raw model output.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ServiceError>;

    /// Human-readable backend name, used in logs and reports.
    fn name(&self) -> &str {
        "unnamed"
    }
}
