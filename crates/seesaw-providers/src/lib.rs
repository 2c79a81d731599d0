//! SeeSaw Providers - generation capability backends
//!
//! Implementations of `seesaw_core::GenerationCapability` over HTTP:
//! an OpenAI-compatible chat-completions client and a Hugging Face
//! Inference API client, plus an environment-driven router that picks
//! whichever backend has credentials.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms, clippy::all)]

pub mod huggingface;
pub mod openai;
pub mod router;

pub use huggingface::HuggingFaceClient;
pub use openai::OpenAiCompatibleClient;
pub use router::from_env;
