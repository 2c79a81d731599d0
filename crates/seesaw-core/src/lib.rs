//! SeeSaw Core - the iterative generate/validate engine for project synthesis
//!
//! SeeSaw turns a tree of natural-language per-file descriptions into a
//! mutually consistent multi-file project by repeatedly invoking a code
//! generation capability and a compatibility check, threading one evolving
//! main artifact through every dependency's generation.
//!
//! # Architecture
//!
//! The engine is four small pieces around one external seam:
//!
//! 1. **Generation Capability** (`capability`): the consumed inference
//!    boundary — text prompt in, raw model output out, may fail transiently
//! 2. **Code Extractor** (`extract`): fenced-block parsing of raw model
//!    output into a clean source string
//! 3. **Validator** (`validator`): the compatibility check with its exact
//!    positional response protocol and per-session alignment counters
//! 4. **See-Saw Orchestrator** (`orchestrator`): the sequential control loop
//!    over the project tree, with abandon/skip failure policies
//! 5. **Metrics** (`metrics`): token estimates, per-step durations, and the
//!    session alignment rate
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use seesaw_core::{FileSpec, ProjectTree, SeeSawOrchestrator};
//! # use async_trait::async_trait;
//! # struct MyBackend;
//! # #[async_trait]
//! # impl seesaw_core::GenerationCapability for MyBackend {
//! #     async fn generate(&self, _p: &str) -> Result<String, seesaw_core::ServiceError> {
//! #         Ok(String::new())
//! #     }
//! # }
//!
//! # async fn demo() {
//! let tree = ProjectTree::new(vec![
//!     FileSpec::new("main.py", "main entry point wiring the API together"),
//!     FileSpec::new("db.py", "database access layer"),
//! ]);
//!
//! let orchestrator = SeeSawOrchestrator::new(Arc::new(MyBackend));
//! let outcome = orchestrator.run(&tree).await;
//!
//! println!("{}", outcome.status);
//! println!("alignment: {:.1}%", outcome.metrics.alignment_percent);
//! # }
//! ```
//!
//! # Design Principles
//!
//! 1. **Failures are absorbed, not raised**: `run` has no error path; a
//!    capability failure costs at most one unit of work
//! 2. **Sequential by contract**: every dependency reads the main content
//!    the previous step may have patched — do not parallelize the loop
//! 3. **Session-scoped state**: alignment counters belong to one session;
//!    nothing survives across `run` calls

#![deny(unsafe_code)]
#![warn(rust_2018_idioms, missing_debug_implementations, clippy::all)]

pub mod capability;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod orchestrator;
pub mod project;
pub mod prompt;
pub mod validator;

// Re-export commonly used types for convenience
pub use capability::GenerationCapability;
pub use error::{Result, SeesawError, ServiceError};
pub use extract::extract;
pub use metrics::{token_estimate, IterationMetric, Role, SessionMetrics};
pub use orchestrator::{SeeSawOrchestrator, SessionOutcome};
pub use project::{FileSpec, ProjectTree};
pub use validator::{ValidationOutcome, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
