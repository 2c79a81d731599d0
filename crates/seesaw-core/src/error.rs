//! Error types for SeeSaw Core
//!
//! This module defines all error types used throughout the SeeSaw core engine.
//! We use `thiserror` for ergonomic error definitions with automatic Display/Error implementations.

use thiserror::Error;

/// Result type alias for SeeSaw operations
pub type Result<T> = std::result::Result<T, SeesawError>;

/// Main error type for SeeSaw operations
#[derive(Error, Debug)]
pub enum SeesawError {
    /// Generation capability failures
    #[error("Generation capability error: {0}")]
    Capability(#[from] ServiceError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure raised by a Generation Capability backend.
///
/// The orchestrator treats every variant uniformly (skip or abandon the unit
/// of work, see the control loop); the sub-kinds exist so providers can
/// report what actually happened in logs and diagnostics.
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Malformed backend response: {0}")]
    InvalidResponse(String),
}
