//! Compatibility validation - decide whether a dependency fits the main file
//!
//! The validator is itself a consumer of the Generation Capability: it builds
//! a single compatibility-check prompt and parses the response positionally.
//! Counters for the alignment metric live on the validator instance, so each
//! session owns its own; concurrent sessions cannot corrupt each other's
//! alignment rate.

use std::sync::Arc;

use tracing::warn;

use crate::capability::GenerationCapability;
use crate::prompt;

/// Length of the literal "False" marker. The corrected main code is expected
/// to follow the marker immediately, with no separator.
const INCOMPATIBLE_MARKER_LEN: usize = 5;

/// Result of a compatibility check.
///
/// `main_content` equals the original main content when compatible, and the
/// corrected main content when not. A malformed response is reported as a
/// normal incompatible outcome whose `main_content` is a diagnostic string
/// embedding the raw response; callers cannot distinguish that case except
/// by inspecting the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the dependency was accepted as-is.
    pub compatible: bool,
    /// The main content to carry forward.
    pub main_content: String,
}

/// Per-session compatibility validator.
///
/// Construct a fresh instance per session; the call/accept counters back the
/// session's alignment rate and are never shared across sessions.
pub struct Validator {
    capability: Arc<dyn GenerationCapability>,
    calls: u64,
    accepted: u64,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("capability", &self.capability.name())
            .field("calls", &self.calls)
            .field("accepted", &self.accepted)
            .finish()
    }
}

impl Validator {
    /// Create a validator backed by the given capability, with zeroed counters.
    pub fn new(capability: Arc<dyn GenerationCapability>) -> Self {
        Self {
            capability,
            calls: 0,
            accepted: 0,
        }
    }

    /// Check whether `dependency_content` is compatible with `main_content`
    /// under the project's original description.
    ///
    /// Never fails: a capability error during the check is folded into the
    /// response text and falls through to the malformed branch below, which
    /// is exactly what happens when the model answers off-protocol.
    pub async fn validate(
        &mut self,
        main_content: &str,
        dependency_content: &str,
        original_description: &str,
    ) -> ValidationOutcome {
        self.calls += 1;

        let prompt =
            prompt::compatibility_check(main_content, dependency_content, original_description);

        let response = match self.capability.generate(&prompt).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "validation call failed, treating as malformed response");
                format!("Error: {err}")
            }
        };

        self.parse_response(&response, main_content)
    }

    /// Positional parsing of the validator response.
    fn parse_response(&mut self, response: &str, main_content: &str) -> ValidationOutcome {
        if response.starts_with("True") {
            self.accepted += 1;
            return ValidationOutcome {
                compatible: true,
                main_content: main_content.to_string(),
            };
        }

        if response.starts_with("False") {
            // Strip the marker itself; the corrected code follows directly.
            let corrected = response[INCOMPATIBLE_MARKER_LEN..].trim().to_string();
            return ValidationOutcome {
                compatible: false,
                main_content: corrected,
            };
        }

        warn!(response, "validation response error");
        ValidationOutcome {
            compatible: false,
            main_content: format!("Error in validation response: {response}"),
        }
    }

    /// Total compatibility checks issued this session.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Checks accepted without a main-content correction.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Alignment rate: `100 * accepted / calls`, or 0 when no check ran.
    pub fn alignment_percent(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            100.0 * self.accepted as f64 / self.calls as f64
        }
    }
}
