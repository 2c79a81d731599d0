//! See-Saw Orchestrator - the generate/validate control loop
//!
//! For each Main entry in the project tree the orchestrator generates the
//! main file, then walks every other entry as a dependency: generate against
//! the current main content, validate the pair, and patch the main in flight
//! when the validator rejects it. The patched main feeds the next
//! dependency's prompt, which is why the loop is strictly sequential — each
//! step reads state the previous step may have written.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::capability::GenerationCapability;
use crate::extract::extract;
use crate::metrics::{token_estimate, IterationMetric, Role, SessionMetrics};
use crate::project::ProjectTree;
use crate::prompt;
use crate::validator::Validator;

/// Everything a session produces.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Correlation key for logs and exports.
    pub session_id: String,
    /// Human-readable summary of what the session did.
    pub status: String,
    /// Generated artifacts, path → content. The Main entry may have been
    /// overwritten several times; dependency entries hold their own freshly
    /// generated content, never the validator's corrections.
    pub files: HashMap<String, String>,
    /// Aggregated session metrics.
    pub metrics: SessionMetrics,
}

/// Drives See-Saw sessions against a Generation Capability.
///
/// The orchestrator itself is stateless across `run` calls; validation
/// counters are created fresh inside each session.
pub struct SeeSawOrchestrator {
    capability: Arc<dyn GenerationCapability>,
}

impl std::fmt::Debug for SeeSawOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeeSawOrchestrator")
            .field("capability", &self.capability.name())
            .finish()
    }
}

impl SeeSawOrchestrator {
    /// Create an orchestrator backed by the given capability.
    pub fn new(capability: Arc<dyn GenerationCapability>) -> Self {
        Self { capability }
    }

    /// Run one See-Saw session over the tree, in tree order.
    ///
    /// Capability failures never escape: a failed Main generation abandons
    /// that Main and all of its dependencies, a failed dependency generation
    /// skips only that dependency. Each failure consumes exactly one
    /// attempt; there is no retry.
    pub async fn run(&self, tree: &ProjectTree) -> SessionOutcome {
        let session_id = format!("run_{}", Uuid::new_v4());
        let started_at = Utc::now();
        let session_start = Instant::now();

        let mut files: HashMap<String, String> = HashMap::new();
        let mut iterations: Vec<IterationMetric> = Vec::new();
        let mut validator = Validator::new(self.capability.clone());
        let mut sequence: u32 = 0;

        let mut mains_completed: usize = 0;
        let mut mains_abandoned: usize = 0;
        let mut dependencies_skipped: usize = 0;

        info!(
            session_id = %session_id,
            entries = tree.len(),
            backend = self.capability.name(),
            "starting see-saw session"
        );

        for spec in tree {
            if !spec.is_main() {
                continue;
            }

            info!(path = %spec.path, "generating main file");
            let generation_start = Instant::now();
            let raw = match self
                .capability
                .generate(&prompt::main_generation(&spec.description))
                .await
            {
                Ok(raw) => raw,
                Err(err) => {
                    // The only failure mode that discards a whole unit of
                    // work: this Main and every one of its dependencies.
                    error!(path = %spec.path, error = %err, "main generation failed, abandoning this main");
                    mains_abandoned += 1;
                    continue;
                }
            };
            let generation_elapsed = generation_start.elapsed();

            let mut main_content = extract(&raw);
            sequence += 1;
            iterations.push(IterationMetric {
                sequence,
                path: spec.path.clone(),
                role: Role::Main,
                token_estimate: token_estimate(&main_content),
                duration_secs: generation_elapsed.as_secs_f64(),
            });
            files.insert(spec.path.clone(), main_content.clone());

            for dep in tree.dependencies_of(spec) {
                info!(path = %dep.path, main = %spec.path, "generating dependency");
                let generation_start = Instant::now();
                let raw = match self
                    .capability
                    .generate(&prompt::dependency_generation(
                        &main_content,
                        &dep.path,
                        &dep.description,
                    ))
                    .await
                {
                    Ok(raw) => raw,
                    Err(err) => {
                        // Partial failure: drop this dependency, keep going.
                        warn!(path = %dep.path, error = %err, "dependency generation failed, skipping");
                        dependencies_skipped += 1;
                        continue;
                    }
                };
                let generation_elapsed = generation_start.elapsed();

                let dep_content = extract(&raw);
                sequence += 1;
                iterations.push(IterationMetric {
                    sequence,
                    path: dep.path.clone(),
                    role: Role::Dependency,
                    token_estimate: token_estimate(&dep_content),
                    duration_secs: generation_elapsed.as_secs_f64(),
                });

                let outcome = validator
                    .validate(&main_content, &dep_content, &spec.description)
                    .await;

                if outcome.compatible {
                    info!(path = %dep.path, "dependency validated without updating main");
                } else {
                    warn!(path = %dep.path, main = %spec.path, "main content updated for compatibility");
                    main_content = outcome.main_content;
                    files.insert(spec.path.clone(), main_content.clone());
                }

                // The dependency keeps its own generated content either way.
                files.insert(dep.path.clone(), dep_content);
            }

            mains_completed += 1;
        }

        let metrics = SessionMetrics::aggregate(
            iterations,
            validator.alignment_percent(),
            started_at,
            session_start.elapsed(),
        );

        let status = format!(
            "see-saw session complete: {} files generated, {} mains completed, {} mains abandoned, {} dependencies skipped",
            files.len(),
            mains_completed,
            mains_abandoned,
            dependencies_skipped,
        );
        info!(
            session_id = %session_id,
            alignment = metrics.alignment_percent,
            tokens = metrics.total_token_estimate,
            "{status}"
        );

        SessionOutcome {
            session_id,
            status,
            files,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::project::FileSpec;
    use async_trait::async_trait;

    /// Capability that always returns the same fenced block.
    struct Constant;

    #[async_trait]
    impl GenerationCapability for Constant {
        async fn generate(&self, _prompt: &str) -> Result<String, ServiceError> {
            Ok("```\ncode\n```".to_string())
        }
    }

    #[tokio::test]
    async fn test_empty_tree_produces_empty_outcome() {
        let orchestrator = SeeSawOrchestrator::new(Arc::new(Constant));
        let outcome = orchestrator.run(&ProjectTree::default()).await;

        assert!(outcome.files.is_empty());
        assert!(outcome.metrics.iterations.is_empty());
        assert_eq!(outcome.metrics.alignment_percent, 0.0);
        assert_eq!(outcome.metrics.total_token_estimate, 0);
    }

    #[tokio::test]
    async fn test_tree_without_mains_generates_nothing() {
        let tree = ProjectTree::new(vec![
            FileSpec::new("a.py", "helper module"),
            FileSpec::new("b.py", "another helper"),
        ]);

        let orchestrator = SeeSawOrchestrator::new(Arc::new(Constant));
        let outcome = orchestrator.run(&tree).await;

        assert!(outcome.files.is_empty());
        assert_eq!(outcome.metrics.alignment_percent, 0.0);
    }

    #[tokio::test]
    async fn test_no_state_survives_across_runs() {
        let tree = ProjectTree::new(vec![FileSpec::new("main.py", "main entry point")]);
        let orchestrator = SeeSawOrchestrator::new(Arc::new(Constant));

        let first = orchestrator.run(&tree).await;
        let second = orchestrator.run(&tree).await;

        assert_ne!(first.session_id, second.session_id);
        assert_eq!(first.metrics.iterations.len(), 1);
        assert_eq!(second.metrics.iterations.len(), 1);
    }
}
