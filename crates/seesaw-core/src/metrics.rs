//! Session metrics - token estimates, step durations, alignment rate
//!
//! Token figures are whitespace-token counts of the extracted code, an
//! estimate rather than a model-tokenizer count. Keep it that way: swapping
//! in a real tokenizer would silently invalidate comparison against every
//! previously recorded session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Role of a generation step within a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "dependency")]
    Dependency,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Main => write!(f, "main"),
            Role::Dependency => write!(f, "dependency"),
        }
    }
}

/// Record of a single generation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationMetric {
    /// 1-based position in the session's generation sequence.
    pub sequence: u32,
    /// Path of the file this step generated.
    pub path: String,
    pub role: Role,
    /// Whitespace-token count of the extracted code (estimate).
    pub token_estimate: usize,
    /// Wall-clock span of the generation call only; extraction and
    /// validation latency are excluded here but still count toward the
    /// session total.
    pub duration_secs: f64,
}

/// Aggregated figures for one orchestrator session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Sum of per-iteration token estimates.
    pub total_token_estimate: usize,
    /// `100 * accepted / validation calls`; 0 when no validation ran.
    pub alignment_percent: f64,
    /// Wall-clock span from session start to session end.
    pub total_duration_secs: f64,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// Per-step log, in generation order.
    pub iterations: Vec<IterationMetric>,
}

impl SessionMetrics {
    /// Pure post-processing over the iteration log; no failure modes.
    pub fn aggregate(
        iterations: Vec<IterationMetric>,
        alignment_percent: f64,
        started_at: DateTime<Utc>,
        total_duration: Duration,
    ) -> Self {
        let total_token_estimate = iterations.iter().map(|m| m.token_estimate).sum();

        Self {
            total_token_estimate,
            alignment_percent,
            total_duration_secs: total_duration.as_secs_f64(),
            started_at,
            iterations,
        }
    }
}

/// Whitespace-token count of a text, the session's token-usage estimate.
pub fn token_estimate(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_estimate_counts_whitespace_tokens() {
        assert_eq!(token_estimate("def f():\n    return 1"), 4);
        assert_eq!(token_estimate(""), 0);
        assert_eq!(token_estimate("   \n\t "), 0);
    }

    #[test]
    fn test_aggregate_sums_iteration_estimates() {
        let iterations = vec![
            IterationMetric {
                sequence: 1,
                path: "main.py".to_string(),
                role: Role::Main,
                token_estimate: 40,
                duration_secs: 1.5,
            },
            IterationMetric {
                sequence: 2,
                path: "db.py".to_string(),
                role: Role::Dependency,
                token_estimate: 25,
                duration_secs: 0.9,
            },
        ];

        let metrics = SessionMetrics::aggregate(
            iterations,
            50.0,
            Utc::now(),
            Duration::from_secs_f64(4.2),
        );

        assert_eq!(metrics.total_token_estimate, 65);
        assert_eq!(metrics.alignment_percent, 50.0);
        assert!((metrics.total_duration_secs - 4.2).abs() < 1e-9);
        assert_eq!(metrics.iterations.len(), 2);
    }

    #[test]
    fn test_metrics_serialize_with_snake_case_roles() {
        let metric = IterationMetric {
            sequence: 1,
            path: "main.py".to_string(),
            role: Role::Main,
            token_estimate: 3,
            duration_secs: 0.1,
        };

        let json = serde_json::to_string(&metric).unwrap();
        assert!(json.contains("\"role\":\"main\""));
    }
}
