//! Metrics CSV export.
//!
//! Each session lands in its own timestamped directory under the export
//! root: one-row summary tables for token usage, dependency alignment and
//! execution time, plus the full per-iteration log.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

use seesaw_core::SessionOutcome;

/// Export the session's metrics tables. Returns the directory written.
pub fn export_session(root: &Path, outcome: &SessionOutcome) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let dir = root.join(timestamp);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating metrics dir {}", dir.display()))?;

    let metrics = &outcome.metrics;

    write_csv(
        &dir.join("token_usage.csv"),
        "Method,Token Usage (Tokens)",
        &[format!("See-Saw,{}", metrics.total_token_estimate)],
    )?;

    write_csv(
        &dir.join("alignment.csv"),
        "Method,Dependency Alignment (%)",
        &[format!("See-Saw,{:.2}", metrics.alignment_percent)],
    )?;

    write_csv(
        &dir.join("execution_time.csv"),
        "Method,Execution Time (Seconds)",
        &[format!("See-Saw,{:.3}", metrics.total_duration_secs)],
    )?;

    let rows: Vec<String> = metrics
        .iterations
        .iter()
        .map(|m| {
            format!(
                "{},{},{},{},{:.3}",
                m.sequence,
                csv_field(&m.path),
                m.role,
                m.token_estimate,
                m.duration_secs
            )
        })
        .collect();
    write_csv(
        &dir.join("iterations.csv"),
        "Sequence,Path,Role,Token Estimate,Duration (Seconds)",
        &rows,
    )?;

    Ok(dir)
}

fn write_csv(path: &Path, header: &str, rows: &[String]) -> Result<()> {
    let mut out = String::with_capacity(header.len() + rows.iter().map(|r| r.len() + 1).sum::<usize>() + 1);
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    std::fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

/// Quote a field when it would break the row.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use seesaw_core::{IterationMetric, Role, SessionMetrics};
    use std::time::Duration;

    fn sample_outcome() -> SessionOutcome {
        let iterations = vec![IterationMetric {
            sequence: 1,
            path: "main.py".to_string(),
            role: Role::Main,
            token_estimate: 12,
            duration_secs: 0.5,
        }];
        SessionOutcome {
            session_id: "run_test".to_string(),
            status: "done".to_string(),
            files: Default::default(),
            metrics: SessionMetrics::aggregate(
                iterations,
                100.0,
                Utc::now(),
                Duration::from_secs(2),
            ),
        }
    }

    #[test]
    fn test_export_writes_all_four_tables() {
        let root = tempfile::tempdir().unwrap();
        let dir = export_session(root.path(), &sample_outcome()).unwrap();

        for name in ["token_usage.csv", "alignment.csv", "execution_time.csv", "iterations.csv"] {
            assert!(dir.join(name).exists(), "{name} missing");
        }

        let alignment = std::fs::read_to_string(dir.join("alignment.csv")).unwrap();
        assert!(alignment.contains("See-Saw,100.00"));

        let iterations = std::fs::read_to_string(dir.join("iterations.csv")).unwrap();
        assert!(iterations.contains("1,main.py,main,12,0.500"));
    }

    #[test]
    fn test_csv_field_quotes_commas_and_doubles_quotes() {
        assert_eq!(csv_field("plain.py"), "plain.py");
        assert_eq!(csv_field("a,b.py"), "\"a,b.py\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
