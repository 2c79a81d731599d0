//! `seesaw generate` — run a See-Saw session and persist its artifacts.
//!
//! Pipeline: ProjectTree JSON → provider router → SeeSawOrchestrator::run()
//!           → on-disk project files → metrics CSV export → status report

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use seesaw_core::{ProjectTree, SeeSawOrchestrator, SessionOutcome};

use crate::export;

/// Options for the `seesaw generate` command.
pub struct GenerateOptions {
    pub tree: PathBuf,
    pub output: PathBuf,
    pub metrics_dir: PathBuf,
    pub dry_run: bool,
}

/// Run a full generation session.
pub async fn run(opts: GenerateOptions) -> Result<()> {
    let tree = load_tree(&opts.tree)?;
    let capability = seesaw_providers::from_env()?;

    println!("▶ Starting see-saw generation: {} entries", tree.len());

    let orchestrator = SeeSawOrchestrator::new(capability);
    let outcome = orchestrator.run(&tree).await;

    print_report(&outcome);

    if opts.dry_run {
        println!("  [DRY-RUN] no files written");
        return Ok(());
    }

    let written = write_project(&outcome.files, &opts.output)?;
    println!("  {} files written under {}", written, opts.output.display());

    let metrics_path = export::export_session(&opts.metrics_dir, &outcome)?;
    println!("  metrics exported to {}", metrics_path.display());

    Ok(())
}

fn load_tree(path: &Path) -> Result<ProjectTree> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading project tree: {}", path.display()))?;
    ProjectTree::from_json(&content)
        .with_context(|| format!("parsing project tree: {}", path.display()))
}

/// Write the generated mapping under `base`, creating parent directories and
/// overwriting existing files.
pub fn write_project(files: &HashMap<String, String>, base: &Path) -> Result<usize> {
    let mut written = 0;

    for (path, content) in files {
        let relative = path.trim_start_matches("./").trim_start_matches('/');
        let full_path = base.join(relative);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating dirs for {relative}"))?;
        }

        std::fs::write(&full_path, content)
            .with_context(|| format!("writing {}", full_path.display()))?;
        tracing::info!(path = %full_path.display(), "file saved");
        written += 1;
    }

    Ok(written)
}

fn print_report(outcome: &SessionOutcome) {
    println!();
    println!("{}", "─".repeat(60));
    println!("✅ {}", outcome.status);
    println!("  session:   {}", outcome.session_id);
    println!(
        "  alignment: {:.1}%  tokens (est.): {}  duration: {:.2}s",
        outcome.metrics.alignment_percent,
        outcome.metrics.total_token_estimate,
        outcome.metrics.total_duration_secs,
    );
    for metric in &outcome.metrics.iterations {
        println!(
            "  [{:>3}] {:<10} {:<30} {:>6} tokens  {:>7.2}s",
            metric.sequence, metric.role.to_string(), metric.path, metric.token_estimate, metric.duration_secs,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_project_creates_nested_paths_and_strips_dot_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = HashMap::new();
        files.insert("./src/app/main.py".to_string(), "print('x')".to_string());
        files.insert("README.md".to_string(), "# hi".to_string());

        let written = write_project(&files, dir.path()).unwrap();
        assert_eq!(written, 2);

        let main = std::fs::read_to_string(dir.path().join("src/app/main.py")).unwrap();
        assert_eq!(main, "print('x')");
        assert!(dir.path().join("README.md").exists());
    }

    #[test]
    fn test_write_project_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.py"), "old").unwrap();

        let mut files = HashMap::new();
        files.insert("main.py".to_string(), "new".to_string());
        write_project(&files, dir.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("main.py")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_load_tree_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_tree(&path).is_err());
    }
}
