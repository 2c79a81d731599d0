//! `seesaw inventory` — walk a generated project and record what is there.
//!
//! Collects path, line count and (optionally) content for every file under a
//! directory, prints a summary, and exports the records as JSON under an
//! `extraction/` directory named after the scanned root.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One scanned file.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryRecord {
    pub path: String,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Options for the inventory command.
pub struct InventoryOptions {
    pub path: PathBuf,
    /// Export directory; defaults to `extraction/`.
    pub export_dir: PathBuf,
    /// Include file contents in the JSON export.
    pub with_content: bool,
}

/// Scan a directory tree and export the records. Returns the JSON path.
pub fn run(opts: &InventoryOptions) -> Result<PathBuf> {
    let records = scan(&opts.path, opts.with_content)?;

    let total_lines: usize = records.iter().map(|r| r.lines).sum();
    println!(
        "📋 {}: {} files, {} lines",
        opts.path.display(),
        records.len(),
        total_lines
    );
    for record in &records {
        println!("  {:<50} {:>6} lines", record.path, record.lines);
    }

    std::fs::create_dir_all(&opts.export_dir)
        .with_context(|| format!("creating {}", opts.export_dir.display()))?;
    let base_name = opts
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "inventory".to_string());
    let out_path = opts.export_dir.join(format!("{base_name}.json"));

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(&out_path, json)
        .with_context(|| format!("writing {}", out_path.display()))?;

    Ok(out_path)
}

/// Collect records for every regular file under `root`, in walk order.
pub fn scan(root: &Path, with_content: bool) -> Result<Vec<InventoryRecord>> {
    let mut records = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        // Unreadable files still get a record; the error takes the place of
        // the content so the inventory stays complete.
        let content = std::fs::read_to_string(entry.path())
            .unwrap_or_else(|e| format!("Error reading file: {e}"));

        records.push(InventoryRecord {
            path: entry.path().display().to_string(),
            lines: count_lines(&content),
            content: with_content.then_some(content),
        });
    }

    Ok(records)
}

/// Newline count plus one for the final line.
fn count_lines(content: &str) -> usize {
    content.matches('\n').count() + 1
}
