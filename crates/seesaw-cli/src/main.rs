use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod export;
mod generate;
mod inventory;

/// SeeSaw CLI - generate multi-file projects from per-file descriptions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a see-saw generation session over a project tree
    Generate {
        /// Path to the project tree JSON (array of {path, description})
        tree: PathBuf,

        /// Directory the generated files are written under
        #[arg(short, long, value_name = "DIR", default_value = "generated")]
        output: PathBuf,

        /// Root directory for metrics CSV exports
        #[arg(long, value_name = "DIR", default_value = "evaluation/build")]
        metrics_dir: PathBuf,

        /// Run the session but write nothing to disk
        #[arg(long)]
        dry_run: bool,
    },

    /// Scan a directory and export an inventory of its files
    Inventory {
        /// Directory to scan
        path: PathBuf,

        /// Directory the JSON inventory is written under
        #[arg(long, value_name = "DIR", default_value = "extraction")]
        export_dir: PathBuf,

        /// Include file contents in the export
        #[arg(long)]
        with_content: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            tree,
            output,
            metrics_dir,
            dry_run,
        } => {
            generate::run(generate::GenerateOptions {
                tree,
                output,
                metrics_dir,
                dry_run,
            })
            .await?;
        }
        Commands::Inventory {
            path,
            export_dir,
            with_content,
        } => {
            let out = inventory::run(&inventory::InventoryOptions {
                path,
                export_dir,
                with_content,
            })?;
            println!("Inventory saved to {}", out.display());
        }
    }

    Ok(())
}
