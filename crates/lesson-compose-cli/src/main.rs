use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod groups;
mod logger;

use groups::GROUPS;
use logger::ConsoleLogger;

#[derive(Parser)]
#[command(name = "lessons", about = "Weekly class schedule composer", version)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose one document with a page per group schedule
    Compose {
        /// Template document (JSON tree)
        #[arg(short, long)]
        template: PathBuf,

        /// Output document
        #[arg(short, long)]
        output: PathBuf,

        /// Schedule files, one page each, in the given order
        #[arg(
            short,
            long,
            num_args = 1..,
            conflicts_with = "records_dir",
            required_unless_present = "records_dir"
        )]
        record: Vec<PathBuf>,

        /// Directory holding `<group>.json` for every known group
        #[arg(long)]
        records_dir: Option<PathBuf>,

        /// Compositor options (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the markers a template contains
    Markers {
        /// Template document (JSON tree)
        #[arg(short, long)]
        template: PathBuf,

        /// Compositor options (JSON), for the group marker
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the known groups in page order
    Groups,
}

async fn load_options(config: Option<PathBuf>) -> Result<lesson_compose::ComposeOptions> {
    match config {
        Some(path) => lesson_compose::ComposeOptions::load(&path)
            .await
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(Default::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    ConsoleLogger::new(ConsoleLogger::level_for(cli.verbose, cli.quiet)).init()?;

    match cli.command {
        Commands::Compose {
            template,
            output,
            record,
            records_dir,
            config,
        } => {
            let options = load_options(config).await?;

            let paths = match records_dir {
                Some(dir) => GROUPS
                    .iter()
                    .map(|group| dir.join(format!("{}.json", group)))
                    .collect(),
                None => record,
            };

            let records = lesson_compose::record_stream(paths);
            let report =
                lesson_compose::compose_schedule(&template, &output, records, &options).await?;

            println!("Composition Report:");
            println!("  Records received: {}", report.records_received);
            println!("  Pages written: {}", report.pages_written);
            println!("  Slots filled: {}", report.slots_filled);
            println!("  Cells split: {}", report.cells_split);
            println!("  Days skipped: {}", report.days_skipped);
            if !report.failed_records.is_empty() {
                println!("  Failed records: {}", report.failed_records.len());
                for (group, reason) in &report.failed_records {
                    println!("    {}: {}", group, reason);
                }
            }
            println!("Composed → {}", output.display());
        }

        Commands::Markers { template, config } => {
            let options = load_options(config).await?;
            let doc = lesson_compose::load_template(&template).await?;
            let markers = lesson_compose::template_markers(&doc, &options);
            if markers.is_empty() {
                println!("No known markers in {}", template.display());
            }
            for marker in markers {
                println!("{}", marker);
            }
        }

        Commands::Groups => {
            for group in GROUPS {
                println!("{}", group);
            }
        }
    }

    Ok(())
}
