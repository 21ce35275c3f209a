mod fsio;
mod pages;
mod patch;
mod report;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use patch::RunOptions;
use report::RunCounts;
use settings::Settings;

#[derive(Parser)]
#[command(name = "art_buycard", about = "Add the buy card to static art pages")]
struct Cli {
    /// Settings file (TOML, JSON or YAML); BUYCARD_* env vars override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert the buy card into every page and drop the old love widget
    Run {
        /// Pages directory (default: pages_dir from settings)
        dir: Option<PathBuf>,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
        /// Process pages on a thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Show the commerce identifier for file names
    Resolve {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the effective mapping table and widget template
    Catalog {
        /// Dump all settings as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Run {
            dir,
            dry_run,
            parallel,
        } => {
            let dir = dir.unwrap_or_else(|| settings.pages_dir.clone());
            let pages = pages::list_pages(&dir, &settings.page_suffix)?;
            let catalog = settings.catalog()?;

            println!("Found {} art pages to update:\n", pages.len());
            if dry_run {
                info!("Dry run: no page will be written");
            }

            let opts = RunOptions { dry_run, parallel };
            let results = patch::process_all(&pages, &settings, &catalog, opts);

            let mut counts = RunCounts::default();
            for (path, result) in pages.iter().zip(&results) {
                if let Err(e) = result {
                    warn!("{}: {:#}", path.display(), e);
                }
                counts.record(result);
                println!("{}", report::line(path, result));
            }

            println!("\nDone!");
            counts.print();
            Ok(())
        }
        Commands::Resolve { names } => {
            let catalog = settings.catalog()?;
            for name in &names {
                println!("{}\t{}", name, catalog.resolve(name).unwrap_or("-"));
            }
            Ok(())
        }
        Commands::Catalog { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
                return Ok(());
            }
            let catalog = settings.catalog()?;
            println!("{:<24} | {}", "Pattern", "Identifier");
            println!("{}", "-".repeat(50));
            for m in catalog.entries() {
                println!("{:<24} | {}", m.pattern, m.id);
            }
            let w = &settings.widget;
            println!(
                "\nWidget: {} on {} | \"{}\" | GET {}",
                w.price, w.network, w.button_label, w.api_path
            );
            println!(
                "Pages:  {}/*{}",
                settings.pages_dir.display(),
                settings.page_suffix
            );
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

// ── Tests ──
