use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

use trial_atlas::config::PipelineConfig;
use trial_atlas::logging;
use trial_atlas::pipeline::FusionPipeline;

#[derive(Parser)]
#[command(name = "trial_atlas")]
#[command(about = "Fuses heterogeneous clinical-trial registry exports into one geo-temporal dataset")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full fusion pipeline once
    Fuse {
        /// Path to a TOML config file; an explicitly given missing file is an error
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the fused output path
        #[arg(long)]
        output: Option<String>,
        /// Override the minimum accepted trial year (inclusive)
        #[arg(long)]
        min_year: Option<i32>,
        /// Override the maximum accepted trial year (inclusive)
        #[arg(long)]
        max_year: Option<i32>,
        /// Override the tabular (CSV) export path
        #[arg(long)]
        tabular: Option<String>,
        /// Override the hierarchical (JSON) export path
        #[arg(long)]
        hierarchical: Option<String>,
        /// Override the regulatory rating table path
        #[arg(long)]
        regulatory: Option<String>,
        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fuse {
            config,
            output,
            min_year,
            max_year,
            tabular,
            hierarchical,
            regulatory,
            compact,
        } => {
            let mut pipeline_config = PipelineConfig::load_or_default(config.as_deref())?;
            if let Some(path) = tabular {
                pipeline_config.sources.tabular = path;
            }
            if let Some(path) = hierarchical {
                pipeline_config.sources.hierarchical = path;
            }
            if let Some(path) = regulatory {
                pipeline_config.sources.regulatory = path;
            }
            if let Some(path) = output {
                pipeline_config.output.path = path;
            }
            if let Some(min) = min_year {
                pipeline_config.years.min = min;
            }
            if let Some(max) = max_year {
                pipeline_config.years.max = max;
            }
            if compact {
                pipeline_config.output.pretty = false;
            }

            println!("🔄 Running fusion pipeline...");
            match FusionPipeline::new(pipeline_config).run() {
                Ok(summary) => {
                    println!("\n📊 Fusion Results (run {}):", summary.run_id);
                    for source in &summary.sources {
                        if source.failed {
                            println!("   {}: source unreadable, contributed 0 points", source.source);
                        } else {
                            println!("   {}: {} points", source.source, source.contributed);
                        }
                    }
                    println!(
                        "   Dropped: {} malformed, {} out-of-range, {} unresolvable, {} duplicates",
                        summary.drops.malformed,
                        summary.drops.out_of_range_year,
                        summary.drops.unresolvable_location,
                        summary.drops.duplicate_identity
                    );
                    println!("   Total points: {}", summary.total_points);
                    println!("   Output file: {}", summary.output_file);
                }
                Err(e) => {
                    error!("Fusion pipeline failed: {}", e);
                    eprintln!("❌ Fusion pipeline failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
