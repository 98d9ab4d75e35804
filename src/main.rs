use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use scene_binder::config::{BinderConfig, CliArgs, OutputFormat};
use scene_binder::ingestion::mtl_parser;
use scene_binder::pipeline::{Pipeline, ProcessingResult};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("scene_binder=debug")
    } else {
        EnvFilter::new("scene_binder=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = BinderConfig::try_from(args).context("Invalid arguments")?;

    match Pipeline::run(&config) {
        Ok(result) => {
            print_report(&result, config.format)?;
            eprintln!(
                "Done: {} objects, {} area lights in {:.2}s",
                result.objects.len(),
                result.lights.len(),
                result.duration.as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            error!(%e, "Scene load failed");
            Err(anyhow::anyhow!(e)).context("scene-binder failed")
        }
    }
}

/// Print the resolved scene to stdout.
fn print_report(result: &ProcessingResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result).context("Failed to serialize report")?;
            println!("{json}");
        }
        OutputFormat::Mtl => {
            for obj in &result.objects {
                println!("newmtl {}", obj.id);
                print!("{}", mtl_parser::write_material_str(&obj.params));
                println!();
            }
        }
    }
    Ok(())
}
