mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, GenerateArgs, ThresholdArgs};
use radial_mesh::diagnostic::BetaThresholds;
use radial_mesh::{Dataset, GenerateMeshFile};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Generate(args) => generate(args),
        Commands::BetaThresholds(args) => beta_thresholds(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Default: WARN for everything, INFO for the crate, raised by `-v`.
/// A non-empty `RUST_LOG` replaces the default entirely.
fn build_filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => builder.parse_lossy(directives),
        _ => {
            let crate_level = match verbosity {
                0 => "info",
                1 => "debug",
                _ => "trace",
            };
            builder.parse_lossy(format!("radial_mesh={crate_level}"))
        }
    }
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let bundle = GenerateMeshFile::new(&args.input, &args.output, args.config())
        .execute()
        .with_context(|| {
            format!(
                "generating {} from {}",
                args.output.display(),
                args.input.display()
            )
        })?;

    tracing::info!(
        output = %args.output.display(),
        triangles = bundle.mesh_categories.len(),
        "mesh written"
    );
    Ok(())
}

fn beta_thresholds(args: &ThresholdArgs) -> Result<()> {
    let dataset = Dataset::from_path(&args.input)
        .with_context(|| format!("loading dataset {}", args.input.display()))?;
    let report = BetaThresholds::new(&dataset, args.alpha, args.gamma).execute();
    println!("{report}");
    Ok(())
}
