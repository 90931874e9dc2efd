use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catsprite", version, about = "Generate the running cat sprite sheet")]
struct Cli {
    /// Output PNG path.
    #[arg(long, default_value = catsprite::DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Render frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = catsprite::SheetConfig::default();
    println!(
        "Generating {}-frame cat running animation sprite sheet...",
        config.frame_count
    );

    let opts = catsprite::ComposeOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };
    let sheet = catsprite::compose_with(&config, &opts).context("compose sprite sheet")?;
    catsprite::save_png(&sheet, &cli.out)
        .with_context(|| format!("save sprite sheet '{}'", cli.out.display()))?;

    println!("Sprite sheet saved as '{}'", cli.out.display());
    println!("  Size: {}x{} pixels", sheet.width(), sheet.height());
    println!(
        "  Frames: {} (each {}x{} pixels)",
        config.frame_count, config.frame_width, config.frame_height
    );
    println!("  Format: PNG with transparent background");
    Ok(())
}
