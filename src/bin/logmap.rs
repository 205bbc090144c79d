use std::path::PathBuf;

use clap::Parser;
use logmap::config::load_config;
use logmap::run_into_dir;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Logistic map Lyapunov exponent estimate")]
struct Cli {
    /// JSON config file (defaults to ./logmap.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output base directory; each run gets its own mu/timestamp subdirectory
    #[arg(long, default_value = "output-logmap")]
    output: PathBuf,

    /// Initial value
    #[arg(long)]
    x0: Option<f64>,

    /// Control parameter
    #[arg(long)]
    mu: Option<f64>,

    /// Number of recorded samples averaged
    #[arg(long)]
    samples: Option<usize>,

    /// Number of iterations discarded before recording
    #[arg(long)]
    transient: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut cfg = load_config(cli.config.as_deref())?;
    if let Some(v) = cli.x0 {
        cfg.x0 = v;
    }
    if let Some(v) = cli.mu {
        cfg.mu = v;
    }
    if let Some(v) = cli.samples {
        cfg.sample_count = v;
    }
    if let Some(v) = cli.transient {
        cfg.transient_count = v;
    }

    let (output_dir, result) = run_into_dir(&cfg, &cli.output)?;

    println!(
        "mu = {} | x0 = {} | samples: {} | transient: {}",
        result.summary.mu,
        result.summary.x0,
        result.summary.sample_count,
        result.summary.transient_count
    );
    println!("Lyapunov exponent: {:.6}", result.summary.lyapunov_exponent);
    println!("Final x: {:.10}", result.summary.final_x);
    println!("Run directory: {}", output_dir.display());

    Ok(())
}
