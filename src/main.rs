// Entry point for the analysis-figure generator: renders the four paper
// figures in sequence and reports what was written.

use clap::Parser;
use std::process::ExitCode;

use paperfig::config::AppConfig;
use paperfig::figures;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "paperfig.toml")]
    config: String,

    /// Output directory (overrides config)
    #[arg(long)]
    out_dir: Option<String>,

    /// Render only the named figures (repeatable):
    /// performance, timing, network, statistical
    #[arg(long, value_name = "FIGURE")]
    only: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config);
    if let Some(dir) = args.out_dir {
        cfg.output.dir = dir;
    }

    match figures::generate_selected(&cfg, &args.only) {
        Ok(paths) => {
            println!("All figures generated successfully:");
            for path in &paths {
                println!("  {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error generating figures: {err}");
            ExitCode::FAILURE
        }
    }
}
