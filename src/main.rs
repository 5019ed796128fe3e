use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wbthemes::{
    analyze,
    config::{PipelineConfig, DEFAULT_DATA_PATH},
    dataset::load_records,
    report::write_report,
};

/// Project counts per country and major-theme summaries for a
/// development-bank project dataset.
#[derive(Parser, Debug)]
struct Args {
    /// JSON array of project records
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Entries shown in each frequency table
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Records shown from the head of the dataset
    #[arg(long, default_value_t = 5)]
    head: usize,

    #[arg(long, default_value = "countryname")]
    country_field: String,

    #[arg(long, default_value = "mjtheme_namecode")]
    theme_field: String,

    #[arg(long, default_value = "id")]
    id_field: String,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            data_path: args.data,
            country_field: args.country_field,
            theme_field: args.theme_field,
            id_field: args.id_field,
            top_k: args.top,
            head_rows: args.head,
        }
    }
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cfg = PipelineConfig::from(Args::parse());
    info!(data = %cfg.data_path.display(), top = cfg.top_k, "startup");

    // ─── 2) load ─────────────────────────────────────────────────────
    let records = load_records(&cfg.data_path)
        .with_context(|| format!("loading {}", cfg.data_path.display()))?;

    // ─── 3) count, flatten, normalize ────────────────────────────────
    let analysis = analyze(records, &cfg).context("analyzing project records")?;

    // ─── 4) print ────────────────────────────────────────────────────
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &analysis, &cfg).context("writing report")?;
    out.flush()?;

    info!("all done");
    Ok(())
}
