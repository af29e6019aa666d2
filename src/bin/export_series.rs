use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::PathBuf;

use plant_dashboard::config::EXPORT_FILENAME;
use plant_dashboard::utils::time_utils::local_today;
use plant_dashboard::{Cli, DashboardSnapshot, build_dashboard};

/// Build one dashboard snapshot without a window and write it as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ExportArgs {
    #[command(flatten)]
    dashboard: Cli,

    /// File (or directory) to write to. Prints to stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = ExportArgs::parse();
    let params = args.dashboard.params(local_today());

    let mut rng = match args.dashboard.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let snapshot = build_dashboard(params, &mut rng);
    log_summary(&snapshot);

    match args.output {
        Some(path) => write_to_path(&snapshot, path),
        None => {
            let json = serde_json::to_string_pretty(&snapshot)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write snapshot to stdout")
        }
    }
}

fn log_summary(snapshot: &DashboardSnapshot) {
    for chart in &snapshot.charts {
        if let (Some(mean), Some((min, max))) = (chart.series.mean(), chart.series.value_range()) {
            log::info!(
                "{}: {} days, mean {:.1} {}, range {}..{}",
                chart.metric,
                chart.series.len(),
                mean,
                chart.metric.unit(),
                min,
                max
            );
        }
    }
}

fn write_to_path(snapshot: &DashboardSnapshot, path: PathBuf) -> Result<()> {
    let path = if path.is_dir() {
        path.join(EXPORT_FILENAME)
    } else {
        path
    };

    let json = serde_json::to_vec_pretty(snapshot)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write snapshot to {:?}", path))?;

    log::info!(
        "Snapshot for {} .. {} written to {:?}",
        snapshot.window.start,
        snapshot.window.end,
        path
    );
    Ok(())
}
