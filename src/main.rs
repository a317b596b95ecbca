//! Converts every outline under `mindmaps/` into XMind parts under `generated/`.

use outline2xmind::batch::{BatchConfig, run_batch};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run_batch(&BatchConfig::default()) {
        Ok(report) if report.failed.is_empty() => ExitCode::SUCCESS,
        Ok(report) => {
            log::warn!("{} document(s) failed", report.failed.len());
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::error!("Batch run failed: {e}");
            ExitCode::FAILURE
        },
    }
}
