// src/analytics/reporter.rs
//! Writes staking reports to disk as pretty JSON.

use super::report::StakingReport;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub struct StakingReporter {
    output_dir: PathBuf,
}

impl StakingReporter {
    /// Create a reporter, making sure the output directory exists
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// File name is derived from the report's generation time.
    pub fn report_path(&self, report: &StakingReport) -> PathBuf {
        let timestamp = report.generated_at.format("%Y%m%d_%H%M%S");
        self.output_dir
            .join(format!("staking_report_{}.json", timestamp))
    }

    /// Export the report and return where it was written
    pub fn export(&self, report: &StakingReport) -> Result<PathBuf> {
        let path = self.report_path(report);
        let json_data = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json_data)?;

        log::info!("💾 Staking report exported to {}", path.display());
        Ok(path)
    }
}
