//! Report persistence

use crate::assembler::ExecutiveReport;
use crate::error::ReportError;
use std::path::{Path, PathBuf};

/// Name of the copy that always holds the newest report
pub const LATEST_REPORT: &str = "latest_report.json";

/// Paths written for one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    /// `executive_report_<YYYYMMDD_HHMMSS>.json`
    pub timestamped: PathBuf,
    /// `latest_report.json`
    pub latest: PathBuf,
}

/// Writes reports as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Writer targeting `dir`, created on first write
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a report
    #[must_use]
    pub fn file_name(report: &ExecutiveReport) -> String {
        format!(
            "executive_report_{}.json",
            report.generated_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Write the timestamped report and refresh the latest copy
    ///
    /// # Errors
    /// Returns [`ReportError::Io`] or [`ReportError::Serialization`].
    pub async fn write(&self, report: &ExecutiveReport) -> Result<WrittenReport, ReportError> {
        let json = serde_json::to_string_pretty(report)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ReportError::io(&self.dir, e))?;

        let timestamped = self.dir.join(Self::file_name(report));
        let latest = self.dir.join(LATEST_REPORT);
        for path in [&timestamped, &latest] {
            tokio::fs::write(path, &json)
                .await
                .map_err(|e| ReportError::io(path, e))?;
        }

        tracing::info!(path = %timestamped.display(), "Report saved");
        Ok(WrittenReport {
            timestamped,
            latest,
        })
    }
}
