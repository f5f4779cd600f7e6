//! Report configuration

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the benchmark harness leaves its aggregated runs
pub const DEFAULT_INPUT_PATH: &str = "performance_data/summary.csv";

/// Directory receiving the rendered charts
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

/// Chart size in pixels (a 10x6 inch figure at 100 dpi)
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1000, 600);

/// Report configuration
///
/// The binary always runs with the default paths; the fields exist so the
/// pipeline can be pointed at a scratch directory in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Input CSV of benchmark runs
    pub input_path: PathBuf,

    /// Output directory for charts and exports
    pub output_dir: PathBuf,

    /// Width and height of each chart in pixels
    pub chart_size: (u32, u32),

    /// Also write the summary table as CSV
    #[serde(default)]
    pub export_csv: bool,

    /// Also write the summary table as JSON
    #[serde(default)]
    pub export_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chart_size: DEFAULT_CHART_SIZE,
            export_csv: false,
            export_json: false,
        }
    }
}

impl ReportConfig {
    /// Set the input path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the chart size
    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = (width, height);
        self
    }

    /// Enable or disable the CSV summary export
    pub fn with_csv_export(mut self, enabled: bool) -> Self {
        self.export_csv = enabled;
        self
    }

    /// Enable or disable the JSON summary export
    pub fn with_json_export(mut self, enabled: bool) -> Self {
        self.export_json = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ReportError::Config("input path must not be empty".into()));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ReportError::Config(
                "output directory must not be empty".into(),
            ));
        }

        let (width, height) = self.chart_size;
        if width == 0 || height == 0 {
            return Err(ReportError::Config(format!(
                "chart size must be non-zero, got {}x{}",
                width, height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ReportConfig::default();
        assert_eq!(config.input_path, PathBuf::from("performance_data/summary.csv"));
        assert_eq!(config.output_dir, PathBuf::from("plots"));
        assert!(!config.export_csv);
        assert!(!config.export_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ReportConfig::default()
            .with_input_path("runs.csv")
            .with_output_dir("out")
            .with_chart_size(800, 400)
            .with_csv_export(true);

        assert_eq!(config.input_path, PathBuf::from("runs.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.chart_size, (800, 400));
        assert!(config.export_csv);
    }

    #[test]
    fn test_validate_rejects_zero_chart_size() {
        let config = ReportConfig::default().with_chart_size(0, 600);
        assert!(matches!(config.validate(), Err(ReportError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = ReportConfig::default().with_input_path("");
        assert!(config.validate().is_err());

        let config = ReportConfig::default().with_output_dir("");
        assert!(config.validate().is_err());
    }
}
