//! Main report API
//!
//! The ReportGenerator loads the metrics table once and renders every
//! configured chart in order. Each chart is on disk before the next one is
//! started, so a failure part-way leaves the earlier charts in place.

use crate::chart::render_chart;
use crate::config::ReportConfig;
use crate::table::MetricsTable;
use crate::types::{Report, Result};
use std::path::PathBuf;

/// Entry point for generating the chart report
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a generator for the given configuration
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load the input table and render all charts
    ///
    /// # Returns
    /// * `Result<Report>` - written files in order, or the first error hit
    ///
    /// # Example
    /// ```no_run
    /// use netsim_metrics::{ReportConfig, ReportGenerator};
    ///
    /// let report = ReportGenerator::new(ReportConfig::default()).run().unwrap();
    /// println!("{}", report.completion_message());
    /// ```
    pub fn run(&self) -> Result<Report> {
        let table = MetricsTable::from_path(&self.config.input)?;
        let outputs = self.render_all(&table)?;

        Ok(Report {
            outputs,
            stats: table.stats(),
        })
    }

    /// Render all charts from an already loaded table
    pub fn render_all(&self, table: &MetricsTable) -> Result<Vec<PathBuf>> {
        let mut outputs = Vec::with_capacity(self.config.charts.len());

        for (index, spec) in self.config.charts.iter().enumerate() {
            log::debug!(
                "Chart {}/{}: {}",
                index + 1,
                self.config.charts.len(),
                spec.name
            );

            let path = render_chart(
                table,
                &self.config.x_column,
                spec,
                &self.config.output_dir,
                self.config.size(),
            )?;
            outputs.push(path);
        }

        Ok(outputs)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}
