//! Network Simulation Metrics Library
//!
//! Loads the time-series metrics written by a network simulation run
//! (throughput, delay, packet loss) and renders them as PNG line charts.
//!
//! # Architecture
//!
//! The library is a straight pipeline:
//! - `MetricsTable` reads the CSV once and keeps it immutable
//! - `render_chart` draws one column against time into its own image
//! - `ReportGenerator` runs the three charts in order, each flushed to disk
//!   before the next starts
//!
//! Printing and logging setup belong to the application layer
//! (netsim-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use netsim_metrics::{ReportConfig, ReportGenerator};
//!
//! let config = ReportConfig::new().with_output_dir("plots");
//! let report = ReportGenerator::new(config).run().unwrap();
//!
//! for path in &report.outputs {
//!     println!("wrote {:?}", path);
//! }
//! ```

// Public modules
pub mod chart;
pub mod config;
pub mod generator;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use chart::render_chart;
pub use config::{ChartSpec, Marker, ReportConfig, SeriesColor};
pub use generator::ReportGenerator;
pub use table::MetricsTable;
pub use types::{DataPoint, Report, ReportError, Result, TableStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
