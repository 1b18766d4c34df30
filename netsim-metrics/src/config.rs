//! Report configuration types
//!
//! The report is fixed: one input table, three charts, fixed file names.
//! `ReportConfig::default()` carries that layout; the builder methods only
//! exist so callers can point the same layout at another directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input table, relative to the working directory
pub const DEFAULT_INPUT: &str = "results.csv";

/// Column plotted on the x-axis of every chart
pub const TIME_COLUMN: &str = "time";

/// Default image size in pixels (width, height)
pub const DEFAULT_SIZE: (u32, u32) = (640, 480);

const X_LABEL: &str = "Time (s)";

/// Point marker drawn at each data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Circle,
    Cross,
    Square,
}

/// Line and marker color of a chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    /// The plotting default blue
    #[default]
    Default,
    Orange,
    Red,
}

impl SeriesColor {
    /// RGB components of this color
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SeriesColor::Default => (0x1f, 0x77, 0xb4),
            SeriesColor::Orange => (0xff, 0xa5, 0x00),
            SeriesColor::Red => (0xff, 0x00, 0x00),
        }
    }
}

/// Description of one chart: which column to plot and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Human-readable chart name (used in logs and errors)
    pub name: String,
    /// Column plotted on the y-axis
    pub column: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub marker: Marker,
    #[serde(default)]
    pub color: SeriesColor,
    /// Output file name, relative to the output directory
    pub output: PathBuf,
}

impl ChartSpec {
    /// Throughput over time: circles, default color
    pub fn throughput() -> Self {
        Self {
            name: "Throughput".to_string(),
            column: "throughput".to_string(),
            title: "Throughput Over Time (GEO Simulation)".to_string(),
            x_label: X_LABEL.to_string(),
            y_label: "Throughput (Mbps)".to_string(),
            marker: Marker::Circle,
            color: SeriesColor::Default,
            output: PathBuf::from("throughput.png"),
        }
    }

    /// Delay over time: crosses, orange
    pub fn delay() -> Self {
        Self {
            name: "Delay".to_string(),
            column: "delay".to_string(),
            title: "Delay Over Time (GEO Simulation)".to_string(),
            x_label: X_LABEL.to_string(),
            y_label: "Delay (ms)".to_string(),
            marker: Marker::Cross,
            color: SeriesColor::Orange,
            output: PathBuf::from("delay.png"),
        }
    }

    /// Packet loss over time: squares, red
    pub fn loss() -> Self {
        Self {
            name: "Packet Loss".to_string(),
            column: "loss".to_string(),
            title: "Packet Loss Over Time (GEO Simulation)".to_string(),
            x_label: X_LABEL.to_string(),
            y_label: "Loss (%)".to_string(),
            marker: Marker::Square,
            color: SeriesColor::Red,
            output: PathBuf::from("loss.png"),
        }
    }
}

/// Configuration for a report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Metrics table to load
    pub input: PathBuf,

    /// Directory the chart images are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Column plotted on the x-axis
    #[serde(default = "default_x_column")]
    pub x_column: String,

    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Charts to render, in order
    #[serde(default = "default_charts")]
    pub charts: Vec<ChartSpec>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_x_column() -> String {
    TIME_COLUMN.to_string()
}

fn default_width() -> u32 {
    DEFAULT_SIZE.0
}

fn default_height() -> u32 {
    DEFAULT_SIZE.1
}

/// The three standard charts, in generation order
pub fn default_charts() -> Vec<ChartSpec> {
    vec![ChartSpec::throughput(), ChartSpec::delay(), ChartSpec::loss()]
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: default_output_dir(),
            x_column: default_x_column(),
            width: default_width(),
            height: default_height(),
            charts: default_charts(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the input table path
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Builder method: set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Builder method: set the image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder method: replace the chart list
    pub fn with_charts(mut self, charts: Vec<ChartSpec>) -> Self {
        self.charts = charts;
        self
    }

    /// Image size as (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Full output path of a chart
    pub fn output_path(&self, chart: &ChartSpec) -> PathBuf {
        self.output_dir.join(&chart.output)
    }
}
