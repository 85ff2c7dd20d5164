//! # deck-charts
//!
//! D3.js-style SVG rendering engine for loosely-typed time-series data.
//!
//! ## Pipeline
//!
//! records → [`classify`] → [`ScaleBuilder`] → axes/grid → series (+ legend)
//!
//! Every pass rebuilds the whole chart; [`ChartMount`] owns the surface and
//! clears it before each rebuild. Data that cannot be classified or scaled
//! ends in a one-line placeholder instead of an error.
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, ticks, paths
//! - `classify` - Series layout detection
//! - `scales` - X/Y scale construction
//! - `axis` - Axes and gridlines
//! - `series` - Line paths with gaps
//! - `legend` - Static multi-series legend
//! - `render` - The full pass and its options
//! - `mount` - Surface lifecycle
//! - `scene` - Element tree and surfaces
//! - `chart` - Leptos component and DOM surface

pub mod axis;
pub mod chart;
pub mod chartkit;
pub mod classify;
mod error;
pub mod legend;
pub mod mount;
pub mod render;
pub mod scales;
pub mod scene;
pub mod series;

pub use chart::*;
pub use chartkit::*;
pub use classify::*;
pub use error::RenderError;
pub use mount::*;
pub use render::*;
pub use scales::{ChartScales, ScaleBuilder};
pub use scene::{Node, SceneSurface, Surface};
pub use series::MAX_SERIES;

// Re-export colors from deck-core for convenience
pub use deck_core::colors;

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Room for a bottom X axis and a left Y axis
    pub const fn standard() -> Self {
        Self::new(8.0, 16.0, 36.0, 48.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(720.0, 320.0)
    }
}
