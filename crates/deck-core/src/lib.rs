//! # deck-core
//!
//! Core domain types for the chart deck.
//! Loosely-typed records, chart card configuration, tick formatting and the
//! series palette.

pub mod config;
pub mod record;

pub use config::*;
pub use record::*;

// ============================================================================
// STRATEGY PATTERN: Tick Formatters
// ============================================================================

/// Strategy trait for axis tick labels
pub trait TickFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Fixed-point formatter with thousands separators (`1,234.5`)
///
/// Mirrors the default label format of a linear axis: the number of decimals
/// is derived from the spacing between adjacent ticks.
#[derive(Debug, Clone, Default)]
pub struct LinearTickFormatter {
    pub decimals: usize,
}

impl LinearTickFormatter {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Formatter precise enough to tell ticks `step` apart
    pub fn for_step(step: f64) -> Self {
        Self::new(precision_for_step(step))
    }
}

impl TickFormatter for LinearTickFormatter {
    fn format(&self, value: f64) -> String {
        format_grouped(value, self.decimals)
    }
}

/// Decimal places needed to represent multiples of `step`
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Format `value` with `decimals` places and comma-grouped integer digits
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.prec$}", value.abs(), prec = decimals);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !is_zero {
        grouped.push('-');
    }

    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    grouped
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    /// Per-series stroke colors, indexed by series position
    pub const SERIES: [&str; 3] = ["blue", "green", "red"];

    pub const AXIS: &str = "currentColor";
    pub const GRID: &str = "#e5e7eb";
    pub const TEXT_MUTED: &str = "#6b7280";

    /// Color for series `index`, wrapping around the palette
    pub fn series(index: usize) -> &'static str {
        SERIES[index % SERIES.len()]
    }
}
