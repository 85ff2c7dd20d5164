//! # chartkit
//!
//! Core chart primitives: scales, tick generation, path builders.
//! Implements Strategy pattern for flexible scale and rendering behaviors.

use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// TICK ARITHMETIC
// ============================================================================

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick indices `i1..=i2` and the signed increment between them.
///
/// A negative `inc` means ticks are `i / -inc` (sub-unit steps kept exact),
/// a positive one means ticks are `i * inc`.
#[derive(Debug, Clone, Copy)]
struct TickSpec {
    i1: f64,
    i2: f64,
    inc: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec { i1, i2, inc }
}

/// Signed tick increment for `[start, stop]` (see [`TickSpec`])
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).inc
}

/// Spacing between adjacent ticks for `[start, stop]`
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Approximately `count` round-numbered values inside `[start, stop]`
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(lo, hi, count as f64);
    if !(spec.i2 >= spec.i1) {
        return Vec::new();
    }

    let n = (spec.i2 - spec.i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|k| {
            let i = spec.i1 + k as f64;
            if spec.inc < 0.0 { i / -spec.inc } else { i * spec.inc }
        })
        .collect();

    if reverse {
        out.reverse();
    }
    out
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Extend the domain outward to round values so that its bounds land on
    /// tick positions for roughly `count` ticks.
    ///
    /// A zero-width or non-finite domain is left unchanged.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let reverse = d1 < d0;
        let (mut start, mut stop) = if reverse { (d1, d0) } else { (d0, d1) };

        if start == stop || !start.is_finite() || !stop.is_finite() {
            return self;
        }

        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                self.domain = if reverse { (stop, start) } else { (start, stop) };
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }

        self
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Spacing between ticks produced by `ticks(count)`
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    /// Path through points; `None` entries are gaps that break the line
    fn generate_defined(&self, points: &[Option<(f64, f64)>]) -> String;
}

/// Straight-segment line generator
///
/// Each run of defined points starts a new subpath; a run of a single point
/// is closed so it still renders a line cap.
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate_defined(&self, points: &[Option<(f64, f64)>]) -> String {
        let mut path = String::with_capacity(points.len() * 20);

        for run in points.split(Option::is_none) {
            let mut segment = PathBuilder::new();
            for (i, &(x, y)) in run.iter().flatten().enumerate() {
                segment = if i == 0 {
                    segment.move_to(x, y)
                } else {
                    segment.line_to(x, y)
                };
            }
            if run.len() == 1 {
                segment = segment.close();
            }
            path.push_str(&segment.build());
        }

        path
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Generate line path with gaps at undefined points
pub fn line_path_defined(points: &[Option<(f64, f64)>]) -> String {
    LinePath.generate_defined(points)
}

// ============================================================================
// TESTS
// ============================================================================
