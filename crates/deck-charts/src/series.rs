//! Line series rendering
//!
//! Points with a missing or non-numeric value are *undefined*: they break the
//! line into separate subpaths instead of being interpolated or drawn at zero.

use deck_core::{Record, colors};

use crate::{
    ChartOptions, SeriesLayout,
    chartkit::{Scale, line_path_defined},
    scales::ChartScales,
    scene::Node,
};

/// Series drawn for a vector layout, whatever the actual vector width.
///
/// Shorter vectors leave the missing series undefined; slots past this index
/// are not drawn (they still count toward the Y domain).
pub const MAX_SERIES: usize = 3;

/// Data-space points for one series; `None` marks an undefined point
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoints {
    pub index: usize,
    pub color: &'static str,
    pub points: Vec<Option<(f64, f64)>>,
}

impl SeriesPoints {
    /// Number of points that will be drawn
    pub fn defined_count(&self) -> usize {
        self.points.iter().flatten().count()
    }
}

fn point(record: &Record, y: Option<f64>) -> Option<(f64, f64)> {
    record.time().zip(y)
}

/// Points for the single-value layout
pub fn scalar_points(sorted: &[Record]) -> SeriesPoints {
    SeriesPoints {
        index: 0,
        color: colors::series(0),
        points: sorted.iter().map(|r| point(r, r.value.scalar())).collect(),
    }
}

/// Points for vector slot `index`
pub fn slot_points(sorted: &[Record], index: usize) -> SeriesPoints {
    SeriesPoints {
        index,
        color: colors::series(index),
        points: sorted.iter().map(|r| point(r, r.value.slot(index))).collect(),
    }
}

/// Every series drawn for `layout`
pub fn collect_series(sorted: &[Record], layout: SeriesLayout) -> Vec<SeriesPoints> {
    match layout {
        SeriesLayout::Single => vec![scalar_points(sorted)],
        SeriesLayout::Multi => (0..MAX_SERIES).map(|i| slot_points(sorted, i)).collect(),
        SeriesLayout::Unknown => Vec::new(),
    }
}

/// One `path` element per series, in palette order
pub fn render_series(
    series: &[SeriesPoints],
    scales: &ChartScales,
    options: &ChartOptions,
) -> Vec<Node> {
    series
        .iter()
        .map(|s| {
            let projected: Vec<Option<(f64, f64)>> = s
                .points
                .iter()
                .map(|p| p.map(|(x, y)| (scales.x.scale(x), scales.y.scale(y))))
                .collect();

            Node::new("path")
                .class("series")
                .attr("data-series", s.index)
                .attr("fill", "none")
                .attr("stroke", s.color)
                .attr("stroke-width", options.stroke_width)
                .attr("d", line_path_defined(&projected))
        })
        .collect()
}
