//! Full render pass: classify, scale, draw
//!
//! [`render`] is a pure function of the records and options. It returns the
//! complete set of top-level elements that replace a surface's contents;
//! clearing the surface first is the caller's job (see [`crate::mount`]).

use deck_core::{Record, colors, sorted_by_time};

use crate::{
    ChartDimensions, ChartMargin, RenderError, SeriesLayout,
    axis::render_axes,
    classify::classify,
    legend::render_legend,
    scales::ScaleBuilder,
    scene::{Node, SVG_NS},
    series::{collect_series, render_series},
};

/// Time-series chart configuration
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub dimensions: ChartDimensions,
    pub stroke_width: f64,
    /// Approximate tick count on each axis
    pub axis_ticks: usize,
    /// Approximate gridline count; also used when rounding the Y domain
    pub grid_ticks: usize,
    pub tick_size: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            dimensions: ChartDimensions::default(),
            stroke_width: 2.0,
            axis_ticks: 6,
            grid_ticks: 10,
            tick_size: 6.0,
        }
    }
}

impl ChartOptions {
    pub fn new(width: f64, height: f64) -> Self {
        Self::default().size(width, height)
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.dimensions.width = width;
        self.dimensions.height = height;
        self
    }

    pub fn margin(mut self, margin: ChartMargin) -> Self {
        self.dimensions = self.dimensions.with_margin(margin);
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn axis_ticks(mut self, count: usize) -> Self {
        self.axis_ticks = count;
        self
    }

    pub fn grid_ticks(mut self, count: usize) -> Self {
        self.grid_ticks = count;
        self
    }
}

/// Outcome of one render pass
#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult {
    /// No records; the surface must not be touched
    Skipped,
    /// Data could not be classified or scaled; `nodes` hold one message line
    Placeholder { error: RenderError, nodes: Vec<Node> },
    /// A complete chart
    Built { layout: SeriesLayout, nodes: Vec<Node> },
}

impl RenderResult {
    pub fn nodes(&self) -> &[Node] {
        match self {
            Self::Skipped => &[],
            Self::Placeholder { nodes, .. } | Self::Built { nodes, .. } => nodes,
        }
    }

    pub fn error(&self) -> Option<RenderError> {
        match self {
            Self::Placeholder { error, .. } => Some(*error),
            _ => None,
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self, Self::Built { .. })
    }
}

/// Run the whole pipeline over `records`
pub fn render(records: &[Record], options: &ChartOptions) -> RenderResult {
    if records.is_empty() {
        return RenderResult::Skipped;
    }

    let layout = classify(records);
    let sorted = sorted_by_time(records);
    let dims = &options.dimensions;

    let scales = match ScaleBuilder::new(dims.inner_width(), dims.inner_height())
        .nice_count(options.grid_ticks)
        .build(&sorted, layout)
    {
        Ok(scales) => scales,
        Err(error) => {
            tracing::warn!(
                layout = layout.label(),
                records = records.len(),
                "chart not drawn: {}",
                error
            );
            return RenderResult::Placeholder {
                error,
                nodes: vec![placeholder(error, options)],
            };
        }
    };

    let series = collect_series(&sorted, layout);
    let mut plot = Node::new("g")
        .attr("transform", dims.inner_transform())
        .children(render_axes(&scales, options));
    plot = plot.children(render_series(&series, &scales, options));

    tracing::debug!(
        layout = layout.label(),
        records = records.len(),
        series = series.len(),
        defined = series.iter().map(|s| s.defined_count()).sum::<usize>(),
        "chart built"
    );

    let mut nodes = vec![svg_root(options).child(plot)];
    if layout == SeriesLayout::Multi {
        nodes.push(render_legend());
    }

    RenderResult::Built { layout, nodes }
}

fn svg_root(options: &ChartOptions) -> Node {
    let dims = &options.dimensions;
    Node::new("svg")
        .attr("xmlns", SVG_NS)
        .attr("width", dims.width)
        .attr("height", dims.height)
        .attr("viewBox", dims.viewbox())
}

/// One diagnostic line in place of the chart
fn placeholder(error: RenderError, options: &ChartOptions) -> Node {
    svg_root(options).child(
        Node::new("g")
            .attr("transform", options.dimensions.inner_transform())
            .child(
                Node::new("text")
                    .class("placeholder")
                    .attr("x", 0)
                    .attr("y", 14)
                    .attr("fill", colors::TEXT_MUTED)
                    .text(error.to_string()),
            ),
    )
}
