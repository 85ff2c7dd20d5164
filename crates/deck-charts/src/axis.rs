//! Axis and gridline rendering
//!
//! Produces the same element structure as a D3 axis: a `path.domain` and one
//! `g.tick` (line + label) per tick value.

use deck_core::{LinearTickFormatter, TickFormatter, colors};

use crate::{
    ChartOptions,
    chartkit::{LinearScale, PathBuilder, Scale},
    scales::ChartScales,
    scene::Node,
};

/// Which side of the plot the axis sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

impl AxisOrient {
    /// Direction ticks extend away from the plot
    fn k(&self) -> f64 {
        match self {
            Self::Bottom => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// Axis generator bound to one scale
#[derive(Debug, Clone)]
pub struct Axis<'a> {
    scale: &'a LinearScale,
    orient: AxisOrient,
    tick_count: usize,
    tick_size: f64,
    tick_padding: f64,
    labels: bool,
    domain_line: bool,
    class: &'static str,
    stroke: &'static str,
}

impl<'a> Axis<'a> {
    fn new(scale: &'a LinearScale, orient: AxisOrient) -> Self {
        Self {
            scale,
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            labels: true,
            domain_line: true,
            class: "axis",
            stroke: colors::AXIS,
        }
    }

    pub fn bottom(scale: &'a LinearScale) -> Self {
        Self::new(scale, AxisOrient::Bottom)
    }

    pub fn left(scale: &'a LinearScale) -> Self {
        Self::new(scale, AxisOrient::Left)
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Tick length; negative values extend ticks across the plot
    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size = size;
        self
    }

    pub fn without_labels(mut self) -> Self {
        self.labels = false;
        self
    }

    pub fn without_domain(mut self) -> Self {
        self.domain_line = false;
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn stroke(mut self, stroke: &'static str) -> Self {
        self.stroke = stroke;
        self
    }

    /// Tick values this axis draws
    pub fn tick_values(&self) -> Vec<f64> {
        self.scale.ticks(self.tick_count)
    }

    pub fn render(&self) -> Node {
        let k = self.orient.k();
        let anchor = match self.orient {
            AxisOrient::Bottom => "middle",
            AxisOrient::Left => "end",
        };

        let mut group = Node::new("g")
            .class(self.class)
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor);

        if self.domain_line {
            group = group.child(
                Node::new("path")
                    .class("domain")
                    .attr("stroke", self.stroke)
                    .attr("d", self.domain_path()),
            );
        }

        let formatter = LinearTickFormatter::for_step(self.scale.tick_step(self.tick_count));
        let spacing = self.tick_size.max(0.0) + self.tick_padding;

        let ticks = self.tick_values().into_iter().map(|value| {
            let pos = self.scale.scale(value);
            let (transform, line, label) = match self.orient {
                AxisOrient::Bottom => (
                    format!("translate({:.2},0)", pos),
                    Node::new("line").attr("y2", k * self.tick_size),
                    Node::new("text")
                        .attr("y", k * spacing)
                        .attr("dy", "0.71em"),
                ),
                AxisOrient::Left => (
                    format!("translate(0,{:.2})", pos),
                    Node::new("line").attr("x2", k * self.tick_size),
                    Node::new("text")
                        .attr("x", k * spacing)
                        .attr("dy", "0.32em"),
                ),
            };

            let mut tick = Node::new("g")
                .class("tick")
                .attr("opacity", 1)
                .attr("transform", transform)
                .child(line.attr("stroke", self.stroke));

            if self.labels {
                tick = tick.child(
                    label
                        .attr("fill", colors::AXIS)
                        .text(formatter.format(value)),
                );
            }
            tick
        });

        group.children(ticks)
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = self.scale.range_bounds();
        let outer = self.orient.k() * self.tick_size;
        match self.orient {
            AxisOrient::Bottom => PathBuilder::new()
                .move_to(r0, outer)
                .vertical_to(0.0)
                .horizontal_to(r1)
                .vertical_to(outer)
                .build(),
            AxisOrient::Left => PathBuilder::new()
                .move_to(outer, r0)
                .horizontal_to(0.0)
                .vertical_to(r1)
                .horizontal_to(outer)
                .build(),
        }
    }
}

/// Horizontal gridlines at each Y tick, spanning the inner width, unlabeled
pub fn render_grid(y: &LinearScale, inner_width: f64, ticks: usize) -> Node {
    Axis::left(y)
        .ticks(ticks)
        .tick_size(-inner_width)
        .without_labels()
        .without_domain()
        .class("grid")
        .stroke(colors::GRID)
        .render()
}

/// Grid, bottom X axis and left Y axis, in drawing order
pub fn render_axes(scales: &ChartScales, options: &ChartOptions) -> Vec<Node> {
    let dims = &options.dimensions;

    let grid = render_grid(&scales.y, dims.inner_width(), options.grid_ticks);

    let x_axis = Axis::bottom(&scales.x)
        .ticks(options.axis_ticks)
        .tick_size(options.tick_size)
        .render()
        .attr("transform", format!("translate(0,{})", dims.inner_height()));

    let y_axis = Axis::left(&scales.y)
        .ticks(options.axis_ticks)
        .tick_size(options.tick_size)
        .render();

    vec![grid, x_axis, y_axis]
}
