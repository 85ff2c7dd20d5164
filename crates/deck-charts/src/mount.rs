//! Mount lifecycle: one surface, rebuilt from scratch on every data change

use deck_core::Record;

use crate::{
    ChartOptions, RenderError, SeriesLayout,
    render::{RenderResult, render},
    scene::Surface,
};

/// Per-instance chart state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    /// Nothing drawn
    #[default]
    Empty,
    /// A full chart is on the surface
    Built(SeriesLayout),
    /// A diagnostic line is on the surface
    Placeholder(RenderError),
}

/// Owns a surface and keeps it in sync with the latest records
#[derive(Debug)]
pub struct ChartMount<S: Surface> {
    surface: S,
    options: ChartOptions,
    state: MountState,
}

impl<S: Surface> ChartMount<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            options: ChartOptions::default(),
            state: MountState::Empty,
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Re-render for a new snapshot of records.
    ///
    /// An empty snapshot leaves the surface and state untouched. Otherwise
    /// the surface is cleared before the new elements are appended.
    pub fn update(&mut self, records: &[Record]) -> MountState {
        let (next, nodes) = match render(records, &self.options) {
            RenderResult::Skipped => return self.state,
            RenderResult::Placeholder { error, nodes } => (MountState::Placeholder(error), nodes),
            RenderResult::Built { layout, nodes } => (MountState::Built(layout), nodes),
        };

        self.surface.clear();
        for node in nodes {
            self.surface.append(node);
        }
        self.state = next;
        self.state
    }

    /// Clear the surface unconditionally
    pub fn teardown(&mut self) {
        self.surface.clear();
        self.state = MountState::Empty;
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
