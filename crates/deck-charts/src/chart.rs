//! Time-series chart component
//!
//! Mounts the render pipeline onto a DOM container. The container's children
//! belong to the chart: every data change clears and rebuilds them, and
//! unmounting clears them.

use deck_core::Record;
use leptos::{html, prelude::*};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::{
    ChartOptions,
    mount::ChartMount,
    scene::{Node, Surface, element_namespace},
};

// ============================================================================
// DOM SURFACE
// ============================================================================

/// Surface backed by a live DOM element
///
/// Nodes are turned into real elements with `createElementNS`, so SVG
/// children land in the SVG namespace without going through an HTML parser.
#[derive(Debug, Clone)]
pub struct DomSurface {
    element: Element,
}

impl DomSurface {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    fn build(
        document: &Document,
        node: &Node,
        parent_ns: Option<&'static str>,
    ) -> Result<Element, JsValue> {
        let ns = element_namespace(node.tag, parent_ns);
        let element = match ns {
            Some(ns) => document.create_element_ns(Some(ns), node.tag)?,
            None => document.create_element(node.tag)?,
        };

        // Namespace already set by createElementNS
        for (name, value) in node.attrs.iter().filter(|(name, _)| *name != "xmlns") {
            element.set_attribute(name, value)?;
        }
        if let Some(text) = &node.text {
            element.set_text_content(Some(text));
        }
        for child in &node.children {
            let child: Element = Self::build(document, child, ns)?;
            element.append_child(&child)?;
        }

        Ok(element)
    }
}

impl Surface for DomSurface {
    fn clear(&mut self) {
        while let Some(child) = self.element.first_child() {
            if let Err(e) = self.element.remove_child(&child) {
                tracing::error!("failed to detach chart element: {:?}", e);
                break;
            }
        }
    }

    fn append(&mut self, node: Node) {
        let Some(document) = self.element.owner_document() else {
            tracing::error!("chart container is not attached to a document");
            return;
        };

        let attached = Self::build(&document, &node, None)
            .and_then(|element| self.element.append_child(&element));
        if let Err(e) = attached {
            tracing::error!("failed to attach <{}>: {:?}", node.tag, e);
        }
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Line chart for loosely-typed `[timestamp, value]` records
#[component]
pub fn TimeSeriesChart(
    #[prop(into)] data: Signal<Vec<Record>>,
    #[prop(optional)] options: Option<ChartOptions>,
) -> impl IntoView {
    let options = options.unwrap_or_default();
    let container = NodeRef::<html::Div>::new();

    Effect::new(move |prev: Option<Option<ChartMount<DomSurface>>>| {
        let records = data.get();
        let mut mount = match prev.flatten() {
            Some(mount) => mount,
            None => {
                let element: Element = container.get()?.into();
                ChartMount::new(DomSurface::new(element)).with_options(options.clone())
            }
        };
        mount.update(&records);
        Some(mount)
    });

    on_cleanup(move || {
        if let Some(element) = container.get_untracked() {
            ChartMount::new(DomSurface::new(element.into())).teardown();
        }
    });

    view! { <div class="chart-surface" node_ref=container></div> }
}
