//! Static legend for vector layouts

use deck_core::colors;

use crate::{scene::Node, series::MAX_SERIES};

/// `(label, color)` per palette position
pub fn legend_entries() -> Vec<(String, &'static str)> {
    (0..MAX_SERIES)
        .map(|i| (format!("Series {}", i + 1), colors::series(i)))
        .collect()
}

/// `div.legend` with one swatch/label pair per palette position.
///
/// Entries are keyed to the palette, not to which series carry data.
pub fn render_legend() -> Node {
    let items = legend_entries().into_iter().map(|(label, color)| {
        Node::new("span")
            .child(
                Node::new("i")
                    .class("legend-swatch")
                    .attr("style", format!("background: {color}")),
            )
            .child(Node::new("span").text(label))
    });

    Node::new("div").class("legend").children(items)
}
