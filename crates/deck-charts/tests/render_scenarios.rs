//! End-to-end render passes over raw JSON records.

use deck_charts::{
    ChartMount, ChartOptions, MountState, RenderError, RenderResult, SceneSurface, SeriesLayout,
    classify, render,
};
use deck_core::Record;
use serde_json::json;

fn records(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).expect("records parse from any JSON array")
}

fn mounted(data: &[Record]) -> ChartMount<SceneSurface> {
    let mut mount = ChartMount::new(SceneSurface::new());
    mount.update(data);
    mount
}

#[test]
fn test_single_series_scenario() {
    let data = records(json!([[0, 1], [1, 2], [2, 3]]));
    assert_eq!(classify(&data), SeriesLayout::Single);

    let mount = mounted(&data);
    assert_eq!(mount.state(), MountState::Built(SeriesLayout::Single));

    let surface = mount.surface();
    let paths = surface.find_class("series");
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].get_attr("stroke"), Some("blue"));
    assert!(surface.find_class("legend").is_empty());

    // Niced Y domain is exactly [1, 3]: first point on the bottom edge, last
    // on the top edge.
    let d = paths[0].get_attr("d").unwrap();
    assert!(d.starts_with("M0.00,"));
    assert_eq!(d.matches('L').count(), 2);
    assert!(d.ends_with("L656.00,0.00"));
    assert!(d.contains("M0.00,276.00"));
}

#[test]
fn test_multi_series_scenario() {
    let data = records(json!([[0, [1, 2, 3]], [1, [2, 3, 4]]]));
    assert_eq!(classify(&data), SeriesLayout::Multi);

    let mount = mounted(&data);
    assert_eq!(mount.state(), MountState::Built(SeriesLayout::Multi));

    let surface = mount.surface();
    let strokes: Vec<&str> = surface
        .find_class("series")
        .iter()
        .filter_map(|p| p.get_attr("stroke"))
        .collect();
    assert_eq!(strokes, vec!["blue", "green", "red"]);

    let legend = surface.find_class("legend");
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0].children.len(), 3);
}

#[test]
fn test_all_null_single_scenario() {
    let data = records(json!([[0, null], [1, null]]));
    assert_eq!(classify(&data), SeriesLayout::Single);

    let mount = mounted(&data);
    assert_eq!(mount.state(), MountState::Placeholder(RenderError::NoValidYDomain));

    let surface = mount.surface();
    assert!(surface.find_class("axis").is_empty());
    assert!(surface.find_class("grid").is_empty());
    assert!(surface.find_class("series").is_empty());
    assert_eq!(surface.find_class("placeholder").len(), 1);
}

#[test]
fn test_non_numeric_timestamp_scenario() {
    let data = records(json!([["a", 1], [1, 2]]));
    let result = render(&data, &ChartOptions::default());
    assert!(result.is_built());

    // Only t = 1 feeds the X domain, so every X tick sits at the mid range.
    let x_axis = &result.nodes()[0].children[0].children[1];
    let ticks = x_axis.find_class("tick");
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].get_attr("transform"), Some("translate(328.00,0)"));

    // Both values feed the Y domain: the Y axis spans 1..2.
    let y_axis = &result.nodes()[0].children[0].children[2];
    let labels: Vec<&str> = y_axis
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.as_deref())
        .collect();
    assert_eq!(labels.first(), Some(&"1.0"));
    assert_eq!(labels.last(), Some(&"2.0"));
}

#[test]
fn test_unclassifiable_data_shows_structure_placeholder() {
    let data = records(json!([[0, "x"], [1, {"v": 2}]]));
    let result = render(&data, &ChartOptions::default());
    assert_eq!(result.error(), Some(RenderError::ShapeUndetermined));
}

#[test]
fn test_missing_timestamps_show_x_placeholder() {
    let data = records(json!([["a", 1], ["b", 2]]));
    let result = render(&data, &ChartOptions::default());
    assert_eq!(result.error(), Some(RenderError::NoValidXDomain));

    let text = result.nodes()[0].find_all("text");
    assert_eq!(text[0].text.as_deref(), Some("No valid X data."));
}

#[test]
fn test_empty_records_do_not_mutate_surface() {
    let mount = mounted(&[]);
    assert_eq!(mount.state(), MountState::Empty);
    assert_eq!(mount.surface().mutation_count(), 0);
    assert_eq!(render(&[], &ChartOptions::default()), RenderResult::Skipped);
}

#[test]
fn test_rerender_keeps_only_latest_pass() {
    let mut mount = ChartMount::new(SceneSurface::new());

    mount.update(&records(json!([[0, [1, 2, 3]], [1, [2, 3, 4]]])));
    assert_eq!(mount.surface().nodes().len(), 2);

    mount.update(&records(json!([[0, 5], [1, 6]])));
    let surface = mount.surface();
    assert_eq!(surface.nodes().len(), 1);
    assert_eq!(surface.find_class("series").len(), 1);
    assert!(surface.find_class("legend").is_empty());

    mount.update(&records(json!([[0, null]])));
    let surface = mount.surface();
    assert_eq!(surface.nodes().len(), 1);
    assert!(surface.find_class("series").is_empty());

    mount.update(&records(json!([[3, 1], [1, 2]])));
    assert_eq!(mount.surface().find_class("series").len(), 1);
    assert_eq!(mount.surface().find_class("placeholder").len(), 0);
}

#[test]
fn test_numeric_data_always_builds() {
    let cases = [
        json!([[5, 1]]),
        json!([[2, 3], [1, null], [0, 4]]),
        json!([["bad"], [1, [null, 7]]]),
        json!([[1e12, -0.5], [1.5e12, 0.25]]),
        json!([[0, [1]], [1, 3]]),
    ];

    for case in cases {
        let data = records(case.clone());
        let result = render(&data, &ChartOptions::default());
        assert!(result.is_built(), "expected a chart for {case}");
    }
}

#[test]
fn test_unsorted_records_draw_left_to_right() {
    let data = records(json!([[2, 3], [0, 1], [1, 2]]));
    let result = render(&data, &ChartOptions::default());
    let paths = result.nodes()[0].find_class("series");
    let d = paths[0].get_attr("d").unwrap();
    assert!(d.starts_with("M0.00,"));
    assert!(d.contains("L328.00,"));
    assert!(d.contains("L656.00,"));
}

#[test]
fn test_markup_is_well_formed_svg() {
    let data = records(json!([[0, [1, 2, 3]], [1, [2, 3, 4]]]));
    let mount = mounted(&data);
    let markup = mount.surface().to_markup();

    assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(markup.contains("<div class=\"legend\">"));
    assert_eq!(markup.matches("<path class=\"series\"").count(), 3);
}

#[test]
fn test_short_row_timestamp_widens_x_domain() {
    let data = records(json!([[5], [0, 1], [1, 2]]));
    let result = render(&data, &ChartOptions::default());
    assert!(result.is_built());

    let x_axis = &result.nodes()[0].children[0].children[1];
    let labels: Vec<&str> = x_axis
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.as_deref())
        .collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5"]);

    // The short row has no value, so the line stops at t = 1.
    let paths = result.nodes()[0].find_class("series");
    assert_eq!(paths[0].get_attr("d"), Some("M0.00,276.00L131.20,0.00"));
}
