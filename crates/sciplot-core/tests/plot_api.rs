// File: crates/sciplot-core/tests/plot_api.rs
// Purpose: End-to-end construction and drawing through a recording surface.

mod common;

use std::collections::BTreeMap;

use common::{Call, RecordingSurface};
use sciplot_core::{show_grid, AxisSide, Data, Plot, PlotConfig, PlotError, Variant};

fn string_map() -> Data {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), 1.0);
    map.insert("b".to_string(), 2.0);
    map.insert("c".to_string(), 3.0);
    Data::from(map)
}

#[test]
fn auto_on_string_map_selects_bar() {
    let plot = Plot::auto(string_map(), PlotConfig::default()).unwrap();
    assert_eq!(plot.variant(), Variant::Bar);
    assert_eq!(plot.series().len(), 3);
}

#[test]
fn auto_on_duplicate_key_pairs_selects_scatter() {
    let plot = Plot::auto(
        vec![(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)],
        PlotConfig::default(),
    )
    .unwrap();
    assert_eq!(plot.variant(), Variant::Scatter);
}

#[test]
fn bar_plot_draws_categorical_ticks_and_direct_labels() {
    let plot = Plot::auto(string_map(), PlotConfig::default()).unwrap();
    let mut surface = RecordingSurface::new();
    plot.render(&mut surface).unwrap();

    // Three bars get direct labels, so the y axis is suppressed.
    assert!(surface.calls.iter().any(|c| matches!(
        c,
        Call::Begin { hide_y_axis: true, .. }
    )));
    let x_ticks = surface.calls.iter().find_map(|c| match c {
        Call::Ticks { axis: AxisSide::X, labels } => Some(labels.clone()),
        _ => None,
    });
    assert_eq!(x_ticks.unwrap(), vec!["a", "b", "c"]);
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::Bars { bars, .. } if bars.len() == 3)));
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::Labels(l) if l.len() == 3)));
    assert!(matches!(surface.calls.last(), Some(Call::Render)));
}

#[test]
fn empty_series_renders_nothing_but_succeeds() {
    let plot = Plot::auto(Vec::<f64>::new(), PlotConfig::default()).unwrap();
    assert_eq!(plot.variant(), Variant::Line);

    let mut surface = RecordingSurface::new();
    plot.render(&mut surface).unwrap();
    assert!(!surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::Line(_) | Call::Bars { .. } | Call::Scatter(_))));
    assert!(matches!(surface.calls.last(), Some(Call::Render)));
}

#[test]
fn line_fill_option_switches_primitive() {
    let mut cfg = PlotConfig::default();
    cfg.set("fill", true).unwrap();
    let plot = Plot::auto(vec![1.0, 3.0, 2.0], cfg).unwrap();

    let mut surface = RecordingSurface::new();
    plot.render(&mut surface).unwrap();
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::FilledArea(p) if p.len() == 3)));
}

#[test]
fn fill_on_a_bar_plot_is_an_invalid_option() {
    let mut cfg = PlotConfig::default();
    cfg.set("fill", true).unwrap();
    let err = Plot::auto(string_map(), cfg).unwrap_err();
    match err {
        PlotError::InvalidOption { name, variant } => {
            assert_eq!(name, "fill");
            assert_eq!(variant, "bar");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn histogram_bars_are_one_bin_wide() {
    let samples = [1.0, 1.0, 1.0, 2.0, 3.0, 1.0, 2.0, 6.0, 8.0, 5.0, 3.0, 1.0, 102.0];
    let plot = Plot::histogram(&samples, Some(1.0), PlotConfig::default()).unwrap();
    assert_eq!(plot.variant(), Variant::Histogram);

    let mut surface = RecordingSurface::new();
    plot.render(&mut surface).unwrap();
    let (bars, width) = surface
        .calls
        .iter()
        .find_map(|c| match c {
            Call::Bars { bars, width } => Some((bars.clone(), *width)),
            _ => None,
        })
        .expect("bars drawn");
    assert_eq!(width, 1.0);
    assert!(bars.contains(&(1.0, 5.0)));
}

#[test]
fn matrix_plot_draws_an_image() {
    let plot = Plot::auto(
        vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        PlotConfig::default(),
    )
    .unwrap();
    assert_eq!(plot.variant(), Variant::Matrix);

    let mut surface = RecordingSurface::new();
    plot.render(&mut surface).unwrap();
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::Image { rows: 2, cols: 3 })));
}

#[test]
fn network_plot_draws_a_graph() {
    let edges = vec![
        ("a".to_string(), "b".to_string()),
        ("b".to_string(), "c".to_string()),
    ];
    let plot = Plot::network(&edges, PlotConfig::default()).unwrap();
    assert_eq!(plot.variant(), Variant::Network);

    let mut surface = RecordingSurface::new();
    plot.render(&mut surface).unwrap();
    assert!(surface.calls.iter().any(|c| matches!(
        c,
        Call::Graph { nodes, edges } if nodes.len() == 3 && edges.len() == 2
    )));
}

#[test]
fn save_goes_through_the_surface() {
    let plot = Plot::auto(vec![1.0, 2.0], PlotConfig::default()).unwrap();
    let mut surface = RecordingSurface::new();
    plot.save_to_file(&mut surface, "out/plot.png").unwrap();
    assert!(surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::Save(p) if p.ends_with("plot.png"))));
}

#[test]
fn show_grid_draws_each_plot_in_its_own_cell() {
    let plots = vec![
        Plot::auto(vec![1.0, 2.0], PlotConfig::default()).unwrap(),
        Plot::auto(string_map(), PlotConfig::default()).unwrap(),
        Plot::auto(vec![(1.0, 1.0), (1.0, 2.0)], PlotConfig::default()).unwrap(),
    ];
    let mut surface = RecordingSurface::new();
    show_grid(&plots, None, &mut surface).unwrap();

    let begins = surface.begins();
    assert_eq!(begins.len(), 3);
    // Three plots on a 2x2 grid: at least two distinct frames.
    let frames: Vec<_> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Begin { frame, .. } => Some(*frame),
            _ => None,
        })
        .collect();
    assert_ne!(frames[0], frames[1]);
    // Single present at the end.
    let renders = surface
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Render))
        .count();
    assert_eq!(renders, 1);
    assert!(matches!(surface.calls.last(), Some(Call::Render)));
}
