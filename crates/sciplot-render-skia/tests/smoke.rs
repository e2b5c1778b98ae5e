// File: crates/sciplot-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use sciplot_core::{Plot, PlotConfig, PlotError};
use sciplot_render_skia::SkiaSurface;

#[test]
fn render_smoke_png() {
    let mut cfg = PlotConfig::default();
    cfg.title = "smoke".to_string();
    let plot = Plot::auto(vec![0.0, 2.0, 1.0, 3.5, 2.5], cfg).expect("plot");

    let mut surface = SkiaSurface::with_default_size().expect("surface");
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    plot.save_to_file(&mut surface, &out).expect("save should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API produces a real PNG.
    let bytes = surface.to_png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // And that the decoded image matches the surface size.
    let img = image::load_from_memory(&bytes).expect("decodable png");
    assert_eq!(img.width(), sciplot_render_skia::WIDTH as u32);
    assert_eq!(img.height(), sciplot_render_skia::HEIGHT as u32);
}

#[test]
fn unknown_extension_is_rejected() {
    let plot = Plot::auto(vec![1.0, 2.0], PlotConfig::default()).expect("plot");
    let mut surface = SkiaSurface::with_default_size().expect("surface");
    let err = plot
        .save_to_file(&mut surface, "target/test_out/smoke.tiff")
        .unwrap_err();
    assert!(matches!(err, PlotError::Surface(_)));
}

#[test]
fn grid_of_variants_renders() {
    let plots = vec![
        Plot::auto(vec![("a", 1.0), ("b", 4.0), ("c", 2.0)], PlotConfig::default()).unwrap(),
        Plot::auto(vec![1.0, 2.0, 1.5, 3.0], PlotConfig::default()).unwrap(),
        Plot::histogram(&[1.0, 1.0, 2.0, 5.0, 5.5], Some(1.0), PlotConfig::default()).unwrap(),
        Plot::auto(vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]], PlotConfig::default()).unwrap(),
    ];
    let mut surface = SkiaSurface::with_default_size().expect("surface");
    sciplot_core::show_grid(&plots, Some(2), &mut surface).expect("grid render");
    let bytes = surface.to_png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
