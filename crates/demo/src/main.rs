// File: crates/demo/src/main.rs
// Summary: Demo renders every plot variant to PNGs; optionally plots a
// name,value CSV passed on the command line.

use anyhow::{Context, Result};
use sciplot_core::{show_grid, Plot, PlotConfig};
use sciplot_render_skia::SkiaSurface;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).ok();

    // 1) Bar with direct labels (auto-selected from string keys)
    let mut cfg = PlotConfig::default();
    cfg.title = "City populations".to_string();
    let cities = vec![
        ("Shanghai", 24_256_800.0),
        ("Beijing", 21_516_000.0),
        ("Lagos", 21_324_000.0),
        ("Tokyo", 13_297_629.0),
        ("Sao Paulo", 11_895_893.0),
    ];
    let bar = Plot::auto(cities, cfg)?;
    save(&bar, out_dir.join("bar.png"))?;

    // 2) Line from a plain sequence
    let mut cfg = PlotConfig::default();
    cfg.title = "Waveform".to_string();
    cfg.xlabel = "sample".to_string();
    cfg.ylabel = "amplitude".to_string();
    cfg.grid = true;
    let wave: Vec<f64> = (0..200).map(|i| (i as f64 * 0.1).sin() * 10.0 + 12.0).collect();
    let line = Plot::auto(wave.clone(), cfg)?;
    save(&line, out_dir.join("line.png"))?;

    // 3) Filled line
    let mut cfg = PlotConfig::default();
    cfg.title = "Filled waveform".to_string();
    cfg.set("fill", true)?;
    let filled = Plot::auto(wave, cfg)?;
    save(&filled, out_dir.join("filled.png"))?;

    // 4) Scatter from duplicate-key pairs
    let mut cfg = PlotConfig::default();
    cfg.title = "Scatter".to_string();
    let points: Vec<(f64, f64)> = (0..500)
        .map(|i| {
            let x = (i % 100) as f64;
            (x, x * 0.3 + ((i * 37) % 17) as f64)
        })
        .collect();
    let scatter = Plot::auto(points, cfg)?;
    save(&scatter, out_dir.join("scatter.png"))?;

    // 5) Histogram of skewed samples
    let mut cfg = PlotConfig::default();
    cfg.title = "Sample distribution".to_string();
    let samples: Vec<f64> = (0..2000)
        .map(|i| {
            let t = (i * 211 % 1000) as f64 / 1000.0;
            1_000_000.0 + (t * t) * 550.0
        })
        .collect();
    let hist = Plot::histogram(&samples, None, cfg)?;
    save(&hist, out_dir.join("histogram.png"))?;

    // 6) Matrix heatmap
    let mut cfg = PlotConfig::default();
    cfg.title = "Heatmap".to_string();
    let rows: Vec<Vec<f64>> = (0..16)
        .map(|r| (0..24).map(|c| ((r * c) as f64 * 0.05).sin()).collect())
        .collect();
    let matrix = Plot::auto(rows, cfg)?;
    save(&matrix, out_dir.join("matrix.png"))?;

    // 7) Network diagram
    let mut cfg = PlotConfig::default();
    cfg.title = "Module graph".to_string();
    let edges: Vec<(String, String)> = [
        ("core", "render"),
        ("core", "demo"),
        ("render", "demo"),
        ("core", "tests"),
    ]
    .iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    let network = Plot::network(&edges, cfg)?;
    save(&network, out_dir.join("network.png"))?;

    // 8) Everything on one grid figure
    let plots = vec![bar, line, filled, scatter, hist, matrix, network];
    let mut surface = SkiaSurface::new(1600, 1200).context("create grid surface")?;
    show_grid(&plots, None, &mut surface)?;
    let grid_out = out_dir.join("grid.png");
    save_surface(&mut surface, &grid_out)?;

    // 9) Optional: bar-plot a name,value CSV
    if let Some(csv_path) = std::env::args().nth(1) {
        let pairs = load_named_csv(Path::new(&csv_path))
            .with_context(|| format!("failed to load CSV '{csv_path}'"))?;
        println!("Loaded {} rows from {csv_path}", pairs.len());
        let mut cfg = PlotConfig::default();
        cfg.title = csv_path.clone();
        let plot = Plot::auto(pairs, cfg)?;
        save(&plot, out_dir.join("csv.png"))?;
    }

    Ok(())
}

fn save(plot: &Plot, out: PathBuf) -> Result<()> {
    let mut surface = SkiaSurface::with_default_size().context("create surface")?;
    plot.save_to_file(&mut surface, &out)
        .with_context(|| format!("render {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn save_surface(surface: &mut SkiaSurface, out: &Path) -> Result<()> {
    use sciplot_core::Surface;
    surface.save_to_file(out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Load a `name,value` CSV (header optional) into labeled pairs.
fn load_named_csv(path: &Path) -> Result<Vec<(String, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let (Some(name), Some(value)) = (rec.get(0), rec.get(1)) else {
            continue;
        };
        match value.trim().parse::<f64>() {
            Ok(v) => out.push((name.trim().to_string(), v)),
            // Skip non-numeric rows (headers).
            Err(_) => continue,
        }
    }
    Ok(out)
}
