// File: crates/demo/src/main.rs
// Summary: Demo loads a reflection sweep CSV (plus optional reference) and renders Smith, polar and inductance PNGs.

use anyhow::{Context, Result};
use num_complex::Complex64;
use std::path::{Path, PathBuf};
use vna_chart_core::si::format_si;
use vna_chart_core::datapoint::REF_IMPEDANCE;
use vna_chart_core::theme::{self, Theme};
use vna_chart_core::{Chart, ChartKind, Datapoint, Point, Series};
use vna_chart_render::{RenderOptions, SkiaRenderer};

struct Args {
    sweep: Option<PathBuf>,
    reference: Option<PathBuf>,
    pointer: Option<Point>,
    theme: Theme,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let data = match &args.sweep {
        Some(path) => {
            load_sweep_csv(path).with_context(|| format!("failed to load sweep '{}'", path.display()))?
        }
        None => {
            log::info!("no sweep given, using a synthetic series RLC resonator");
            synthetic_sweep()
        }
    };
    if data.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }
    let reference = match &args.reference {
        Some(path) => load_sweep_csv(path)
            .with_context(|| format!("failed to load reference '{}'", path.display()))?,
        None => Series::empty(),
    };
    if let Some(span) = data.span() {
        println!(
            "Loaded {} samples, {}Hz .. {}Hz ({} reference)",
            data.len(),
            format_si(span.start, 4),
            format_si(span.stop, 4),
            reference.len()
        );
    }

    let renderer = SkiaRenderer::new();
    let charts = [
        (ChartKind::Smith, "S11 Smith Chart", "smith"),
        (ChartKind::Polar, "S11 Polar", "polar"),
        (ChartKind::Inductance, "S11 Serial L", "inductance"),
    ];
    for (kind, name, suffix) in charts {
        let mut chart = Chart::new(kind, name);
        chart.config.theme = args.theme;
        chart.config.draw_lines = true;
        if kind == ChartKind::Smith {
            chart.config.swr_markers = vec![1.5, 2.0, 3.0];
        }
        chart.set_data(data.clone());
        chart.set_reference(reference.clone());
        chart.add_marker().location = Some(data.len() / 2);

        let opts = RenderOptions::default();
        if let Some(pointer) = args.pointer {
            report_pointer(&mut chart, pointer, &opts);
        }

        let out = out_name_with(args.sweep.as_deref(), suffix);
        renderer.render_to_png(&chart, &opts, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// `demo [sweep.csv] [reference.csv] [--pointer X,Y] [--theme light|dark]`
fn parse_args() -> Result<Args> {
    let mut args = Args { sweep: None, reference: None, pointer: None, theme: Theme::default() };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        if a == "--pointer" {
            let v = it.next().context("--pointer needs X,Y")?;
            args.pointer = Some(parse_point(&v)?);
        } else if a == "--theme" {
            let name = it.next().context("--theme needs a name")?;
            args.theme = theme::find(&name);
            if !args.theme.name.eq_ignore_ascii_case(&name) {
                log::warn!("unknown theme '{name}', using {}", args.theme.name);
            }
        } else if args.sweep.is_none() {
            args.sweep = Some(PathBuf::from(a));
        } else if args.reference.is_none() {
            args.reference = Some(PathBuf::from(a));
        } else {
            anyhow::bail!("unexpected argument '{a}'");
        }
    }
    Ok(args)
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s.split_once(',').with_context(|| format!("pointer '{s}' is not X,Y"))?;
    Ok(Point::new(x.trim().parse()?, y.trim().parse()?))
}

/// Snap the chart's marker to the pointer and print what sits under it.
fn report_pointer(chart: &mut Chart, pointer: Point, opts: &RenderOptions) {
    let (w, h) = opts.canvas_for(chart.kind);
    let (w, h) = (f64::from(w), f64::from(h));
    match chart.snap_active_marker(pointer, w, h) {
        Some(hit) => println!(
            "{}: nearest {:?} sample #{} at {}Hz ({:.1} px away)",
            chart.name,
            hit.source,
            hit.index,
            format_si(hit.frequency, 4),
            hit.distance
        ),
        None => println!("{}: pointer ({}, {}) is off the plot", chart.name, pointer.x, pointer.y),
    }
    if let Some(r) = chart.readout(pointer, w, h) {
        println!("{}: cursor reads {}Hz, {}", chart.name, format_si(r.frequency, 4), format_si(r.value, 3));
    }
}

/// Produce output file name like target/out/vna_<stem>_<suffix>.png
fn out_name_with(input: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input.and_then(|p| p.file_stem()).and_then(|s| s.to_str()).unwrap_or("synthetic");
    PathBuf::from("target/out").join(format!("vna_{stem}_{suffix}.png"))
}

/// Load a `freq,re,im` CSV; header names are matched case-insensitively.
fn load_sweep_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {headers:?}");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_freq = idx(&["freq", "frequency", "f", "hz"]).context("no frequency column")?;
    let i_re = idx(&["re", "real", "s11_re", "s11re"]).context("no real part column")?;
    let i_im = idx(&["im", "imag", "s11_im", "s11im"]).context("no imaginary part column")?;

    let mut points = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        match (parse(i_freq), parse(i_re), parse(i_im)) {
            (Some(f), Some(re), Some(im)) => points.push(Datapoint::try_new(f, re, im)?),
            _ => log::warn!("{}: skipping unparsable row {}", path.display(), row + 2),
        }
    }
    Ok(Series::try_new(points)?)
}

/// 30 Ω series RLC (1 µH, 100 pF) swept over 1..30 MHz.
fn synthetic_sweep() -> Series {
    let (r, l, c) = (30.0, 1e-6, 100e-12);
    let z0 = Complex64::new(REF_IMPEDANCE, 0.0);
    let points = (0..=200)
        .map(|i| {
            let f = 1e6 + 29e6 * i as f64 / 200.0;
            let w = 2.0 * std::f64::consts::PI * f;
            let z = Complex64::new(r, w * l - 1.0 / (w * c));
            let g = (z - z0) / (z + z0);
            Datapoint::new(f, g.re, g.im)
        })
        .collect();
    Series::new(points)
}
