// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure demos for `vizfig_charts`.
//!
//! Writes one SVG per figure plus `index.html` into the directory given as the first
//! argument (default `vizfig_demo_out`). Set `RUST_LOG=debug` to see build summaries.

mod html;

use std::error::Error;
use std::f64::consts::TAU;
use std::path::PathBuf;

use peniko::color::palette::css;
use vizfig_charts::{
    BarChart, DashPattern, Figure, FigureGrid, FrameType, HistogramChart, LegendAlignment,
    LineChart, MUTED, SeriesStyle, VIBRANT, generate, make_range, rgb_hex,
};

use crate::html::HtmlSection;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("vizfig_demo_out"), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let sections = vec![
        line_demo()?,
        scatter_demo()?,
        categorical_demo()?,
        stacked_bar_demo()?,
        histogram_demo()?,
        grid_demo()?,
    ];

    for section in &sections {
        std::fs::write(out_dir.join(section.file), &section.svg)?;
    }
    let index = out_dir.join("index.html");
    std::fs::write(&index, html::render_report("VizFig demo", &sections))?;
    log::info!("wrote {} figures and {}", sections.len(), index.display());
    Ok(())
}

/// A deterministic sequence in `[0, 1)`, so demo output is stable between runs.
fn noise(count: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 11) as f64 / (1_u64 << 53) as f64
        })
        .collect()
}

fn sine_chart() -> Result<LineChart, Box<dyn Error>> {
    let x = make_range(0.0, TAU, 0.1);
    let mut chart = LineChart::new();
    chart.plot_fn(&x, f64::sin, SeriesStyle::new(VIBRANT[1]))?;
    chart.plot_fn(
        &x,
        f64::cos,
        SeriesStyle::new(VIBRANT[0]).with_dash("6,3".parse::<DashPattern>()?),
    )?;
    Ok(chart)
}

fn line_demo() -> Result<HtmlSection, Box<dyn Error>> {
    let mut chart = sine_chart()?;
    chart.set_title("Trigonometry");
    chart.set_x_label("angle (rad)");
    chart.set_y_label("value");
    chart.set_grid(true);
    chart.add_x_marker(std::f64::consts::PI);
    chart.set_legend(&["sin", "cos"]);
    chart.set_legend_alignment(LegendAlignment::BottomLeft);
    Ok(HtmlSection {
        title: "Line",
        description: "Two sampled functions, one dashed, with a grid, a custom x tick at pi, and a legend.",
        file: "line.svg",
        svg: chart.svg_text(),
    })
}

fn scatter_demo() -> Result<HtmlSection, Box<dyn Error>> {
    let x: Vec<f64> = noise(60, 7).iter().map(|v| v * 10.0).collect();
    let jitter = noise(60, 11);
    let y: Vec<f64> = x
        .iter()
        .zip(&jitter)
        .map(|(x, j)| 0.5 * x + 2.0 * j)
        .collect();
    let trend = generate(&[0.0, 10.0], |x| 0.5 * x + 1.0);

    let mut chart = LineChart::new();
    chart.set_title("Scatter with trend");
    chart.scatter(&x, &y, SeriesStyle::new(MUTED[1]).with_width(3.0))?;
    chart.plot(&[0.0, 10.0], &trend, SeriesStyle::new(MUTED[0]).with_width(1.5))?;
    chart.set_frame_type(FrameType::AxesOnly);
    chart.set_legend(&["samples", "trend"]);
    chart.set_legend_alignment(LegendAlignment::TopLeft);
    Ok(HtmlSection {
        title: "Scatter",
        description: "Points with a fitted line, on an axes-only frame.",
        file: "scatter.svg",
        svg: chart.svg_text(),
    })
}

fn categorical_demo() -> Result<HtmlSection, Box<dyn Error>> {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let rain = [78, 61, 55, 49, 52, 45, 38, 47, 58, 82, 90, 86];
    let mut chart = LineChart::new();
    chart.set_title("Monthly rainfall");
    chart.set_y_label("mm");
    chart.plot_categorical(&months, &rain, SeriesStyle::new(rgb_hex(0x0077BB)))?;
    chart.scatter_y(&rain, SeriesStyle::new(rgb_hex(0x0077BB)).with_width(4.0))?;
    chart.set_y_range(0.0, 100.0);
    Ok(HtmlSection {
        title: "Categorical",
        description: "A line and its points over twelve category labels, with a fixed y range.",
        file: "categorical.svg",
        svg: chart.svg_text(),
    })
}

fn stacked_bar_demo() -> Result<HtmlSection, Box<dyn Error>> {
    let regions = ["North", "East", "South", "West"];
    let mut chart = BarChart::new();
    chart.set_title("Quarterly balance");
    chart.plot_categorical(&regions, &[12, 9, 14, 7], None)?;
    chart.plot_y(&[5, 8, 3, 6], None)?;
    chart.plot_y(&[-4, -2, -6, -1], css::DARK_GRAY)?;
    chart.set_legend(&["product", "services", "refunds"]);
    chart.set_round_y_markers(true);
    chart.add_y_marker(0);
    chart.set_grid(true);
    Ok(HtmlSection {
        title: "Stacked bars",
        description: "Positive segments stack up and negative ones down from a zero baseline.",
        file: "stacked_bars.svg",
        svg: chart.svg_text(),
    })
}

fn histogram_demo() -> Result<HtmlSection, Box<dyn Error>> {
    // Sum of uniforms, roughly normal.
    let parts: Vec<Vec<f64>> = (0..4).map(|seed| noise(500, 100 + seed)).collect();
    let values: Vec<f64> = (0..500).map(|i| parts.iter().map(|p| p[i]).sum()).collect();
    let mut chart = HistogramChart::new();
    chart.set_title("Sum of four uniforms");
    chart.set_x_label("value");
    chart.set_y_label("count");
    chart.plot(&values, 16, rgb_hex(0x44AA99))?;
    Ok(HtmlSection {
        title: "Histogram",
        description: "500 samples in 16 equal-width bins.",
        file: "histogram.svg",
        svg: chart.svg_text(),
    })
}

fn grid_demo() -> Result<HtmlSection, Box<dyn Error>> {
    let mut sine = sine_chart()?;
    sine.set_title("sin and cos");

    let mut squares = LineChart::new();
    squares.set_title("squares");
    squares.plot_y(&[1, 4, 9, 16, 25], SeriesStyle::default())?;

    let mut bars = BarChart::new();
    bars.set_title("bars");
    bars.plot_y(&[3.0, 1.5, 2.0], None)?;
    bars.set_baselines(vec![0.5, 0.0, 1.0]);

    let mut hist = HistogramChart::new();
    hist.set_title("uniform");
    hist.plot(&noise(200, 3), 8, None)?;

    let mut grid = FigureGrid::new(2, 2);
    grid.set_size(800, 600);
    grid.subplot(&mut sine, 0, 0)?;
    grid.subplot(&mut squares, 0, 1)?;
    grid.subplot(&mut bars, 1, 0)?;
    grid.subplot(&mut hist, 1, 1)?;
    Ok(HtmlSection {
        title: "Grid",
        description: "Four figures resized into the cells of a 2x2 grid.",
        file: "grid.svg",
        svg: grid.svg_text(),
    })
}
