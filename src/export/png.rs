//! PNG rendering of the budget chart
//!
//! Draws the grouped bar chart onto an RGBA canvas with `imageproc`
//! primitives: white background, horizontal gridlines at the axis tick
//! steps, a baseline, teal income bars and red expense bars per month, and
//! legend swatches in the top margin. Month ticks are marked along the
//! baseline. No font rasterization is involved.

use chrono::Local;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

use crate::chart::{ChartState, EXPENSE_RGB, INCOME_RGB};
use crate::error::{BudgetChartError, BudgetChartResult};
use crate::models::month::MONTH_COUNT;

/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 900;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 500;

// Plot area margins
const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 40;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GRID: Rgba<u8> = Rgba([225, 225, 225, 255]);
const AXIS: Rgba<u8> = Rgba([80, 80, 80, 255]);

/// The default export filename: `budget-chart-<ISO-date>.png`
pub fn default_filename() -> String {
    format!("budget-chart-{}.png", Local::now().format("%Y-%m-%d"))
}

/// Render the chart and write it as a PNG to `path`.
pub fn export_chart_png(chart: &ChartState, path: &Path) -> BudgetChartResult<()> {
    let canvas = render_canvas(chart);
    canvas
        .save(path)
        .map_err(|e| BudgetChartError::export(format!("Failed to write {}: {}", path.display(), e)))
}

/// Render the chart into `dir` under the default dated filename.
///
/// Creates the directory if needed and returns the full path written.
pub fn export_to_dir(chart: &ChartState, dir: &Path) -> BudgetChartResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| BudgetChartError::export(format!("Failed to create {}: {}", dir.display(), e)))?;

    let path = dir.join(default_filename());
    export_chart_png(chart, &path)?;
    Ok(path)
}

/// Draw the full chart canvas
fn render_canvas(chart: &ChartState) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, WHITE);

    let plot_left = MARGIN_LEFT as f32;
    let plot_right = (CANVAS_WIDTH - MARGIN_RIGHT) as f32;
    let plot_top = MARGIN_TOP as f32;
    let plot_bottom = (CANVAS_HEIGHT - MARGIN_BOTTOM) as f32;
    let plot_height = plot_bottom - plot_top;

    let scale = chart.scale();

    // Horizontal gridlines at each tick
    for tick in scale.ticks() {
        let y = plot_bottom - (tick / scale.upper) as f32 * plot_height;
        draw_line_segment_mut(&mut canvas, (plot_left, y), (plot_right, y), GRID);
    }

    draw_bars(chart, &mut canvas, plot_left, plot_right, plot_bottom, plot_height);

    // Axis lines over the bars so the frame stays crisp
    draw_line_segment_mut(
        &mut canvas,
        (plot_left, plot_bottom),
        (plot_right, plot_bottom),
        AXIS,
    );
    draw_line_segment_mut(&mut canvas, (plot_left, plot_top), (plot_left, plot_bottom), AXIS);

    // Month tick marks along the baseline
    let group_width = (plot_right - plot_left) / MONTH_COUNT as f32;
    for slot in 0..=MONTH_COUNT {
        let x = plot_left + slot as f32 * group_width;
        draw_line_segment_mut(&mut canvas, (x, plot_bottom), (x, plot_bottom + 5.0), AXIS);
    }

    draw_legend(&mut canvas);

    canvas
}

/// Draw the grouped income/expense bars
fn draw_bars(
    chart: &ChartState,
    canvas: &mut RgbaImage,
    plot_left: f32,
    plot_right: f32,
    plot_bottom: f32,
    plot_height: f32,
) {
    let series = chart.series();
    let scale = chart.scale();
    let group_width = (plot_right - plot_left) / MONTH_COUNT as f32;
    // Two bars per group with padding on either side
    let bar_width = (group_width * 0.35).max(1.0);

    for slot in 0..MONTH_COUNT {
        let group_left = plot_left + slot as f32 * group_width;
        let income_x = group_left + group_width * 0.10;
        let expense_x = group_left + group_width * 0.55;

        draw_bar(
            canvas,
            income_x,
            bar_width,
            series.income[slot],
            scale.upper,
            plot_bottom,
            plot_height,
            rgba(INCOME_RGB),
        );
        draw_bar(
            canvas,
            expense_x,
            bar_width,
            series.expense[slot],
            scale.upper,
            plot_bottom,
            plot_height,
            rgba(EXPENSE_RGB),
        );
    }
}

/// Draw a single vertical bar anchored to the baseline
#[allow(clippy::too_many_arguments)]
fn draw_bar(
    canvas: &mut RgbaImage,
    x: f32,
    width: f32,
    value: f64,
    upper: f64,
    plot_bottom: f32,
    plot_height: f32,
    color: Rgba<u8>,
) {
    // Negative values clamp to the baseline; the axis begins at zero
    let fraction = (value / upper).clamp(0.0, 1.0) as f32;
    let bar_height = (fraction * plot_height).round() as u32;
    if bar_height == 0 {
        return;
    }

    let top = plot_bottom as i32 - bar_height as i32;
    draw_filled_rect_mut(
        canvas,
        Rect::at(x.round() as i32, top).of_size(width.round().max(1.0) as u32, bar_height),
        color,
    );
}

/// Draw the legend swatches in the top margin
fn draw_legend(canvas: &mut RgbaImage) {
    let y = (MARGIN_TOP / 2) as i32 - 6;
    let center = (CANVAS_WIDTH / 2) as i32;

    draw_filled_rect_mut(canvas, Rect::at(center - 60, y).of_size(24, 12), rgba(INCOME_RGB));
    draw_filled_rect_mut(canvas, Rect::at(center + 36, y).of_size(24, 12), rgba(EXPENSE_RGB));
}

fn rgba((r, g, b): (u8, u8, u8)) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}
