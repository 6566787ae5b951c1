//! Static plot generation for reactor simulation results.
//!
//! Renders the classic 2×2 figure of the butane isomerization study with the
//! `plotters` library: temperature and conversion profiles of the volume-resolved
//! run on the top row, the length-resolved run on the bottom row.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::ReactorsIVP::IsomReactorIVP::{ReactorError, Trajectory};

fn plot_err<E: std::fmt::Display>(e: E) -> ReactorError {
    ReactorError::PlotError(e.to_string())
}

/// Draw one trajectory component as a labeled line chart on the given drawing area.
fn draw_trajectory_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    x: &[f64],
    y: &[f64],
    title: &str,
    xlabel: &str,
    ylabel: &str,
    color: &RGBColor,
) -> Result<(), ReactorError>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let x_min = x.first().copied().unwrap_or(0.0);
    let x_max = x.last().copied().unwrap_or(1.0);
    let y_max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_min = y.iter().cloned().fold(f64::INFINITY, f64::min);

    // 10% headroom so the curve does not touch the frame
    let y_range = y_max - y_min;
    let (y_lo, y_hi) = if y_range > 0.0 {
        (y_min - 0.1 * y_range, y_max + 0.1 * y_range)
    } else {
        (y_min - 1.0, y_max + 1.0)
    };

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_lo..y_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(xlabel)
        .y_desc(ylabel)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            x.iter().zip(y.iter()).map(|(a, b)| (*a, *b)),
            color.stroke_width(2),
        ))
        .map_err(plot_err)?;

    Ok(())
}

/// Render the 2×2 figure of both scenario trajectories to a PNG file.
///
/// Layout and colors follow the original study: temperature vs. volume (black),
/// conversion vs. volume (red), temperature vs. length (blue), conversion vs.
/// length (yellow).
pub fn plot_simulation_results(
    volume_trajectory: &Trajectory,
    length_trajectory: &Trajectory,
    path: &str,
) -> Result<(), ReactorError> {
    let root = BitMapBackend::new(path, (1200, 1000)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let areas = root.split_evenly((2, 2));

    let volume: Vec<f64> = volume_trajectory.x_mesh.iter().cloned().collect();
    let volume_temps: Vec<f64> = volume_trajectory.temperatures().iter().cloned().collect();
    let volume_concs: Vec<f64> = volume_trajectory.concentrations().iter().cloned().collect();
    let length: Vec<f64> = length_trajectory.x_mesh.iter().cloned().collect();
    let length_temps: Vec<f64> = length_trajectory.temperatures().iter().cloned().collect();
    let length_concs: Vec<f64> = length_trajectory.concentrations().iter().cloned().collect();

    draw_trajectory_on_area(
        &areas[0],
        &volume,
        &volume_temps,
        "Temperature vs. Volume",
        "Volume (m³)",
        "Temperature (K)",
        &BLACK,
    )?;
    draw_trajectory_on_area(
        &areas[1],
        &volume,
        &volume_concs,
        "Conversion vs. Volume",
        "Volume (m³)",
        "Conversion (mol/L)",
        &RED,
    )?;
    draw_trajectory_on_area(
        &areas[2],
        &length,
        &length_temps,
        "Temperature vs. Length",
        "Length (m)",
        "Temperature (K)",
        &BLUE,
    )?;
    draw_trajectory_on_area(
        &areas[3],
        &length,
        &length_concs,
        "Conversion vs. Length",
        "Length (m)",
        "Conversion (mol/L)",
        &YELLOW,
    )?;

    root.present().map_err(plot_err)?;
    Ok(())
}
