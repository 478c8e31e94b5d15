//! Profile snapshot figures (sedline, wsfline).

use std::path::Path;

use crate::logs::SedimentLog;
use crate::plot::figure::{Background, Curve, Figure, Panel, RefLine};
use crate::plot::style;
use crate::profiles::{ProfileError, ProfileSnapshot};

/// Shift applied to every snapshot before plotting
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offsets {
    pub x: f64,
    pub y: f64,
}

fn profile_panel(x_label: String, y_label: &str, curves: Vec<Curve>, guide: RefLine) -> Panel {
    Panel {
        x_label,
        y_label: y_label.to_string(),
        curves,
        ref_lines: vec![guide],
        legend: true,
        background: Background::Plain,
        ..Panel::default()
    }
}

/// Bed level snapshots with a dashed still water level line
///
/// Curves are labelled with both metadata lines of their file. An empty
/// snapshot list still produces the still water level line.
pub fn sedline_figure(
    path: &Path,
    snapshots: &[ProfileSnapshot],
    offsets: Offsets,
    swl: f64,
    sediment: &SedimentLog,
) -> Figure {
    let curves = snapshots
        .iter()
        .enumerate()
        .map(|(i, snap)| {
            Curve::solid(
                snap.metadata_label(),
                snap.shifted(offsets.x, offsets.y),
                style::cycle_color(i),
            )
        })
        .collect();

    let x_label = format!(
        "x [m]   t_sed(end) = {:.2} s  t_sim(end) = {:.2} s",
        sediment.sed_time_end(),
        sediment.sim_time_end()
    );
    let swl_line = RefLine::horizontal(swl, None, style::STILL_WATER).labelled("swl");

    Figure::single(
        path,
        style::inches(12.0, 4.0),
        profile_panel(x_label, "z_sed [m]", curves, swl_line),
    )
}

/// Free surface snapshots, labelled with their simulation time
///
/// The dashed line marks the still water level after the vertical shift.
pub fn wsfline_figure(
    path: &Path,
    snapshots: &[ProfileSnapshot],
    offsets: Offsets,
    swl: f64,
) -> Result<Figure, ProfileError> {
    let mut curves = Vec::with_capacity(snapshots.len());
    for (i, snap) in snapshots.iter().enumerate() {
        let t_sim = snap.time_value(1)?;
        curves.push(Curve::solid(
            format!("t_sim: {t_sim:.2}s"),
            snap.shifted(offsets.x, offsets.y),
            style::cycle_color(i),
        ));
    }
    let swl_line = RefLine::horizontal(swl - offsets.y, None, style::REFERENCE);

    Ok(Figure::single(
        path,
        style::inches(12.0, 4.0),
        profile_panel("x [m]".to_string(), "η [m]", curves, swl_line),
    ))
}
