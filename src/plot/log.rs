//! Run log figures: main log overview and sediment vs simulation time.

use std::path::Path;

use crate::logs::{MainLog, SedimentLog};
use crate::plot::figure::{Background, Curve, Figure, Panel, RefLine};
use crate::plot::style;

fn log_panel(title: &str, y_label: &str, curves: Vec<Curve>) -> Panel {
    Panel {
        title: Some(title.to_string()),
        y_label: y_label.to_string(),
        curves,
        legend: true,
        background: Background::Plain,
        ..Panel::default()
    }
}

/// Five panels against iteration: time, timestep, volumes, flow rates, Ui
///
/// With a sediment log the time panel also shows sediment time and a marker at
/// the iteration where sediment transport starts.
pub fn mainlog_figure(path: &Path, log: &MainLog, sediment: Option<&SedimentLog>) -> Figure {
    let c0 = style::cycle_color(0);
    let c1 = style::cycle_color(1);
    let simtime_max = log.max_simtime();

    let mut time_panel = log_panel(
        "simtime",
        "[s]",
        vec![Curve::solid(
            format!("t_sim, max = {simtime_max:.2} s"),
            log.against_iteration(&log.simtime),
            c0,
        )],
    );
    if let Some(sed) = sediment {
        let label = match sed.decoupling_factor() {
            Some(df) => format!("t_sed, max = {:.2} s | DF = {df:.2}", sed.sed_time_end()),
            None => format!("t_sed, max = {:.2} s", sed.sed_time_end()),
        };
        time_panel
            .curves
            .push(Curve::solid(label, sed.sed_time_series(), style::SEDIMENT));
        time_panel.ref_lines.push(
            RefLine::vertical(sed.first_iteration(), style::SEDIMENT)
                .labelled(format!(
                    "sed start = {} it = {:.2} s",
                    sed.first_iteration(),
                    sed.sim_time_start()
                ))
                .with_width(2),
        );
    }

    let mut ui_panel = log_panel(
        "Ui",
        "Ui [m/s]",
        vec![Curve::solid("Ui", log.against_iteration(&log.ui), c0)],
    );
    ui_panel.x_label = format!(
        "iteration, max = {} & simtime max = {simtime_max:.2} s",
        log.max_iteration()
    );

    let panels = vec![
        time_panel,
        log_panel(
            "timestep",
            "[s]",
            vec![Curve::solid("dt", log.against_iteration(&log.timestep), c0)],
        ),
        log_panel(
            "Volume 1 vs 2",
            "[m³]",
            vec![
                Curve::solid("Vol1", log.against_iteration(&log.volume1), c0),
                Curve::solid("Vol2", log.against_iteration(&log.volume2), c1),
            ],
        ),
        log_panel(
            "Q_in & Q_out",
            "Q [m³/s]",
            vec![
                Curve::solid("Q_in", log.against_iteration(&log.inflow), c0),
                Curve::solid("Q_out", log.against_iteration(&log.outflow), c1),
            ],
        ),
        ui_panel,
    ];

    Figure::stacked(path, style::inches(10.0, 20.0), panels)
}

/// Simulation and sediment time against iteration
pub fn sed_simtime_figure(path: &Path, sediment: &SedimentLog) -> Figure {
    let panel = Panel {
        x_label: format!("iteration with max = {}", sediment.last_iteration()),
        y_label: "t [s]".to_string(),
        curves: vec![
            Curve::solid(
                format!("t_sim with max = {:.2} s", sediment.sim_time_end()),
                sediment.sim_time_series(),
                style::cycle_color(0),
            ),
            Curve::solid(
                format!("t_sed with max = {:.2} s", sediment.sed_time_end()),
                sediment.sed_time_series(),
                style::cycle_color(1),
            ),
        ],
        legend: true,
        background: Background::Plain,
        ..Panel::default()
    };
    Figure::single(path, style::inches(12.0, 4.0), panel)
}
