mod common;

use common::{sedlog_text, CaseFixture};
use reef3d_post::case::CaseLayout;
use reef3d_post::logs::SedimentLog;
use reef3d_post::plot::profile::sedline_figure;
use reef3d_post::plot::style;
use reef3d_post::plot::{render_all, write_figures, Curve, Figure, Offsets, Panel, RefLine};
use reef3d_post::profiles::find_files;

#[test]
fn test_empty_profile_folder_renders_reference_line_only() {
    let case = CaseFixture::new();
    let layout = CaseLayout::new(case.root());
    let sediment =
        SedimentLog::parse(&sedlog_text(&[[1.0, 0.0, 0.1, 0.0, 1.0, 0.0, 0.0, 0.0]])).unwrap();

    let files = find_files(layout.sediment_output_dir(), "*.dat").unwrap();
    assert!(files.is_empty());

    let figure = sedline_figure(
        &layout.sediment_output_dir().join("sedline.svg"),
        &[],
        Offsets::default(),
        0.75,
        &sediment,
    );
    let rendered = figure.render().unwrap();
    assert!(rendered.svg.contains("swl"));
    assert!(rendered.svg.contains("stroke-dasharray") || rendered.svg.contains("<polyline"));

    let written = write_figures(&[rendered]).unwrap();
    assert!(written[0].ends_with("00_post_sed/sedline.svg"));
    assert!(case.exists("00_post_sed/sedline.svg"));
}

#[test]
fn test_stacked_figure_renders_every_title() {
    let panels: Vec<Panel> = (1..=3)
        .map(|g| Panel {
            title: Some(format!("G{g} at x = {:.2}", g as f64)),
            x_label: "t [s]".to_string(),
            y_label: "η [m]".to_string(),
            curves: vec![Curve::solid(
                "num",
                vec![(0.0, 0.0), (1.0, 0.1 * g as f64), (2.0, 0.0)],
                style::SIMULATION,
            )],
            ref_lines: vec![RefLine::horizontal(0.0, Some((0.0, 2.0)), style::REFERENCE)],
            legend: g == 1,
            ..Panel::default()
        })
        .collect();
    let figure = Figure::stacked("All_Gauges.svg", style::cm(15.0, 15.0), panels);

    let rendered = render_all([&figure]).unwrap();
    let svg = &rendered[0].svg;
    for g in 1..=3 {
        assert!(svg.contains(&format!("G{g} at x = {g}.00")));
    }
}

#[test]
fn test_axis_limits_do_not_break_rendering() {
    let panel = Panel {
        x_label: "t [s]".to_string(),
        y_label: "η [m]".to_string(),
        curves: vec![Curve::solid(
            "num",
            vec![(0.0, -1.0), (10.0, 1.0), (20.0, -1.0)],
            style::SIMULATION,
        )],
        x_limits: Some((5.0, 15.0)),
        y_limits: Some((-0.15, 0.15)),
        legend: true,
        ..Panel::default()
    };
    let figure = Figure::single("Gauge_1.svg", style::cm(15.0, 5.0), panel);
    assert!(figure.render().is_ok());
}

#[test]
fn test_write_overwrites_existing_file() {
    let case = CaseFixture::new();
    let path = case.write("00_post_wave/Gauge_1.svg", "old");

    let figure = Figure::single(
        &path,
        style::cm(15.0, 5.0),
        Panel {
            curves: vec![Curve::solid("num", vec![(0.0, 0.0), (1.0, 1.0)], style::SIMULATION)],
            ..Panel::default()
        },
    );
    let rendered = render_all([&figure]).unwrap();
    write_figures(&rendered).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<svg"));
}
