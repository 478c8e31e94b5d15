// Failure paths of the report pipelines
// A failing report must not leave any plot behind.

mod common;

use common::{gauge_file_text, three_gauge_text, CaseFixture};
use reef3d_post::case::CaseLayout;
use reef3d_post::gauge::{GaugeFileError, ReduceError, TimeWindow};
use reef3d_post::logs::LogError;
use reef3d_post::services::{
    GaugeQuantity, GaugeReportOptions, GaugeReportService, LogReportService, ProfileOptions,
    ProfileReportService, ReportError,
};

const WAVE_FILE: &str = "REEF3D_CFD_WSF/REEF3D-CFD-WSF-HG.dat";

fn no_plots(case: &CaseFixture) -> bool {
    ["00_post_wave", "00_post_sed", "00_post_mainlog"]
        .iter()
        .all(|d| !case.root().join(d).exists())
}

#[test]
fn test_missing_gauge_file() {
    let case = CaseFixture::new();
    let service = GaugeReportService::new(CaseLayout::new(case.root()));

    let err = service
        .run(GaugeQuantity::WaveElevation, &GaugeReportOptions::default())
        .unwrap_err();
    assert!(matches!(err, ReportError::Gauge(GaugeFileError::Open { .. })));
    assert!(no_plots(&case));
}

#[test]
fn test_header_without_count() {
    let case = CaseFixture::new();
    case.write(WAVE_FILE, "wave gauges\n\n\n");
    let service = GaugeReportService::new(CaseLayout::new(case.root()));

    let err = service
        .run(GaugeQuantity::WaveElevation, &GaugeReportOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ReportError::Gauge(GaugeFileError::MissingGaugeCount(_))
    ));
    assert!(no_plots(&case));
}

#[test]
fn test_shape_mismatch_aborts_report() {
    let case = CaseFixture::new();
    case.write(
        WAVE_FILE,
        &gauge_file_text(&[(1.0, 0.5), (2.0, 0.5)], &[vec![0.0, 0.75, 0.75], vec![0.1, 0.75]]),
    );
    let service = GaugeReportService::new(CaseLayout::new(case.root()));

    let err = service
        .run(GaugeQuantity::WaveElevation, &GaugeReportOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ReportError::Gauge(GaugeFileError::ShapeMismatch { .. })
    ));
    assert!(no_plots(&case));
}

#[test]
fn test_empty_window_aborts_report() {
    let case = CaseFixture::new();
    case.write(WAVE_FILE, &three_gauge_text());
    let service = GaugeReportService::new(CaseLayout::new(case.root()));
    let options = GaugeReportOptions {
        window: TimeWindow::new(10.0, Some(20.0)),
        ..GaugeReportOptions::default()
    };

    let err = service
        .run(GaugeQuantity::WaveElevation, &options)
        .unwrap_err();
    assert!(matches!(
        err,
        ReportError::Reduce(ReduceError::EmptyWindow { .. })
    ));
    assert!(err.to_string().contains("[10, 20]"));
    assert!(no_plots(&case));
}

#[test]
fn test_broken_theory_file_aborts_before_writing() {
    let case = CaseFixture::new();
    case.write(WAVE_FILE, &three_gauge_text());
    case.write("REEF3D_CFD_WSF/REEF3D-CFD-WSF-HG-THEORY.dat", "theory\n");
    let service = GaugeReportService::new(CaseLayout::new(case.root()));

    let err = service
        .run(GaugeQuantity::WaveElevation, &GaugeReportOptions::default())
        .unwrap_err();
    assert!(matches!(err, ReportError::Gauge(_)));
    assert!(no_plots(&case));
}

#[test]
fn test_missing_main_log() {
    let case = CaseFixture::new();
    let err = LogReportService::new(CaseLayout::new(case.root()))
        .run()
        .unwrap_err();
    assert!(matches!(err, ReportError::Log(LogError::Open { .. })));
    assert!(no_plots(&case));
}

#[test]
fn test_sedline_requires_sediment_log() {
    let case = CaseFixture::new();
    let err = ProfileReportService::new(CaseLayout::new(case.root()))
        .run_sedline(&ProfileOptions::sedline(0.75))
        .unwrap_err();
    assert!(matches!(err, ReportError::Log(LogError::Open { .. })));
    assert!(no_plots(&case));
}

#[test]
fn test_bad_wsfline_snapshot_aborts_report() {
    let case = CaseFixture::new();
    case.write("00_post_wave/REEF3D-CFD-wsfline-000001.dat", "simtime: 1.0\n");
    case.write("00_post_wave/REEF3D-CFD-wsfline-000002.dat", "no colon\nx\n");

    let err = ProfileReportService::new(CaseLayout::new(case.root()))
        .run_wsfline(&ProfileOptions::wsfline(0.75))
        .unwrap_err();
    assert!(matches!(err, ReportError::Profile(_)));
    assert!(!case.exists("00_post_wave/wsfline.svg"));
}
