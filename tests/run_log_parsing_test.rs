mod common;

use common::{mainlog_text, sedlog_text, CaseFixture};
use reef3d_post::logs::{read_main_log, read_sediment_log, LogError};

#[test]
fn test_read_main_log_columns() {
    let case = CaseFixture::new();
    let path = case.write(
        "REEF3D_Log/REEF3D_mainlog.dat",
        &mainlog_text(&[
            [1.0, 0.01, 0.01, 2.0, 2.1, 0.05, 0.04, 0.3],
            [2.0, 0.02, 0.03, 2.0, 2.2, 0.06, 0.05, 0.4],
            [3.0, 0.02, 0.05, 2.0, 2.3, 0.07, 0.06, 0.5],
        ]),
    );

    let log = read_main_log(&path).unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log.volume1, vec![2.0, 2.0, 2.0]);
    assert_eq!(log.volume2, vec![2.1, 2.2, 2.3]);
    assert_eq!(log.ui, vec![0.3, 0.4, 0.5]);
    assert_eq!(log.max_iteration(), 3.0);
    assert_eq!(log.max_simtime(), 0.05);
    assert_eq!(log.against_iteration(&log.outflow)[2], (3.0, 0.06));
}

#[test]
fn test_main_log_missing_column() {
    let case = CaseFixture::new();
    let text = mainlog_text(&[[1.0; 8]]).replace("#Ui", "#Umax");
    let path = case.write("REEF3D_Log/REEF3D_mainlog.dat", &text);

    assert!(matches!(
        read_main_log(&path),
        Err(LogError::MissingColumn("Ui"))
    ));
}

#[test]
fn test_main_log_short_row() {
    let case = CaseFixture::new();
    let mut text = mainlog_text(&[[1.0; 8]]);
    text.push_str("2 0.01 0.02\n");
    let path = case.write("REEF3D_Log/REEF3D_mainlog.dat", &text);

    assert!(matches!(
        read_main_log(&path),
        Err(LogError::ShapeMismatch {
            line: 7,
            expected: 9,
            found: 3
        })
    ));
}

#[test]
fn test_main_log_without_header() {
    let case = CaseFixture::new();
    let path = case.write("REEF3D_Log/REEF3D_mainlog.dat", "a\nb\n");
    assert!(matches!(
        read_main_log(&path),
        Err(LogError::MissingHeader(5))
    ));
}

#[test]
fn test_sediment_log_derived_values() {
    let case = CaseFixture::new();
    let path = case.write(
        "REEF3D_Log/REEF3D_sedimentlog.dat",
        &sedlog_text(&[
            [100.0, 10.0, 0.1, 0.0, 1.0, 0.0, -0.2, 0.1],
            [200.0, 12.0, 0.1, 0.0, 1.0, 0.0, -0.2, 0.1],
            [300.0, 14.0, 0.1, 20.0, 1.0, 0.0, -0.2, 0.1],
            [400.0, 20.0, 0.1, 50.0, 1.0, 0.0, -0.2, 0.1],
        ]),
    );

    let log = read_sediment_log(&path).unwrap();
    assert_eq!(log.rows().len(), 4);
    assert_eq!(log.first_iteration(), 100.0);
    assert_eq!(log.first_active_iteration(), Some(300.0));
    assert_eq!(log.last_iteration(), 400.0);
    assert_eq!(log.sim_time_start(), 10.0);
    assert_eq!(log.sim_time_end(), 20.0);
    assert_eq!(log.sed_time_end(), 50.0);
    assert_eq!(log.decoupling_factor(), Some(5.0));
}

#[test]
fn test_decoupling_factor_absent_for_zero_span() {
    let case = CaseFixture::new();
    let path = case.write(
        "REEF3D_Log/REEF3D_sedimentlog.dat",
        &sedlog_text(&[[1.0, 5.0, 0.1, 1.0, 1.0, 0.0, 0.0, 0.0]]),
    );

    let log = read_sediment_log(&path).unwrap();
    assert_eq!(log.decoupling_factor(), None);
}

#[test]
fn test_missing_sediment_log() {
    let case = CaseFixture::new();
    let err = read_sediment_log(case.root().join("REEF3D_Log/REEF3D_sedimentlog.dat")).unwrap_err();
    assert!(matches!(err, LogError::Open { .. }));
}
