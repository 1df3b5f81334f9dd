use std::fs;

use numcheck_core::settings::DEFAULT_MAX_OUTPUT_LINES;
use numcheck_core::{CheckError, Settings, SignalKind, Tolerance};

fn structural_code(err: &CheckError) -> &str {
    match err {
        CheckError::Structural(info) => &info.code,
        other => panic!("expected structural error, got {other:?}"),
    }
}

#[test]
fn missing_fields_fall_back_to_defaults() -> Result<(), CheckError> {
    let settings = Settings::from_json_str(r#"{ "max_output_lines": 3 }"#)?;
    assert_eq!(settings.max_output_lines, 3);
    assert_eq!(settings.absolute_tolerance, 1e-4);
    assert_eq!(settings.relative_tolerance, 1e-4);
    assert_eq!(Settings::default().max_output_lines, DEFAULT_MAX_OUTPUT_LINES);
    Ok(())
}

#[test]
fn negative_tolerance_is_rejected() {
    let err = Settings::from_json_str(r#"{ "absolute_tolerance": -1.0 }"#).unwrap_err();
    assert_eq!(err.kind(), SignalKind::Structural);
    assert_eq!(structural_code(&err), "invalid-tolerance");
}

#[test]
fn malformed_documents_are_structural_errors() {
    let err = Settings::from_json_str("{ not json").unwrap_err();
    assert_eq!(structural_code(&err), "settings-parse");
}

#[test]
fn settings_load_from_file() -> Result<(), CheckError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("numcheck.json");
    fs::write(
        &path,
        r#"{ "max_output_lines": 5, "absolute_tolerance": 1e-6, "relative_tolerance": 1e-3 }"#,
    )
    .expect("write settings");
    let settings = Settings::load(&path)?;
    assert_eq!(settings.max_output_lines, 5);
    assert_eq!(settings.tolerance(), Tolerance::new(1e-6, 1e-3)?);

    let err = Settings::load(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(structural_code(&err), "settings-io");
    Ok(())
}

#[test]
fn tolerance_rejects_non_finite_components() {
    assert!(Tolerance::new(f64::NAN, 0.0).is_err());
    assert!(Tolerance::new(0.0, f64::INFINITY).is_err());
    assert!(Tolerance::new(0.0, 0.0).is_ok());
    assert!(serde_json::from_str::<Tolerance>(r#"{ "absolute": -2.0, "relative": 0.0 }"#).is_err());
}
