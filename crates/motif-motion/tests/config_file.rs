//! Loading configuration from disk.

use std::io::Write;

use motif_motion::{ConfigError, MotionConfig, StaticPose};
use motif_seed::IntensityLevel;
use pretty_assertions::assert_eq;

#[test]
fn loads_a_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "time_scale = 0.5\nintensity = \"subtle\"\nstatic_pose = {{ phase = 0.75 }}")
        .unwrap();
    let config = MotionConfig::load(file.path()).unwrap();
    assert_eq!(config.intensity, IntensityLevel::Subtle);
    assert_eq!(config.static_pose, StaticPose::Phase(0.75));
    assert!((config.time_scale - 0.5).abs() < f64::EPSILON);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MotionConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)), "{err}");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "time_scale = [").unwrap();
    let err = MotionConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)), "{err}");
    assert!(err.to_string().contains("failed to parse"));
}
