//! Config files and OBJ export through the filesystem.

use nether_torus::{ShadingMode, Torus, TorusConfig, TorusError, UpAxis};
use tempfile::TempDir;

#[test]
fn test_config_save_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("torus.toml");

    let config = TorusConfig {
        major_radius: 2.5,
        minor_radius: 0.75,
        ring_count: 24,
        tube_count: 10,
        shading: ShadingMode::Flat,
        up_axis: UpAxis::Y,
    };
    config.save(&path).unwrap();

    let loaded = TorusConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let torus = Torus::from_config(&loaded);
    assert_eq!(torus.mesh().vertex_count(), 4 * 24 * 10);
    assert_eq!(torus.up_axis(), UpAxis::Y);
    assert_eq!(torus.config(), config);
}

#[test]
fn test_config_from_file_is_normalized() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("torus.toml");
    std::fs::write(&path, "ring_count = 1\ntube_count = 0\nmajor_radius = -4.0\n").unwrap();

    let torus = Torus::from_config(&TorusConfig::load(&path).unwrap());
    assert_eq!(torus.ring_count(), 3);
    assert_eq!(torus.tube_count(), 2);
    assert_eq!(torus.major_radius(), 1.0);
}

#[test]
fn test_missing_config_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = TorusConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, TorusError::Io(_)));
}

#[test]
fn test_malformed_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "ring_count = \"many\"").unwrap();

    let err = TorusConfig::load(&path).unwrap_err();
    assert!(matches!(err, TorusError::ConfigParse(_)));
}

#[test]
fn test_save_obj() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("torus.obj");

    let torus = Torus::new(1.0, 0.5, 4, 3, ShadingMode::Smooth, UpAxis::Z);
    torus.save_obj(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("v "), 20);
    assert_eq!(count("vt "), 20);
    assert_eq!(count("vn "), 20);
    assert_eq!(count("f "), 24);

    // OBJ indices are 1-based
    assert!(text.contains("f 1/1/1 6/6/6 2/2/2"));
}
