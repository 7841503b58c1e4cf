use std::fs;

use crate::drivers::moment_rotation::{MomentRotationParams, RotationSpecification};
use crate::io::{read_cartmoments_yaml, write_cartmoments_yaml};

#[test]
fn test_io_yaml_write_read() {
    let params = MomentRotationParams::builder()
        .rotation(RotationSpecification::Matrix([
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]))
        .result_save_name(Some("rotated".to_string()))
        .build()
        .unwrap();

    let name = std::env::temp_dir().join("cartmoments_test_io_yaml_write_read");
    write_cartmoments_yaml(&name, &params).unwrap();
    let path = name.with_extension("yml");
    let read_params = read_cartmoments_yaml::<MomentRotationParams, _>(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        read_params.rotation,
        RotationSpecification::Matrix(m) if m[0][1] == -1.0 && m[1][0] == 1.0
    ));
    assert!(read_params.write_cartesian_labels);
    assert_eq!(read_params.result_save_name.as_deref(), Some("rotated"));
}

#[test]
fn test_io_yaml_read_missing() {
    assert!(read_cartmoments_yaml::<MomentRotationParams, _>("/nonexistent/input.yml").is_err());
}
