use ndarray::array;

use crate::drivers::moment_rotation::RotationSpecification;
use crate::interfaces::input::Input;
use crate::interfaces::InputHandle;
use crate::io::read_cartmoments_yaml;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

#[test]
fn test_interfaces_input_axis_angle() {
    let name = format!("{ROOT}/tests/input/test_input_axis_angle.yml");
    let inp = read_cartmoments_yaml::<Input, _>(&name).unwrap();

    if let RotationSpecification::AxisAngle { axis, angle } = inp.moment_rotation.rotation {
        assert_eq!(axis.z, 1.0);
        assert_eq!(angle, std::f64::consts::PI);
    } else {
        panic!("Unexpected rotation specification.");
    }
    assert!(inp.moment_rotation.write_cartesian_labels);
    assert!(inp.moment_rotation.result_save_name.is_none());
    assert_eq!(
        inp.moments_array().unwrap(),
        array![[1.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.5]]
    );
    inp.handle().unwrap();
}

#[test]
fn test_interfaces_input_matrix() {
    let name = format!("{ROOT}/tests/input/test_input_matrix.yml");
    let inp = read_cartmoments_yaml::<Input, _>(&name).unwrap();

    let c4z = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
    assert!(matches!(
        inp.moment_rotation.rotation,
        RotationSpecification::Matrix(m) if m == c4z
    ));
    assert!(!inp.moment_rotation.write_cartesian_labels);
    assert_eq!(inp.moments_array().unwrap().dim(), (1, 10));
    inp.handle().unwrap();
}

#[test]
fn test_interfaces_input_invalid() {
    let name = format!("{ROOT}/tests/input/test_input_ragged.yml");
    let inp = read_cartmoments_yaml::<Input, _>(&name).unwrap();
    assert!(inp.moments_array().is_err());
    assert!(inp.handle().is_err());

    let name = format!("{ROOT}/tests/input/test_input_incomplete_shell.yml");
    let inp = read_cartmoments_yaml::<Input, _>(&name).unwrap();
    let err = inp.handle().unwrap_err();
    assert!(err.to_string().contains("Shape mismatch"));

    let inp = Input {
        moment_rotation: inp.moment_rotation,
        moments: vec![],
    };
    assert!(inp.moments_array().is_err());
}
