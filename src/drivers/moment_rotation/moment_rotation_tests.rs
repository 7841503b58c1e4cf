use std::fs;

use approx;
use nalgebra::Vector3;
use ndarray::{array, Array2};

use crate::drivers::moment_rotation::{
    MomentRotationDriver, MomentRotationParams, MomentRotationResult, RotationSpecification,
};
use crate::drivers::CartMomentsDriver;
use crate::io::read_cartmoments_yaml;

#[test]
fn test_drivers_moment_rotation_axis_angle() {
    let params = MomentRotationParams::builder()
        .rotation(RotationSpecification::AxisAngle {
            axis: Vector3::z(),
            angle: std::f64::consts::PI,
        })
        .build()
        .unwrap();
    assert!(params.write_cartesian_labels);
    assert!(params.result_save_name.is_none());

    let moments = array![[1.0, 1.0, 0.0, 0.0], [0.5, 0.0, 2.0, 3.0]];
    let mut driver = MomentRotationDriver::builder()
        .parameters(&params)
        .moments(moments.view())
        .build()
        .unwrap();
    assert!(driver.result().is_err());
    driver.run().unwrap();

    let res = driver.result().unwrap();
    let rotated_ref = array![[1.0, -1.0, 0.0, 0.0], [0.5, 0.0, -2.0, 3.0]];
    approx::assert_relative_eq!(
        (&res.rotated_moments - &rotated_ref)
            .map(|x| x * x)
            .sum()
            .sqrt(),
        0.0,
        epsilon = 1e-14,
        max_relative = 1e-14
    );
    assert_eq!(res.moments, moments);
    approx::assert_relative_eq!(res.rmat[(2, 2)], 1.0, epsilon = 1e-14);

    let output = res.to_string();
    assert!(output.contains("Site 0"));
    assert!(output.contains("Site 1"));
    assert!(output.contains(" x "));
}

#[test]
fn test_drivers_moment_rotation_matrix_labels() {
    let params = MomentRotationParams::builder()
        .rotation(RotationSpecification::Matrix([
            [0.0, -1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]))
        .build()
        .unwrap();
    let moments = Array2::<f64>::ones((1, 20));
    let mut driver = MomentRotationDriver::builder()
        .parameters(&params)
        .moments(moments.view())
        .build()
        .unwrap();
    driver.run().unwrap();
    let res = driver.result().unwrap();
    assert_eq!(res.rotated_moments.dim(), (1, 20));
    // x' = -y, so xxy' = x'x'y' = y y x, i.e. +xyy.
    assert_eq!(res.rotated_moments[(0, 11)], 1.0);
    // xxx' = -yyy
    assert_eq!(res.rotated_moments[(0, 10)], -1.0);

    let output = res.to_string();
    assert!(output.contains("xxy"));
    assert!(output.contains("zzz"));

    let params_nolabels = MomentRotationParams::builder()
        .rotation(RotationSpecification::Matrix([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]))
        .write_cartesian_labels(false)
        .build()
        .unwrap();
    let mut driver = MomentRotationDriver::builder()
        .parameters(&params_nolabels)
        .moments(moments.view())
        .build()
        .unwrap();
    driver.run().unwrap();
    let output = driver.result().unwrap().to_string();
    assert!(!output.contains("xxy"));
}

#[test]
fn test_drivers_moment_rotation_non_orthogonal() {
    let params = MomentRotationParams::builder()
        .rotation(RotationSpecification::Matrix([
            [3.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]))
        .build()
        .unwrap();
    let moments = array![[1.0, 1.0, 1.0, 1.0]];
    let mut driver = MomentRotationDriver::builder()
        .parameters(&params)
        .moments(moments.view())
        .build()
        .unwrap();
    driver.run().unwrap();
    assert_eq!(
        driver.result().unwrap().rotated_moments,
        array![[1.0, 3.0, 1.0, 1.0]]
    );
}

#[test]
fn test_drivers_moment_rotation_errors() {
    let params = MomentRotationParams::builder()
        .rotation(RotationSpecification::AxisAngle {
            axis: Vector3::zeros(),
            angle: 1.0,
        })
        .build()
        .unwrap();
    let moments = array![[1.0]];
    let mut driver = MomentRotationDriver::builder()
        .parameters(&params)
        .moments(moments.view())
        .build()
        .unwrap();
    assert!(driver.run().is_err());
    assert!(driver.result().is_err());

    let params = MomentRotationParams::builder()
        .rotation(RotationSpecification::AxisAngle {
            axis: Vector3::x(),
            angle: 1.0,
        })
        .build()
        .unwrap();
    let moments = Array2::<f64>::zeros((2, 36));
    let mut driver = MomentRotationDriver::builder()
        .parameters(&params)
        .moments(moments.view())
        .build()
        .unwrap();
    let err = driver.run().unwrap_err();
    assert!(err.to_string().contains("Unsupported shell"));
}

#[test]
fn test_drivers_moment_rotation_save() {
    let name = std::env::temp_dir()
        .join("cartmoments_test_drivers_moment_rotation_save")
        .to_string_lossy()
        .to_string();
    let params = MomentRotationParams::builder()
        .rotation(RotationSpecification::AxisAngle {
            axis: Vector3::y(),
            angle: std::f64::consts::FRAC_PI_2,
        })
        .result_save_name(Some(name.clone()))
        .build()
        .unwrap();
    let moments = array![[0.0, 1.0, 0.0, 0.0]];
    let mut driver = MomentRotationDriver::builder()
        .parameters(&params)
        .moments(moments.view())
        .build()
        .unwrap();
    driver.run().unwrap();

    let path = format!("{name}.yml");
    let saved = read_cartmoments_yaml::<MomentRotationResult, _>(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(saved.moments, moments);
    // A quarter turn about y takes x to -z.
    approx::assert_relative_eq!(saved.rotated_moments[(0, 3)], -1.0, epsilon = 1e-14);
    approx::assert_relative_eq!(saved.rotated_moments[(0, 1)], 0.0, epsilon = 1e-14);
}
