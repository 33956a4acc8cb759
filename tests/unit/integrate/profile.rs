use super::*;
use std::f64::consts::PI;

#[test]
fn ramp_is_flat_outside_and_linear_inside() {
    let r = Ramp::new(1.0, 5.0, 3.0 * PI, 5.0 * PI).unwrap();
    assert_eq!(r.omega(0.0), 1.0);
    assert_eq!(r.omega(3.0 * PI - 1e-9), 1.0);
    assert_eq!(r.omega(3.0 * PI), 1.0);
    assert!((r.omega(4.0 * PI) - 3.0).abs() < 1e-12);
    assert_eq!(r.omega(5.0 * PI), 5.0);
    assert_eq!(r.omega(100.0), 5.0);
}

#[test]
fn degenerate_ramp_is_a_step() {
    let r = Ramp::new(2.0, 7.0, 1.0, 1.0).unwrap();
    assert_eq!(r.omega(0.999), 2.0);
    assert_eq!(r.omega(1.0), 7.0);
}

#[test]
fn ramp_validation_rejects_bad_parameters() {
    assert!(Ramp::new(1.0, 2.0, 5.0, 4.0).is_err());
    assert!(Ramp::new(f64::NAN, 2.0, 0.0, 1.0).is_err());
    let err = Ramp::new(1.0, 2.0, 0.0, f64::INFINITY).unwrap_err();
    assert!(err.to_string().contains("'b'"));
}

#[test]
fn closures_and_enum_profiles_agree() {
    let chirp = Profile::chirp();
    let Profile::Ramp(ramp) = chirp else {
        panic!("chirp is a ramp");
    };
    let closure = |t: f64| ramp.omega(t);
    for t in [0.0, 1.0, 10.0, 12.5, 20.0] {
        assert_eq!(closure.omega(t), chirp.omega(t));
    }
    assert_eq!(chirp.min_omega(), 1.0);
    assert_eq!(Profile::Constant(Constant { omega: 2.5 }).omega(99.0), 2.5);
}
