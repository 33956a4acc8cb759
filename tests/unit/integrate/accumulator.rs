use super::*;
use crate::integrate::profile::Profile;
use crate::integrate::quadrature::integrate;

#[test]
fn matches_direct_integration_bit_for_bit() {
    let chirp = Profile::chirp();
    let mut acc = PhaseAccumulator::new(chirp, 0.01).unwrap();

    // Increasing, repeated and decreasing queries all hit the same sums.
    for t in [0.0, 0.5, 3.0, 9.42, 9.42, 15.7, 2.0, 25.1, 0.019, 25.1] {
        let cached = acc.phase_at(t).unwrap();
        let direct = integrate(t, &chirp, 0.01).unwrap();
        assert_eq!(cached.to_bits(), direct.to_bits(), "t={t}");
    }
}

#[test]
fn cache_grows_only_as_far_as_needed() {
    let mut acc = PhaseAccumulator::new(|_t: f64| 1.0, 0.5).unwrap();
    assert_eq!(acc.cached_samples(), 0);

    assert_eq!(acc.phase_at(0.9).unwrap(), 0.0);
    assert_eq!(acc.cached_samples(), 0);

    assert_eq!(acc.phase_at(2.0).unwrap(), 1.5);
    assert_eq!(acc.cached_samples(), 4);

    assert_eq!(acc.phase_at(1.0).unwrap(), 0.5);
    assert_eq!(acc.cached_samples(), 4);

    acc.reset();
    assert_eq!(acc.cached_samples(), 0);
    assert_eq!(acc.phase_at(2.0).unwrap(), 1.5);
}

#[test]
fn rejects_invalid_step_and_time() {
    assert!(PhaseAccumulator::new(Profile::chirp(), 0.0).is_err());
    assert!(PhaseAccumulator::new(Profile::chirp(), f64::NAN).is_err());

    let mut acc = PhaseAccumulator::new(Profile::chirp(), 0.01).unwrap();
    assert!(acc.phase_at(-1.0).is_err());
    assert!(acc.phase_at(f64::NAN).is_err());
    assert_eq!(acc.step(), 0.01);
    assert_eq!(acc.profile().min_omega(), 1.0);
}
