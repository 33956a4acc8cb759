use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PhaseError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PhaseError::profile("x")
            .to_string()
            .contains("profile error:")
    );
    assert!(
        PhaseError::schedule("x")
            .to_string()
            .contains("schedule error:")
    );
    assert!(
        PhaseError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        PhaseError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PhaseError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
