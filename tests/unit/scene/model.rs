use super::*;

#[test]
fn presets_validate_and_round_trip_names() {
    for preset in Preset::ALL {
        preset.def().validate().unwrap();
        assert_eq!(Preset::from_name(preset.name()).unwrap(), preset);
    }
    assert!(Preset::from_name("spiral").is_err());
}

#[test]
fn chirp_profile_defaults_to_canonical_ramp() {
    let def = Preset::Chirp.def();
    assert_eq!(def.profile().unwrap(), Some(Profile::chirp()));
    assert_eq!(Preset::SimpleSine.def().profile().unwrap(), None);
}

#[test]
fn profile_defs_resolve_and_validate() {
    let ramp: ProfileDef = serde_json::from_str(
        r#"{ "ramp": { "f1": 1, "f2": 5, "a": { "pi": 3 }, "b": { "pi": 5 } } }"#,
    )
    .unwrap();
    assert_eq!(ramp.to_profile().unwrap(), Profile::chirp());

    let backwards = ProfileDef::Ramp {
        f1: Scalar(1.0),
        f2: Scalar(2.0),
        a: Scalar(3.0),
        b: Scalar(1.0),
    };
    assert!(matches!(backwards.to_profile(), Err(PhaseError::Profile(_))));

    let nan = ProfileDef::Constant {
        omega: Scalar(f64::NAN),
    };
    assert!(nan.to_profile().is_err());
}

#[test]
fn scene_level_constraints_are_enforced() {
    let mut def = Preset::SimpleSine.def();
    def.curve_samples = 1;
    assert!(def.validate().is_err());

    let mut def = Preset::SimpleSine.def();
    def.fps.den = 0;
    assert!(def.validate().is_err());

    let mut def = Preset::ExpandContract.def();
    def.tracker.initial = Scalar(0.0);
    assert!(def.validate().is_err());

    let mut def = Preset::ExpandContract.def();
    def.kind = SceneKindDef::ExpandContract { periods: 0.0 };
    assert!(def.validate().is_err());

    let mut def = Preset::Chirp.def();
    def.tracker.initial = Scalar(-1.0);
    assert!(def.validate().is_err());

    let mut def = Preset::Chirp.def();
    def.tracker.steps = vec![StepDef::Play {
        to: Scalar(1e6),
        run_time: 10.0,
        rate: RateFunc::Linear,
    }];
    assert!(matches!(def.validate(), Err(PhaseError::Validation(_))));

    let mut def = Preset::Chirp.def();
    def.kind = SceneKindDef::Chirp {
        profile: None,
        step: 0.0,
    };
    assert!(def.validate().is_err());
}

#[test]
fn minimal_json_fills_defaults() {
    let def: SceneDef = serde_json::from_str(
        r#"{
            "fps": { "num": 24, "den": 1 },
            "tracker": { "initial": 0 },
            "kind": { "chirp": {} }
        }"#,
    )
    .unwrap();
    assert_eq!(def.curve_samples, 256);
    assert_eq!(def.name, "");
    assert_eq!(
        def.kind,
        SceneKindDef::Chirp {
            profile: None,
            step: DEFAULT_STEP,
        }
    );
    def.validate().unwrap();
}
