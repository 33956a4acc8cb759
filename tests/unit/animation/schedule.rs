use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn expand_contract() -> TrackerDef {
    TrackerDef {
        initial: Scalar(0.25),
        steps: vec![
            StepDef::Play {
                to: Scalar(2.0),
                run_time: 2.0,
                rate: RateFunc::Linear,
            },
            StepDef::Wait { secs: 1.0 },
            StepDef::Play {
                to: Scalar(0.25),
                run_time: 2.0,
                rate: RateFunc::Linear,
            },
            StepDef::Wait { secs: 1.0 },
        ],
    }
}

#[test]
fn compiles_steps_to_frame_keys() {
    let track = expand_contract().compile(fps30()).unwrap();
    let frames: Vec<u64> = track.keys.iter().map(|k| k.frame.0).collect();
    assert_eq!(frames, vec![0, 60, 90, 150, 180]);

    assert_eq!(track.sample(FrameIndex(0)).unwrap(), 0.25);
    assert_eq!(track.sample(FrameIndex(30)).unwrap(), 1.125);
    assert_eq!(track.sample(FrameIndex(75)).unwrap(), 2.0);
    assert_eq!(track.sample(FrameIndex(180)).unwrap(), 0.25);
    assert_eq!(expand_contract().total_secs(), 6.0);
}

#[test]
fn play_rate_applies_to_its_own_segment() {
    let def = TrackerDef {
        initial: Scalar(0.0),
        steps: vec![
            StepDef::Wait { secs: 1.0 },
            StepDef::Play {
                to: Scalar(1.0),
                run_time: 1.0,
                rate: RateFunc::Smooth,
            },
        ],
    };
    let track = def.compile(fps30()).unwrap();
    assert_eq!(track.keys[0].rate, RateFunc::Linear);
    assert_eq!(track.keys[1].rate, RateFunc::Smooth);
    assert_eq!(track.sample(FrameIndex(15)).unwrap(), 0.0);
    assert!((track.sample(FrameIndex(45)).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn invalid_steps_are_rejected() {
    let bad_play = TrackerDef {
        initial: Scalar(0.0),
        steps: vec![StepDef::Play {
            to: Scalar(1.0),
            run_time: 0.0,
            rate: RateFunc::Linear,
        }],
    };
    assert!(matches!(
        bad_play.compile(fps30()),
        Err(PhaseError::Schedule(_))
    ));

    let bad_wait = TrackerDef {
        initial: Scalar(0.0),
        steps: vec![StepDef::Wait { secs: -1.0 }],
    };
    assert!(bad_wait.validate().is_err());

    let bad_initial = TrackerDef {
        initial: Scalar(f64::INFINITY),
        steps: vec![],
    };
    assert!(bad_initial.validate().is_err());
}

#[test]
fn schedules_past_the_frame_limit_are_rejected() {
    let endless = TrackerDef {
        initial: Scalar(0.0),
        steps: vec![StepDef::Wait { secs: 1e300 }],
    };
    endless.validate().unwrap();
    assert!(matches!(
        endless.compile(fps30()),
        Err(PhaseError::Schedule(_))
    ));

    let long = TrackerDef {
        initial: Scalar(0.0),
        steps: vec![StepDef::Wait { secs: 1e8 }],
    };
    let track = long.compile(fps30()).unwrap();
    assert_eq!(track.last_frame(), FrameIndex(3_000_000_000));
    assert!(track.last_frame().0 < MAX_SCHEDULE_FRAMES);
}

#[test]
fn json_steps_use_defaults() {
    let def: TrackerDef = serde_json::from_str(
        r#"{
            "initial": 0.01,
            "steps": [ { "play": { "to": { "pi": 8 }, "run_time": 10 } }, { "wait": {} } ]
        }"#,
    )
    .unwrap();
    assert_eq!(
        def.steps[0],
        StepDef::Play {
            to: Scalar::pi(8.0),
            run_time: 10.0,
            rate: RateFunc::Linear,
        }
    );
    assert_eq!(def.steps[1], StepDef::Wait { secs: 1.0 });
}
