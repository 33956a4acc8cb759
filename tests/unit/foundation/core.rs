use super::*;

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(r.contains(FrameIndex(2)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_covers_subranges() {
    let outer = FrameRange::new(FrameIndex(0), FrameIndex(10)).unwrap();
    let inner = FrameRange::new(FrameIndex(3), FrameIndex(10)).unwrap();
    let past = FrameRange::new(FrameIndex(3), FrameIndex(11)).unwrap();
    let empty = FrameRange::new(FrameIndex(40), FrameIndex(40)).unwrap();
    assert!(outer.covers(inner));
    assert!(!outer.covers(past));
    assert!(outer.covers(empty));
}

#[test]
fn fps_validation_and_conversions() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());

    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_to_secs(15), 0.5);
    assert_eq!(fps.secs_to_frames_round(10.0), 300);
    assert_eq!(fps.secs_to_frames_round(0.049), 1);
    assert_eq!(fps.secs_to_frames_round(-1.0), 0);

    let ntsc = Fps::new(30_000, 1_001).unwrap();
    assert!((ntsc.frame_duration_secs() - 1_001.0 / 30_000.0).abs() < 1e-15);
}

#[test]
fn scalar_reads_numbers_and_pi_multiples() {
    let plain: Scalar = serde_json::from_str("2.5").unwrap();
    assert_eq!(plain, Scalar(2.5));

    let turns: Scalar = serde_json::from_str(r#"{ "pi": 3 }"#).unwrap();
    assert_eq!(turns.0, 3.0 * std::f64::consts::PI);

    assert!(serde_json::from_str::<Scalar>(r#"{ "tau": 1 }"#).is_err());
    assert_eq!(serde_json::to_string(&Scalar(1.5)).unwrap(), "1.5");
}
