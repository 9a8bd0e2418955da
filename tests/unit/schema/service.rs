use super::*;

#[test]
fn empty_object_parses_to_baseline() {
    let d = ServiceDefaults::parse("{}").unwrap();
    assert_eq!(d, ServiceDefaults::default());
    assert!(d.antialias);
    assert!(d.resampling);
    assert!(d.gif_max_size.is_empty());
    assert_eq!(d.gif_encoder, GifEncoder::AnimatedLib);
    assert_eq!(d.gif_quality, 5);
    assert_eq!(d.gif_encoder_thread_pool_size, 0);
    assert!(d.headless);
}

#[test]
fn stringify_encodes_every_field() {
    let json = ServiceDefaults::default().stringify_pretty().unwrap();
    for key in [
        "\"antialias\"",
        "\"resampling\"",
        "\"gifMaxSize\"",
        "\"gifEncoder\"",
        "\"gifQuality\"",
        "\"gifEncoderThreadPoolSize\"",
        "\"headless\"",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
    let back = ServiceDefaults::parse(&json).unwrap();
    assert_eq!(back, ServiceDefaults::default());
}

#[test]
fn explicit_values_round_trip() {
    let d = ServiceDefaults {
        antialias: false,
        resampling: false,
        gif_max_size: vec![200, 200],
        gif_encoder: GifEncoder::BufferedStream,
        gif_quality: 10,
        gif_encoder_thread_pool_size: 4,
        headless: false,
    };
    let back = ServiceDefaults::parse(&d.stringify().unwrap()).unwrap();
    assert_eq!(back, d);
}

#[test]
fn max_size_accessor() {
    let mut d = ServiceDefaults::default();
    assert_eq!(d.max_size(), None);
    d.gif_max_size = vec![320, 240];
    assert_eq!(d.max_size(), Some([320, 240]));
}

#[test]
fn malformed_max_size_is_rejected() {
    let err = ServiceDefaults::parse(r#"{"gifMaxSize":[100]}"#).unwrap_err();
    assert!(matches!(err, MemeplateError::InvariantViolation(_)));
    let err = ServiceDefaults::parse(r#"{"gifMaxSize":[100,0]}"#).unwrap_err();
    assert!(matches!(err, MemeplateError::InvariantViolation(_)));
}

#[test]
fn zero_quality_is_rejected() {
    let err = ServiceDefaults::parse(r#"{"gifQuality":0}"#).unwrap_err();
    assert!(matches!(err, MemeplateError::InvariantViolation(_)));
}

#[test]
fn unknown_fields_are_ignored() {
    let d = ServiceDefaults::parse(r#"{"antialias":false,"futureKnob":true}"#).unwrap();
    assert!(!d.antialias);
}

#[test]
fn handle_swaps_snapshots_atomically() {
    let handle = DefaultsHandle::new(ServiceDefaults::default());
    let before = handle.load();
    assert_eq!(before.version, 0);
    assert!(before.defaults.antialias);

    let new_version = handle.replace(ServiceDefaults {
        antialias: false,
        ..ServiceDefaults::default()
    });
    assert_eq!(new_version, 1);

    // Readers holding the old snapshot keep seeing the old record.
    assert!(before.defaults.antialias);
    let after = handle.load();
    assert_eq!(after.version, 1);
    assert!(!after.defaults.antialias);
}

#[test]
fn handle_versions_are_monotonic() {
    let handle = DefaultsHandle::default();
    for expected in 1..=3 {
        assert_eq!(handle.replace(ServiceDefaults::default()), expected);
    }
    assert_eq!(handle.load().version, 3);
}
