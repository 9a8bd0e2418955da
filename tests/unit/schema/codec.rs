use super::*;

#[test]
fn syntax_errors_are_malformed_input() {
    let err = Template::parse("{not json").unwrap_err();
    assert!(matches!(err, MemeplateError::MalformedInput(_)));
    let err = ServiceDefaults::parse("").unwrap_err();
    assert!(matches!(err, MemeplateError::MalformedInput(_)));
}

#[test]
fn wrong_shape_is_malformed_input() {
    // "text" must be an array of slots.
    let err =
        Template::parse(r#"{"type":"IMG","avatar":[{"type":"FROM"}],"text":"oops"}"#).unwrap_err();
    assert!(matches!(err, MemeplateError::MalformedInput(_)));
}

#[test]
fn absent_required_fields_are_reported() {
    // Template.type
    let err = Template::parse(r#"{"avatar":[{"type":"FROM"}],"text":[]}"#).unwrap_err();
    assert!(matches!(err, MemeplateError::MissingRequiredField(_)), "{err}");

    // AvatarSlot.type
    let err = Template::parse(r#"{"type":"IMG","avatar":[{}],"text":[]}"#).unwrap_err();
    assert!(matches!(err, MemeplateError::MissingRequiredField(_)), "{err}");

    // Background.size
    let err = Template::parse(
        r#"{"type":"IMG","avatar":[{"type":"FROM"}],"text":[],"background":{}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MemeplateError::MissingRequiredField(_)), "{err}");
}

#[test]
fn unknown_variants_are_rejected_uniformly() {
    // The same class of outcome for any two different enum fields.
    let err = Template::parse(r#"{"type":"WEBM","avatar":[{"type":"FROM"}],"text":[]}"#)
        .unwrap_err();
    assert!(matches!(err, MemeplateError::UnknownVariant(_)), "{err}");

    let err = Template::parse(
        r#"{"type":"IMG","avatar":[{"type":"FROM","fit":"TILE"}],"text":[]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MemeplateError::UnknownVariant(_)), "{err}");

    let err = ServiceDefaults::parse(r#"{"gifEncoder":"FANCY"}"#).unwrap_err();
    assert!(matches!(err, MemeplateError::UnknownVariant(_)), "{err}");
}

#[test]
fn parse_is_inverse_of_stringify() {
    let t = Template::parse(
        r#"{"type":"GIF","avatar":[{"type":"TO","round":true}],"text":[],"delay":65}"#,
    )
    .unwrap();
    let back = Template::parse(&t.stringify().unwrap()).unwrap();
    assert_eq!(back, t);

    let d = ServiceDefaults::parse(r#"{"gifQuality":7}"#).unwrap();
    let back = ServiceDefaults::parse(&d.stringify().unwrap()).unwrap();
    assert_eq!(back, d);
}

#[test]
fn validation_runs_at_parse_time() {
    // Structurally fine, semantically invalid: surfaces here, not at render.
    let err = Template::parse(
        r#"{"type":"IMG","avatar":[{"type":"LOCAL"}],"text":[]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MemeplateError::InvariantViolation(_)));
}
