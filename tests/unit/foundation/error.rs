use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MemeplateError::malformed("x")
            .to_string()
            .contains("malformed input:")
    );
    assert!(
        MemeplateError::missing_field("x")
            .to_string()
            .contains("missing required field:")
    );
    assert!(
        MemeplateError::unknown_variant("x")
            .to_string()
            .contains("unknown variant:")
    );
    assert!(
        MemeplateError::invariant("x")
            .to_string()
            .contains("invariant violation:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MemeplateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
