use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WorkshopError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WorkshopError::registry("x")
            .to_string()
            .contains("registry error:")
    );
    assert!(
        WorkshopError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WorkshopError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
