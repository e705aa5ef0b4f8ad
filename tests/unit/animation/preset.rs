use super::*;

#[test]
fn catalog_contains_required_presets_with_expected_defaults() {
    let fade = lookup_preset("fade-in").unwrap();
    assert_eq!(fade.kind, AnimationKind::Fade);
    assert_eq!(fade.config.duration, Some(0.3));

    let slide = lookup_preset("slide-up").unwrap();
    assert_eq!(slide.kind, AnimationKind::Slide);
    assert_eq!(slide.config.duration, Some(0.4));

    let scale = lookup_preset("scale-in").unwrap();
    assert_eq!(scale.kind, AnimationKind::Scale);
    assert_eq!(scale.config.duration, Some(0.2));

    let lift = lookup_preset("hover-lift").unwrap();
    assert_eq!(lift.kind, AnimationKind::Scale);
    assert_eq!(lift.trigger, Trigger::Hover);

    let stagger = lookup_preset("stagger-children").unwrap();
    assert_eq!(stagger.kind, AnimationKind::Stagger);
}

#[test]
fn unknown_preset_id_is_none() {
    assert!(lookup_preset("wobble").is_none());
}

#[test]
fn catalog_ids_are_unique() {
    let ids: Vec<&str> = preset_ids().collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids.len(), sorted.len());
    assert_eq!(builtin_presets().len(), ids.len());
}

#[test]
fn unknown_kind_tag_deserializes_to_default() {
    let kind: AnimationKind = serde_json::from_str(r#""wobble""#).unwrap();
    assert_eq!(kind, AnimationKind::Default);
    assert_eq!(AnimationKind::parse("wobble"), AnimationKind::Default);
    for k in AnimationKind::ALL {
        assert_eq!(AnimationKind::parse(k.as_str()), k);
    }
}

#[test]
fn merged_prefers_overrides() {
    let base = lookup_preset("fade-in").unwrap().config;
    let over = AnimationConfig {
        duration: Some(1.0),
        ..AnimationConfig::default()
    };
    let m = base.merged(&over);
    assert_eq!(m.duration, Some(1.0));
    assert_eq!(m.delay, Some(0.0));
    assert_eq!(m.easing, Some(Easing::ease_out()));
}

#[test]
fn preset_json_uses_type_key() {
    let s = serde_json::to_string(&lookup_preset("hover-lift").unwrap()).unwrap();
    assert!(s.contains(r#""type":"scale""#));
    assert!(s.contains(r#""trigger":"hover""#));
}
