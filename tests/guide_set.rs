use plotguide::{ConfigurationError, Guide, GuideKind, GuideSet, Theme};
use serde_json::{Value, json};

fn build(kind: GuideKind, v: Value) -> Guide {
    kind.build(v.as_object().unwrap()).unwrap()
}

#[test]
fn resolved_guides_are_sorted_by_order() {
    let mut set = GuideSet::new();
    set.insert("colour", build(GuideKind::Legend, json!({"direction": "vertical", "order": 2})));
    set.insert("fill", build(GuideKind::Colorbar, json!({"direction": "vertical", "order": 1})));
    set.insert("size", build(GuideKind::Legend, json!({"direction": "vertical", "order": 2})));
    set.insert("shape", build(GuideKind::Legend, json!({"direction": "vertical"})));

    let resolved = set.resolve(&Theme::new()).unwrap();
    let names: Vec<&str> = resolved.iter().map(|g| g.aesthetic.as_str()).collect();
    assert_eq!(names, ["shape", "fill", "colour", "size"]);
    assert!(resolved.iter().all(|g| g.guide.config.is_resolved()));
}

#[test]
fn negative_order_is_rejected() {
    let mut set = GuideSet::new();
    set.insert("alpha", build(GuideKind::Legend, json!({"direction": "vertical", "order": -1})));
    assert_eq!(
        set.resolve(&Theme::new()).unwrap_err(),
        ConfigurationError::OrderOutOfRange(-1)
    );
}

#[test]
fn boundary_orders_are_accepted() {
    let mut set = GuideSet::new();
    set.insert("a", build(GuideKind::Legend, json!({"direction": "vertical", "order": 99})));
    set.insert("b", build(GuideKind::Legend, json!({"direction": "vertical", "order": 0})));
    let resolved = set.resolve(&Theme::new()).unwrap();
    assert_eq!(resolved[0].aesthetic, "b");
}

#[test]
fn first_unresolvable_guide_fails_the_set() {
    let mut set = GuideSet::new();
    set.insert("colour", build(GuideKind::Legend, json!({"direction": "vertical"})));
    set.insert("fill", build(GuideKind::Legend, json!({})));
    assert!(matches!(
        set.resolve(&Theme::new()),
        Err(ConfigurationError::InvalidTitlePosition(_))
    ));
}

#[test]
fn resolved_guide_serializes_flat() {
    let mut set = GuideSet::new();
    set.insert(
        "fill",
        build(GuideKind::Colorbar, json!({"direction": "horizontal", "nbin": 50})),
    );
    let resolved = set.resolve(&Theme::new()).unwrap();
    let v = serde_json::to_value(&resolved).unwrap();
    let g = &v[0];
    assert_eq!(g["aesthetic"], "fill");
    assert_eq!(g["kind"], "colorbar");
    assert_eq!(g["direction"], "horizontal");
    assert_eq!(g["label_position"], "bottom");
    assert_eq!(g["title_alignment"], "center");
    assert_eq!(g["params"]["nbin"], 50);
}

#[test]
fn derived_title_comes_from_aesthetic() {
    let mut set = GuideSet::new();
    set.insert("shape", build(GuideKind::Legend, json!({"direction": "vertical"})));
    set.insert("alpha", build(GuideKind::Legend, json!({"direction": "vertical", "title": null})));
    let resolved = set.resolve(&Theme::new()).unwrap();
    assert_eq!(resolved[0].title_text.as_deref(), Some("shape"));
    assert_eq!(resolved[1].title_text, None);
}
