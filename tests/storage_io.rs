use plotguide::theme::{LEGEND_TEXT, LEGEND_TITLE_ALIGN};
use plotguide::{Alignment, GuideConfig, GuideKind, GuideSet, Theme, ThemeLookup, Title, storage};
use std::fs;
use tempfile::tempdir;

#[test]
fn load_options_and_theme_then_save() {
    let dir = tempdir().unwrap();
    let opts_path = dir.path().join("legend.json");
    let theme_path = dir.path().join("theme.json");
    let out_path = dir.path().join("resolved.json");

    fs::write(
        &opts_path,
        r#"{"direction": "vertical", "reverse": true, "override_aes": {"alpha": 1}}"#,
    )
    .unwrap();
    fs::write(
        &theme_path,
        r#"{"legend_title_align": "right", "legend_text": {"size": 8}}"#,
    )
    .unwrap();

    let options = storage::load_options(&opts_path).unwrap();
    let theme = storage::load_theme(&theme_path).unwrap();
    assert_eq!(theme.legend_title_align().unwrap(), Some(Alignment::Right));
    assert!(theme.param(LEGEND_TITLE_ALIGN).is_some());

    let guide = GuideKind::Legend.build(&options).unwrap();
    let label_style = guide.config.label_style(&theme).unwrap();
    assert_eq!(label_style.size, Some(8.0));
    assert!(theme.element_text(LEGEND_TEXT).unwrap().is_some());

    let mut set = GuideSet::new();
    set.insert("colour", guide);
    let resolved = set.resolve(&theme).unwrap();
    storage::save_json(&resolved, &out_path).unwrap();

    let txt = fs::read_to_string(&out_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&txt).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["title_alignment"], "right");
    assert_eq!(v[0]["reverse"], true);
}

#[test]
fn malformed_files_are_errors() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("bad.json");
    fs::write(&p, "{not json").unwrap();
    assert!(storage::load_options(&p).is_err());
    assert!(storage::load_theme(&p).is_err());

    fs::write(&p, r#""just a string""#).unwrap();
    assert!(storage::load_theme(&p).is_err());

    assert!(storage::load_options(dir.path().join("missing.json")).is_err());
}

#[test]
fn saved_config_reads_back_as_options() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("config.json");

    for title in [
        Title::Derive,
        Title::Hidden,
        Title::Text("Species".into()),
        Title::Text("hidden".into()),
    ] {
        let mut cfg = GuideConfig::default();
        cfg.title = title;
        cfg.direction = Some(plotguide::Direction::Vertical);
        cfg.override_aes.insert("alpha".into(), serde_json::json!(0.4));
        cfg.order = 4;

        fs::write(&p, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();
        let options = storage::load_options(&p).unwrap();
        let back = GuideConfig::from_options(&options).unwrap();
        assert_eq!(back, cfg);
    }
}

#[test]
fn title_serializes_as_option_values() {
    let mut cfg = GuideConfig::default();
    let v = serde_json::to_value(&cfg).unwrap();
    assert!(v.get("title").is_none());

    cfg.title = Title::Hidden;
    assert_eq!(serde_json::to_value(&cfg).unwrap()["title"], serde_json::Value::Null);

    cfg.title = Title::Text("Species".into());
    assert_eq!(serde_json::to_value(&cfg).unwrap()["title"], "Species");
}

#[test]
fn resolved_output_carries_title_text() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("resolved.json");
    let mut set = GuideSet::new();
    let build = |v: serde_json::Value| GuideKind::Legend.build(v.as_object().unwrap()).unwrap();
    set.insert("colour", build(serde_json::json!({"direction": "vertical"})));
    set.insert("fill", build(serde_json::json!({"direction": "vertical", "title": null})));
    set.insert("size", build(serde_json::json!({"direction": "vertical", "title": "Mass"})));
    let resolved = set.resolve(&Theme::new()).unwrap();
    storage::save_json(&resolved, &out_path).unwrap();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(v[0]["title_text"], "colour");
    assert!(v[0].get("title").is_none());
    assert!(v[1].get("title_text").is_none());
    assert_eq!(v[1]["title"], serde_json::Value::Null);
    assert_eq!(v[2]["title_text"], "Mass");
}
