use brandswitch_theme::{ComponentToken, ThemeConfig};

#[test]
fn default_config_survives_toml() {
    let config = ThemeConfig::default();
    let text = config.to_toml().unwrap();
    assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn component_table_replaces_defaults() {
    let config = ThemeConfig::from_toml_str(
        r#"
        [[component_tokens]]
        element_id = "card-radius-value"
        variable = "--card-border-radius"
        "#,
    )
    .unwrap();

    assert_eq!(
        config.component_tokens,
        [ComponentToken::new("card-radius-value", "--card-border-radius")]
    );
}

#[test]
fn json_shape_matches_toml_keys() {
    let value = serde_json::to_value(ThemeConfig::default()).unwrap();

    assert_eq!(value["base_class"], "base");
    assert_eq!(value["storage"]["brand_key"], "brand");
    assert_eq!(value["dom"]["variable_attribute"], "data-var");
    assert_eq!(value["modes"], serde_json::json!(["Lightmode", "Darkmode"]));
    assert_eq!(
        value["component_tokens"][0],
        serde_json::json!({
            "element_id": "btn-radius-value",
            "variable": "--button-border-radius",
        })
    );
}

#[test]
fn config_can_be_read_back_from_json() {
    let config: ThemeConfig = serde_json::from_str(
        r#"{ "default_brand": "Brand-B", "storage": { "mode_key": "theme-mode" } }"#,
    )
    .unwrap();

    assert_eq!(config.default_brand, "Brand-B");
    assert_eq!(config.storage.brand_key, "brand");
    assert_eq!(config.storage.mode_key, "theme-mode");
    assert!(config.validate().is_ok());
}
