//! Conversion tests: widget type mapping, style normalization, widget and
//! page conversion, document parsing

use mobile_schema_sdk::convert::{convert_page, convert_widget, map_widget_type, normalize_style};
use mobile_schema_sdk::document::{BrandingConfig, BuilderDocument, BuilderPage, Widget};
use mobile_schema_sdk::models::{BindingType, ComponentType};
use serde_json::json;

fn widget_with_config(id: &str, widget_type: &str, config: serde_json::Value) -> Widget {
    let mut widget = Widget::new(id, widget_type);
    widget.config = config.as_object().cloned().unwrap_or_default();
    widget
}

mod widget_type_tests {
    use super::*;

    #[test]
    fn test_known_labels_map_to_canonical_types() {
        assert_eq!(map_widget_type("container"), ComponentType::Container);
        assert_eq!(map_widget_type("button"), ComponentType::Button);
        assert_eq!(map_widget_type("image"), ComponentType::Image);
        assert_eq!(map_widget_type("linechart"), ComponentType::LineChart);
        assert_eq!(map_widget_type("map"), ComponentType::Map);
    }

    #[test]
    fn test_synonyms_share_a_canonical_type() {
        assert_eq!(map_widget_type("dropdown"), ComponentType::Select);
        assert_eq!(map_widget_type("select"), ComponentType::Select);
        assert_eq!(map_widget_type("toggle"), ComponentType::Switch);
        assert_eq!(map_widget_type("dialog"), ComponentType::Modal);
        assert_eq!(map_widget_type("snackbar"), ComponentType::Toast);
        assert_eq!(map_widget_type("iframe"), ComponentType::WebView);
        assert_eq!(map_widget_type("datatable"), ComponentType::Table);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(map_widget_type("Button"), ComponentType::Button);
        assert_eq!(map_widget_type("DROPDOWN"), ComponentType::Select);
        assert_eq!(map_widget_type("TextInput"), ComponentType::TextInput);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_custom() {
        assert_eq!(map_widget_type("holo-deck"), ComponentType::Custom);
        assert_eq!(map_widget_type(""), ComponentType::Custom);
        assert_eq!(map_widget_type("widget-3000"), ComponentType::Custom);
    }
}

mod style_tests {
    use super::*;

    #[test]
    fn test_bounds_seed_width_and_height() {
        let mut widget = Widget::new("w1", "button");
        widget.width = 320.0;
        widget.height = 48.0;

        let style = normalize_style(&widget.style, &widget);

        assert_eq!(style.width.unwrap().as_f64(), Some(320.0));
        assert_eq!(style.height.unwrap().as_f64(), Some(48.0));
        assert!(style.background_color.is_none());
        assert!(style.padding.is_none());
        assert!(style.font_size.is_none());
    }

    #[test]
    fn test_explicit_style_overrides_bounds() {
        let mut widget = Widget::new("w1", "button");
        widget.width = 320.0;
        widget.height = 48.0;
        widget.style = json!({"width": "100%"}).as_object().cloned().unwrap();

        let style = normalize_style(&widget.style, &widget);

        assert_eq!(style.width.unwrap().as_str(), Some("100%"));
        assert_eq!(style.height.unwrap().as_f64(), Some(48.0));
    }

    #[test]
    fn test_composites_pass_through_any_shape() {
        let mut widget = Widget::new("w1", "container");
        widget.style = json!({
            "padding": 8,
            "margin": {"top": 4, "bottom": 4},
            "borderRadius": "50%"
        })
        .as_object()
        .cloned()
        .unwrap();

        let style = normalize_style(&widget.style, &widget);

        assert_eq!(style.padding, Some(json!(8)));
        assert_eq!(style.margin, Some(json!({"top": 4, "bottom": 4})));
        assert_eq!(style.border_radius, Some(json!("50%")));
    }

    #[test]
    fn test_unrecognized_keys_are_dropped() {
        let mut widget = Widget::new("w1", "text");
        widget.style = json!({"blink": true, "color": "#333333"})
            .as_object()
            .cloned()
            .unwrap();

        let style = normalize_style(&widget.style, &widget);
        let serialized = serde_json::to_value(&style).unwrap();

        assert_eq!(style.color.as_deref(), Some("#333333"));
        assert!(serialized.get("blink").is_none());
    }

    #[test]
    fn test_null_and_wrong_typed_values_treated_absent() {
        let mut widget = Widget::new("w1", "text");
        widget.style = json!({"backgroundColor": null, "fontSize": [16], "textAlign": 3})
            .as_object()
            .cloned()
            .unwrap();

        let style = normalize_style(&widget.style, &widget);

        assert!(style.background_color.is_none());
        assert!(style.font_size.is_none());
        assert!(style.text_align.is_none());
    }

    #[test]
    fn test_numeric_and_string_fields_copied_verbatim() {
        let mut widget = Widget::new("w1", "text");
        widget.style = json!({
            "fontSize": 16,
            "fontWeight": "bold",
            "lineHeight": 1.4,
            "letterSpacing": "0.02em",
            "zIndex": 10,
            "flexDirection": "row"
        })
        .as_object()
        .cloned()
        .unwrap();

        let style = normalize_style(&widget.style, &widget);

        assert_eq!(style.font_size.unwrap().as_f64(), Some(16.0));
        assert_eq!(style.font_weight.unwrap().as_str(), Some("bold"));
        assert_eq!(style.line_height.unwrap().as_f64(), Some(1.4));
        assert_eq!(style.letter_spacing.unwrap().as_str(), Some("0.02em"));
        assert_eq!(style.z_index.unwrap().as_f64(), Some(10.0));
        assert_eq!(style.flex_direction.as_deref(), Some("row"));
    }
}

mod component_tests {
    use super::*;

    #[test]
    fn test_name_prefers_config_name() {
        let widget = widget_with_config("w1", "button", json!({"name": "Submit"}));
        assert_eq!(convert_widget(&widget).name, "Submit");

        let widget = Widget::new("w2", "button");
        assert_eq!(convert_widget(&widget).name, "button");
    }

    #[test]
    fn test_text_fallback_chain() {
        let widget = widget_with_config("w1", "text", json!({"content": "Hello"}));
        let props = convert_widget(&widget).props.unwrap();
        assert_eq!(props["text"], "Hello");

        let widget = widget_with_config("w2", "text", json!({"text": "A", "content": "B"}));
        let props = convert_widget(&widget).props.unwrap();
        assert_eq!(props["text"], "A");
        assert!(props.get("content").is_none());

        let widget = widget_with_config("w3", "button", json!({"label": "Go"}));
        let props = convert_widget(&widget).props.unwrap();
        assert_eq!(props["text"], "Go");
    }

    #[test]
    fn test_source_aliases_collapse() {
        let widget = widget_with_config("w1", "image", json!({"imageUrl": "/logo.png"}));
        let props = convert_widget(&widget).props.unwrap();
        assert_eq!(props["source"], "/logo.png");
        assert!(props.get("imageUrl").is_none());

        let widget = widget_with_config("w2", "video", json!({"src": "/intro.mp4"}));
        let props = convert_widget(&widget).props.unwrap();
        assert_eq!(props["source"], "/intro.mp4");
    }

    #[test]
    fn test_standard_props_copied_verbatim() {
        let widget = widget_with_config(
            "w1",
            "select",
            json!({
                "placeholder": "Pick one",
                "value": "b",
                "options": ["a", "b"],
                "icon": "chevron",
                "variant": "outlined"
            }),
        );
        let props = convert_widget(&widget).props.unwrap();

        assert_eq!(props["placeholder"], "Pick one");
        assert_eq!(props["value"], "b");
        assert_eq!(props["options"], json!(["a", "b"]));
        assert_eq!(props["icon"], "chevron");
        assert_eq!(props["variant"], "outlined");
    }

    #[test]
    fn test_leftover_config_keys_promoted_to_props() {
        let widget = widget_with_config(
            "w1",
            "textarea",
            json!({"text": "notes", "rows": 5, "resizable": true}),
        );
        let props = convert_widget(&widget).props.unwrap();

        assert_eq!(props["rows"], 5);
        assert_eq!(props["resizable"], true);
        assert_eq!(props["text"], "notes");
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn test_props_omitted_when_empty() {
        let widget = Widget::new("w1", "divider");
        assert!(convert_widget(&widget).props.is_none());
    }

    #[test]
    fn test_consumed_keys_never_reappear_in_props() {
        let widget = widget_with_config(
            "w1",
            "list",
            json!({
                "name": "Orders",
                "text": "T",
                "content": "C",
                "label": "L",
                "src": "/a.png",
                "imageUrl": "/b.png",
                "source": "/c.png",
                "placeholder": "P",
                "value": "V",
                "options": [1, 2],
                "icon": "star",
                "variant": "flat",
                "dataBinding": "/api/orders",
                "dataSource": "/api/fallback",
                "dataPath": "data.rows",
                "pageSize": 25
            }),
        );
        let component = convert_widget(&widget);
        let props = component.props.unwrap();

        // Aliases collapse onto their canonical keys; the raw alias keys
        // must not ride along too
        assert_eq!(props["text"], "T");
        assert_eq!(props["source"], "/a.png");
        assert_eq!(props["pageSize"], 25);
        for consumed in [
            "name",
            "content",
            "label",
            "src",
            "imageUrl",
            "dataBinding",
            "dataSource",
            "dataPath",
        ] {
            assert!(props.get(consumed).is_none(), "{consumed} leaked into props");
        }
        assert_eq!(props.len(), 8);
        assert_eq!(component.name, "Orders");

        let bindings = component.data_bindings.unwrap();
        assert_eq!(bindings[0].source.as_deref(), Some("/api/orders"));
        assert_eq!(bindings[0].response_path.as_deref(), Some("data.rows"));
    }

    #[test]
    fn test_binding_synthesized_from_data_source() {
        let widget = widget_with_config(
            "list-1",
            "list",
            json!({"dataSource": "/api/tickets", "dataPath": "data.items"}),
        );
        let component = convert_widget(&widget);
        let bindings = component.data_bindings.unwrap();

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].id, "list-1-binding");
        assert_eq!(bindings[0].binding_type, BindingType::Api);
        assert_eq!(bindings[0].source.as_deref(), Some("/api/tickets"));
        assert_eq!(bindings[0].response_path.as_deref(), Some("data.items"));
    }

    #[test]
    fn test_data_binding_key_takes_precedence() {
        let widget = widget_with_config(
            "w1",
            "table",
            json!({"dataBinding": "/api/a", "dataSource": "/api/b"}),
        );
        let bindings = convert_widget(&widget).data_bindings.unwrap();
        assert_eq!(bindings[0].source.as_deref(), Some("/api/a"));
    }

    #[test]
    fn test_no_binding_without_source() {
        let widget = Widget::new("w1", "table");
        assert!(convert_widget(&widget).data_bindings.is_none());

        let widget = widget_with_config("w2", "table", json!({"dataSource": ""}));
        assert!(convert_widget(&widget).data_bindings.is_none());

        let widget = widget_with_config("w3", "table", json!({"dataSource": 17}));
        assert!(convert_widget(&widget).data_bindings.is_none());
    }

    #[test]
    fn test_children_convert_in_order_and_leaf_omits_them() {
        let mut container = Widget::new("c1", "container");
        container
            .children
            .push(widget_with_config("a", "text", json!({"text": "first"})));
        container.children.push(Widget::new("b", "button"));

        let component = convert_widget(&container);
        let children = component.children.unwrap();

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].id, "a");
        assert_eq!(children[1].id, "b");
        assert!(children[0].children.is_none());
    }

    #[test]
    fn test_malformed_name_falls_back_to_raw_type() {
        let widget = widget_with_config("w1", "button", json!({"name": 42}));
        assert_eq!(convert_widget(&widget).name, "button");

        let widget = widget_with_config("w2", "button", json!({"name": ""}));
        assert_eq!(convert_widget(&widget).name, "button");
    }

    #[test]
    fn test_unknown_widget_type_becomes_custom_component() {
        let widget = Widget::new("w1", "kanban-board");
        let component = convert_widget(&widget);
        assert_eq!(component.component_type, ComponentType::Custom);
        assert_eq!(component.name, "kanban-board");
    }
}

mod page_tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_title_falls_back_display_name_then_name() {
        let mut page = BuilderPage::new("p1", "dashboard");
        page.display_name = Some("Team Dashboard".to_string());
        assert_eq!(convert_page(&page).title, "Team Dashboard");

        let page = BuilderPage::new("p2", "dashboard");
        assert_eq!(convert_page(&page).title, "dashboard");

        let mut page = BuilderPage::new("p3", "dashboard");
        page.display_name = Some(String::new());
        assert_eq!(convert_page(&page).title, "dashboard");
    }

    #[test]
    fn test_path_defaults_to_slash_name() {
        let page = BuilderPage::new("p1", "dashboard");
        assert_eq!(convert_page(&page).path, "/dashboard");

        let mut page = BuilderPage::new("p2", "dashboard");
        page.path = Some("/home".to_string());
        assert_eq!(convert_page(&page).path, "/home");

        let mut page = BuilderPage::new("p3", "dashboard");
        page.path = Some(String::new());
        assert_eq!(convert_page(&page).path, "/dashboard");
    }

    #[test]
    fn test_visible_page_gets_header_with_back_button() {
        let mut page = BuilderPage::new("p1", "tickets");
        page.display_name = Some("Tickets".to_string());

        let header = convert_page(&page).header.unwrap();
        assert!(header.visible);
        assert!(header.show_back_button);
        assert_eq!(header.title.as_deref(), Some("Tickets"));
    }

    #[test]
    fn test_hidden_page_converts_without_header() {
        let mut page = BuilderPage::new("p1", "internal");
        page.is_hidden = true;

        let converted = convert_page(&page);
        assert!(converted.header.is_none());
        assert_eq!(converted.id, "p1");
    }

    #[test]
    fn test_permissions_imply_requires_auth() {
        let mut page = BuilderPage::new("p1", "admin");
        page.permissions = Some(vec!["admin".to_string(), "auditor".to_string()]);
        let converted = convert_page(&page);
        assert!(converted.requires_auth);
        assert_eq!(converted.permissions.unwrap().len(), 2);

        // An empty permissions block still gates the page
        let mut page = BuilderPage::new("p2", "members");
        page.permissions = Some(Vec::new());
        let converted = convert_page(&page);
        assert!(converted.requires_auth);
        assert_eq!(converted.permissions, Some(Vec::new()));

        let page = BuilderPage::new("p3", "public");
        let converted = convert_page(&page);
        assert!(!converted.requires_auth);
        assert!(converted.permissions.is_none());
    }

    #[test]
    fn test_widgets_convert_in_source_order() {
        let mut page = BuilderPage::new("p1", "home");
        page.widgets.push(Widget::new("w1", "text"));
        page.widgets.push(Widget::new("w2", "button"));
        page.widgets.push(Widget::new("w3", "image"));

        let converted = convert_page(&page);
        let ids: Vec<&str> = converted
            .components
            .iter()
            .map(|component| component.id.as_str())
            .collect();
        assert_eq!(ids, ["w1", "w2", "w3"]);
    }

    #[test]
    fn test_timestamps_pass_through() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 6, 15, 17, 0, 0).unwrap();
        let mut page = BuilderPage::new("p1", "home");
        page.created_at = Some(created);
        page.updated_at = Some(updated);

        let converted = convert_page(&page);
        assert_eq!(converted.created_at, Some(created));
        assert_eq!(converted.updated_at, Some(updated));
    }
}

mod document_tests {
    use super::*;

    #[test]
    fn test_parses_full_builder_document() {
        let json = r#"{
            "pages": [
                {
                    "id": "p1",
                    "name": "home",
                    "displayName": "Home",
                    "isActive": true,
                    "widgets": [
                        {"id": "w1", "type": "text", "width": 100, "height": 20,
                         "config": {"text": "Welcome"}}
                    ]
                }
            ],
            "sidebarItems": [
                {"id": "s1", "name": "Home", "pageId": "p1"}
            ],
            "loginPage": {"title": "Sign in"},
            "postLoginRedirect": "p1"
        }"#;

        let document = BuilderDocument::from_json(json).unwrap();
        assert_eq!(document.pages.len(), 1);
        assert_eq!(document.pages[0].widgets[0].widget_type, "text");
        assert_eq!(document.sidebar_items[0].page_id.as_deref(), Some("p1"));
        assert!(document.login_page.is_some());
        assert_eq!(document.post_login_redirect.as_deref(), Some("p1"));
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let mut document = BuilderDocument::default();
        document.sidebar_items.push(
            mobile_schema_sdk::document::SidebarItem::new("s1", "Home"),
        );
        document.post_login_redirect = Some("p1".to_string());

        let value = serde_json::to_value(&document).unwrap();
        assert!(value.get("sidebarItems").is_some());
        assert!(value.get("postLoginRedirect").is_some());
        assert!(value.get("sidebar_items").is_none());
    }

    #[test]
    fn test_branding_parses_partially() {
        let branding = BrandingConfig::from_json(
            r##"{"primaryColor": "#111111", "dangerColor": "#AA0000"}"##,
        )
        .unwrap();
        assert_eq!(branding.primary_color.as_deref(), Some("#111111"));
        assert_eq!(branding.danger_color.as_deref(), Some("#AA0000"));
        assert!(branding.secondary_color.is_none());
        assert!(branding.global_styling.is_none());
    }

    #[test]
    fn test_invalid_document_reports_context() {
        let error = BuilderDocument::from_json("[1, 2]").unwrap_err();
        assert!(error.to_string().contains("builder document"));
    }
}
