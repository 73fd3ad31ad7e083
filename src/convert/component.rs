//! Widget to component conversion
//!
//! The heart of the compiler: recursively converts one editor widget (and
//! its children) into a canonical [`Component`], synthesizing a data binding
//! when the widget's config names a data source and promoting unrecognized
//! config keys into the generic `props` bag.

use serde_json::{Map, Value};

use crate::convert::style::normalize_style;
use crate::convert::widget_type::map_widget_type;
use crate::document::Widget;
use crate::models::{BindingType, Component, DataBinding};

// Config keys with a canonical destination. Everything else is promoted
// into `props` verbatim.
const CONSUMED_CONFIG_KEYS: [&str; 15] = [
    "name",
    "text",
    "content",
    "label",
    "src",
    "imageUrl",
    "source",
    "placeholder",
    "value",
    "options",
    "icon",
    "variant",
    "dataBinding",
    "dataSource",
    "dataPath",
];

fn first_present<'a>(config: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| config.get(*key))
        .find(|value| !value.is_null())
}

fn build_props(config: &Map<String, Value>) -> Option<Map<String, Value>> {
    let mut props = Map::new();
    if let Some(value) = first_present(config, &["text", "content", "label"]) {
        props.insert("text".to_string(), value.clone());
    }
    if let Some(value) = first_present(config, &["src", "imageUrl", "source"]) {
        props.insert("source".to_string(), value.clone());
    }
    for key in ["placeholder", "value", "options", "icon", "variant"] {
        if let Some(value) = config.get(key) {
            if !value.is_null() {
                props.insert(key.to_string(), value.clone());
            }
        }
    }
    // Generic escape hatch for widget-specific configuration
    for (key, value) in config {
        if !CONSUMED_CONFIG_KEYS.contains(&key.as_str()) {
            props.insert(key.clone(), value.clone());
        }
    }
    if props.is_empty() { None } else { Some(props) }
}

fn synthesize_binding(widget: &Widget) -> Option<DataBinding> {
    let source = ["dataBinding", "dataSource"]
        .iter()
        .filter_map(|key| widget.config.get(*key))
        .filter_map(|value| value.as_str())
        .find(|name| !name.is_empty())?;
    let mut binding = DataBinding::new(format!("{}-binding", widget.id), BindingType::Api);
    binding.source = Some(source.to_string());
    binding.response_path = widget
        .config
        .get("dataPath")
        .and_then(|value| value.as_str())
        .map(|path| path.to_string());
    Some(binding)
}

/// Converts one widget and its subtree into a canonical component.
///
/// Never fails: malformed or missing config fields are treated as absent.
///
/// # Arguments
/// * `widget` - The editor widget to convert
///
/// # Returns
/// The converted component. `children` is present only when the widget
/// declared at least one child; `props` only when anything was collected;
/// `data_bindings` only when the config named a data source.
///
/// # Example
/// ```
/// use mobile_schema_sdk::convert::convert_widget;
/// use mobile_schema_sdk::document::Widget;
/// use mobile_schema_sdk::models::ComponentType;
///
/// let mut widget = Widget::new("w1", "button");
/// widget.config.insert("text".to_string(), "Save".into());
/// let component = convert_widget(&widget);
/// assert_eq!(component.component_type, ComponentType::Button);
/// assert_eq!(component.props.unwrap()["text"], "Save");
/// ```
pub fn convert_widget(widget: &Widget) -> Component {
    let component_type = map_widget_type(&widget.widget_type);
    let name = widget
        .config
        .get("name")
        .and_then(|value| value.as_str())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .unwrap_or_else(|| widget.widget_type.clone());

    let children: Vec<Component> = widget.children.iter().map(convert_widget).collect();

    Component {
        id: widget.id.clone(),
        component_type,
        name,
        style: normalize_style(&widget.style, widget),
        props: build_props(&widget.config),
        data_bindings: synthesize_binding(widget).map(|binding| vec![binding]),
        children: if children.is_empty() { None } else { Some(children) },
    }
}
