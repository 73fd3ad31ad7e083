//! Style normalization
//!
//! Turns a widget's free-form style bag plus its layout bounds into the
//! canonical [`Style`] record. Recognized keys are forwarded field by field
//! when present; unrecognized keys are dropped; nothing is defaulted beyond
//! the width/height seeded from the widget bounds.

use serde_json::{Map, Value};

use crate::document::Widget;
use crate::models::{Style, StyleValue};

fn scalar(raw: &Map<String, Value>, key: &str) -> Option<StyleValue> {
    match raw.get(key) {
        Some(Value::Number(n)) => Some(StyleValue::Number(n.clone())),
        Some(Value::String(s)) => Some(StyleValue::Text(s.clone())),
        _ => None,
    }
}

fn text(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

// Composites keep whatever shape the source supplied, scalar or per-edge
// object; only null is treated as absent.
fn composite(raw: &Map<String, Value>, key: &str) -> Option<Value> {
    raw.get(key).filter(|v| !v.is_null()).cloned()
}

/// Normalizes a raw style bag against the widget's bounds.
///
/// Width and height always come out set: the widget's layout size is the
/// fallback whenever the style bag does not override them. Everything else
/// is present only when the source supplied it.
pub fn normalize_style(raw: &Map<String, Value>, widget: &Widget) -> Style {
    Style {
        // Layout - bounds seed the size so a component is never sizeless
        width: scalar(raw, "width").or_else(|| Some(StyleValue::number(widget.width))),
        height: scalar(raw, "height").or_else(|| Some(StyleValue::number(widget.height))),
        min_width: scalar(raw, "minWidth"),
        max_width: scalar(raw, "maxWidth"),
        min_height: scalar(raw, "minHeight"),
        max_height: scalar(raw, "maxHeight"),
        // Spacing
        padding: composite(raw, "padding"),
        margin: composite(raw, "margin"),
        // Color
        background_color: text(raw, "backgroundColor"),
        color: text(raw, "color"),
        // Border
        border_width: scalar(raw, "borderWidth"),
        border_color: text(raw, "borderColor"),
        border_style: text(raw, "borderStyle"),
        border_radius: composite(raw, "borderRadius"),
        // Typography
        font_size: scalar(raw, "fontSize"),
        font_weight: scalar(raw, "fontWeight"),
        font_family: text(raw, "fontFamily"),
        text_align: text(raw, "textAlign"),
        line_height: scalar(raw, "lineHeight"),
        letter_spacing: scalar(raw, "letterSpacing"),
        // Effects
        opacity: scalar(raw, "opacity"),
        shadow: composite(raw, "shadow"),
        overflow: text(raw, "overflow"),
        z_index: scalar(raw, "zIndex"),
        // Flex layout
        display: text(raw, "display"),
        flex_direction: text(raw, "flexDirection"),
        justify_content: text(raw, "justifyContent"),
        align_items: text(raw, "alignItems"),
        flex_wrap: text(raw, "flexWrap"),
        gap: scalar(raw, "gap"),
        flex: scalar(raw, "flex"),
    }
}
