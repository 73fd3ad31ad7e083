//! Widget type mapping
//!
//! The editor stores widget types as free-form lowercase labels; rendering
//! clients understand only the closed [`ComponentType`] set. The table below
//! folds every known label and synonym onto that set. Adding a synonym is a
//! one-line table edit.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::models::ComponentType;

static WIDGET_TYPE_MAP: Lazy<HashMap<&'static str, ComponentType>> = Lazy::new(|| {
    HashMap::from([
        // Layout
        ("container", ComponentType::Container),
        ("section", ComponentType::Container),
        ("panel", ComponentType::Container),
        ("grid", ComponentType::Container),
        ("row", ComponentType::Row),
        ("column", ComponentType::Column),
        ("stack", ComponentType::Column),
        // Basic
        ("text", ComponentType::Text),
        ("label", ComponentType::Text),
        ("heading", ComponentType::Text),
        ("paragraph", ComponentType::Text),
        ("image", ComponentType::Image),
        ("img", ComponentType::Image),
        ("icon", ComponentType::Icon),
        ("button", ComponentType::Button),
        ("link", ComponentType::Link),
        ("divider", ComponentType::Divider),
        ("separator", ComponentType::Divider),
        ("spacer", ComponentType::Spacer),
        // Input
        ("input", ComponentType::TextInput),
        ("textinput", ComponentType::TextInput),
        ("textfield", ComponentType::TextInput),
        ("textarea", ComponentType::TextArea),
        ("select", ComponentType::Select),
        ("dropdown", ComponentType::Select),
        ("multiselect", ComponentType::Select),
        ("checkbox", ComponentType::Checkbox),
        ("radio", ComponentType::Radio),
        ("radiogroup", ComponentType::Radio),
        ("switch", ComponentType::Switch),
        ("toggle", ComponentType::Switch),
        ("slider", ComponentType::Slider),
        ("range", ComponentType::Slider),
        ("datepicker", ComponentType::DatePicker),
        ("date", ComponentType::DatePicker),
        ("timepicker", ComponentType::TimePicker),
        ("time", ComponentType::TimePicker),
        ("filepicker", ComponentType::FilePicker),
        ("fileupload", ComponentType::FilePicker),
        ("upload", ComponentType::FilePicker),
        // Data display
        ("list", ComponentType::List),
        ("listview", ComponentType::List),
        ("table", ComponentType::Table),
        ("datatable", ComponentType::Table),
        ("datagrid", ComponentType::Table),
        ("card", ComponentType::Card),
        ("badge", ComponentType::Badge),
        ("avatar", ComponentType::Avatar),
        ("chip", ComponentType::Chip),
        ("tag", ComponentType::Chip),
        ("progress", ComponentType::Progress),
        ("progressbar", ComponentType::Progress),
        ("skeleton", ComponentType::Skeleton),
        ("loader", ComponentType::Skeleton),
        // Navigation
        ("tabs", ComponentType::Tabs),
        ("tabbar", ComponentType::Tabs),
        ("bottomnav", ComponentType::BottomNav),
        ("bottomnavigation", ComponentType::BottomNav),
        ("drawer", ComponentType::Drawer),
        ("sidebar", ComponentType::Drawer),
        ("appbar", ComponentType::AppBar),
        ("navbar", ComponentType::AppBar),
        ("toolbar", ComponentType::AppBar),
        ("header", ComponentType::AppBar),
        ("breadcrumb", ComponentType::Breadcrumb),
        ("breadcrumbs", ComponentType::Breadcrumb),
        // Feedback
        ("modal", ComponentType::Modal),
        ("dialog", ComponentType::Modal),
        ("popup", ComponentType::Modal),
        ("toast", ComponentType::Toast),
        ("snackbar", ComponentType::Toast),
        ("alert", ComponentType::Alert),
        ("banner", ComponentType::Alert),
        ("tooltip", ComponentType::Tooltip),
        // Charts
        ("linechart", ComponentType::LineChart),
        ("chart", ComponentType::LineChart),
        ("barchart", ComponentType::BarChart),
        ("piechart", ComponentType::PieChart),
        ("donutchart", ComponentType::PieChart),
        ("areachart", ComponentType::AreaChart),
        // Media
        ("video", ComponentType::Video),
        ("audio", ComponentType::Audio),
        ("webview", ComponentType::WebView),
        ("iframe", ComponentType::WebView),
        ("embed", ComponentType::WebView),
        ("map", ComponentType::Map),
    ])
});

/// Maps a raw widget type label onto its canonical component type.
///
/// Total: lookup is case-insensitive and any label not in the table yields
/// [`ComponentType::Custom`].
pub fn map_widget_type(raw: &str) -> ComponentType {
    let key = raw.to_ascii_lowercase();
    match WIDGET_TYPE_MAP.get(key.as_str()) {
        Some(component_type) => *component_type,
        None => {
            debug!("Unmapped widget type '{}', falling back to custom", raw);
            ComponentType::Custom
        }
    }
}
