//! Canonical component model
//!
//! A `Component` is the typed counterpart of an editor widget. Widgets carry
//! free-form config and style bags; components carry a closed type, a
//! normalized style record, and an optional `props` bag for everything that
//! has no canonical field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::binding::DataBinding;

/// Closed enumeration of component kinds understood by rendering clients.
///
/// Widget type labels from the editor are open-ended; the mapper in
/// `convert::widget_type` folds them onto this set, with `Custom` as the
/// catch-all for anything unrecognized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    // Layout
    Container,
    Row,
    Column,
    // Basic
    Text,
    Image,
    Icon,
    Button,
    Link,
    Divider,
    Spacer,
    // Input
    TextInput,
    TextArea,
    Select,
    Checkbox,
    Radio,
    Switch,
    Slider,
    DatePicker,
    TimePicker,
    FilePicker,
    // Data display
    List,
    Table,
    Card,
    Badge,
    Avatar,
    Chip,
    Progress,
    Skeleton,
    // Navigation
    Tabs,
    BottomNav,
    Drawer,
    AppBar,
    Breadcrumb,
    // Feedback
    Modal,
    Toast,
    Alert,
    Tooltip,
    // Charts
    LineChart,
    BarChart,
    PieChart,
    AreaChart,
    // Media
    Video,
    Audio,
    WebView,
    Map,
    // Fallback for unmapped widget types
    Custom,
}

/// A styling value that may be numeric or textual in the source document.
///
/// Editors emit both `fontSize: 16` and `fontSize: "1.2rem"`; the normalizer
/// copies whichever shape it finds verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StyleValue {
    Number(serde_json::Number),
    Text(String),
}

impl StyleValue {
    /// Creates a numeric style value.
    pub fn number(value: f64) -> Self {
        StyleValue::Number(
            serde_json::Number::from_f64(value).unwrap_or_else(|| serde_json::Number::from(0)),
        )
    }

    /// Creates a textual style value.
    pub fn text(value: impl Into<String>) -> Self {
        StyleValue::Text(value.into())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => n.as_f64(),
            StyleValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s.as_str()),
            StyleValue::Number(_) => None,
        }
    }
}

/// Canonical style record.
///
/// Every field is optional and absent fields are omitted from the serialized
/// form; absence means "unspecified", not zero. Composite fields (`padding`,
/// `margin`, `border_radius`, `shadow`) keep whatever shape the source
/// supplied, scalar or per-edge object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    // Layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<StyleValue>,
    // Spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Value>,
    // Color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    // Border
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Value>,
    // Typography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<StyleValue>,
    // Effects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<StyleValue>,
    // Flex layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<StyleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<StyleValue>,
}

/// A single node of the canonical component tree.
///
/// Built once per conversion call and never mutated afterwards. `children`
/// is present only when the source widget declared at least one child; an
/// empty array is never emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub name: String,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_bindings: Option<Vec<DataBinding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
}

impl Component {
    /// Creates a component with no style, props, bindings or children.
    pub fn new(
        id: impl Into<String>,
        component_type: ComponentType,
        name: impl Into<String>,
    ) -> Self {
        Component {
            id: id.into(),
            component_type,
            name: name.into(),
            style: Style::default(),
            props: None,
            data_bindings: None,
            children: None,
        }
    }
}
