//! Input document types
//!
//! The editor-authored page-builder document: pages with free-form widget
//! trees, sidebar navigation items, optional login and branding
//! configuration. These types mirror what the builder UI persists; the
//! compiler reads them and never writes them back.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_true() -> bool {
    true
}

fn default_item_type() -> String {
    "page".to_string()
}

/// One visual element placed on a page by the editor.
///
/// `config` and `style` are open bags; their known keys are interpreted by
/// the converters, everything else rides along untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub style: Map<String, Value>,
    #[serde(default)]
    pub children: Vec<Widget>,
}

impl Widget {
    pub fn new(id: impl Into<String>, widget_type: impl Into<String>) -> Self {
        Widget {
            id: id.into(),
            widget_type: widget_type.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            config: Map::new(),
            style: Map::new(),
            children: Vec::new(),
        }
    }
}

/// One page definition as authored in the builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuilderPage {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BuilderPage {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        BuilderPage {
            id: id.into(),
            name: name.into(),
            display_name: None,
            description: None,
            path: None,
            icon: None,
            is_active: true,
            is_hidden: false,
            permissions: None,
            widgets: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// One sidebar navigation entry. `item_type` is `"page"` unless the editor
/// explicitly marked the entry as `"divider"` or `"group"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    pub id: String,
    #[serde(rename = "type", default = "default_item_type")]
    pub item_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default)]
    pub children: Vec<SidebarItem>,
}

impl SidebarItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        SidebarItem {
            id: id.into(),
            item_type: "page".to_string(),
            name: name.into(),
            icon: None,
            color: None,
            page_id: None,
            children: Vec::new(),
        }
    }
}

/// Login screen configuration. Only its presence matters to the compiler;
/// the fields are consumed by the builder UI itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginPageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// Tenant-level visual customization, partially overlaid onto the default
/// themes by the theme converter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_menu_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_styling: Option<GlobalStyling>,
}

impl BrandingConfig {
    /// Parses a branding configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse branding configuration")
    }
}

/// The complete page-builder document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuilderDocument {
    #[serde(default)]
    pub pages: Vec<BuilderPage>,
    #[serde(default)]
    pub sidebar_items: Vec<SidebarItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_page: Option<LoginPageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_login_redirect: Option<String>,
}

impl BuilderDocument {
    /// Parses a builder document from its JSON form.
    ///
    /// # Arguments
    /// * `json` - The document as persisted by the page builder
    ///
    /// # Returns
    /// The parsed document, or an error describing where parsing failed
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse builder document")
    }
}
