//! Canonical navigation model
//!
//! Navigation is synthesized from the editor's sidebar configuration plus
//! the compiled page list: a drawer tree, an initial page, an optional login
//! entry and up to five bottom tabs.

use serde::{Deserialize, Serialize};

/// Role of a drawer entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NavigationItemType {
    Page,
    Divider,
    Group,
}

/// Small marker rendered next to a drawer entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationBadge {
    pub text: String,
    pub color: String,
}

/// One entry of the drawer tree. Groups nest recursively via `children`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: NavigationItemType,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<NavigationBadge>,
}

/// One bottom tab, linked to a page by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BottomTab {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub page_id: String,
}

/// The app's complete navigation structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub initial_page: String,
    pub drawer: Vec<NavigationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_tabs: Option<Vec<BottomTab>>,
}
