//! Data binding descriptors
//!
//! A `DataBinding` tells a rendering client how to fetch or reference
//! dynamic data for a component: endpoint, method, caching, pagination.
//! Bindings are plain records here; the required-field contract (`type` and
//! `source`) is enforced by `binding::DataSourceBuilder`, not by these types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a binding resolves its data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BindingType {
    /// Fetched from an HTTP endpoint.
    Api,
    /// Inline data shipped with the schema.
    Static,
    /// Resolved from the client's runtime context.
    Context,
    /// Resolved from a navigation parameter.
    Parameter,
}

impl BindingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingType::Api => "api",
            BindingType::Static => "static",
            BindingType::Context => "context",
            BindingType::Parameter => "parameter",
        }
    }
}

/// Pagination strategy for list-shaped bindings, tagged by `style`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "style", rename_all = "camelCase")]
pub enum Pagination {
    #[serde(rename_all = "camelCase")]
    Offset {
        page_size: u32,
        offset_param: String,
        limit_param: String,
    },
    #[serde(rename_all = "camelCase")]
    Page {
        page_size: u32,
        page_param: String,
        size_param: String,
    },
    #[serde(rename_all = "camelCase")]
    Cursor {
        page_size: u32,
        cursor_param: String,
        cursor_path: String,
    },
}

impl Pagination {
    /// Offset/limit pagination with the conventional parameter names.
    pub fn offset(page_size: u32) -> Self {
        Pagination::Offset {
            page_size,
            offset_param: "offset".to_string(),
            limit_param: "limit".to_string(),
        }
    }

    /// Page-number pagination with the conventional parameter names.
    pub fn page(page_size: u32) -> Self {
        Pagination::Page {
            page_size,
            page_param: "page".to_string(),
            size_param: "size".to_string(),
        }
    }

    /// Cursor pagination reading the next cursor from `cursor_path`.
    pub fn cursor(page_size: u32, cursor_path: impl Into<String>) -> Self {
        Pagination::Cursor {
            page_size,
            cursor_param: "cursor".to_string(),
            cursor_path: cursor_path.into(),
        }
    }
}

/// Descriptor for fetching or referencing dynamic data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataBinding {
    pub id: String,
    #[serde(rename = "type")]
    pub binding_type: BindingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(rename = "cacheTTL", skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl DataBinding {
    /// Creates a binding with only its identity set.
    pub fn new(id: impl Into<String>, binding_type: BindingType) -> Self {
        DataBinding {
            id: id.into(),
            binding_type,
            source: None,
            method: None,
            headers: None,
            response_path: None,
            cache: None,
            cache_ttl: None,
            refresh_interval: None,
            pagination: None,
            transform: None,
        }
    }
}
